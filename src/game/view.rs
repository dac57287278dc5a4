use super::grid::Cell;
use super::{Direction, Engine, GameState, GameStatus};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use enum_map::{enum_map, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

impl<R> Widget for &Engine<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state();
        let display = get_display_area(area);
        let [score_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(
            format!(" Score: {}   High Score: {}", state.score, state.high_score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        Line::styled(format!("{} ", state.status), consts::SCORE_BAR_STYLE)
            .right_aligned()
            .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: (consts::GRID_SIZE * consts::CELL_WIDTH).saturating_add(2),
                height: consts::GRID_SIZE.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);
        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        let glyphs = glyphs(state);
        for (y, row) in (0u16..).zip(self.grid().rows()) {
            for (x, &cell) in (0u16..).zip(row) {
                if let Some((symbol, style)) = glyphs[cell] {
                    board.draw_cell(x, y, symbol, style);
                }
            }
        }

        match state.status {
            GameStatus::Running => {
                if let Some(msg) = milestone_message(state.score) {
                    Line::styled(format!(" {msg}"), consts::MILESTONE_STYLE).render(msg_area, buf);
                } else {
                    hints(&[("Pause", "Space")]).render(msg_area, buf);
                }
            }
            GameStatus::Idle => hints(&[("Start", "Space"), ("Quit", "q")]).render(msg_area, buf),
            GameStatus::Paused => {
                Popup::paused().render(block_area, buf);
                hints(&[("Resume", "Space"), ("Reset", "r"), ("Quit", "q")]).render(msg_area, buf);
            }
            GameStatus::GameOver => {
                Popup::game_over(state).render(block_area, buf);
                hints(&[("Play Again", "Space"), ("Quit", "q")]).render(msg_area, buf);
            }
        }
    }
}

/// The glyph & style used to draw each kind of cell; `None` means the cell is
/// left blank
fn glyphs(state: &GameState) -> EnumMap<Cell, Option<(char, Style)>> {
    let head = if state.status == GameStatus::GameOver {
        (consts::COLLISION_SYMBOL, consts::COLLISION_STYLE)
    } else {
        (head_symbol(state.direction), consts::SNAKE_STYLE)
    };
    enum_map! {
        Cell::Empty => None,
        Cell::Food => Some((consts::FOOD_SYMBOL, consts::FOOD_STYLE)),
        Cell::Head => Some(head),
        Cell::Body => Some((consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE)),
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Return the message to show when the score has just reached a milestone
fn milestone_message(score: u32) -> Option<&'static str> {
    if score == 0 || score % consts::SCORE_MILESTONE != 0 {
        None
    } else if score % (consts::SCORE_MILESTONE * 2) == 0 {
        Some("Great job! Keep going!")
    } else {
        Some("You're doing well!")
    }
}

/// Build a line of control hints such as " Pause (Space)"
fn hints(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::default();
    for (i, &(action, key)) in items.iter().enumerate() {
        line.push_span(if i == 0 { " " } else { " — " });
        line.push_span(action);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

/// A box drawn over the middle of the board
#[derive(Clone, Debug, Eq, PartialEq)]
struct Popup {
    title: &'static str,
    lines: Vec<String>,
}

impl Popup {
    fn paused() -> Popup {
        Popup {
            title: " PAUSED ",
            lines: vec![String::from("Take your time.")],
        }
    }

    /*
     * ┌────── GAME OVER ───────┐
     * │ Score: 3               │
     * │ High Score: 12         │
     * │ Better luck next time! │
     * └────────────────────────┘
     */
    fn game_over(state: &GameState) -> Popup {
        let verdict = if state.score > 0 && state.score >= state.high_score {
            "New High Score!"
        } else {
            "Better luck next time!"
        };
        Popup {
            title: " GAME OVER ",
            lines: vec![
                format!("Score: {}", state.score),
                format!("High Score: {}", state.high_score),
                String::from(verdict),
            ],
        }
    }
}

impl Widget for Popup {
    // `area` is the area of the board in which to center the popup.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = self
            .lines
            .iter()
            .map(|ln| ln.chars().count())
            .max()
            .unwrap_or(0);
        let size = Size {
            width: u16::try_from(text_width)
                .unwrap_or(u16::MAX)
                .saturating_add(4),
            height: u16::try_from(self.lines.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        };
        let popup_area = center_rect(area, size);
        let block = Block::bordered()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(popup_area);
        Clear.render(popup_area, buf);
        block.render(popup_area, buf);
        Text::from_iter(self.lines).render(inner, buf);
    }
}

/// Board drawing surface; each cell is [`CELL_WIDTH`][consts::CELL_WIDTH]
/// columns wide, with the glyph in the first one
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, x: u16, y: u16, symbol: char, style: Style) {
        let Some(x) = x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
