use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::error::Error;

/// Return the area in which to draw the game: a
/// [`DISPLAY_SIZE`][consts::DISPLAY_SIZE] rectangle centered in
/// `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered in `area`, clipped to `area`
/// if it doesn't fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

/// Render an error and all of its sources as a single line, e.g., for
/// logging
pub(crate) fn error_chain(e: &dyn Error) -> String {
    std::iter::successors(Some(e), |&e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
