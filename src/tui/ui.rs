use ratatui::Frame as TerminalFrame;
use ratatui::widgets::Paragraph;

use crate::core::view::Frame;

/// Paint a rendered frame over the whole terminal area.
///
/// ratatui diffs against the previous buffer, so unchanged cells are not
/// rewritten, but every cell of the area is owned by this frame.
pub fn draw_frame(f: &mut TerminalFrame, frame: &Frame) {
    f.render_widget(Paragraph::new(frame.as_str()), f.area());
}
