use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Palette;

/// Draws the score on the left and the high score flush right.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    palette: Palette,
) {
    let line = score_line(score, high_score, usize::from(area.width));

    frame.render_widget(
        Paragraph::new(Line::from(line)).style(
            Style::default()
                .fg(palette.foreground)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

/// Builds `Score: N ... High Score: M` padded to `width` display columns.
///
/// When both labels do not fit, they are separated by a single space and the
/// paragraph clips the remainder.
#[must_use]
pub fn score_line(score: u32, high_score: u32, width: usize) -> String {
    let left = format!("Score: {score}");
    let right = format!("High Score: {high_score}");
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);

    format!("{left}{}{right}", " ".repeat(gap))
}
