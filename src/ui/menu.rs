use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Palette;
use crate::game::DeathReason;

/// Draws the crash banner shown while the game waits for a direction key.
pub fn render_stopped_banner(
    frame: &mut Frame<'_>,
    area: Rect,
    death_reason: Option<DeathReason>,
    palette: Palette,
) {
    let popup = centered_popup(area, 80, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(death_reason_text(death_reason)),
        Line::from(""),
        Line::from("Arrows/WASD to play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.foreground).bg(palette.background))
            .block(Block::bordered().title(" stopped ")),
        popup,
    );
}

fn death_reason_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::BoardFilled) => "Board filled!",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::DeathReason;

    use super::{centered_popup, death_reason_text};

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(4, 2, 42, 22);
        let popup = centered_popup(area, 80, 40);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert!(popup.width > 0 && popup.height > 0);
    }

    #[test]
    fn each_reason_has_text() {
        assert_eq!(death_reason_text(Some(DeathReason::WallCollision)), "Cause: hit wall");
        assert_eq!(
            death_reason_text(Some(DeathReason::SelfCollision)),
            "Cause: hit yourself"
        );
        assert_eq!(death_reason_text(Some(DeathReason::BoardFilled)), "Board filled!");
        assert_eq!(death_reason_text(None), "");
    }
}
