use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    BORDER_THICK, CELL_WIDTH_COLUMNS, GAME_TITLE, GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, GridSize,
    PALETTE, Palette,
};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_stopped_banner;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardLayout {
    pub title: Rect,
    /// Bordered play area, border included.
    pub board: Rect,
    pub hud: Rect,
}

/// Centers title, board and HUD in `area`. Returns `None` when they do not fit.
#[must_use]
pub fn board_layout(area: Rect, bounds: GridSize) -> Option<BoardLayout> {
    let board_width = bounds
        .width
        .checked_mul(CELL_WIDTH_COLUMNS)?
        .checked_add(2)?;
    let board_height = bounds.height.checked_add(2)?;
    let total_height = board_height.checked_add(2)?;

    if board_width > area.width || total_height > area.height {
        return None;
    }

    let x = area.x + (area.width - board_width) / 2;
    let y = area.y + (area.height - total_height) / 2;

    Some(BoardLayout {
        title: Rect::new(x, y, board_width, 1),
        board: Rect::new(x, y + 1, board_width, board_height),
        hud: Rect::new(x, y + 1 + board_height, board_width, 1),
    })
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let palette = PALETTE;
    let background = Style::default().bg(palette.background).fg(palette.foreground);
    frame.render_widget(Block::default().style(background), area);

    let Some(layout) = board_layout(area, state.bounds()) else {
        render_too_small(frame, area, state.bounds(), palette);
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(GAME_TITLE))
            .style(background.add_modifier(Modifier::BOLD)),
        layout.title,
    );

    let block = Block::bordered()
        .border_set(BORDER_THICK)
        .border_style(background);
    let inner = block.inner(layout.board);
    frame.render_widget(block, layout.board);

    render_food(frame, inner, state, palette);
    render_snake(frame, inner, state, palette);
    render_hud(frame, layout.hud, state.score(), state.high_score(), palette);

    if state.status() == GameStatus::Stopped {
        render_stopped_banner(frame, layout.board, state.death_reason, palette);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, bounds: GridSize, palette: Palette) {
    let needed = format!(
        "Terminal too small: need {}x{}",
        bounds.width.saturating_mul(CELL_WIDTH_COLUMNS).saturating_add(2),
        bounds.height.saturating_add(4)
    );

    frame.render_widget(
        Paragraph::new(Line::from(needed))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.foreground).bg(palette.background)),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: Palette) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food_cell()) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(palette.food).bg(palette.background),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: Palette) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let color = if index == 0 {
            palette.snake_head
        } else {
            palette.foreground
        };
        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_SEGMENT,
            Style::new().fg(color).bg(palette.background),
        );
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
