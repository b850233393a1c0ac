use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with `cell_count` cells per side.
    #[must_use]
    pub fn square(cell_count: u16) -> Self {
        Self {
            width: cell_count,
            height: cell_count,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(DEFAULT_CELL_COUNT)
    }
}

/// Cells per side of the default board.
pub const DEFAULT_CELL_COUNT: u16 = 20;

/// Body the snake starts with and returns to after every crash, head first.
pub const INITIAL_SNAKE_BODY: [(i32, i32); 3] = [(6, 9), (5, 9), (4, 9)];

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Frame pacing for the draw/poll loop (~60 Hz).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Terminal columns used to draw one logical cell, keeping cells roughly square.
pub const CELL_WIDTH_COLUMNS: u16 = 2;

/// Window title shown above the board.
pub const GAME_TITLE: &str = "Snake game";

/// Default log file name, created in the system temp directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "grid-snake.log";

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Background of the whole screen.
    pub background: Color,
    /// Border, title, text and snake segments.
    pub foreground: Color,
    pub snake_head: Color,
    pub food: Color,
}

/// Light green field with dark green ink.
pub const PALETTE: Palette = Palette {
    background: Color::Rgb(0, 228, 48),
    foreground: Color::Rgb(0, 117, 44),
    snake_head: Color::Rgb(0, 80, 30),
    food: Color::Rgb(200, 30, 30),
};

/// Full-block segment glyph, two columns wide.
pub const GLYPH_SNAKE_SEGMENT: &str = "██";

/// Food glyph, padded to fill a two-column cell.
pub const GLYPH_FOOD: &str = "● ";

/// Thick border around the play area.
pub const BORDER_THICK: border::Set = border::THICK;
