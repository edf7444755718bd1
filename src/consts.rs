//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction, GridSize, SnakeStart};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Dimensions of the playing field
pub(crate) const GRID_SIZE: GridSize = GridSize::new(20, 20);

/// Where every new snake starts and which way it initially moves
pub(crate) const SNAKE_START: SnakeStart = SnakeStart {
    head: Cell::new(10, 10),
    direction: Direction::Right,
};

/// Points awarded for each food eaten
pub(crate) const FOOD_REWARD: u32 = 10;

/// Number of terminal columns used to draw one grid cell, so that cells look
/// roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 46,
    height: 25,
};

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "██";

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the game-over pop-up
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
