use super::{Cell, GridSize, Renderer};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect, Size},
    style::Style,
    text::Line,
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The terminal view of the playing field.  It remembers the most recent
/// frame handed to it by the game and draws that frame on request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    grid: GridSize,
    segments: Vec<Cell>,
    food: Option<Cell>,
    game_over: Option<GameOver>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOver {
    score: u32,
    high_score: u32,
}

impl Board {
    pub(crate) fn new(grid: GridSize) -> Board {
        Board {
            grid,
            segments: Vec::new(),
            food: None,
            game_over: None,
        }
    }

    /// The size of the area needed to draw the board, including its border
    pub(crate) fn size(&self) -> Size {
        let width = u16::try_from(self.grid.width).unwrap_or(u16::MAX);
        let height = u16::try_from(self.grid.height).unwrap_or(u16::MAX);
        Size {
            width: width.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: height.saturating_add(2),
        }
    }
}

impl Renderer for Board {
    fn render(&mut self, segments: &[Cell], food: Cell) {
        self.segments.clear();
        self.segments.extend_from_slice(segments);
        self.food = Some(food);
        self.game_over = None;
    }

    fn render_game_over(&mut self, score: u32, high_score: u32) {
        self.game_over = Some(GameOver { score, high_score });
    }
}

impl Widget for &Board {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(area, self.size());
        Block::bordered().render(block_area, buf);
        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(food) = self.food {
            field.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if let Some((&head, body)) = self.segments.split_first() {
            for &cell in body {
                field.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
            }
            // Draw the head last so that it stays visible when it overlaps
            // the body or the food.
            field.draw_cell(head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE);
        }
        if let Some(summary) = self.game_over {
            let popup = center_rect(
                block_area,
                Size {
                    width: GameOver::WIDTH,
                    height: GameOver::HEIGHT,
                },
            );
            summary.render(popup, buf);
        }
    }
}

impl GameOver {
    const WIDTH: u16 = 29;
    const HEIGHT: u16 = 5;
}

impl Widget for GameOver {
    /*
     * ┌───────── GAME OVER ─────────┐
     * │ Score: 30                   │
     * │ Best: 30                    │
     * │ Press Enter to play again   │
     * └─────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(consts::GAME_OVER_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(format!("Score: {}", self.score)),
            Line::from(format!("Best: {}", self.high_score)),
            Line::from("Press Enter to play again"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` at grid cell `cell`.  Cells outside the area are
    /// skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = x.checked_mul(consts::CELL_WIDTH) else {
            return;
        };
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        self.buf.set_string(
            self.area.x + x,
            self.area.y + y,
            symbol,
            Style::reset().patch(style),
        );
    }
}
