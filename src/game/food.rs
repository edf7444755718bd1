use super::grid::{Cell, GridSize};
use rand::{seq::IteratorRandom, Rng};
use serde::Deserialize;

/// How a new food cell is chosen after the old one is eaten
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum FoodPlacement {
    /// Choose among the cells not occupied by the snake
    #[default]
    AvoidSnake,

    /// Choose among all cells, including ones under the snake's body
    Anywhere,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Cell,
}

impl Food {
    pub(crate) fn new<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Food {
        let mut food = Food {
            position: Cell::default(),
        };
        food.spawn(grid, rng);
        food
    }

    /// Move the food to a uniformly random cell of `grid`
    pub(crate) fn spawn<R: Rng + ?Sized>(&mut self, grid: GridSize, rng: &mut R) {
        self.position = Cell::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
    }

    /// Move the food to a uniformly random cell of `grid` that is not in
    /// `occupied`.  If every cell is occupied, any cell may be chosen.
    pub(crate) fn respawn_avoiding<R: Rng + ?Sized>(
        &mut self,
        grid: GridSize,
        occupied: &[Cell],
        rng: &mut R,
    ) {
        match grid
            .cells()
            .filter(|c| !occupied.contains(c))
            .choose(&mut *rng)
        {
            Some(cell) => self.position = cell,
            None => self.spawn(grid, rng),
        }
    }

    pub(crate) fn respawn<R: Rng + ?Sized>(
        &mut self,
        placement: FoodPlacement,
        grid: GridSize,
        occupied: &[Cell],
        rng: &mut R,
    ) {
        match placement {
            FoodPlacement::AvoidSnake => self.respawn_avoiding(grid, occupied, rng),
            FoodPlacement::Anywhere => self.spawn(grid, rng),
        }
    }
}
