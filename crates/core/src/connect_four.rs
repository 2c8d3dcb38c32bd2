//! Connect 4 rules - 7 columns x 6 rows with gravity
//!
//! Discs are dropped into a column and fall to its lowest empty row. Four
//! discs of one color in a row, a column or a diagonal win. The grid is
//! laid out in normalized space with the same cell radius on both axes
//! (`1/7`), vertically centered.

use log::debug;

use crate::types::Vec2;

/// Number of columns.
pub const COLUMNS: usize = 7;

/// Number of rows.
pub const ROWS: usize = 6;

/// Discs needed in a line to win.
pub const CONNECT: usize = 4;

/// The two colors of Connect 4 discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    pub fn other(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Yellow => "Yellow",
        }
    }
}

/// Result of evaluating a Connect 4 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFourOutcome {
    Ongoing,
    Winner(Disc),
    Draw,
}

impl ConnectFourOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConnectFourOutcome::Ongoing)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ConnectFourOutcome::Ongoing => None,
            ConnectFourOutcome::Winner(Disc::Red) => Some("Red has won!"),
            ConnectFourOutcome::Winner(Disc::Yellow) => Some("Yellow has won!"),
            ConnectFourOutcome::Draw => Some("This is a draw!"),
        }
    }
}

/// Half-side of a grid cell in normalized space.
pub fn cell_radius() -> f32 {
    1.0 / COLUMNS as f32
}

/// Bottom edge of the grid in normalized space.
fn grid_bottom() -> f32 {
    -(ROWS as f32) * cell_radius()
}

/// Bottom-left corner of the cell at `(column, row)`; row 0 is the bottom.
pub fn cell_bottom_left(column: usize, row: usize) -> Vec2 {
    let side = 2.0 * cell_radius();
    Vec2::new(-1.0 + side * column as f32, grid_bottom() + side * row as f32)
}

/// Center of the cell at `(column, row)`.
pub fn cell_center(column: usize, row: usize) -> Vec2 {
    cell_bottom_left(column, row) + Vec2::splat(cell_radius())
}

/// The column under `position`, anywhere along its height.
pub fn column_at(position: Vec2) -> Option<usize> {
    let column = ((position.x + 1.0) / (2.0 * cell_radius())).floor();
    if column >= 0.0 && column < COLUMNS as f32 && position.y >= -1.0 && position.y < 1.0 {
        Some(column as usize)
    } else {
        None
    }
}

/// Grid plus the color to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    /// `cells[column][row]`, row 0 at the bottom
    cells: [[Option<Disc>; ROWS]; COLUMNS],
    pub current: Disc,
}

impl ConnectFour {
    /// Empty grid, Red to move.
    pub fn new() -> Self {
        Self {
            cells: [[None; ROWS]; COLUMNS],
            current: Disc::Red,
        }
    }

    /// Disc at `(column, row)`; `None` when empty or out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<Disc> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    /// Lowest empty row of `column`, if it is not full.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        self.cells.get(column)?.iter().position(|c| c.is_none())
    }

    /// Drop the current color into `column`. Returns the row it landed on.
    ///
    /// Full or unknown columns are ignored.
    pub fn drop_disc(&mut self, column: usize) -> Option<usize> {
        let row = self.landing_row(column)?;
        self.cells[column][row] = Some(self.current);
        debug!("{} dropped into column {column}, row {row}", self.current.as_str());
        self.current = self.current.other();
        Some(row)
    }

    /// Drop into the column under `position`.
    ///
    /// Ignored once the game is won or drawn.
    pub fn click(&mut self, position: Vec2) -> bool {
        if self.outcome().is_terminal() {
            debug!("click ignored: game is over");
            return false;
        }
        match column_at(position) {
            Some(column) => self.drop_disc(column).is_some(),
            None => false,
        }
    }

    /// Every placed disc with its cell.
    pub fn discs(&self) -> impl Iterator<Item = (usize, usize, Disc)> + '_ {
        self.cells.iter().enumerate().flat_map(|(column, rows)| {
            rows.iter()
                .enumerate()
                .filter_map(move |(row, cell)| cell.map(|disc| (column, row, disc)))
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|column| column[ROWS - 1].is_some())
    }

    /// First color owning four aligned discs, scanning columns left to right.
    pub fn winner(&self) -> Option<Disc> {
        const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        for (column, row, disc) in self.discs() {
            for (dx, dy) in DIRECTIONS {
                let aligned = (1..CONNECT as isize).all(|k| {
                    let x = column as isize + dx * k;
                    let y = row as isize + dy * k;
                    x >= 0 && y >= 0 && self.get(x as usize, y as usize) == Some(disc)
                });
                if aligned {
                    return Some(disc);
                }
            }
        }
        None
    }

    pub fn outcome(&self) -> ConnectFourOutcome {
        if let Some(disc) = self.winner() {
            ConnectFourOutcome::Winner(disc)
        } else if self.is_full() {
            ConnectFourOutcome::Draw
        } else {
            ConnectFourOutcome::Ongoing
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}
