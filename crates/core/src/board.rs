//! Board module - manages the game grid
//!
//! The board is an `n x n` grid where each cell is empty or occupied by one
//! player. Uses a flat vector allocated once at construction; `n` never
//! changes afterwards.
//! Coordinates: (x, y) where x grows to the right and y grows upwards,
//! (0, 0) is the bottom-left cell.

use std::ops::{Index, IndexMut};

use crate::types::{Cell, CellIndex, Player};

/// Square game board of runtime size `n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat storage, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of `size x size` cells
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of rows (and of columns)
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn offset(&self, index: CellIndex) -> Option<usize> {
        if index.x >= self.size || index.y >= self.size {
            return None;
        }
        Some(index.y * self.size + index.x)
    }

    /// Whether `index` addresses a cell of this board
    pub fn contains(&self, index: CellIndex) -> bool {
        self.offset(index).is_some()
    }

    /// Get cell at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.offset(index).map(|i| self.cells[i])
    }

    /// Set cell at `index`
    /// Returns false if out of bounds
    pub fn set(&mut self, index: CellIndex, cell: Cell) -> bool {
        match self.offset(index) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Cells in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|cell| cell.is_some()).count()
    }

    /// Occupied cells with their owner, in storage order
    pub fn occupied(&self) -> impl Iterator<Item = (CellIndex, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|player| (CellIndex::new(i % self.size, i / self.size), player))
        })
    }

    /// Empty cells, in storage order
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| CellIndex::new(i % self.size, i / self.size))
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Cell {
        assert!(
            self.contains(index),
            "cell {:?} out of range for a {}x{} board",
            index,
            self.size,
            self.size
        );
        &self.cells[index.y * self.size + index.x]
    }
}

impl IndexMut<CellIndex> for Board {
    fn index_mut(&mut self, index: CellIndex) -> &mut Cell {
        assert!(
            self.contains(index),
            "cell {:?} out of range for a {}x{} board",
            index,
            self.size,
            self.size
        );
        &mut self.cells[index.y * self.size + index.x]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_row_major() {
        let mut board = Board::new(3);
        board[CellIndex::new(2, 1)] = Some(Player::Noughts);
        let pos = board.iter().position(|c| c.is_some());
        assert_eq!(pos, Some(5));
    }

    #[test]
    fn occupied_reports_indices() {
        let mut board = Board::new(3);
        board[CellIndex::new(0, 2)] = Some(Player::Crosses);
        board[CellIndex::new(1, 0)] = Some(Player::Noughts);
        let cells: Vec<_> = board.occupied().collect();
        assert_eq!(
            cells,
            vec![
                (CellIndex::new(1, 0), Player::Noughts),
                (CellIndex::new(0, 2), Player::Crosses),
            ]
        );
        assert_eq!(board.empty_cells().count(), 7);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let board = Board::new(3);
        let _ = board[CellIndex::new(3, 0)];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_mut_out_of_range_panics() {
        let mut board = Board::new(2);
        board[CellIndex::new(0, 2)] = Some(Player::Crosses);
    }
}
