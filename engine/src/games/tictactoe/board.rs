use super::types::{CELL_COUNT, InvalidMoveReason, Mark, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::invalid(index, InvalidMoveReason::OutOfRange)),
            Some(Mark::Empty) => {
                self.cells[index] = player.mark();
                Ok(())
            }
            Some(_) => Err(MoveError::invalid(index, InvalidMoveReason::Occupied)),
        }
    }

    pub(super) fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = player.mark();
    }

    pub(super) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn next_player(&self) -> Player {
        if self.count(Mark::X) > self.count(Mark::O) {
            Player::O
        } else {
            Player::X
        }
    }
}
