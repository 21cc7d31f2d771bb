/// Cell is the state of a single square on the board.
/// A cell is either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Binary form used by collaborators that want 0/1 values
    pub const fn as_bit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Pure function computing the next state from the live neighbor count.
    /// Rules are checked in order:
    /// 1. Fewer than 2 or more than 3 neighbors: dead
    /// 2. Dead with exactly 3 neighbors: alive
    /// 3. Otherwise the state carries over unchanged
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, n) if n < 2 || n > 3 => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
