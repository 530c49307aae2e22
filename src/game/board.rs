use crate::error::GameError;

use super::Player;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Smallest width or height that can hold a four-in-a-row.
pub const MIN_DIMENSION: usize = 4;
/// Largest board, in cells, that `Board::new` will allocate.
pub const MAX_CELLS: usize = 1 << 20;
/// Number of same-player cells in a winning line.
pub const CONNECT: usize = 4;

/// Row/column steps for the four line orientations: horizontal, vertical,
/// diagonal down-right (\) and diagonal down-left (/).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

/// A cell address. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    // Row-major, `height` rows of `width` cells.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let invalid = GameError::InvalidDimension { width, height };
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(invalid);
        }
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(invalid)?;

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        (pos.row < self.height && pos.column < self.width)
            .then(|| self.cells[self.index(pos.row, pos.column)])
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.width {
            return 0;
        }
        (0..self.height)
            .filter(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Row a piece dropped into `col` would land on, `None` if full or out of range
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(GameError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(row)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Count cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check if the piece at (row, col) lies on a line of four or more.
    ///
    /// Only the four lines through the cell are scanned, walking outward in
    /// both directions until the run breaks or the edge is reached.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = match self.cell(Position::new(row, col)) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell);
            run >= CONNECT
        })
    }

    /// Exhaustive scan: is there any in-bounds window of four `cell`s?
    ///
    /// Every cell is tried as the origin of a window in each direction; windows
    /// that would leave the board are rejected rather than wrapped.
    pub fn has_four_in_a_row(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS.iter().any(|&(dr, dc)| {
                    (0..CONNECT).all(|k| {
                        self.step(row, col, dr, dc, k)
                            .is_some_and(|(r, c)| self.get(r, c) == cell)
                    })
                })
            })
        })
    }

    /// Count consecutive `cell`s starting one step away from (row, col)
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        (1..)
            .map_while(|k| self.step(row, col, dr, dc, k))
            .take_while(|&(r, c)| self.get(r, c) == cell)
            .count()
    }

    /// The cell `k` steps from (row, col) along (dr, dc), if it is on the board
    fn step(&self, row: usize, col: usize, dr: isize, dc: isize, k: usize) -> Option<(usize, usize)> {
        let k = isize::try_from(k).ok()?;
        let r = row.checked_add_signed(dr.checked_mul(k)?)?;
        let c = col.checked_add_signed(dc.checked_mul(k)?)?;
        (r < self.height && c < self.width).then_some((r, c))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}
