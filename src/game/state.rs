use tracing::{debug, info};

use crate::error::GameError;

use super::{Board, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// End-of-game announcement, `None` while the game is still running
    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Win(player) => Some(format!("{player} win!")),
            GameStatus::Tie => Some("No Contest!".to_string()),
        }
    }
}

/// What a successful drop produced: where the piece landed, whose it is, and
/// the game status right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub player: Player,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    status: GameStatus,
    move_count: usize,
}

impl GameState {
    /// Create a game on an empty `width` x `height` board, Player 1 to move
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            active_player: Player::One,
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Player whose piece the next drop places. Frozen once the game is over.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that can still take a piece (none once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// On success exactly one cell changes, the result is evaluated (win
    /// first, then tie) and the turn passes to the other player unless the
    /// game just ended. On error nothing changes.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.is_terminal() {
            debug!(column, status = ?self.status, "move rejected: game already over");
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.active_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .inspect_err(|err| debug!(column, %err, "move rejected"))?;
        self.move_count += 1;

        let position = Position::new(row, column);
        debug!(row, column, player = player.number(), "piece placed");

        if self.check_win(position) {
            self.status = GameStatus::Win(player);
        } else if self.check_tie() {
            self.status = GameStatus::Tie;
        } else {
            self.active_player = player.other();
        }

        if self.is_terminal() {
            info!(status = ?self.status, moves = self.move_count, "game over");
        }

        Ok(Placement {
            position,
            player,
            status: self.status,
        })
    }

    /// Apply a move and return the landing row and the new state, leaving
    /// `self` untouched
    pub fn apply_move(&self, column: usize) -> Result<(usize, GameState), GameError> {
        let mut next = self.clone();
        let placement = next.drop_piece(column)?;
        Ok((placement.position.row, next))
    }

    /// Does the piece at `last_move` complete four-in-a-row for the active player?
    pub fn check_win(&self, last_move: Position) -> bool {
        self.board.cell(last_move) == Some(self.active_player.to_cell())
            && self.board.check_win(last_move.row, last_move.column)
    }

    /// Every cell is filled and nobody has won
    pub fn check_tie(&self) -> bool {
        self.board.is_full() && !matches!(self.status, GameStatus::Win(_))
    }

    /// Start over on an empty board of the same size. For a different size,
    /// build a fresh game with [`GameState::new`].
    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = Player::One;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        info!(width = self.width(), height = self.height(), "game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
