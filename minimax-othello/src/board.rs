//! A checked, coordinate-addressed Othello board of configurable size.
//!
//! [`OthelloBoard`] stores one [`Bitboard`] per player inside the 8x8 frame and
//! exposes the board in `(col, row)` coordinates, with `(0, 0)` at the upper-left.
//! Boards are `Copy`: cloning one is as cheap as copying three words.

use crate::bitboard::{self, Bitboard};
use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// The size of a board, between 1x1 and 8x8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Dimensions {
    cols: usize,
    rows: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "board dimensions {}x{} are outside 1x1 to 8x8", cols, rows)]
    InvalidDimensions { cols: usize, rows: usize },
    #[display(fmt = "a {}x{} board has no centre for the starting pieces", cols, rows)]
    NoCentre { cols: usize, rows: usize },
    #[display(fmt = "({}, {}) is outside the board", col, row)]
    OutOfBounds { col: usize, row: usize },
    #[display(fmt = "{} cannot play at ({}, {})", player, col, row)]
    IllegalMove {
        col: usize,
        row: usize,
        player: Player,
    },
}

impl Dimensions {
    /// The tournament board.
    pub const STANDARD: Self = Self { cols: 8, rows: 8 };

    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        if cols == 0 || rows == 0 || cols > EDGE_LENGTH || rows > EDGE_LENGTH {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    #[inline]
    pub fn cols(self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    /// The number of locations on a board of this size.
    #[inline]
    pub fn num_spaces(self) -> usize {
        self.cols * self.rows
    }

    #[inline]
    pub fn contains(self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// An Othello board of any size up to 8x8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OthelloBoard {
    dims: Dimensions,
    grid: Bitboard,
    black: Bitboard,
    white: Bitboard,
}

impl OthelloBoard {
    /// A board in the starting position: the centre 2x2 holds White on the
    /// main diagonal and Black on the other. Both dimensions must be even.
    pub fn new(dims: Dimensions) -> Result<Self, BoardError> {
        if dims.cols % 2 != 0 || dims.rows % 2 != 0 {
            return Err(BoardError::NoCentre {
                cols: dims.cols,
                rows: dims.rows,
            });
        }

        let (left, top) = (dims.cols / 2 - 1, dims.rows / 2 - 1);
        let mut board = Self::empty(dims);
        board.set(left, top, Some(Player::White));
        board.set(left + 1, top + 1, Some(Player::White));
        board.set(left + 1, top, Some(Player::Black));
        board.set(left, top + 1, Some(Player::Black));
        Ok(board)
    }

    /// A board with no pieces on it.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            grid: bitboard::grid_mask(dims.cols, dims.rows),
            black: Bitboard::default(),
            white: Bitboard::default(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.dims.rows
    }

    /// The two players on this board, in turn order.
    #[inline]
    pub fn symbols(&self) -> (Player, Player) {
        (Player::Black, Player::White)
    }

    /// Get (`player`'s pieces, the opponent's pieces).
    #[inline]
    fn pieces(&self, player: Player) -> (Bitboard, Bitboard) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    #[inline]
    fn locate(&self, col: usize, row: usize) -> Option<Location> {
        if self.dims.contains(col, row) {
            Location::from_coords(col, row)
        } else {
            None
        }
    }

    /// Get the player holding a location, if any.
    pub fn player_at(&self, col: usize, row: usize) -> Option<Player> {
        let loc: Bitboard = self.locate(col, row)?.into();
        if !(self.black & loc).is_empty() {
            Some(Player::Black)
        } else if !(self.white & loc).is_empty() {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Put a piece on a location (or clear it), without applying any captures.
    /// Useful for setting up positions.
    pub fn place(
        &mut self,
        col: usize,
        row: usize,
        player: Option<Player>,
    ) -> Result<(), BoardError> {
        if !self.dims.contains(col, row) {
            return Err(BoardError::OutOfBounds { col, row });
        }
        self.set(col, row, player);
        Ok(())
    }

    // Caller has checked that (col, row) is on the board.
    fn set(&mut self, col: usize, row: usize, player: Option<Player>) {
        let loc: Bitboard = match Location::from_coords(col, row) {
            Some(loc) => loc.into(),
            None => return,
        };

        self.black &= !loc;
        self.white &= !loc;
        match player {
            Some(Player::Black) => self.black |= loc,
            Some(Player::White) => self.white |= loc,
            None => {}
        }
    }

    /// Get the legal moves for `player`.
    #[inline]
    pub fn legal_moves(&self, player: Player) -> LocationList {
        let (active, opponent) = self.pieces(player);
        bitboard::get_move_mask(active, opponent, self.grid).into()
    }

    #[inline]
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.legal_moves(player).len() > 0
    }

    /// Returns whether `player` may place a piece at `(col, row)`.
    /// Locations off the board are never legal.
    pub fn is_legal_move(&self, col: usize, row: usize, player: Player) -> bool {
        match self.locate(col, row) {
            Some(loc) => self.legal_moves(player).contains(loc),
            None => false,
        }
    }

    /// Place a piece for `player` at `(col, row)` and flip every captured run.
    pub fn play_move(&mut self, col: usize, row: usize, player: Player) -> Result<(), BoardError> {
        let loc = self
            .locate(col, row)
            .ok_or(BoardError::OutOfBounds { col, row })?;

        if !self.legal_moves(player).contains(loc) {
            return Err(BoardError::IllegalMove { col, row, player });
        }

        self.play_move_unchecked(loc, player);
        Ok(())
    }

    /// Place a piece for `player` without checking legality.
    /// Results in an inconsistent board if the move is not legal.
    #[inline]
    pub fn play_move_unchecked(&mut self, loc: Location, player: Player) {
        let (active, opponent) = self.pieces(player);
        let (active, opponent) = bitboard::apply_move(active, opponent, loc.into());
        match player {
            Player::Black => {
                self.black = active;
                self.white = opponent;
            }
            Player::White => {
                self.white = active;
                self.black = opponent;
            }
        }
    }

    /// Count the pieces belonging to `player`.
    #[inline]
    pub fn count_score(&self, player: Player) -> u8 {
        self.pieces(player).0.count_occupied()
    }

    /// Count the empty locations on the board.
    #[inline]
    pub fn count_empty(&self) -> u8 {
        (self.grid & !(self.black | self.white)).count_occupied()
    }

    /// A game is over when neither player can move.
    pub fn is_finished(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// The player with more pieces, or None for a draw.
    pub fn winner(&self) -> Option<Player> {
        let difference = bitboard::score_absolute_difference(self.black, self.white);
        if difference > 0 {
            Some(Player::Black)
        } else if difference < 0 {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl Default for OthelloBoard {
    /// The standard 8x8 starting position.
    fn default() -> Self {
        let mut board = Self::empty(Dimensions::STANDARD);
        board.set(3, 3, Some(Player::White));
        board.set(4, 4, Some(Player::White));
        board.set(4, 3, Some(Player::Black));
        board.set(3, 4, Some(Player::Black));
        board
    }
}

impl fmt::Display for OthelloBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cols, rows) = (self.dims.cols, self.dims.rows);
        let pieces = (0..rows).flat_map(|row| {
            (0..cols).map(move |col| match self.player_at(col, row) {
                Some(player) => player.symbol(),
                None => '.',
            })
        });
        utils::format_grid(pieces, cols, rows, f)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board", symbol)]
    InvalidSymbol { symbol: char },
    #[display(fmt = "board rows have different lengths")]
    RaggedRows,
    #[display(fmt = "board dimensions {}x{} are outside 1x1 to 8x8", cols, rows)]
    InvalidDimensions { cols: usize, rows: usize },
}

/// Parse a board from rows of `X` (black), `O` (white) and `-` or `.` (empty),
/// top to bottom, separated by newlines or `/`. Whitespace inside a row is ignored.
impl FromStr for OthelloBoard {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .split(|c| c == '\n' || c == '/')
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ParseBoardError::RaggedRows);
        }

        let dims = Dimensions::new(cols, rows.len()).or(Err(
            ParseBoardError::InvalidDimensions {
                cols,
                rows: rows.len(),
            },
        ))?;

        let mut board = Self::empty(dims);
        for (row, symbols) in rows.iter().enumerate() {
            for (col, &symbol) in symbols.iter().enumerate() {
                let player = match symbol {
                    '-' | '.' => None,
                    _ => Some(
                        Player::from_symbol(symbol)
                            .ok_or(ParseBoardError::InvalidSymbol { symbol })?,
                    ),
                };
                board.set(col, row, player);
            }
        }

        Ok(board)
    }
}
