//! The two sides of an Othello game.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The character this player's pieces are drawn with.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// Parse a single board character into a player, if it names one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' | 'B' => Some(Player::Black),
            'O' | 'W' => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a [`Player`] from "X"/"B"/"black" or "O"/"W"/"white", ignoring case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Player::from_symbol(c).ok_or(ParsePlayerError),
                    _ => Err(ParsePlayerError),
                }
            }
        }
    }
}
