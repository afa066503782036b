//! Newtype wrappers for improved type safety and domain modeling.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Canonical fingerprint of a full game position (board, hands, side to move).
///
/// Fingerprints are produced only by the move-rules oracle; the tree core
/// treats them as opaque, comparable identifiers. Two nodes with equal
/// fingerprints represent the same reachable position regardless of the move
/// order that produced them.
///
/// # Examples
///
/// ```
/// use kifu_notebook::Sfen;
///
/// let sfen = Sfen::new("lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1");
/// assert!(sfen.as_str().ends_with("b - 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sfen(String);

impl Sfen {
    /// Create a new position fingerprint.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the fingerprint as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the fingerprint into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sfen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Sfen {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Sfen {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Sfen {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Sfen {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// CSA-style piece code used by the interchange format (`"FU"`, `"KA"`, ...).
///
/// The set of valid codes is owned by the external format and the move-rules
/// oracle; the core only compares them for move identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceKind(String);

impl PieceKind {
    /// Create a new piece code.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the piece code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the piece code into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for PieceKind {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PieceKind {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PieceKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for PieceKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Side to move. Serialized as `0`/`1` per the interchange format convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            other => Err(format!("invalid color {other} (expected 0 or 1)")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board square in interchange-format coordinates (1-based file and rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    /// Create a new square.
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.x, self.y)
    }
}
