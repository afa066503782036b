//! Interchange-format types for JSON kifu records (JKF).
//!
//! The exact field layout is owned by the external format; this module only
//! models the subset the tree core reads and writes: a free-form header, an
//! opaque initial-position block, and the ordered move list whose first entry
//! is the root marker. Forked variations are nested `forks` arrays attached
//! to the entry they diverge from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind, Square};

/// A single move as carried by the interchange format.
///
/// A board move has `from` set; a drop has `from` absent. Normalized moves
/// returned by the move-rules oracle may carry `capture`/`same` annotations,
/// which are preserved verbatim but ignored for move identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMove {
    pub color: Color,
    pub piece: PieceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Square>,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<PieceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same: Option<bool>,
}

impl RecordMove {
    /// Whether this move places a captured piece instead of moving one on the board.
    pub fn is_drop(&self) -> bool {
        self.from.is_none()
    }

    /// Whether this move promotes. An absent flag counts as no promotion.
    pub fn promotes(&self) -> bool {
        self.promote.unwrap_or(false)
    }

    /// Move-identity comparison.
    ///
    /// Two board moves are identical iff origin, destination, and promotion
    /// flag all match; two drops are identical iff destination and piece kind
    /// match; a board move and a drop are never identical.
    pub fn is_same_move(&self, other: &RecordMove) -> bool {
        match (self.from, other.from) {
            (Some(a), Some(b)) => {
                a == b && self.to == other.to && self.promotes() == other.promotes()
            }
            (None, None) => self.to == other.to && self.piece == other.piece,
            _ => false,
        }
    }
}

/// One element of the record's move list.
///
/// The first entry of a record is the root marker and carries no move. Any
/// entry may carry comment lines and forked variations that replace the
/// remainder of the sequence from that point on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub mv: Option<RecordMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<Vec<Vec<RecordEntry>>>,
}

impl RecordEntry {
    /// Root marker entry with no move and no comments.
    pub fn root() -> Self {
        Self::default()
    }

    /// Entry for a single move with no annotations.
    pub fn from_move(mv: RecordMove) -> Self {
        Self {
            mv: Some(mv),
            comments: None,
            forks: None,
        }
    }

    /// Comment lines joined into a single string (empty if absent).
    pub fn joined_comments(&self) -> String {
        match &self.comments {
            Some(lines) => lines.join("\n"),
            None => String::new(),
        }
    }

    /// Split a joined comment string back into comment lines (None if empty).
    pub fn split_comments(comment: &str) -> Option<Vec<String>> {
        if comment.is_empty() {
            None
        } else {
            Some(comment.split('\n').map(str::to_string).collect())
        }
    }
}

/// A complete game record in the interchange shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KifuRecord {
    /// Free-form key/value player and metadata fields.
    #[serde(default)]
    pub header: BTreeMap<String, String>,
    /// Starting-position block, owned by the external format and passed
    /// through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<serde_json::Value>,
    /// Ordered move list; `moves[0]` is the root marker.
    pub moves: Vec<RecordEntry>,
}

impl KifuRecord {
    /// Create an empty record containing only a root marker.
    pub fn empty() -> Self {
        Self {
            header: BTreeMap::new(),
            initial: None,
            moves: vec![RecordEntry::root()],
        }
    }

    /// The root marker entry, if the record has one.
    pub fn root_entry(&self) -> Option<&RecordEntry> {
        self.moves.first()
    }

    /// A copy of this record truncated to base metadata: headers, starting
    /// position, and the root marker only.
    pub fn base(&self) -> Self {
        Self {
            header: self.header.clone(),
            initial: self.initial.clone(),
            moves: self.moves.iter().take(1).cloned().collect(),
        }
    }
}
