//! Branching shogi game-record (kifu) editor core
//!
//! This crate provides:
//! - A persistent, immutable branching game tree with path-based addressing
//! - Move insertion and fork editing that never mutate in place
//! - Automatic transposition detection: every node is cross-linked to
//!   continuations recorded elsewhere in the tree from the same position
//! - Interchange-format (JKF) import/export and session-scoped persistence
//!
//! Move legality, normalization, and position fingerprints are delegated to
//! an external rules engine behind the [`ports::MoveOracle`] boundary; the
//! tree core only organizes its results.

pub mod adapters;
pub mod error;
pub mod ports;
pub mod record;
pub mod session;
pub mod tree;
pub mod types;

pub use error::{Error, Result};
pub use record::{KifuRecord, RecordEntry, RecordMove};
pub use session::EditSession;
pub use tree::{JumpTarget, KifuTree, KifuTreeNode, MoveAttempt, Path};
pub use types::{Color, PieceKind, Sfen, Square};
