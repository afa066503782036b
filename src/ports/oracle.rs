//! Move-rules oracle port.
//!
//! The tree core never validates move legality itself. Legality checking,
//! move normalization, readable move text, and position fingerprints are all
//! delegated to an external rules engine behind this trait boundary.

use crate::{
    record::{KifuRecord, RecordMove},
    types::Sfen,
    Result,
};

/// What the oracle produced for an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleAcceptance {
    /// The candidate move in normalized interchange form.
    pub normalized: RecordMove,
    /// Fingerprint of the position after the move.
    pub sfen: Sfen,
    /// Human-readable rendering of the move.
    pub readable_kifu: String,
}

/// Outcome of submitting a candidate move to the oracle.
///
/// Rejection is an expected, non-exceptional outcome: it means the candidate
/// is illegal in the given position, and the caller decides how to inform the
/// user. Oracle *failures* (a replay prefix that cannot be applied, an engine
/// error) surface as [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleVerdict {
    Accepted(OracleAcceptance),
    Rejected,
}

/// Port for the external move-rules engine.
///
/// This trait represents a **port** in hexagonal architecture: the boundary
/// between the tree core and whatever rules engine backs it. The core only
/// organizes the oracle's results; it treats fingerprints and readable text
/// as opaque.
///
/// # Examples
///
/// ```no_run
/// use kifu_notebook::{
///     ports::{MoveOracle, OracleVerdict},
///     KifuRecord, RecordMove,
/// };
///
/// fn try_move<O: MoveOracle>(
///     oracle: &O,
///     record: &KifuRecord,
///     prefix: &[RecordMove],
///     candidate: &RecordMove,
/// ) -> kifu_notebook::Result<bool> {
///     Ok(matches!(
///         oracle.judge(record, prefix, candidate)?,
///         OracleVerdict::Accepted(_)
///     ))
/// }
/// ```
pub trait MoveOracle {
    /// Fingerprint of the record's starting position (before any move).
    ///
    /// # Errors
    ///
    /// Returns an error if the record's initial-position block cannot be
    /// interpreted by the engine.
    fn start_position(&self, record: &KifuRecord) -> Result<Sfen>;

    /// Replay `prefix` from the record's starting position, then judge
    /// `candidate` against the resulting position.
    ///
    /// # Errors
    ///
    /// Returns an error only for internal failures, such as a prefix move
    /// that cannot be applied. An illegal *candidate* is reported as
    /// [`OracleVerdict::Rejected`], not as an error.
    fn judge(
        &self,
        record: &KifuRecord,
        prefix: &[RecordMove],
        candidate: &RecordMove,
    ) -> Result<OracleVerdict>;
}
