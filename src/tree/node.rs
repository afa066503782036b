//! Immutable tree node and jump-target value types.

use std::sync::Arc;

use crate::{
    record::RecordMove,
    tree::path::Path,
    types::Sfen,
};

/// A cross-reference into a sibling branch that reaches the same position.
///
/// Jump targets are derived data: they are never authored by the user and are
/// recomputed by jump-target maintenance after every structural edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    /// Path of the continuation recorded elsewhere in the tree.
    pub path: Path,
    /// Preview of the target node's comment.
    pub comment: String,
    /// Preview of the target node's readable move text.
    pub readable_kifu: String,
}

/// One position reached by one move from its parent.
///
/// Nodes are conceptually immutable: an edit always produces a new node and
/// splices it into a new tree. Children are held behind [`Arc`] so an edit
/// reallocates only the root-to-target spine and shares every other subtree
/// with the previous tree value. Equality is deep and structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KifuTreeNode {
    /// Move count from the start of the game; root is tesuu 0.
    pub tesuu: usize,
    /// The move that produced this node; `None` only at the root.
    pub mv: Option<RecordMove>,
    /// Fingerprint of the position after the move, as produced by the oracle.
    pub sfen: Sfen,
    /// Human-readable move text, as produced by the oracle.
    pub readable_kifu: String,
    /// Free-form annotation, opaque to the core.
    pub comment: String,
    /// Ordered variations; the first child is the main line.
    pub children: Vec<Arc<KifuTreeNode>>,
    /// Derived transposition links; see [`JumpTarget`].
    pub jump_targets: Vec<JumpTarget>,
}

impl KifuTreeNode {
    /// Create a node with no children and no jump targets.
    pub fn new(
        tesuu: usize,
        mv: Option<RecordMove>,
        sfen: Sfen,
        readable_kifu: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            tesuu,
            mv,
            sfen,
            readable_kifu: readable_kifu.into(),
            comment: comment.into(),
            children: Vec::new(),
            jump_targets: Vec::new(),
        }
    }

    /// Whether this node is a branch point with multiple recorded variations.
    pub fn is_fork(&self) -> bool {
        self.children.len() >= 2
    }

    /// Index of the child whose move has the same identity as `mv`, if any.
    pub fn find_child_by_move(&self, mv: &RecordMove) -> Option<usize> {
        self.children.iter().position(|child| {
            child.mv.as_ref().is_some_and(|child_mv| child_mv.is_same_move(mv))
        })
    }
}
