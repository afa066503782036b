//! The branching kifu tree and its editing operations.
//!
//! Every operation is persistent: it takes the tree by reference and returns
//! a new tree value, sharing all unmodified subtrees with the previous value.
//! Structural edits (anything that changes a child list) additionally run
//! jump-target maintenance before returning; navigation and annotation-only
//! edits never do.

use std::{sync::Arc, time::Instant};

use crate::{
    error::Result,
    ports::{
        observer::{MaintenanceObserver, MaintenanceStats, NullObserver},
        oracle::{MoveOracle, OracleVerdict},
    },
    record::{KifuRecord, RecordMove},
    tree::{
        builder, jump,
        node::KifuTreeNode,
        path::{self, Path},
        serializer,
    },
};

/// Outcome of a move-insertion attempt.
///
/// Rejection by the move-rules oracle is an expected outcome, not an error:
/// the original tree is left completely unchanged and the caller decides how
/// to inform the user.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveAttempt {
    /// The move was legal (or already recorded); the new tree has
    /// `current_path` pointing at the reached node.
    Accepted(KifuTree),
    /// The oracle rejected the candidate move.
    Rejected,
}

impl MoveAttempt {
    /// The resulting tree, if the move was accepted.
    pub fn accepted(self) -> Option<KifuTree> {
        match self {
            MoveAttempt::Accepted(tree) => Some(tree),
            MoveAttempt::Rejected => None,
        }
    }

    /// Whether the oracle rejected the move.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveAttempt::Rejected)
    }
}

/// A branching game record: the tree, its base metadata, and the path of the
/// node the user is currently viewing.
///
/// `current_path` always resolves to an existing node of `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct KifuTree {
    root: Arc<KifuTreeNode>,
    base: KifuRecord,
    current_path: Path,
}

impl KifuTree {
    /// Build a tree from an interchange-format record, replaying it through
    /// the oracle, and run the initial jump-target maintenance pass.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingRootEntry`] for a record without a root
    /// marker and [`crate::Error::IllegalRecordedMove`] if the oracle rejects
    /// a recorded move.
    pub fn from_record(record: KifuRecord, oracle: &dyn MoveOracle) -> Result<KifuTree> {
        Self::from_record_with(record, oracle, &mut NullObserver)
    }

    /// Like [`KifuTree::from_record`], reporting the maintenance pass to
    /// `observer`.
    pub fn from_record_with(
        record: KifuRecord,
        oracle: &dyn MoveOracle,
        observer: &mut dyn MaintenanceObserver,
    ) -> Result<KifuTree> {
        let root = builder::build_tree(&record, oracle)?;
        let tree = KifuTree {
            root,
            base: record.base(),
            current_path: Path::root(),
        };
        Ok(tree.maintained(observer))
    }

    /// Flatten the tree back into the interchange shape, capturing all
    /// variations and reattaching the base metadata unchanged.
    pub fn to_record(&self) -> KifuRecord {
        serializer::tree_to_record(&self.root, &self.base)
    }

    /// The root node.
    pub fn root(&self) -> &Arc<KifuTreeNode> {
        &self.root
    }

    /// Base metadata from the imported record (headers, starting position,
    /// root marker).
    pub fn base(&self) -> &KifuRecord {
        &self.base
    }

    /// Path of the node the user is currently viewing.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// The currently viewed node.
    pub fn current_node(&self) -> &Arc<KifuTreeNode> {
        path::find_node_by_path(&self.root, &self.current_path)
            .expect("current path always resolves")
    }

    /// Resolve an arbitrary path to its node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PathResolution`] if the path does not resolve;
    /// paths are only ever produced by the tree itself, so this indicates an
    /// internal invariant violation.
    pub fn node_at(&self, path: &Path) -> Result<&Arc<KifuTreeNode>> {
        path::find_node_by_path(&self.root, path)
    }

    /// Return a tree viewing `path`. Pure navigation; no maintenance runs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PathResolution`] if the path does not resolve.
    pub fn set_current_path(&self, path: Path) -> Result<KifuTree> {
        path::find_node_by_path(&self.root, &path)?;
        Ok(KifuTree {
            root: Arc::clone(&self.root),
            base: self.base.clone(),
            current_path: path,
        })
    }

    /// Path one move back; the root stays put.
    pub fn previous_path(&self) -> Path {
        self.current_path.parent()
    }

    /// Path one move forward along the main line, or the current path if the
    /// current node is a leaf.
    pub fn next_path(&self) -> Path {
        if self.current_node().children.is_empty() {
            self.current_path.clone()
        } else {
            self.current_path.child(0)
        }
    }

    /// Path of the nearest ancestor fork (a node with two or more recorded
    /// variations), or the root path if there is none.
    ///
    /// The result addresses the fork node itself, not the fork's child on
    /// the current line; a caller that wants to land one move past the
    /// branch point should extend the result with the next index of the
    /// current path.
    pub fn previous_fork_path(&self) -> Path {
        let nodes = path::nodes_on_path(&self.root, &self.current_path)
            .expect("current path always resolves");
        for depth in (0..nodes.len().saturating_sub(1)).rev() {
            if nodes[depth].is_fork() {
                return self.current_path.prefix(depth);
            }
        }
        Path::root()
    }

    /// Path of the next fork below the current node: descend along first
    /// children while nodes have exactly one child, stopping at the first
    /// node with zero or several. A leaf yields the current path unchanged.
    pub fn next_fork_path(&self) -> Path {
        let mut node: &KifuTreeNode = self.current_node();
        if node.children.is_empty() {
            return self.current_path.clone();
        }
        let mut result = self.current_path.clone();
        loop {
            node = &node.children[0];
            result = result.child(0);
            if node.children.len() != 1 {
                return result;
            }
        }
    }

    /// Insert a candidate move at the current node. See [`MoveAttempt`].
    ///
    /// If a child with the same move identity already exists, no node is
    /// created: the result is the same tree viewing that child (pure
    /// navigation, no maintenance). Otherwise the candidate is judged by the
    /// oracle against the replayed position; on acceptance the normalized
    /// move is spliced in as a new last child and maintenance runs.
    ///
    /// # Errors
    ///
    /// Returns an error only for internal failures (path resolution, oracle
    /// failure on the replay prefix). An illegal candidate is
    /// [`MoveAttempt::Rejected`], with the tree untouched.
    pub fn move_piece(&self, candidate: &RecordMove, oracle: &dyn MoveOracle) -> Result<MoveAttempt> {
        self.move_piece_with(candidate, oracle, &mut NullObserver)
    }

    /// Like [`KifuTree::move_piece`], reporting any maintenance pass to
    /// `observer`.
    pub fn move_piece_with(
        &self,
        candidate: &RecordMove,
        oracle: &dyn MoveOracle,
        observer: &mut dyn MaintenanceObserver,
    ) -> Result<MoveAttempt> {
        let current = self.current_node();

        // Proceed to an existing node when the move is already recorded.
        if let Some(index) = current.find_child_by_move(candidate) {
            let advanced = self.set_current_path(self.current_path.child(index))?;
            return Ok(MoveAttempt::Accepted(advanced));
        }

        let prefix = path::stable_key(&self.root, &self.current_path)?;
        let acceptance = match oracle.judge(&self.base, &prefix, candidate)? {
            OracleVerdict::Accepted(acceptance) => acceptance,
            OracleVerdict::Rejected => return Ok(MoveAttempt::Rejected),
        };

        let child_index = current.children.len();
        let new_node = Arc::new(KifuTreeNode::new(
            current.tesuu + 1,
            Some(acceptance.normalized),
            acceptance.sfen,
            acceptance.readable_kifu,
            "",
        ));
        let spliced = self.update_node_with(
            &self.current_path,
            move |node| {
                let mut updated = node.clone();
                updated.children.push(new_node);
                updated
            },
            observer,
        )?;
        let advanced = spliced.set_current_path(self.current_path.child(child_index))?;
        Ok(MoveAttempt::Accepted(advanced))
    }

    /// Replace the node at `path` with `updater(node)`, reallocating only the
    /// root-to-target spine. If the update changed the node's child list,
    /// jump-target maintenance runs before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PathResolution`] if the path does not resolve.
    pub fn update_node<F>(&self, path: &Path, updater: F) -> Result<KifuTree>
    where
        F: FnOnce(&KifuTreeNode) -> KifuTreeNode,
    {
        self.update_node_with(path, updater, &mut NullObserver)
    }

    /// Like [`KifuTree::update_node`], reporting any maintenance pass to
    /// `observer`.
    pub fn update_node_with<F>(
        &self,
        path: &Path,
        updater: F,
        observer: &mut dyn MaintenanceObserver,
    ) -> Result<KifuTree>
    where
        F: FnOnce(&KifuTreeNode) -> KifuTreeNode,
    {
        let mut children_changed = false;
        let root = rebuild_spine(
            &self.root,
            path,
            path.indices(),
            updater,
            &mut children_changed,
        )?;
        let tree = KifuTree {
            root,
            base: self.base.clone(),
            current_path: self.current_path.clone(),
        };
        Ok(if children_changed {
            tree.maintained(observer)
        } else {
            tree
        })
    }

    /// Edit the sibling list containing the node at `path`.
    ///
    /// The current selection is captured as a stable (move-identity) key
    /// before the edit and re-resolved afterwards, so `current_path` keeps
    /// pointing at the same node across sibling reordering. If the edited
    /// branch was removed, the selection falls back to the root. An update
    /// that changes nothing short-circuits to the original tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PathResolution`] if the path does not resolve.
    pub fn update_fork<F>(&self, path: &Path, fork_updater: F) -> Result<KifuTree>
    where
        F: FnOnce(Vec<Arc<KifuTreeNode>>, usize) -> Vec<Arc<KifuTreeNode>>,
    {
        self.update_fork_with(path, fork_updater, &mut NullObserver)
    }

    /// Like [`KifuTree::update_fork`], reporting any maintenance pass to
    /// `observer`.
    pub fn update_fork_with<F>(
        &self,
        path: &Path,
        fork_updater: F,
        observer: &mut dyn MaintenanceObserver,
    ) -> Result<KifuTree>
    where
        F: FnOnce(Vec<Arc<KifuTreeNode>>, usize) -> Vec<Arc<KifuTreeNode>>,
    {
        let Some(last_index) = path.last() else {
            // The root has no siblings to edit.
            return Ok(self.clone());
        };
        let key = path::stable_key(&self.root, &self.current_path)?;

        let updated = self.update_node_with(
            &path.parent(),
            move |node| {
                let mut new_node = node.clone();
                let children = std::mem::take(&mut new_node.children);
                new_node.children = fork_updater(children, last_index);
                new_node
            },
            observer,
        )?;
        if updated == *self {
            return Ok(self.clone());
        }

        let new_current = path::resolve_stable_key(&updated.root, &key);
        updated.set_current_path(new_current)
    }

    /// Swap the branch at `path` with its previous sibling (toward the main
    /// line). No-op if it already is the main line.
    pub fn move_up_fork(&self, path: &Path) -> Result<KifuTree> {
        self.update_fork(path, |mut children, index| {
            if index > 0 && index < children.len() {
                children.swap(index - 1, index);
            }
            children
        })
    }

    /// Swap the branch at `path` with its next sibling. No-op if it is the
    /// last variation.
    pub fn move_down_fork(&self, path: &Path) -> Result<KifuTree> {
        self.update_fork(path, |mut children, index| {
            if index + 1 < children.len() {
                children.swap(index, index + 1);
            }
            children
        })
    }

    /// Delete the branch at `path`, including its whole subtree.
    pub fn remove_fork(&self, path: &Path) -> Result<KifuTree> {
        self.update_fork(path, |mut children, index| {
            if index < children.len() {
                children.remove(index);
            }
            children
        })
    }

    /// Replace the current node's comment. Annotation-only: never triggers
    /// jump-target maintenance.
    pub fn update_comment(&self, comment: impl Into<String>) -> Result<KifuTree> {
        let comment = comment.into();
        self.update_node(&self.current_path, move |node| {
            let mut updated = node.clone();
            updated.comment = comment;
            updated
        })
    }

    fn maintained(&self, observer: &mut dyn MaintenanceObserver) -> KifuTree {
        let started = Instant::now();
        let pass = jump::maintain_jump_targets(&self.root);
        observer.on_maintenance(MaintenanceStats {
            nodes_visited: pass.nodes_visited,
            elapsed: started.elapsed(),
        });
        KifuTree {
            root: pass.root,
            base: self.base.clone(),
            current_path: self.current_path.clone(),
        }
    }
}

/// Rebuild the nodes from `node` down to the target of `indices`, applying
/// `updater` at the target. Sibling subtrees are shared, not copied. Sets
/// `children_changed` when the updated node's child list differs from the
/// original by value.
fn rebuild_spine<F>(
    node: &Arc<KifuTreeNode>,
    full_path: &Path,
    indices: &[usize],
    updater: F,
    children_changed: &mut bool,
) -> Result<Arc<KifuTreeNode>>
where
    F: FnOnce(&KifuTreeNode) -> KifuTreeNode,
{
    match indices.split_first() {
        None => {
            let updated = updater(node);
            *children_changed = updated.children != node.children;
            Ok(Arc::new(updated))
        }
        Some((&index, rest)) => {
            let child = node.children.get(index).ok_or_else(|| {
                crate::Error::PathResolution {
                    path: full_path.clone(),
                }
            })?;
            let new_child = rebuild_spine(child, full_path, rest, updater, children_changed)?;
            let mut children = node.children.clone();
            children[index] = new_child;
            Ok(Arc::new(KifuTreeNode {
                children,
                ..(**node).clone()
            }))
        }
    }
}
