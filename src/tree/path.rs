//! Path addressing into the game tree.
//!
//! A [`Path`] identifies a node by the sequence of child indices walked from
//! the root; the empty path is the root itself. Integer paths are positional,
//! so any edit that inserts or removes a sibling invalidates paths past the
//! edit point. [`stable_key`]/[`resolve_stable_key`] translate a path into a
//! structural key built from move identities, which survives sibling
//! reordering.

use std::{fmt, sync::Arc};

use crate::{
    error::{Error, Result},
    record::RecordMove,
    tree::node::KifuTreeNode,
};

/// An ordered sequence of child indices addressing a node from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<usize>);

impl Path {
    /// The root path (empty index sequence).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from child indices.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of indices (= depth of the addressed node).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path is empty. Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The child indices as a slice.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The path of the parent node. The root's parent is the root itself.
    pub fn parent(&self) -> Path {
        match self.0.split_last() {
            Some((_, init)) => Path::new(init.to_vec()),
            None => Path::root(),
        }
    }

    /// The path extended by one child index.
    pub fn child(&self, index: usize) -> Path {
        let mut indices = self.0.clone();
        indices.push(index);
        Path(indices)
    }

    /// The last child index, if any.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The prefix of this path with the given length.
    pub fn prefix(&self, len: usize) -> Path {
        Path::new(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Path(indices)
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Path(indices.to_vec())
    }
}

/// Resolve a path to its node.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if any index is out of range at any
/// depth. Paths are only ever derived from the tree itself, so a resolution
/// failure indicates an internal invariant violation, not a user mistake.
pub fn find_node_by_path<'a>(
    root: &'a Arc<KifuTreeNode>,
    path: &Path,
) -> Result<&'a Arc<KifuTreeNode>> {
    let mut current = root;
    for &index in path.indices() {
        current = current
            .children
            .get(index)
            .ok_or_else(|| Error::PathResolution { path: path.clone() })?;
    }
    Ok(current)
}

/// Collect all nodes from the root to the addressed node, inclusive.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the path does not resolve.
pub fn nodes_on_path<'a>(
    root: &'a Arc<KifuTreeNode>,
    path: &Path,
) -> Result<Vec<&'a Arc<KifuTreeNode>>> {
    let mut nodes = Vec::with_capacity(path.len() + 1);
    let mut current = root;
    nodes.push(current);
    for &index in path.indices() {
        current = current
            .children
            .get(index)
            .ok_or_else(|| Error::PathResolution { path: path.clone() })?;
        nodes.push(current);
    }
    Ok(nodes)
}

/// Encode a path as a structural key: the move identities from root to node.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the path does not resolve.
pub fn stable_key(root: &Arc<KifuTreeNode>, path: &Path) -> Result<Vec<RecordMove>> {
    let nodes = nodes_on_path(root, path)?;
    Ok(nodes.iter().filter_map(|node| node.mv.clone()).collect())
}

/// Re-resolve a structural key against a (possibly edited) tree.
///
/// Walks children matching each key move by move identity. If the addressed
/// node no longer exists, returns the root path: a documented best-effort
/// fallback, not an error.
pub fn resolve_stable_key(root: &Arc<KifuTreeNode>, key: &[RecordMove]) -> Path {
    let mut path = Path::root();
    let mut current = root;
    for key_move in key {
        let matched = current.children.iter().enumerate().find(|(_, child)| {
            child
                .mv
                .as_ref()
                .is_some_and(|mv| mv.is_same_move(key_move))
        });
        match matched {
            Some((index, child)) => {
                path = path.child(index);
                current = child;
            }
            None => return Path::root(),
        }
    }
    path
}
