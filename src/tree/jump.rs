//! Transposition indexing and jump-target maintenance.
//!
//! [`build_jump_map`] indexes every node of the tree by its position
//! fingerprint in one depth-first pass. [`maintain_jump_targets`] then
//! recomputes each node's jump-target list from that index, replacing a
//! node's list only when the recomputed value actually differs so that
//! untouched subtrees remain shared with the previous tree.
//!
//! Maintenance runs once per structural edit (child-list change); navigation
//! and annotation-only edits never trigger it.

use std::{collections::HashMap, sync::Arc};

use crate::{
    tree::node::{JumpTarget, KifuTreeNode},
    tree::path::Path,
    types::Sfen,
};

/// One occurrence of a fingerprint in the tree.
#[derive(Debug, Clone)]
pub struct JumpMapEntry {
    pub path: Path,
    pub node: Arc<KifuTreeNode>,
}

/// Mapping from position fingerprint to every node sharing it, in depth-first
/// preorder with children visited in index order.
pub type JumpMap = HashMap<Sfen, Vec<JumpMapEntry>>;

/// Index the whole tree by position fingerprint in a single traversal.
pub fn build_jump_map(root: &Arc<KifuTreeNode>) -> JumpMap {
    let mut map = JumpMap::new();
    index_subtree(root, &Path::root(), &mut map);
    map
}

fn index_subtree(node: &Arc<KifuTreeNode>, path: &Path, map: &mut JumpMap) {
    map.entry(node.sfen.clone()).or_default().push(JumpMapEntry {
        path: path.clone(),
        node: Arc::clone(node),
    });
    for (index, child) in node.children.iter().enumerate() {
        index_subtree(child, &path.child(index), map);
    }
}

/// Result of a jump-target maintenance pass.
#[derive(Debug)]
pub struct JumpMaintenance {
    /// The maintained tree; shares every subtree whose value did not change.
    pub root: Arc<KifuTreeNode>,
    /// Number of nodes visited (= tree size).
    pub nodes_visited: usize,
}

/// Recompute every node's jump targets from scratch.
///
/// For a node `n`, the new list holds one entry per child of every *other*
/// node sharing `n`'s fingerprint, in index order: the continuations already
/// authored elsewhere in the tree from an equivalent position. Nodes with a
/// unique fingerprint get an empty list.
pub fn maintain_jump_targets(root: &Arc<KifuTreeNode>) -> JumpMaintenance {
    let map = build_jump_map(root);
    let nodes_visited = map.values().map(Vec::len).sum();
    let root = rebuild(root, &Path::root(), &map);
    JumpMaintenance {
        root,
        nodes_visited,
    }
}

fn rebuild(node: &Arc<KifuTreeNode>, path: &Path, map: &JumpMap) -> Arc<KifuTreeNode> {
    let new_children: Vec<Arc<KifuTreeNode>> = node
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| rebuild(child, &path.child(index), map))
        .collect();

    let new_targets = targets_for(node, path, map);

    let children_shared = new_children
        .iter()
        .zip(&node.children)
        .all(|(a, b)| Arc::ptr_eq(a, b));
    if children_shared && new_targets == node.jump_targets {
        return Arc::clone(node);
    }

    Arc::new(KifuTreeNode {
        children: new_children,
        jump_targets: new_targets,
        ..(**node).clone()
    })
}

fn targets_for(node: &KifuTreeNode, path: &Path, map: &JumpMap) -> Vec<JumpTarget> {
    let Some(entries) = map.get(&node.sfen) else {
        return Vec::new();
    };
    if entries.len() <= 1 {
        return Vec::new();
    }

    let mut targets = Vec::new();
    for entry in entries {
        if entry.path == *path {
            continue;
        }
        for (index, child) in entry.node.children.iter().enumerate() {
            targets.push(JumpTarget {
                path: entry.path.child(index),
                comment: child.comment.clone(),
                readable_kifu: child.readable_kifu.clone(),
            });
        }
    }
    targets
}
