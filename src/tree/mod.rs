//! The branching game-tree model.
//!
//! - [`path`]: path addressing and stable-path translation
//! - [`node`]: immutable node and jump-target value types
//! - [`jump`]: transposition indexing and jump-target maintenance
//! - [`builder`] / [`serializer`]: interchange-format boundary adapters
//! - [`kifu_tree`]: the orchestrating tree value and its operations

pub mod builder;
pub mod jump;
pub mod kifu_tree;
pub mod node;
pub mod path;
pub mod serializer;

pub use builder::build_tree;
pub use jump::{build_jump_map, maintain_jump_targets, JumpMaintenance, JumpMap, JumpMapEntry};
pub use kifu_tree::{KifuTree, MoveAttempt};
pub use node::{JumpTarget, KifuTreeNode};
pub use path::{
    find_node_by_path, nodes_on_path, resolve_stable_key, stable_key, Path,
};
pub use serializer::tree_to_record;
