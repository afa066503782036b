//! Tree construction from an interchange-format record.
//!
//! The builder replays the record's move list through the move-rules oracle,
//! one step at a time, so every node carries the oracle's normalized move,
//! position fingerprint, and readable move text. Forked variations in the
//! record become sibling branches.

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    ports::oracle::{MoveOracle, OracleVerdict},
    record::{KifuRecord, RecordEntry, RecordMove},
    tree::node::KifuTreeNode,
};

/// Build a tree from a record by replaying it through the oracle.
///
/// # Errors
///
/// Returns [`Error::MissingRootEntry`] if the record's move list is empty,
/// and [`Error::IllegalRecordedMove`] if the oracle rejects a recorded move
/// (a corrupt or hand-edited record).
pub fn build_tree(record: &KifuRecord, oracle: &dyn MoveOracle) -> Result<Arc<KifuTreeNode>> {
    let root_entry = record.root_entry().ok_or(Error::MissingRootEntry)?;
    let start_sfen = oracle.start_position(record)?;

    let mut prefix = Vec::new();
    let children = branch_children(&record.moves[1..], record, oracle, &mut prefix, 0)?;

    Ok(Arc::new(KifuTreeNode {
        tesuu: 0,
        mv: None,
        sfen: start_sfen,
        readable_kifu: String::new(),
        comment: root_entry.joined_comments(),
        children,
        jump_targets: Vec::new(),
    }))
}

/// Build the children produced by an entry sequence: the main line from the
/// first entry, plus one sibling branch per fork attached to it.
fn branch_children(
    entries: &[RecordEntry],
    record: &KifuRecord,
    oracle: &dyn MoveOracle,
    prefix: &mut Vec<RecordMove>,
    parent_tesuu: usize,
) -> Result<Vec<Arc<KifuTreeNode>>> {
    let Some((first, rest)) = entries.split_first() else {
        return Ok(Vec::new());
    };
    let tesuu = parent_tesuu + 1;
    let Some(mv) = &first.mv else {
        return Err(Error::IllegalRecordedMove {
            tesuu,
            context: "entry carries no move".to_string(),
        });
    };

    let acceptance = match oracle.judge(record, prefix, mv)? {
        OracleVerdict::Accepted(acceptance) => acceptance,
        OracleVerdict::Rejected => {
            return Err(Error::IllegalRecordedMove {
                tesuu,
                context: format!("move to {} rejected by the rules engine", mv.to),
            });
        }
    };

    prefix.push(acceptance.normalized.clone());
    let grandchildren = branch_children(rest, record, oracle, prefix, tesuu)?;
    prefix.pop();

    let main = Arc::new(KifuTreeNode {
        tesuu,
        mv: Some(acceptance.normalized),
        sfen: acceptance.sfen,
        readable_kifu: acceptance.readable_kifu,
        comment: first.joined_comments(),
        children: grandchildren,
        jump_targets: Vec::new(),
    });

    let mut children = vec![main];
    if let Some(forks) = &first.forks {
        for fork in forks {
            children.extend(branch_children(fork, record, oracle, prefix, parent_tesuu)?);
        }
    }
    Ok(children)
}
