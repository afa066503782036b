//! Flattening a tree back into the interchange shape.
//!
//! The inverse of the builder: the main line of each level becomes the entry
//! sequence, every further sibling becomes a fork attached to the entry it
//! diverges from, and node comments are merged back as comment lines. The
//! tree's base metadata (headers, starting position) is reattached unchanged.

use std::sync::Arc;

use crate::{
    record::{KifuRecord, RecordEntry},
    tree::node::KifuTreeNode,
};

/// Serialize a tree into a record, capturing all variations.
pub fn tree_to_record(root: &Arc<KifuTreeNode>, base: &KifuRecord) -> KifuRecord {
    let mut moves = vec![RecordEntry {
        mv: None,
        comments: RecordEntry::split_comments(&root.comment),
        forks: None,
    }];
    moves.extend(emit_level(&root.children));

    KifuRecord {
        header: base.header.clone(),
        initial: base.initial.clone(),
        moves,
    }
}

fn emit_level(children: &[Arc<KifuTreeNode>]) -> Vec<RecordEntry> {
    let mut out = Vec::new();
    let mut level = children;
    while let Some(main) = level.first() {
        let forks = if level.len() > 1 {
            Some(
                level[1..]
                    .iter()
                    .map(|sibling| emit_level(std::slice::from_ref(sibling)))
                    .collect(),
            )
        } else {
            None
        };
        out.push(RecordEntry {
            mv: main.mv.clone(),
            comments: RecordEntry::split_comments(&main.comment),
            forks,
        });
        level = &main.children;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::RecordMove,
        types::{Color, PieceKind, Sfen, Square},
    };

    fn mv(to: (u8, u8)) -> RecordMove {
        RecordMove {
            color: Color::Black,
            piece: PieceKind::new("FU"),
            from: Some(Square::new(to.0, to.1 + 1)),
            to: Square::new(to.0, to.1),
            promote: None,
            capture: None,
            same: None,
        }
    }

    fn node(tesuu: usize, to: (u8, u8), children: Vec<Arc<KifuTreeNode>>) -> Arc<KifuTreeNode> {
        Arc::new(KifuTreeNode {
            tesuu,
            mv: Some(mv(to)),
            sfen: Sfen::new(format!("{}{}", to.0, to.1)),
            readable_kifu: String::new(),
            comment: String::new(),
            children,
            jump_targets: Vec::new(),
        })
    }

    fn root(children: Vec<Arc<KifuTreeNode>>) -> Arc<KifuTreeNode> {
        Arc::new(KifuTreeNode {
            tesuu: 0,
            mv: None,
            sfen: Sfen::new("start"),
            readable_kifu: String::new(),
            comment: "root note".to_string(),
            children,
            jump_targets: Vec::new(),
        })
    }

    #[test]
    fn linear_tree_flattens_to_a_move_list() {
        let tree = root(vec![node(1, (7, 6), vec![node(2, (3, 4), vec![])])]);
        let record = tree_to_record(&tree, &KifuRecord::empty());

        assert_eq!(record.moves.len(), 3);
        assert!(record.moves[0].mv.is_none());
        assert_eq!(
            record.moves[0].comments,
            Some(vec!["root note".to_string()])
        );
        assert_eq!(record.moves[1].mv.as_ref().unwrap().to, Square::new(7, 6));
        assert_eq!(record.moves[2].mv.as_ref().unwrap().to, Square::new(3, 4));
        assert!(record.moves[1].forks.is_none());
    }

    #[test]
    fn siblings_become_forks_on_the_main_entry() {
        let tree = root(vec![
            node(1, (7, 6), vec![]),
            node(1, (2, 6), vec![node(2, (8, 4), vec![])]),
        ]);
        let record = tree_to_record(&tree, &KifuRecord::empty());

        assert_eq!(record.moves.len(), 2);
        let forks = record.moves[1].forks.as_ref().unwrap();
        assert_eq!(forks.len(), 1);
        assert_eq!(forks[0].len(), 2);
        assert_eq!(forks[0][0].mv.as_ref().unwrap().to, Square::new(2, 6));
        assert_eq!(forks[0][1].mv.as_ref().unwrap().to, Square::new(8, 4));
    }

    #[test]
    fn base_metadata_is_reattached_unchanged() {
        let mut base = KifuRecord::empty();
        base.header.insert("black".into(), "Sente".into());
        base.initial = Some(serde_json::json!({"preset": "HIRATE"}));

        let record = tree_to_record(&root(vec![]), &base);
        assert_eq!(record.header, base.header);
        assert_eq!(record.initial, base.initial);
    }
}
