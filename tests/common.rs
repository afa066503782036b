//! Common test utilities for the kifu-notebook test suite.
//!
//! Provides a small scripted rules engine standing in for a real shogi
//! engine, plus record and move fixtures shared across tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use kifu_notebook::{
    ports::{MoveOracle, OracleAcceptance, OracleVerdict},
    Color, Error, KifuRecord, PieceKind, RecordMove, Result, Sfen, Square,
};

type Board = BTreeMap<(u8, u8), (Color, String)>;
type Hands = BTreeMap<(Color, String), u32>;

/// Scripted rules engine over a plain piece grid.
///
/// Board moves require the moved piece to stand on the origin square; drops
/// require an empty destination and a matching piece in hand; captures go to
/// the mover's hand. Turn order is not enforced, and fingerprints cover the
/// board and hands only, which is all the tree core ever looks at.
pub struct GridOracle {
    board: Board,
    hands: Hands,
}

impl GridOracle {
    /// Fixed test arrangement: a few pieces per side plus one black pawn in
    /// hand, enough to express branches, drops, captures, and transpositions.
    pub fn new() -> Self {
        let mut board = Board::new();
        board.insert((7, 7), (Color::Black, "FU".to_string()));
        board.insert((2, 7), (Color::Black, "FU".to_string()));
        board.insert((8, 8), (Color::Black, "KA".to_string()));
        board.insert((5, 9), (Color::Black, "KI".to_string()));
        board.insert((3, 3), (Color::White, "FU".to_string()));
        board.insert((2, 2), (Color::White, "KA".to_string()));

        let mut hands = Hands::new();
        hands.insert((Color::Black, "FU".to_string()), 1);

        Self { board, hands }
    }

    fn fingerprint(board: &Board, hands: &Hands) -> Sfen {
        let mut parts: Vec<String> = board
            .iter()
            .map(|((x, y), (color, piece))| format!("{color}:{piece}@{x}{y}"))
            .collect();
        parts.push("|".to_string());
        parts.extend(
            hands
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|((color, piece), count)| format!("{color}:{piece}x{count}")),
        );
        Sfen::new(parts.join(" "))
    }

    /// Apply one move, reporting the reason when it is illegal.
    fn apply(
        board: &mut Board,
        hands: &mut Hands,
        mv: &RecordMove,
    ) -> std::result::Result<Option<PieceKind>, String> {
        let to = (mv.to.x, mv.to.y);
        match mv.from {
            Some(from) => {
                let from = (from.x, from.y);
                let Some((color, piece)) = board.get(&from).cloned() else {
                    return Err(format!("no piece at {}{}", from.0, from.1));
                };
                if color != mv.color || piece != mv.piece.as_str() {
                    return Err(format!("piece at {}{} does not match", from.0, from.1));
                }
                let captured = match board.get(&to) {
                    Some((occupant_color, _)) if *occupant_color == mv.color => {
                        return Err(format!("own piece at {}{}", to.0, to.1));
                    }
                    Some((_, occupant_piece)) => {
                        let base = occupant_piece.trim_start_matches('+').to_string();
                        *hands.entry((mv.color, base.clone())).or_insert(0) += 1;
                        Some(PieceKind::new(base))
                    }
                    None => None,
                };
                board.remove(&from);
                let placed = if mv.promote.unwrap_or(false) {
                    format!("+{piece}")
                } else {
                    piece
                };
                board.insert(to, (mv.color, placed));
                Ok(captured)
            }
            None => {
                if board.contains_key(&to) {
                    return Err(format!("square {}{} is occupied", to.0, to.1));
                }
                let in_hand = hands
                    .get_mut(&(mv.color, mv.piece.as_str().to_string()))
                    .filter(|count| **count > 0);
                let Some(count) = in_hand else {
                    return Err(format!("no {} in hand", mv.piece));
                };
                *count -= 1;
                board.insert(to, (mv.color, mv.piece.as_str().to_string()));
                Ok(None)
            }
        }
    }

    fn readable(mv: &RecordMove) -> String {
        let side = match mv.color {
            Color::Black => "+",
            Color::White => "-",
        };
        let promote = if mv.promote.unwrap_or(false) { "*" } else { "" };
        match mv.from {
            Some(_) => format!("{side}{}{}{promote}", mv.to, mv.piece),
            None => format!("{side}{}{}'", mv.to, mv.piece),
        }
    }
}

impl Default for GridOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOracle for GridOracle {
    fn start_position(&self, _record: &KifuRecord) -> Result<Sfen> {
        Ok(Self::fingerprint(&self.board, &self.hands))
    }

    fn judge(
        &self,
        _record: &KifuRecord,
        prefix: &[RecordMove],
        candidate: &RecordMove,
    ) -> Result<OracleVerdict> {
        let mut board = self.board.clone();
        let mut hands = self.hands.clone();
        for (tesuu, mv) in prefix.iter().enumerate() {
            Self::apply(&mut board, &mut hands, mv).map_err(|reason| Error::Oracle {
                context: format!("replay failed at tesuu {}: {reason}", tesuu + 1),
            })?;
        }
        match Self::apply(&mut board, &mut hands, candidate) {
            Ok(captured) => {
                let mut normalized = candidate.clone();
                normalized.capture = captured;
                Ok(OracleVerdict::Accepted(OracleAcceptance {
                    readable_kifu: Self::readable(&normalized),
                    sfen: Self::fingerprint(&board, &hands),
                    normalized,
                }))
            }
            Err(_) => Ok(OracleVerdict::Rejected),
        }
    }
}

/// Record with headers only: no initial block, a bare root marker.
pub fn empty_record() -> KifuRecord {
    let mut record = KifuRecord::empty();
    record.header.insert("black".to_string(), "Sente".to_string());
    record.header.insert("white".to_string(), "Gote".to_string());
    record
}

pub fn board_move(color: Color, from: (u8, u8), to: (u8, u8), piece: &str) -> RecordMove {
    RecordMove {
        color,
        piece: PieceKind::new(piece),
        from: Some(Square::new(from.0, from.1)),
        to: Square::new(to.0, to.1),
        promote: None,
        capture: None,
        same: None,
    }
}

pub fn drop_move(color: Color, to: (u8, u8), piece: &str) -> RecordMove {
    RecordMove {
        color,
        piece: PieceKind::new(piece),
        from: None,
        to: Square::new(to.0, to.1),
        promote: None,
        capture: None,
        same: None,
    }
}

/// Black pawn push 77 -> 76, the usual first test move.
pub fn pawn_push() -> RecordMove {
    board_move(Color::Black, (7, 7), (7, 6), "FU")
}

/// White pawn reply 33 -> 34.
pub fn pawn_reply() -> RecordMove {
    board_move(Color::White, (3, 3), (3, 4), "FU")
}

/// Bishop excursion 88 -> 99 and back; replaying both returns the position
/// to the starting fingerprint.
pub fn bishop_out() -> RecordMove {
    board_move(Color::Black, (8, 8), (9, 9), "KA")
}

pub fn bishop_back() -> RecordMove {
    board_move(Color::Black, (9, 9), (8, 8), "KA")
}
