//! 遷移を木として書き下したテスト用盤面。

use crate::engine::board::{ApplyMoveError, Board};
use crate::engine::types::{Side, Square};

/// 1つの遷移（`side` が `(x, y)` に打つと `to` へ進む）。
#[derive(Clone, Copy, Debug)]
pub(super) struct Edge {
    pub(super) side: Side,
    pub(super) to: usize,
    pub(super) x: u8,
    pub(super) y: u8,
}

/// 1つの局面。
#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub(super) black: u32,
    pub(super) edges: &'static [Edge],
    pub(super) white: u32,
}

/// 木を辿るだけの盤面。
#[derive(Clone, Copy, Debug)]
pub(super) struct ScriptedBoard {
    /// `true` の場合、`has_any_legal_move` は常に `true` を返す（列挙と食い違う盤面）。
    claims_moves: bool,
    node: usize,
    tree: &'static [Node],
}

impl ScriptedBoard {
    pub(super) const fn new(tree: &'static [Node]) -> Self {
        Self {
            claims_moves: false,
            node: 0,
            tree,
        }
    }

    pub(super) const fn node(&self) -> usize {
        self.node
    }

    pub(super) const fn claiming_moves(mut self) -> Self {
        self.claims_moves = true;
        self
    }

    fn edges(&self) -> &'static [Edge] {
        match self.tree.get(self.node) {
            Some(node) => node.edges,
            None => &[],
        }
    }

    fn find(&self, square: Square, side: Side) -> Option<Edge> {
        self.edges()
            .iter()
            .copied()
            .find(|edge| edge.side == side && edge.x == square.x() && edge.y == square.y())
    }
}

impl Board for ScriptedBoard {
    fn is_legal(&self, square: Square, side: Side) -> bool {
        self.find(square, side).is_some()
    }

    fn apply(&mut self, square: Square, side: Side) -> Result<(), ApplyMoveError> {
        let edge = self.find(square, side).ok_or(ApplyMoveError::IllegalMove)?;
        self.node = edge.to;
        Ok(())
    }

    fn has_any_legal_move(&self, side: Side) -> bool {
        self.claims_moves || self.edges().iter().any(|edge| edge.side == side)
    }

    fn piece_count(&self, side: Side) -> u32 {
        self.tree.get(self.node).map_or(0, |node| match side {
            Side::Black => node.black,
            Side::White => node.white,
        })
    }
}

/// `Edge` を短く書くための補助。
pub(super) const fn edge(side: Side, x: u8, y: u8, to: usize) -> Edge {
    Edge { side, to, x, y }
}

/// 子を持たない `Node` を短く書くための補助。
pub(super) const fn leaf(black: u32, white: u32) -> Node {
    Node {
        black,
        edges: &[],
        white,
    }
}
