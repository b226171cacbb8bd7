use crate::engine::types::Side;

use super::search::Role;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// 評価式で打ち切った葉の数。
    leaves: u64,
    /// 探索したノード数（盤面を複製した回数）。
    nodes: u64,
}

impl SearchStats {
    /// 葉の数を加算する。
    pub(super) const fn inc_leaves(&mut self) {
        self.leaves = self.leaves.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 葉の数を返す。
    pub(super) const fn leaves(&self) -> u64 {
        self.leaves
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 1回の手選択で共有する探索コンテキスト。
#[derive(Debug)]
pub(super) struct SearchContext {
    /// 自分の色。
    agent: Side,
    /// ルート直下の探索に渡す残り深さ。
    max_depth: u8,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 自分の色を返す。
    pub(super) const fn agent(&self) -> Side {
        self.agent
    }

    /// ルート直下の探索に渡す残り深さを返す。
    pub(super) const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 探索コンテキストを生成する。
    pub(super) const fn new(agent: Side, max_depth: u8) -> Self {
        Self {
            agent,
            max_depth,
            stats: SearchStats {
                leaves: 0,
                nodes: 0,
            },
        }
    }

    /// 相手の色を返す。
    pub(super) const fn opponent(&self) -> Side {
        self.agent.opponent()
    }

    /// `role` が指す側の色を返す。
    pub(super) const fn side_of(&self, role: Role) -> Side {
        match role {
            Role::Agent => self.agent,
            Role::Opponent => self.opponent(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
