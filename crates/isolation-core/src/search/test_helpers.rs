//! 探索テスト用の明示的なゲーム木
//!
//! 各ノードに評価値を持たせ、`leaf_value` でその値をそのまま返す。
//! 指し手は「親の何番目の子か」を `(0, i)` で表す。

use crate::game::GameState;
use crate::types::{Move, MoveList, Player, Position};

struct Node {
    value: f64,
    children: Vec<usize>,
}

/// 明示的なゲーム木（ノード 0 がルート）
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// ルートだけの木（評価値 0.0）
    pub fn new() -> Self {
        Self { nodes: vec![Node { value: 0.0, children: Vec::new() }] }
    }

    /// 深さ2の木。`branches[i]` はルートの i 番目の子が持つ葉の評価値
    pub fn from_leaves(branches: &[&[f64]]) -> Self {
        let mut tree = Self::new();
        for leaves in branches {
            let branch = tree.add_node(0, 0.0);
            for &value in leaves.iter() {
                tree.add_node(branch, value);
            }
        }
        tree
    }

    /// `parent` に子を追加してその番号を返す
    pub fn add_node(&mut self, parent: usize, value: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { value, children: Vec::new() });
        self.nodes[parent].children.push(id);
        id
    }

    /// ノードの評価値
    pub fn value(&self, node: usize) -> f64 {
        self.nodes[node].value
    }

    /// 親の `index` 番目の子へ進む手
    pub fn child_move(index: usize) -> Move {
        Position::new(0, index as i8)
    }

    /// ルート局面（先手番）
    pub fn root(&self) -> TreeState<'_> {
        TreeState { tree: self, node: 0, active: Player::First }
    }
}

/// ゲーム木上の局面
#[derive(Clone, Copy)]
pub struct TreeState<'a> {
    tree: &'a GameTree,
    node: usize,
    active: Player,
}

impl GameState for TreeState<'_> {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, _player: Player) -> MoveList {
        (0..self.tree.nodes[self.node].children.len()).map(GameTree::child_move).collect()
    }

    fn apply_move(&self, mv: Move) -> Self {
        let child = self.tree.nodes[self.node].children[mv.col as usize];
        TreeState { tree: self.tree, node: child, active: self.active.opponent() }
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }

    fn position_of(&self, player: Player) -> Position {
        Position::new(self.node as i8, player.index() as i8)
    }
}

/// ノードに書かれた評価値を返す評価関数
pub fn leaf_value(state: &TreeState<'_>, _player: Player) -> f64 {
    state.tree.value(state.node)
}
