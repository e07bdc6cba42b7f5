//! Explicit game trees with arena allocation.
//!
//! A [`GameTree`] spells out every node of a small adversarial game: its score,
//! whether it is a win or loss, and its labelled children. [`TreeState`] walks
//! the tree and implements [`AdversarialState`], so any search engine can run
//! over hand-built scenarios or seeded random trees. Agents move strictly in
//! turn order starting from agent 0 at the root.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::state::{AdversarialState, AgentIndex, Score, TransitionError, MAXIMIZER};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// Terminal status of a node, from the maximizer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Win,
    Lose,
}

/// A single node in the tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Parent node (None for root)
    pub parent: Option<NodeId>,
    /// Score reported by `AdversarialState::score`
    pub score: Score,
    pub outcome: Outcome,
    /// Children as (action label, node) pairs in enumeration order
    pub children: Vec<(String, NodeId)>,
    /// Number of moves from the root
    pub ply: u32,
}

/// Immutable game tree shared by every [`TreeState`] walking it.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
    num_agents: usize,
}

impl GameTree {
    /// Start building a tree for `num_agents` agents.
    pub fn builder(num_agents: usize) -> TreeBuilder {
        TreeBuilder::new(num_agents)
    }

    /// Generate a random tree from a seed.
    pub fn random(spec: &RandomTreeSpec, rng: &mut ChaCha20Rng) -> GameTree {
        let mut builder = TreeBuilder::new(spec.num_agents);
        let mut frontier = vec![NodeId::ROOT];

        for ply in 0..spec.plies {
            let mut next = Vec::new();
            for parent in frontier {
                let branching = rng.gen_range(spec.min_branching..=spec.max_branching);
                for i in 0..branching {
                    let score = rng.gen_range(spec.min_score..=spec.max_score) as Score;
                    let label = format!("a{i}");
                    if rng.gen_bool(spec.terminal_probability) {
                        let outcome = if rng.gen_bool(0.5) {
                            Outcome::Win
                        } else {
                            Outcome::Lose
                        };
                        builder.terminal(parent, &label, score, outcome);
                    } else {
                        let child = builder.child(parent, &label, score);
                        if ply + 1 < spec.plies {
                            next.push(child);
                        }
                    }
                }
            }
            frontier = next;
        }

        builder.build()
    }

    /// State positioned at the root with agent 0 to move.
    pub fn root_state(self: &Arc<Self>) -> TreeState {
        TreeState {
            tree: Arc::clone(self),
            node: NodeId::ROOT,
            to_move: MAXIMIZER,
        }
    }

    /// Get a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0 as usize]
    }

    /// Follow a path of action labels from the root.
    pub fn find(&self, path: &[&str]) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for label in path {
            current = self
                .get(current)
                .children
                .iter()
                .find(|(action, _)| action == label)
                .map(|(_, id)| *id)?;
        }
        Some(current)
    }

    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental construction of a [`GameTree`].
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
    num_agents: usize,
}

impl TreeBuilder {
    /// A builder holding a single ongoing root with score 0.
    pub fn new(num_agents: usize) -> Self {
        Self {
            nodes: vec![TreeNode {
                parent: None,
                score: 0.0,
                outcome: Outcome::Ongoing,
                children: Vec::new(),
                ply: 0,
            }],
            num_agents,
        }
    }

    /// The root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Add an ongoing child reached from `parent` by `action`.
    pub fn child(&mut self, parent: NodeId, action: &str, score: Score) -> NodeId {
        self.allocate(parent, action, score, Outcome::Ongoing)
    }

    /// Add a terminal child reached from `parent` by `action`.
    pub fn terminal(
        &mut self,
        parent: NodeId,
        action: &str,
        score: Score,
        outcome: Outcome,
    ) -> NodeId {
        self.allocate(parent, action, score, outcome)
    }

    /// Add one ongoing child per score, labelled `action_prefix0`, `action_prefix1`, ...
    pub fn leaves(&mut self, parent: NodeId, action_prefix: &str, scores: &[Score]) -> Vec<NodeId> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| self.child(parent, &format!("{action_prefix}{i}"), score))
            .collect()
    }

    /// Overwrite the score of an existing node.
    pub fn set_score(&mut self, node: NodeId, score: Score) -> &mut Self {
        self.nodes[node.0 as usize].score = score;
        self
    }

    /// Overwrite the outcome of an existing node.
    pub fn set_outcome(&mut self, node: NodeId, outcome: Outcome) -> &mut Self {
        self.nodes[node.0 as usize].outcome = outcome;
        self
    }

    pub fn build(self) -> GameTree {
        GameTree {
            nodes: self.nodes,
            num_agents: self.num_agents,
        }
    }

    fn allocate(&mut self, parent: NodeId, action: &str, score: Score, outcome: Outcome) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let ply = self.nodes[parent.0 as usize].ply + 1;
        self.nodes.push(TreeNode {
            parent: Some(parent),
            score,
            outcome,
            children: Vec::new(),
            ply,
        });
        self.nodes[parent.0 as usize]
            .children
            .push((action.to_string(), id));
        id
    }
}

/// Shape parameters for [`GameTree::random`].
#[derive(Debug, Clone)]
pub struct RandomTreeSpec {
    pub num_agents: usize,
    /// Moves from the root to the deepest leaves
    pub plies: u32,
    pub min_branching: usize,
    pub max_branching: usize,
    /// Chance that a generated child is a win or loss
    pub terminal_probability: f64,
    /// Scores are integers in `min_score..=max_score` so ties are common
    pub min_score: i32,
    pub max_score: i32,
}

impl Default for RandomTreeSpec {
    fn default() -> Self {
        Self {
            num_agents: 2,
            plies: 4,
            min_branching: 1,
            max_branching: 4,
            terminal_probability: 0.1,
            min_score: -10,
            max_score: 10,
        }
    }
}

impl RandomTreeSpec {
    pub fn with_agents(mut self, num_agents: usize) -> Self {
        self.num_agents = num_agents;
        self
    }

    pub fn with_plies(mut self, plies: u32) -> Self {
        self.plies = plies;
        self
    }

    pub fn with_branching(mut self, min: usize, max: usize) -> Self {
        self.min_branching = min;
        self.max_branching = max;
        self
    }

    pub fn with_terminal_probability(mut self, p: f64) -> Self {
        self.terminal_probability = p;
        self
    }
}

/// A position in a [`GameTree`].
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Arc<GameTree>,
    node: NodeId,
    to_move: AgentIndex,
}

impl TreeState {
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn node(&self) -> &TreeNode {
        self.tree.get(self.node)
    }

    /// Agent whose turn it is.
    pub fn to_move(&self) -> AgentIndex {
        self.to_move
    }

    pub fn tree(&self) -> &Arc<GameTree> {
        &self.tree
    }
}

impl AdversarialState for TreeState {
    type Action = String;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<String> {
        if self.is_terminal() || agent != self.to_move {
            return Vec::new();
        }
        self.node()
            .children
            .iter()
            .map(|(action, _)| action.clone())
            .collect()
    }

    fn generate_successor(
        &self,
        agent: AgentIndex,
        action: &String,
    ) -> Result<Self, TransitionError> {
        let num_agents = self.tree.num_agents();
        if agent >= num_agents {
            return Err(TransitionError::UnknownAgent { agent, num_agents });
        }
        if self.is_terminal() {
            return Err(TransitionError::TerminalState);
        }
        if agent != self.to_move {
            return Err(TransitionError::OutOfTurn {
                agent,
                expected: self.to_move,
            });
        }

        let child = self
            .node()
            .children
            .iter()
            .find(|(label, _)| label == action)
            .map(|(_, id)| *id)
            .ok_or_else(|| TransitionError::IllegalAction {
                agent,
                action: action.clone(),
            })?;

        Ok(TreeState {
            tree: Arc::clone(&self.tree),
            node: child,
            to_move: (agent + 1) % num_agents,
        })
    }

    fn num_agents(&self) -> usize {
        self.tree.num_agents()
    }

    fn is_win(&self) -> bool {
        self.node().outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.node().outcome == Outcome::Lose
    }

    fn score(&self) -> Score {
        self.node().score
    }
}
