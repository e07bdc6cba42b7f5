//! Episode runner
//!
//! The configured agent controls the forager; chasers pick uniformly among
//! their legal moves from a seeded RNG, one seed per episode.

use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use engine_core::{AdversarialState, Outcome};
use games_pursuit::{Layout, PursuitState};
use minimax::{Agent, EvaluatorRegistry, ReflexAgent, SearchAgent};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::{AgentKind, PlaySettings};

/// Result of one episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub index: u32,
    pub outcome: Outcome,
    pub score: i64,
    pub moves: u32,
    /// Final position, rendered
    pub board: String,
}

impl EpisodeSummary {
    fn outcome_label(&self) -> &'static str {
        match self.outcome {
            Outcome::Win => "win",
            Outcome::Lose => "loss",
            Outcome::Ongoing => "timeout",
        }
    }
}

impl fmt::Display for EpisodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game {:>3}: {:<7} score {:>6} in {} moves",
            self.index + 1,
            self.outcome_label(),
            self.score,
            self.moves
        )
    }
}

/// Aggregate results of a session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub episodes: Vec<EpisodeSummary>,
}

impl Session {
    pub fn wins(&self) -> usize {
        self.episodes.iter().filter(|e| e.outcome == Outcome::Win).count()
    }

    pub fn win_rate(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.wins() as f64 / self.episodes.len() as f64
    }

    pub fn average_score(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(|e| e.score as f64).sum::<f64>() / self.episodes.len() as f64
    }
}

/// Build the forager agent described by `settings`.
pub fn build_agent(settings: &PlaySettings) -> Result<Box<dyn Agent<PursuitState>>> {
    match settings.agent {
        AgentKind::Reflex => Ok(Box::new(ReflexAgent::with_seed(settings.reflex_seed))),
        AgentKind::Minimax | AgentKind::Alphabeta => {
            let registry = EvaluatorRegistry::<PursuitState>::with_grid_defaults();
            let agent = SearchAgent::from_config(&settings.search, &registry)?;
            Ok(Box::new(agent))
        }
    }
}

/// Play a single episode from the start of `layout`.
pub fn run_episode(
    forager: &mut dyn Agent<PursuitState>,
    layout: Arc<Layout>,
    rng: &mut ChaCha20Rng,
    max_moves: u32,
) -> Result<PursuitState> {
    let mut state = PursuitState::new(layout);

    while !state.is_terminal() && state.moves() < max_moves {
        let action = forager.get_action(&state)?;
        debug!(moves = state.moves(), action = %action, "Forager moved");
        state = state.generate_successor(0, &action)?;

        for chaser in 1..state.num_agents() {
            if state.is_terminal() {
                break;
            }
            let action = *state
                .legal_actions(chaser)
                .choose(rng)
                .ok_or_else(|| anyhow!("chaser {chaser} has no legal moves"))?;
            state = state.generate_successor(chaser, &action)?;
        }
    }

    Ok(state)
}

/// Play every episode of a session.
pub fn run_session(settings: &PlaySettings) -> Result<Session> {
    let layout = Arc::new(Layout::named(&settings.layout)?);
    let mut forager = build_agent(settings)?;
    let mut session = Session::default();

    for index in 0..settings.games {
        let mut rng = ChaCha20Rng::seed_from_u64(settings.seed.wrapping_add(index as u64));
        let state = run_episode(&mut *forager, Arc::clone(&layout), &mut rng, settings.max_moves)?;

        let summary = EpisodeSummary {
            index,
            outcome: state.outcome(),
            score: state.points(),
            moves: state.moves(),
            board: state.to_string(),
        };
        info!(
            game = index + 1,
            outcome = summary.outcome_label(),
            score = summary.score,
            moves = summary.moves,
            "Episode finished"
        );
        session.episodes.push(summary);
    }

    Ok(session)
}
