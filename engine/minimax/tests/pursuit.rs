//! Searches playing the grid pursuit game.

use std::sync::Arc;

use engine_core::AdversarialState;
use games_pursuit::{Direction, Layout, PursuitState, FOOD_REWARD, WIN_BONUS};
use minimax::{
    Agent, Algorithm, Evaluator, EvaluatorRegistry, ReflexAgent, SearchAgent, SearchConfig, DISQUALIFIED,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn start(layout: &str) -> PursuitState {
    PursuitState::new(Arc::new(Layout::named(layout).unwrap()))
}

fn parsed(text: &str) -> PursuitState {
    PursuitState::new(Arc::new(Layout::parse(text).unwrap()))
}

fn agent(algorithm: Algorithm, depth: u32, evaluator: &str) -> SearchAgent<PursuitState> {
    let registry = EvaluatorRegistry::with_grid_defaults();
    let config = SearchConfig::default()
        .with_algorithm(algorithm)
        .with_depth(depth)
        .with_evaluator(evaluator);
    SearchAgent::from_config(&config, &registry).unwrap()
}

#[test]
fn test_finds_win_two_rounds_ahead() {
    let state = start("tiny");
    let result = agent(Algorithm::AlphaBeta, 2, "score").decide(&state).unwrap();

    assert_eq!(result.action, Direction::East);
    assert_eq!(result.value, (-2 + FOOD_REWARD + WIN_BONUS) as f64);
}

#[test]
fn test_avoids_stepping_into_reach() {
    // Moving East lets the chaser step onto the forager
    let state = parsed("%%%%%%\n%P G.%\n%%%%%%");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = agent(algorithm, 1, "score").decide(&state).unwrap();
        assert_eq!(result.action, Direction::Stop);
        assert_eq!(result.value, -1.0);
    }
}

#[test]
fn test_algorithms_agree_on_named_layouts() {
    for name in Layout::names() {
        let state = start(name);
        for evaluator in ["score", "better"] {
            for depth in 1..=2 {
                let minimax = agent(Algorithm::Minimax, depth, evaluator).decide(&state).unwrap();
                let alphabeta = agent(Algorithm::AlphaBeta, depth, evaluator).decide(&state).unwrap();

                assert_eq!(minimax.value, alphabeta.value, "{name}/{evaluator}/{depth}");
                assert_eq!(minimax.action, alphabeta.action, "{name}/{evaluator}/{depth}");
                assert!(alphabeta.stats.nodes <= minimax.stats.nodes);
            }
        }
    }
}

#[test]
fn test_better_evaluator_flags_capture() {
    let state = parsed("%%%%%\n%PG.%\n%%%%%");
    let registry = EvaluatorRegistry::<PursuitState>::with_grid_defaults();
    let better = registry.resolve("better").unwrap();

    // Forager and chaser share a cell after moving East
    let caught = state.generate_successor(0, &Direction::East).unwrap();
    assert!(better.evaluate(&caught) < DISQUALIFIED / 2.0);
    assert!(better.evaluate(&state) > DISQUALIFIED / 2.0);
}

#[test]
fn test_reflex_agent_is_reproducible() {
    let play = |seed: u64| {
        let mut forager = ReflexAgent::with_seed(seed);
        let mut state = start("open");
        let mut actions = Vec::new();
        for _ in 0..10 {
            if state.is_terminal() {
                break;
            }
            let action = forager.get_action(&state).unwrap();
            actions.push(action);
            state = state.generate_successor(0, &action).unwrap();
        }
        actions
    };

    assert_eq!(play(9), play(9));
}

/// Play one game with random chasers and return the final state.
fn play_episode(forager: &mut dyn Agent<PursuitState>, layout: &str, seed: u64, max_moves: u32) -> PursuitState {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut state = start(layout);

    while !state.is_terminal() && state.moves() < max_moves {
        let action = forager.get_action(&state).unwrap();
        state = state.generate_successor(0, &action).unwrap();

        for chaser in 1..state.num_agents() {
            if state.is_terminal() {
                break;
            }
            let actions = state.legal_actions(chaser);
            let action = *actions.choose(&mut rng).unwrap();
            state = state.generate_successor(chaser, &action).unwrap();
        }
    }
    state
}

#[test]
fn test_episode_is_deterministic_for_seed() {
    let mut first = agent(Algorithm::AlphaBeta, 2, "better");
    let mut second = agent(Algorithm::AlphaBeta, 2, "better");

    let a = play_episode(&mut first, "open", 17, 60);
    let b = play_episode(&mut second, "open", 17, 60);
    assert_eq!(a.points(), b.points());
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.outcome(), b.outcome());
}

#[test]
fn test_search_agent_clears_tiny_layout() {
    let mut forager = agent(Algorithm::AlphaBeta, 2, "score");
    let state = play_episode(&mut forager, "tiny", 0, 20);
    assert!(state.is_win());
}
