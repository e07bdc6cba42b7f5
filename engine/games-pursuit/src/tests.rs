use super::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn tiny() -> PursuitState {
    PursuitState::new(Arc::new(Layout::named("tiny").unwrap()))
}

fn play(state: &PursuitState, moves: &[(AgentIndex, Direction)]) -> PursuitState {
    moves.iter().fold(state.clone(), |s, (agent, direction)| {
        s.generate_successor(*agent, direction).unwrap()
    })
}

#[test]
fn test_parse_tiny() {
    let layout = Layout::named("tiny").unwrap();
    assert_eq!(layout.width(), 7);
    assert_eq!(layout.height(), 3);
    assert_eq!(layout.forager_start(), Position::new(1, 1));
    assert_eq!(layout.chaser_starts(), &[Position::new(5, 1)]);
    assert_eq!(layout.food(), &[Position::new(3, 1)]);
    assert!(layout.is_wall(Position::new(0, 0)));
    assert!(!layout.is_wall(Position::new(2, 1)));
    // Off the grid counts as wall
    assert!(layout.is_wall(Position::new(-1, 1)));
    assert!(layout.is_wall(Position::new(7, 1)));
}

#[test]
fn test_all_named_layouts_parse() {
    for name in Layout::names() {
        let layout = Layout::named(name).unwrap();
        assert!(!layout.food().is_empty(), "{name} has no food");
        assert!(!layout.chaser_starts().is_empty(), "{name} has no chasers");
    }
}

#[test]
fn test_chasers_in_reading_order() {
    let layout = Layout::named("trapped").unwrap();
    assert_eq!(layout.chaser_starts(), &[Position::new(6, 1), Position::new(1, 2)]);
}

#[test]
fn test_layout_display_round_trips() {
    let (_, text) = LAYOUTS[1];
    let layout = Layout::parse(text).unwrap();
    assert_eq!(layout.to_string(), text);
    assert_eq!(layout.to_string().parse::<Layout>().unwrap(), layout);
}

#[test]
fn test_layout_errors() {
    assert_eq!(Layout::parse(""), Err(LayoutError::Empty));
    assert_eq!(
        Layout::parse("%%%\n%P%%\n%%%"),
        Err(LayoutError::Ragged {
            row: 1,
            width: 4,
            expected: 3
        })
    );
    assert_eq!(
        Layout::parse("%%%\n%P?\n%%%"),
        Err(LayoutError::UnknownCell {
            ch: '?',
            position: Position::new(2, 1)
        })
    );
    assert_eq!(
        Layout::parse("%%%\n%.%\n%%%"),
        Err(LayoutError::ForagerCount { found: 0 })
    );
    assert_eq!(
        Layout::parse("%%%%\n%PP%\n%%%%"),
        Err(LayoutError::ForagerCount { found: 2 })
    );
    assert!(matches!(
        Layout::named("mediumClassic"),
        Err(LayoutError::UnknownName { .. })
    ));
}

#[test]
fn test_initial_state() {
    let state = tiny();
    assert_eq!(state.num_agents(), 2);
    assert_eq!(state.score(), 0.0);
    assert_eq!(state.food_remaining(), 1);
    assert_eq!(state.outcome(), Outcome::Ongoing);
    assert!(!state.is_terminal());
}

#[test]
fn test_legal_actions() {
    let state = tiny();
    assert_eq!(state.legal_actions(0), vec![Direction::East, Direction::Stop]);
    // Chasers cannot stand still while they have somewhere to go
    assert_eq!(state.legal_actions(1), vec![Direction::West]);
    assert!(state.legal_actions(2).is_empty());
}

#[test]
fn test_boxed_in_chaser_may_stop() {
    let layout = Layout::parse("%%%%%%\n%P.%G%\n%%%%%%").unwrap();
    let state = PursuitState::new(Arc::new(layout));
    assert_eq!(state.legal_actions(1), vec![Direction::Stop]);
}

#[test]
fn test_legal_action_order_is_stable() {
    let layout = Layout::named("open").unwrap();
    let state = PursuitState::new(Arc::new(layout));
    assert_eq!(
        state.legal_actions(0),
        vec![Direction::South, Direction::East, Direction::Stop]
    );
    let state = play(&state, &[(0, Direction::East), (1, Direction::North)]);
    assert_eq!(
        state.legal_actions(0),
        vec![Direction::East, Direction::West, Direction::Stop]
    );
}

#[test]
fn test_scoring_and_win() {
    let state = play(
        &tiny(),
        &[(0, Direction::East), (1, Direction::West), (0, Direction::East)],
    );
    assert_eq!(state.points(), -2 + FOOD_REWARD + WIN_BONUS);
    assert!(state.is_win());
    assert!(state.legal_actions(0).is_empty());
    assert!(state.legal_actions(1).is_empty());
    assert_eq!(state.moves(), 2);
}

#[test]
fn test_chaser_catches_forager() {
    let state = play(
        &tiny(),
        &[
            (0, Direction::East),
            (1, Direction::West),
            (0, Direction::Stop),
            (1, Direction::West),
            (0, Direction::Stop),
            (1, Direction::West),
        ],
    );
    assert!(state.is_lose());
    assert_eq!(state.points(), -3 - CATCH_PENALTY);
    assert_eq!(
        state.generate_successor(0, &Direction::Stop),
        Err(TransitionError::TerminalState)
    );
}

#[test]
fn test_forager_walking_into_chaser_loses() {
    let layout = Layout::parse("%%%%%\n%PG.%\n%%%%%").unwrap();
    let state = PursuitState::new(Arc::new(layout));
    let next = state.generate_successor(0, &Direction::East).unwrap();
    assert!(next.is_lose());
    assert_eq!(next.points(), -TIME_PENALTY - CATCH_PENALTY);
}

#[test]
fn test_eating_last_food_beats_catch() {
    // The chaser waits on the food cell; eating it still wins
    let state = play(
        &tiny(),
        &[
            (0, Direction::East),
            (1, Direction::West),
            (0, Direction::Stop),
            (1, Direction::West),
        ],
    );
    assert_eq!(state.chasers(), &[Position::new(3, 1)]);
    let state = state.generate_successor(0, &Direction::East).unwrap();
    assert!(state.is_win());
    assert!(!state.is_lose());
}

#[test]
fn test_transition_errors() {
    let state = tiny();
    assert_eq!(
        state.generate_successor(0, &Direction::North),
        Err(TransitionError::IllegalAction {
            agent: 0,
            action: "North".to_string()
        })
    );
    assert_eq!(
        state.generate_successor(5, &Direction::Stop),
        Err(TransitionError::UnknownAgent {
            agent: 5,
            num_agents: 2
        })
    );
}

#[test]
fn test_successor_does_not_mutate_source() {
    let state = tiny();
    let before = state.clone();
    let _ = state.generate_successor(0, &Direction::East).unwrap();
    assert_eq!(state, before);
}

#[test]
fn test_grid_features() {
    let state = tiny();
    assert_eq!(state.agent_position(), Position::new(1, 1));
    assert_eq!(state.food_positions(), vec![Position::new(3, 1)]);
    assert_eq!(state.adversary_positions(), vec![Position::new(5, 1)]);
}

#[test]
fn test_display() {
    let state = tiny();
    assert_eq!(state.to_string(), "%%%%%%%\n%P . G%\n%%%%%%%\nScore: 0");
}

#[test]
fn test_random_playouts_keep_invariants() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let layout = Arc::new(Layout::named("duel").unwrap());
        let mut state = PursuitState::new(Arc::clone(&layout));
        let mut agent = 0;

        for _ in 0..400 {
            if state.is_terminal() {
                break;
            }
            let actions = state.legal_actions(agent);
            let action = *actions.choose(&mut rng).unwrap();
            let next = state.generate_successor(agent, &action).unwrap();

            assert!(!layout.is_wall(next.forager()));
            assert!(next.chasers().iter().all(|&c| !layout.is_wall(c)));
            assert!(next.food_remaining() <= state.food_remaining());
            if agent != 0 {
                assert!(next.score() <= state.score());
            }

            state = next;
            agent = (agent + 1) % state.num_agents();
        }

        if state.is_terminal() {
            assert!(state.legal_actions(0).is_empty());
        }
    }
}
