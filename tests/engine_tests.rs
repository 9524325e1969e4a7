//! Engine tests - tick, move, rotate, line clears and the game-over lifecycle

use tick_tetris::core::{
    Board, ConfigError, Engine, EngineConfig, LockEvent, ScriptedRandomizer, TickOutcome,
};
use tick_tetris::types::{Direction, GameAction, PieceKind, Rotation};

fn engine_on(board: Board, kinds: &[PieceKind]) -> Engine {
    Engine::with_board(
        EngineConfig::default(),
        board,
        Box::new(ScriptedRandomizer::new(kinds.iter().copied())),
    )
    .unwrap()
}

fn empty_engine(kind: PieceKind) -> Engine {
    engine_on(Board::new(10, 20), &[kind])
}

/// `rows` text rows: `top` empty rows followed by `fill` repeated
fn fixture(rows: usize, top: usize, fill: &str) -> Board {
    let mut lines = vec![".........."; top];
    lines.extend(std::iter::repeat(fill).take(rows - top));
    Board::from_rows(&lines).unwrap()
}

fn no_full_rows(engine: &Engine) -> bool {
    (0..engine.board().height() as usize).all(|y| !engine.board().is_row_full(y))
}

// ============== Tick ==============

#[test]
fn o_piece_falls_and_locks_on_the_floor() {
    let mut engine = empty_engine(PieceKind::O);
    assert_eq!((engine.active().x, engine.active().y), (4, 0));

    for _ in 0..20 {
        engine.tick();
    }

    let board = engine.board();
    assert!(board.is_occupied(4, 18));
    assert!(board.is_occupied(5, 18));
    assert!(board.is_occupied(4, 19));
    assert!(board.is_occupied(5, 19));
    assert_eq!(board.occupied_count(), 4);
    assert!(!engine.game_over());
    assert_eq!(engine.score(), 0);

    // Tick 19 locked; tick 20 moved the new piece down once.
    assert_eq!((engine.active().x, engine.active().y), (4, 1));
    assert_eq!(engine.pieces_spawned(), 2);
}

#[test]
fn tick_reports_fell_then_locked() {
    let mut engine = empty_engine(PieceKind::I);
    for _ in 0..19 {
        assert_eq!(engine.tick(), TickOutcome::Fell);
    }
    assert_eq!(
        engine.tick(),
        TickOutcome::Locked(LockEvent {
            lines_cleared: 0,
            game_over: false
        })
    );
}

#[test]
fn completing_the_bottom_row_scores_one_and_empties_it() {
    let mut board = fixture(20, 19, "..........");
    for x in 4..10 {
        board.set(x, 19, true);
    }
    let mut engine = engine_on(board, &[PieceKind::I]);

    while engine.try_move(Direction::Left) {}
    assert_eq!(engine.active().x, 0);

    let outcome = loop {
        match engine.tick() {
            TickOutcome::Fell => continue,
            other => break other,
        }
    };

    assert_eq!(
        outcome,
        TickOutcome::Locked(LockEvent {
            lines_cleared: 1,
            game_over: false
        })
    );
    assert_eq!(engine.score(), 1);
    assert!(engine.board().row(19).iter().all(|&c| !c));
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn clearing_two_rows_keeps_the_rest_of_the_stack() {
    // Two bottom rows missing only columns 4 and 5; an O fills both gaps.
    let mut rows = vec![".........."; 17];
    rows.push("#.........");
    rows.push("####..####");
    rows.push("####..####");
    let mut engine = engine_on(Board::from_rows(&rows).unwrap(), &[PieceKind::O]);

    let mut locked = None;
    for _ in 0..20 {
        if let TickOutcome::Locked(event) = engine.tick() {
            locked = Some(event);
            break;
        }
    }

    assert_eq!(locked.map(|e| e.lines_cleared), Some(2));
    assert_eq!(engine.score(), 2);
    assert!(engine.board().is_occupied(0, 19));
    assert_eq!(engine.board().occupied_count(), 1);
}

// ============== Move ==============

#[test]
fn moves_against_walls_are_rejected() {
    let mut engine = empty_engine(PieceKind::T);

    while engine.try_move(Direction::Left) {}
    assert_eq!(engine.active().x, 0);
    assert!(!engine.try_move(Direction::Left));
    assert_eq!(engine.active().x, 0);

    while engine.try_move(Direction::Right) {}
    assert_eq!(engine.active().x, 7);
    assert!(!engine.try_move(Direction::Right));
    assert_eq!(engine.active().x, 7);
}

#[test]
fn down_move_into_the_floor_is_rejected_without_locking() {
    let mut engine = empty_engine(PieceKind::T);
    while engine.try_move(Direction::Down) {}
    assert_eq!(engine.active().y, 18);
    assert!(!engine.try_move(Direction::Down));
    assert_eq!(engine.active().y, 18);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.pieces_spawned(), 1);
}

#[test]
fn moves_into_occupied_cells_are_rejected() {
    let mut board = Board::new(10, 20);
    board.set(3, 0, true);
    board.set(6, 0, true);
    board.set(4, 2, true);
    let mut engine = engine_on(board, &[PieceKind::O]);

    assert!(!engine.try_move(Direction::Left));
    assert!(!engine.try_move(Direction::Right));
    assert!(!engine.try_move(Direction::Down));
    assert_eq!((engine.active().x, engine.active().y), (4, 0));
}

// ============== Rotate ==============

#[test]
fn four_rotations_in_open_space_restore_the_piece() {
    let mut engine = empty_engine(PieceKind::L);
    engine.try_move(Direction::Down);
    let before = *engine.active();

    for _ in 0..4 {
        assert!(engine.rotate());
    }

    assert_eq!(*engine.active(), before);
    assert_eq!(engine.active().rotation, Rotation::North);
}

#[test]
fn rotation_that_would_leave_the_board_is_discarded() {
    let mut engine = empty_engine(PieceKind::I);
    assert!(engine.rotate());
    while engine.try_move(Direction::Right) {}
    assert_eq!(engine.active().x, 9);

    let before = *engine.active();
    assert!(!engine.rotate());
    assert_eq!(*engine.active(), before);
    assert_eq!(engine.active().shape.width(), 1);
}

#[test]
fn rotation_into_the_stack_is_discarded() {
    let mut board = Board::new(10, 20);
    // Blocks the cell the vertical I would need below its origin.
    board.set(3, 3, true);
    let mut engine = engine_on(board, &[PieceKind::I]);

    let before = *engine.active();
    assert!(!engine.rotate());
    assert_eq!(*engine.active(), before);
}

// ============== Game over ==============

fn blocked_spawn_engine() -> Engine {
    // A tower under the spawn columns; column 0 stays open so no row is full.
    let board = fixture(20, 2, "....##....");
    engine_on(board, &[PieceKind::O])
}

#[test]
fn blocked_spawn_ends_the_game() {
    let mut engine = blocked_spawn_engine();
    assert!(!engine.game_over());

    assert_eq!(
        engine.tick(),
        TickOutcome::Locked(LockEvent {
            lines_cleared: 0,
            game_over: true
        })
    );
    assert!(engine.game_over());
}

#[test]
fn game_over_makes_every_command_a_noop() {
    let mut engine = blocked_spawn_engine();
    engine.tick();
    assert!(engine.game_over());
    let frozen = engine.snapshot();

    assert_eq!(engine.tick(), TickOutcome::Ignored);
    assert!(!engine.try_move(Direction::Left));
    assert!(!engine.try_move(Direction::Right));
    assert!(!engine.try_move(Direction::Down));
    assert!(!engine.rotate());
    assert!(!engine.apply_action(GameAction::SoftDrop));

    assert_eq!(engine.snapshot(), frozen);
}

#[test]
fn starting_on_a_blocked_board_is_game_over() {
    let mut board = Board::new(10, 20);
    board.set(4, 0, true);
    let engine = engine_on(board, &[PieceKind::O]);
    assert!(engine.game_over());
}

#[test]
fn restart_reproduces_initial_invariants() {
    let mut engine = blocked_spawn_engine();
    engine.tick();
    assert!(engine.game_over());

    engine.restart();

    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.score(), 0);
    assert!(!engine.game_over());
    assert_eq!((engine.active().x, engine.active().y), (4, 0));
    assert_eq!(engine.active().rotation, Rotation::North);
    assert_eq!(engine.pieces_spawned(), 1);
    assert_eq!(engine.last_event(), None);
    assert_eq!(engine.tick(), TickOutcome::Fell);
}

#[test]
fn restart_action_works_while_game_over() {
    let mut engine = blocked_spawn_engine();
    engine.tick();
    assert!(engine.apply_action(GameAction::Restart));
    assert!(!engine.game_over());
}

// ============== Properties ==============

#[test]
fn no_full_row_survives_a_tick_and_the_piece_never_overlaps() {
    let mut engine = Engine::seeded(EngineConfig::default(), 2024).unwrap();
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
    ];

    for i in 0..5000usize {
        engine.apply_action(script[i % script.len()]);
        if i % 3 == 0 {
            engine.apply_action(script[(i / 3) % script.len()]);
        }
        engine.tick();

        assert!(no_full_rows(&engine), "full row after tick {}", i);
        if !engine.game_over() {
            assert!(!engine.board().collides(engine.active()));
        } else {
            engine.restart();
        }
    }
}

#[test]
fn same_seed_same_game() {
    let run = |seed| {
        let mut engine = Engine::seeded(EngineConfig::default(), seed).unwrap();
        for i in 0..400 {
            if i % 2 == 0 {
                engine.try_move(Direction::Left);
            }
            engine.tick();
        }
        engine.snapshot()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn custom_dimensions_are_respected() {
    let mut engine = Engine::seeded(EngineConfig::new(6, 15, 1300), 3).unwrap();
    let snap = engine.snapshot();
    assert_eq!((snap.cols, snap.rows), (6, 15));
    assert_eq!(snap.board.len(), 15);
    assert!(snap.board.iter().all(|row| row.len() == 6));

    while engine.try_move(Direction::Right) {}
    let right_edge = engine.active().cells().iter().map(|&(x, _)| x).max();
    assert_eq!(right_edge, Some(5));
}

#[test]
fn invalid_config_fails_fast() {
    assert_eq!(
        Engine::seeded(EngineConfig::new(10, 0, 1300), 1).unwrap_err(),
        ConfigError::TooShort { rows: 0, min: 4 }
    );
    assert_eq!(
        Engine::seeded(EngineConfig::new(10, 20, 0), 1).unwrap_err(),
        ConfigError::ZeroTickInterval
    );
    let tiny = Board::from_rows(&["...", "...", "..."]).unwrap();
    let err = Engine::with_board(
        EngineConfig::default(),
        tiny,
        Box::new(ScriptedRandomizer::repeat(PieceKind::O)),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::TooNarrow { cols: 3, min: 4 });
}

#[test]
fn snapshot_serializes_to_json() {
    let engine = empty_engine(PieceKind::O);
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["active"]["kind"], "o");
    assert_eq!(json["active"]["rotation"], "north");
    assert_eq!(json["board"].as_array().unwrap().len(), 20);
}
