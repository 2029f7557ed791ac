//! End-to-end runs through the public API

use antigravity::SimConfig;
use antigravity::consts::*;
use antigravity::platform::{Move, PlayerBodies, Script};
use antigravity::sim::{GameEvent, LoseCause, Simulation, TickInput};
use glam::DVec2;

#[test]
fn single_source_pushes_target_straight_down() {
    let source = DVec2::new(450.0, 400.0);
    for delta in [0.5, 1.0, 5.0, 20.0] {
        let config = SimConfig {
            players: 1,
            spawn: DVec2::new(450.0, 400.0 + delta),
            ..Default::default()
        };
        let mut sim = Simulation::new(config).unwrap();

        let mut last_y = sim.state().target.pos.y;
        let mut event = GameEvent::Continue;
        for _ in 0..10_000 {
            event = sim.tick(&[source]).unwrap();
            let pos = sim.state().target.pos;
            assert!(pos.y > last_y, "delta {delta}: y went from {last_y} to {}", pos.y);
            assert!((pos.x - 450.0).abs() < 1e-6, "delta {delta}: drifted to x = {}", pos.x);
            last_y = pos.y;
            if event.is_terminal() {
                break;
            }
        }

        // x = 450 is right of the goal, so the bottom wall ends it
        assert!(
            matches!(
                event,
                GameEvent::Lost {
                    cause: LoseCause::OutOfBounds,
                    ..
                }
            ),
            "delta {delta}: {event:?}"
        );
        assert!(sim.state().target.pos.y > 480.0);
    }
}

#[test]
fn source_above_goal_pushes_target_in() {
    let config = SimConfig {
        players: 1,
        spawn: DVec2::new(130.0, 400.0),
        ..Default::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    let source = DVec2::new(130.0, 390.0);

    let event = sim.run(|_| TickInput::new(&[source]), 1_000).unwrap();
    assert!(matches!(event, GameEvent::Won { .. }), "{event:?}");
    assert!(sim.state().elapsed_secs(FRAME_HZ) > 0.0);
}

#[test]
fn middle_wall_stops_target_outside_gap() {
    // Pushed left along y = 400, well below the passage
    let config = SimConfig {
        players: 1,
        spawn: DVec2::new(340.0, 400.0),
        ..Default::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    let source = DVec2::new(350.0, 400.0);

    let event = sim.run(|_| TickInput::new(&[source]), 1_000).unwrap();
    assert!(
        matches!(
            event,
            GameEvent::Lost {
                cause: LoseCause::Obstacle { index: 0 },
                ..
            }
        ),
        "{event:?}"
    );
}

#[test]
fn scripted_players_drive_the_run() {
    // Player one walks up under the target and shoves it into the ceiling;
    // player two is inactive and its moves change nothing.
    let config = SimConfig {
        players: 1,
        player_starts: [
            DVec2::new(450.0, 470.0),
            DVec2::new(440.0, 400.0),
            DVec2::ZERO,
            DVec2::ZERO,
        ],
        ..Default::default()
    };
    let mut script = Script::default().hold([Move::UP, Move::RIGHT, Move::NONE, Move::NONE], 10);
    let mut players = PlayerBodies::new(config.player_starts, config.player_speed);
    let mut sim = Simulation::new(config).unwrap();

    let event = sim
        .run(
            |_| {
                players.apply(&script.next_moves());
                players.tick_input()
            },
            5_000,
        )
        .unwrap();

    assert!(
        matches!(
            event,
            GameEvent::Lost {
                cause: LoseCause::OutOfBounds,
                ..
            }
        ),
        "{event:?}"
    );
    assert!(sim.state().target.pos.y < 20.0);
    assert_eq!(players.positions()[0], DVec2::new(450.0, 420.0));
}

#[test]
fn invalid_player_count_never_ticks() {
    let config = SimConfig {
        players: MAX_SOURCES + 1,
        ..Default::default()
    };
    assert!(Simulation::new(config).is_err());
}
