use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use tile_platformer::platform::{Autopilot, Controls, KeyBindings, RecordingSleeper, ScriptedInput};
use tile_platformer::renderer::FrameRecorder;
use tile_platformer::sim::ContactState;
use tile_platformer::{Game, Settings};

fn walk_right() -> Controls {
    Controls {
        right: true,
        ..Default::default()
    }
}

#[test]
fn walks_to_right_edge_and_stops_there() {
    let mut game = Game::new(&Settings::default()).unwrap();
    // Settle on the floor first, then hold right well past the edge
    let mut input = ScriptedInput::default()
        .hold(Controls::default(), 40)
        .hold(walk_right(), 200);
    let mut sink = FrameRecorder::default();
    let mut sleeper = RecordingSleeper::default();

    let summary = game.run(&mut input, &mut sink, &mut sleeper).unwrap();

    assert_eq!(summary.ticks, 240);
    assert_eq!(summary.respawns, 0);
    assert_eq!(summary.final_player.pos, Vec2::new(780.0, 540.0));
    assert!(summary.final_player.grounded);

    assert_eq!(sink.frames.len(), 240);
    let last = sink.frames.last().unwrap().player_rect().unwrap();
    assert_eq!((last.x, last.y), (780, 540));

    assert_eq!(sleeper.total, Duration::from_millis(16 * 240));
}

#[test]
fn walking_off_a_ledge_respawns() {
    let json = r#"{ "level": [[0, 560], [40, 560], [80, 560], [120, 560]] }"#;
    let settings = Settings::from_json(json, Path::new("ledge.json")).unwrap();
    let mut game = Game::new(&settings).unwrap();

    let mut input = ScriptedInput::default()
        .hold(Controls::default(), 40)
        .hold(walk_right(), 60);
    let mut sink = FrameRecorder::default();
    let mut sleeper = RecordingSleeper::default();

    let summary = game.run(&mut input, &mut sink, &mut sleeper).unwrap();
    assert!(summary.respawns >= 1);
    assert!(summary.final_player.pos.y <= settings.window_height);
}

#[test]
fn autopilot_run_stays_in_the_world() {
    let settings = Settings::default();
    let mut game = Game::new(&settings).unwrap();
    let mut input = Autopilot::new(42, 600, KeyBindings::classic());
    let mut sink = FrameRecorder::default();
    let mut sleeper = RecordingSleeper::default();

    let summary = game.run(&mut input, &mut sink, &mut sleeper).unwrap();
    assert_eq!(summary.ticks, 600);
    assert_eq!(summary.respawns, 0);

    for frame in &sink.frames {
        let p = frame.player_rect().unwrap();
        assert!((0..=780).contains(&p.x));
        assert!(p.y <= 540);
    }

    // Once settled, a player standing still on the floor stays grounded
    let mut input = ScriptedInput::default().hold(Controls::default(), 120);
    game.run(&mut input, &mut sink, &mut sleeper).unwrap();
    assert_eq!(game.contact_state(), ContactState::Grounded);
}
