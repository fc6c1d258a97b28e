//! Academic Adventure entry point
//!
//! Headless runner: plays the built-in levels with a scripted input and logs
//! what happens. Pass a settings JSON path as the first argument to override
//! the defaults. Set `RUST_LOG=debug` (or `trace`) for more detail.

use academic_adventure::consts::FPS;
use academic_adventure::sim::{FrameInput, Heading, LevelSession, SessionEvent, SessionPhase, tick};
use academic_adventure::{InputSource, ScriptedInput, Settings, draw_list};

/// Give up after this many frames
const MAX_FRAMES: u64 = 60 * FPS as u64;

fn demo_levels() -> Vec<Vec<&'static str>> {
    vec![
        vec![
            "XXXXXXXXXXXXXXXXXXXXXXXXX",
            "X                       X",
            "X                       X",
            "X P    N      C       F X",
            "XXXXXXXXXXXXXXXXXXXXXXXXX",
        ],
        vec![
            "XXXXXXXXXXXXXXXXXXXX",
            "X                  X",
            "X                  X",
            "X        C         X",
            "X P     XXX      F X",
            "XXXXXXXXXXXXXXXXXXXX",
        ],
    ]
}

/// Walk right for level one, then hop right through level two
fn demo_script() -> ScriptedInput {
    let walk = FrameInput {
        heading: Heading::Right,
        answer: Some(1),
        ..Default::default()
    };
    let hop = FrameInput {
        jump: true,
        ..walk
    };
    ScriptedInput::new().then(240, walk).then(MAX_FRAMES, hop)
}

fn main() {
    env_logger::init();
    log::info!("Academic Adventure (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut session = match LevelSession::from_rows(&demo_levels(), settings) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Cannot start: {err}");
            std::process::exit(1);
        }
    };

    let mut input = demo_script();
    while session.phase != SessionPhase::GameOver && session.frame < MAX_FRAMES {
        let frame_input = input.next_input(session.frame);
        tick(&mut session, &frame_input);

        for event in session.drain_events() {
            match event {
                SessionEvent::Jumped => log::trace!("frame {}: jump", session.frame),
                other => log::info!("frame {}: {:?}", session.frame, other),
            }
        }

        if session.frame % FPS as u64 == 0 {
            log::debug!(
                "frame {}: player at ({:.1}, {:.1}), {} draw calls",
                session.frame,
                session.player.rect.x,
                session.player.rect.y,
                draw_list(&session).len()
            );
        }
    }

    let stats = session.stats;
    println!(
        "\n{} after {} frames: {}/{} levels, {} items, {} correct / {} wrong answers",
        if session.phase == SessionPhase::GameOver {
            "Finished"
        } else {
            "Stopped"
        },
        session.frame,
        stats.levels_completed,
        session.level_count(),
        stats.collected,
        stats.correct_answers,
        stats.wrong_answers
    );
}
