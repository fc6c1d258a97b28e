//! Per-frame session update
//!
//! Active frames always run in the same order: world shift from last frame's
//! scroll decision, input, horizontal resolve, vertical resolve (with
//! gravity), scroll decision, pickups and NPCs, completion check. Resolving
//! vertical before horizontal changes how corners collide.

use serde::{Deserialize, Serialize};

use super::body::Heading;
use super::collision::{resolve_horizontal, resolve_vertical};
use super::state::{LevelSession, SessionEvent, SessionPhase};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub heading: Heading,
    /// Jump (ignored unless standing on something)
    pub jump: bool,
    /// Answer choice while a question is open
    pub answer: Option<usize>,
    /// Restart after game over
    pub restart: bool,
}

/// Advance the session by one frame
pub fn tick(session: &mut LevelSession, input: &FrameInput) {
    session.frame += 1;

    match session.phase {
        SessionPhase::Active => step_active(session, input),
        SessionPhase::QuestionPrompt { npc } => answer_question(session, npc, input),
        SessionPhase::Completed => session.advance(),
        SessionPhase::Loading { level } => session.load_level(level),
        SessionPhase::GameOver => {
            if input.restart {
                session.restart();
            }
        }
    }
}

fn step_active(session: &mut LevelSession, input: &FrameInput) {
    let shift = session.scroll.world_shift;
    session.shift_world(shift);

    // Input
    session.player.set_horizontal_direction(input.heading);
    if input.jump && session.player.try_jump(session.settings.jump_speed) {
        session.push_event(SessionEvent::Jumped);
    }

    // Collisions, horizontal first
    let side_hits = resolve_horizontal(
        &mut session.player,
        &session.tiles,
        &mut session.scroll.current_x,
    );
    let floor_hits = resolve_vertical(
        &mut session.player,
        &session.tiles,
        session.settings.gravity,
    );
    if side_hits + floor_hits > 0 {
        log::trace!(
            "frame {}: {} side / {} floor contacts at ({}, {})",
            session.frame,
            side_hits,
            floor_hits,
            session.player.rect.x,
            session.player.rect.y
        );
    }

    session.camera.update(&mut session.player, &mut session.scroll);

    collect_items(session);

    if let Some(npc) = touched_npc(session) {
        // Only NPCs holding a question are returned
        let question = session.npcs[npc].question.unwrap_or_default();
        log::debug!("NPC {npc} asks question {question}");
        session.phase = SessionPhase::QuestionPrompt { npc };
        session.push_event(SessionEvent::QuestionAsked { npc, question });
        return;
    }

    if session.is_completed() {
        let level = session.level_index;
        log::info!("Level {level} completed at frame {}", session.frame);
        session.stats.levels_completed += 1;
        session.phase = SessionPhase::Completed;
        session.push_event(SessionEvent::LevelCompleted { level });
    }
}

fn collect_items(session: &mut LevelSession) {
    let player = session.player.rect;
    let mut picked = Vec::new();
    for (i, item) in session.collectibles.iter_mut().enumerate() {
        if !item.collected && item.rect.intersects(&player) {
            item.collected = true;
            picked.push(i);
        }
    }
    for item in picked {
        log::debug!("Collected item {item}");
        session.stats.collected += 1;
        session.push_event(SessionEvent::ItemCollected { item });
    }
}

/// First unanswered NPC with a question that overlaps the player
fn touched_npc(session: &LevelSession) -> Option<usize> {
    session.npcs.iter().position(|npc| {
        !npc.answered && npc.question.is_some() && npc.rect.intersects(&session.player.rect)
    })
}

fn answer_question(session: &mut LevelSession, npc: usize, input: &FrameInput) {
    let Some(answer) = input.answer else {
        return;
    };

    let question = session
        .npcs
        .get(npc)
        .and_then(|n| n.question)
        .and_then(|q| session.questions.get(q));
    let Some(question) = question else {
        log::warn!("NPC {npc} has no question, resuming play");
        session.phase = SessionPhase::Active;
        return;
    };

    if !question.has_answer(answer) {
        log::warn!(
            "Ignoring answer {answer}: question has {} choices",
            question.answers.len()
        );
        return;
    }

    let correct = question.is_correct(answer);
    if correct {
        session.stats.correct_answers += 1;
    } else {
        session.stats.wrong_answers += 1;
    }
    log::debug!("NPC {npc} answered (correct: {correct})");

    session.npcs[npc].answered = true;
    session.phase = SessionPhase::Active;
    session.push_event(SessionEvent::QuestionAnswered { npc, correct });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::trivia::{Question, QuestionBank};

    fn session(levels: &[&[&str]]) -> LevelSession {
        let levels: Vec<Vec<&str>> = levels.iter().map(|l| l.to_vec()).collect();
        LevelSession::from_rows(&levels, Settings::default()).unwrap()
    }

    fn hold(heading: Heading) -> FrameInput {
        FrameInput {
            heading,
            ..Default::default()
        }
    }

    fn count_events(session: &LevelSession, pred: impl Fn(&SessionEvent) -> bool) -> usize {
        session.events().iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_drop_lands_on_ground() {
        let mut s = session(&[&["XXX", "XPX", "XFX"]]);
        let idle = FrameInput::default();

        let mut frames = 0;
        while !s.player.on_ground {
            tick(&mut s, &idle);
            frames += 1;
            assert!(frames < 30, "player never landed");
        }

        assert_eq!(s.player.rect.bottom(), 128.0);
        assert_eq!(s.player.velocity.y, 0.0);
        assert!(s.player.on_ground);
        // Standing on the finish tile
        assert!(s.is_completed());
        assert_eq!(s.phase, SessionPhase::Completed);
    }

    #[test]
    fn test_completion_triggers_one_transition() {
        let mut s = session(&[&["XXX", "XPX", "XFX"], &["XXX", "XPX", "XXX"]]);
        let idle = FrameInput::default();

        for _ in 0..40 {
            tick(&mut s, &idle);
        }

        assert_eq!(
            count_events(&s, |e| matches!(e, SessionEvent::LevelCompleted { .. })),
            1
        );
        assert_eq!(s.level_index, 1);
        assert_eq!(s.phase, SessionPhase::Active);
        assert_eq!(s.stats.levels_completed, 1);
        // Second level has no finish: stays put
        assert!(!s.is_completed());
    }

    #[test]
    fn test_completed_then_loading_then_active() {
        let mut s = session(&[&["P"], &["P"]]);
        s.phase = SessionPhase::Completed;
        let idle = FrameInput::default();

        tick(&mut s, &idle);
        assert_eq!(s.phase, SessionPhase::Loading { level: 1 });
        tick(&mut s, &idle);
        assert_eq!(s.phase, SessionPhase::Active);
        assert_eq!(s.level_index, 1);
    }

    #[test]
    fn test_last_level_leads_to_game_over_and_restart() {
        let mut s = session(&[&["XXX", "XPX", "XFX"]]);
        let idle = FrameInput::default();
        for _ in 0..20 {
            tick(&mut s, &idle);
        }
        assert_eq!(s.phase, SessionPhase::GameOver);
        assert_eq!(count_events(&s, |e| *e == SessionEvent::GameOver), 1);

        // Terminal without restart
        tick(&mut s, &hold(Heading::Right));
        assert_eq!(s.phase, SessionPhase::GameOver);

        let restart = FrameInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut s, &restart);
        assert_eq!(s.phase, SessionPhase::Loading { level: 0 });
        assert_eq!(s.stats.levels_completed, 0);
        tick(&mut s, &idle);
        assert_eq!(s.phase, SessionPhase::Active);
        assert_eq!(s.player.rect.position(), glam::Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut s = session(&[&["     ", "  P  ", "XXXXX"]]);
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };

        // Airborne on the first frame: ignored
        tick(&mut s, &jump);
        assert_eq!(count_events(&s, |e| *e == SessionEvent::Jumped), 0);

        let idle = FrameInput::default();
        for _ in 0..20 {
            tick(&mut s, &idle);
        }
        assert!(s.player.on_ground);

        tick(&mut s, &jump);
        assert_eq!(count_events(&s, |e| *e == SessionEvent::Jumped), 1);
        // -16 then one frame of gravity
        assert_eq!(s.player.velocity.y, -16.0 + 0.8);
        assert!(!s.player.on_ground);
    }

    #[test]
    fn test_walking_into_wall_sets_side_flag() {
        // Wall inside the dead zone so the camera stays still
        let mut s = session(&[&["      XP      ", "XXXXXXXXXXXXXX"]]);
        for _ in 0..10 {
            tick(&mut s, &hold(Heading::Left));
        }
        assert!(s.player.on_left);
        assert_eq!(s.player.rect.left(), 448.0);
        assert_eq!(s.scroll.current_x, 448.0);

        tick(&mut s, &FrameInput::default());
        assert!(!s.player.on_left);
    }

    #[test]
    fn test_edge_zone_scrolls_world() {
        // Spawn at x=128, center 152 < 320
        let mut s = session(&[&["  P        ", "XXXXXXXXXXX"]]);
        let left = hold(Heading::Left);
        tick(&mut s, &left);
        assert_eq!(s.scroll.world_shift, 8.0);
        assert_eq!(s.player.speed, 0.0);

        let floor_x = s.tiles.iter().next().unwrap().rect.x;
        let player_x = s.player.rect.x;
        tick(&mut s, &left);
        // World slid right, player held in place
        assert_eq!(s.tiles.iter().next().unwrap().rect.x, floor_x + 8.0);
        assert_eq!(s.player.rect.x, player_x);
    }

    #[test]
    fn test_collectible_counted_once() {
        let mut s = session(&[&["PC ", "XXX"]]);
        let right = hold(Heading::Right);
        for _ in 0..10 {
            tick(&mut s, &right);
        }
        assert!(s.collectibles[0].collected);
        assert_eq!(s.stats.collected, 1);
        assert_eq!(
            count_events(&s, |e| matches!(e, SessionEvent::ItemCollected { .. })),
            1
        );
    }

    #[test]
    fn test_npc_question_is_modal() {
        let mut s = session(&[&["PN  ", "XXXX"]]).with_questions(QuestionBank::new(vec![
            Question::new("1 + 1?", &["1", "2"], 1),
        ]));
        let right = hold(Heading::Right);

        let mut frames = 0;
        while !matches!(s.phase, SessionPhase::QuestionPrompt { .. }) {
            tick(&mut s, &right);
            frames += 1;
            assert!(frames < 30, "NPC never reached");
        }
        assert_eq!(s.phase, SessionPhase::QuestionPrompt { npc: 0 });

        // Frozen while waiting
        let frozen = s.player.clone();
        tick(&mut s, &right);
        assert_eq!(s.player, frozen);

        // Out-of-range answer ignored
        let bad = FrameInput {
            answer: Some(7),
            ..right
        };
        tick(&mut s, &bad);
        assert_eq!(s.phase, SessionPhase::QuestionPrompt { npc: 0 });

        let good = FrameInput {
            answer: Some(1),
            ..right
        };
        tick(&mut s, &good);
        assert_eq!(s.phase, SessionPhase::Active);
        assert!(s.npcs[0].answered);
        assert_eq!(s.stats.correct_answers, 1);
        assert!(s.events().contains(&SessionEvent::QuestionAnswered { npc: 0, correct: true }));

        // Answered NPCs do not ask again
        for _ in 0..5 {
            tick(&mut s, &right);
            assert_eq!(s.phase, SessionPhase::Active);
        }
    }

    #[test]
    fn test_wrong_answer_counted() {
        let mut s = session(&[&["PN", "XX"]]);
        s.phase = SessionPhase::QuestionPrompt { npc: 0 };
        let answer = FrameInput {
            answer: Some(2),
            ..Default::default()
        };
        // Default bank question 0: correct answer is 1
        tick(&mut s, &answer);
        assert_eq!(s.stats.wrong_answers, 1);
        assert_eq!(s.stats.correct_answers, 0);
        assert_eq!(s.phase, SessionPhase::Active);
    }

    #[test]
    fn test_walk_through_demo_style_level() {
        let mut s = session(&[&[
            "XXXXXXXXXXXXXXXXXXXXXXXXX",
            "X                       X",
            "X                       X",
            "X P    N      C       F X",
            "XXXXXXXXXXXXXXXXXXXXXXXXX",
        ]]);
        let input = FrameInput {
            heading: Heading::Right,
            answer: Some(1),
            ..Default::default()
        };

        let mut frames = 0;
        while s.phase != SessionPhase::GameOver {
            tick(&mut s, &input);
            frames += 1;
            assert!(frames < 600, "level not finished, phase {:?}", s.phase);
        }

        assert_eq!(s.stats.levels_completed, 1);
        assert_eq!(s.stats.collected, 1);
        assert_eq!(s.stats.correct_answers, 1);
        assert!(s.npcs[0].answered);
    }

    #[test]
    fn test_determinism() {
        let rows: &[&[&str]] = &[&[
            "XXXXXXXXXXXX",
            "X          X",
            "X P  XX  N X",
            "XXXXXXXXXXXX",
        ]];
        let mut a = session(rows);
        let mut b = session(rows);

        let inputs = [
            hold(Heading::Right),
            FrameInput {
                heading: Heading::Right,
                jump: true,
                ..Default::default()
            },
            hold(Heading::Left),
            FrameInput {
                answer: Some(0),
                ..Default::default()
            },
        ];

        for frame in 0..200 {
            let input = &inputs[(frame / 7) % inputs.len()];
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.player, b.player);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.events(), b.events());
    }
}
