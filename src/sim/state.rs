//! Level session state
//!
//! Everything one playthrough needs: the level list, the active level's
//! tiles and entities, the player body, scroll state and run statistics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::body::KinematicBody;
use super::camera::{CameraScroll, ScrollState};
use super::layout::{Cell, LayoutError, LevelLayout};
use super::rect::Rect;
use super::tilemap::TileMap;
use super::trivia::QuestionBank;
use crate::consts::NPC_SIZE;
use crate::settings::{Settings, SettingsError};

/// Errors raised while building a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no levels to play")]
    NoLevels,

    #[error("level {level}: {source}")]
    Layout {
        level: usize,
        #[source]
        source: LayoutError,
    },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Lifecycle of the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Level is instantiated on the next tick
    Loading { level: usize },
    /// Normal play
    Active,
    /// World frozen until the player answers the NPC's question
    QuestionPrompt { npc: usize },
    /// Finish reached; the next tick moves on
    Completed,
    /// No levels left; waits for a restart
    GameOver,
}

/// Things that happened during a tick, drained by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    LevelLoaded { level: usize },
    Jumped,
    ItemCollected { item: usize },
    QuestionAsked { npc: usize, question: usize },
    QuestionAnswered { npc: usize, correct: bool },
    LevelCompleted { level: usize },
    GameOver,
    Restarted,
}

/// A question-giving NPC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub rect: Rect,
    /// Index into the session's question bank (None when the bank is empty)
    pub question: Option<usize>,
    pub answered: bool,
}

/// A pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub collected: bool,
}

/// Run totals, kept across levels until restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub collected: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub levels_completed: u32,
}

/// One playthrough over an ordered list of levels
///
/// `tick` only appends to the event buffer. It grows until the caller takes
/// the events with [`LevelSession::drain_events`], normally once per frame.
#[derive(Debug, Clone)]
pub struct LevelSession {
    pub settings: Settings,
    pub camera: CameraScroll,
    pub questions: QuestionBank,
    levels: Vec<LevelLayout>,
    /// Index of the level currently instantiated
    pub level_index: usize,
    pub phase: SessionPhase,
    pub tiles: TileMap,
    pub player: KinematicBody,
    pub npcs: Vec<Npc>,
    pub collectibles: Vec<Collectible>,
    pub scroll: ScrollState,
    pub stats: SessionStats,
    /// Tick counter
    pub frame: u64,
    events: Vec<SessionEvent>,
}

impl LevelSession {
    /// Create a session and instantiate the first level
    pub fn new(levels: Vec<LevelLayout>, settings: Settings) -> Result<Self, SessionError> {
        settings.validate()?;
        if levels.is_empty() {
            return Err(SessionError::NoLevels);
        }

        let mut session = Self {
            camera: CameraScroll::from_settings(&settings),
            settings,
            questions: QuestionBank::default(),
            levels,
            level_index: 0,
            phase: SessionPhase::Loading { level: 0 },
            tiles: TileMap::default(),
            player: KinematicBody::new(Rect::default(), 0.0),
            npcs: Vec::new(),
            collectibles: Vec::new(),
            scroll: ScrollState::default(),
            stats: SessionStats::default(),
            frame: 0,
            events: Vec::new(),
        };
        session.load_level(0);
        Ok(session)
    }

    /// Parse and validate every layout, then create the session
    pub fn from_rows<S: AsRef<str>>(
        levels: &[Vec<S>],
        settings: Settings,
    ) -> Result<Self, SessionError> {
        let layouts = levels
            .iter()
            .enumerate()
            .map(|(level, rows)| {
                LevelLayout::from_rows(rows)
                    .map_err(|source| SessionError::Layout { level, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(layouts, settings)
    }

    /// Replace the question bank and re-deal the current level's NPCs
    pub fn with_questions(mut self, questions: QuestionBank) -> Self {
        self.questions = questions;
        self.deal_questions();
        self
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Instantiate tiles, player and entities for `level` and go Active.
    ///
    /// An out-of-range index ends the run instead.
    pub fn load_level(&mut self, level: usize) {
        let Some(layout) = self.levels.get(level) else {
            log::info!("No level {level}, game over");
            self.phase = SessionPhase::GameOver;
            self.events.push(SessionEvent::GameOver);
            return;
        };

        let tile_size = self.settings.tile_size;
        let tiles = TileMap::from_layout(layout, tile_size);

        let (spawn_row, spawn_col) = layout.spawn();
        let spawn = tiles.cell_origin(spawn_row, spawn_col);
        let player = KinematicBody::new(
            Rect::new(spawn.x, spawn.y, self.settings.player_width, self.settings.player_height),
            self.settings.player_speed,
        );

        let mut npcs = Vec::new();
        let mut collectibles = Vec::new();
        for (row, col, cell) in layout.cells() {
            let origin = tiles.cell_origin(row, col);
            match cell {
                Cell::Npc => npcs.push(Npc {
                    rect: Rect::new(origin.x, origin.y, NPC_SIZE, NPC_SIZE),
                    question: None,
                    answered: false,
                }),
                Cell::Collectible => collectibles.push(Collectible {
                    rect: Rect::new(origin.x, origin.y, tile_size, tile_size),
                    collected: false,
                }),
                _ => {}
            }
        }

        self.level_index = level;
        self.tiles = tiles;
        self.player = player;
        self.npcs = npcs;
        self.collectibles = collectibles;
        self.scroll = ScrollState::default();
        self.deal_questions();
        self.phase = SessionPhase::Active;
        self.events.push(SessionEvent::LevelLoaded { level });

        log::info!(
            "Level {}: {} tiles, {} npcs, {} items",
            level,
            self.tiles.len(),
            self.npcs.len(),
            self.collectibles.len()
        );
    }

    fn deal_questions(&mut self) {
        let dealt = self.questions.deal(self.npcs.len(), self.settings.question_seed);
        for (i, npc) in self.npcs.iter_mut().enumerate() {
            npc.question = dealt.get(i).copied();
        }
    }

    /// Move from Completed to the next level, or end the run
    pub fn advance(&mut self) {
        if self.phase != SessionPhase::Completed {
            return;
        }
        let next = self.level_index + 1;
        if next < self.levels.len() {
            self.phase = SessionPhase::Loading { level: next };
        } else {
            log::info!(
                "All {} levels done (items: {}, correct answers: {})",
                self.levels.len(),
                self.stats.collected,
                self.stats.correct_answers
            );
            self.phase = SessionPhase::GameOver;
            self.events.push(SessionEvent::GameOver);
        }
    }

    /// Start a new run from the first level
    pub fn restart(&mut self) {
        log::info!("Restarting run");
        self.stats = SessionStats::default();
        self.phase = SessionPhase::Loading { level: 0 };
        self.events.push(SessionEvent::Restarted);
    }

    /// Whether the player touches a finish tile
    pub fn is_completed(&self) -> bool {
        self.tiles
            .finish_tiles()
            .any(|tile| tile.rect.touches(&self.player.rect))
    }

    /// Slide tiles and entities horizontally
    pub fn shift_world(&mut self, dx: f32) {
        if dx == 0.0 {
            return;
        }
        self.tiles.shift(dx);
        for npc in &mut self.npcs {
            npc.rect.translate_x(dx);
        }
        for item in &mut self.collectibles {
            item.rect.translate_x(dx);
        }
    }

    pub(crate) fn push_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Events since the last drain
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take every buffered event, leaving the buffer empty
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
