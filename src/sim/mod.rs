//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (layout order for tiles and entities)
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tilemap;
pub mod trivia;

pub use body::{Heading, KinematicBody};
pub use camera::{CameraScroll, ScrollState};
pub use collision::{resolve_horizontal, resolve_vertical};
pub use layout::{Cell, LayoutError, LevelLayout};
pub use rect::Rect;
pub use state::{
    Collectible, LevelSession, Npc, SessionError, SessionEvent, SessionPhase, SessionStats,
};
pub use tick::{FrameInput, tick};
pub use tilemap::{Tile, TileKind, TileMap};
pub use trivia::{Question, QuestionBank};
