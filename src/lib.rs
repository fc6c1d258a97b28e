//! Academic Adventure - a trivia side-scroller core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, tile collisions, scrolling, level lifecycle)
//! - `render`: Ordered draw list handed to an external renderer
//! - `input`: Input sources feeding `sim::FrameInput`
//! - `settings`: Tunable physics/camera configuration

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::{InputSource, ScriptedInput};
pub use render::{DrawCall, Renderable, Sprite, draw_list};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the external clock
    pub const FPS: u32 = 60;

    /// Size of one layout cell in world pixels
    pub const TILE_SIZE: f32 = 64.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Added to vertical velocity every frame (pixels/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_SPEED: f32 = -16.0;
    /// Nominal horizontal speed of the player (pixels/frame)
    pub const PLAYER_SPEED: f32 = 8.0;

    /// World slide per frame while the camera scrolls
    pub const SCROLL_STEP: f32 = 8.0;
    /// Edge zone width is `screen_width / DEAD_ZONE_DIVISOR`
    pub const DEAD_ZONE_DIVISOR: f32 = 4.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 56.0;

    /// NPC hitbox (square)
    pub const NPC_SIZE: f32 = 50.0;
}
