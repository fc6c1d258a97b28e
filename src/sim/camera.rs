//! Dead-zone side scrolling
//!
//! The player walks freely in the middle of the screen. Inside either edge
//! zone, while heading outward, the player is frozen in screen space and the
//! world slides the other way instead.

use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use crate::settings::Settings;

/// Per-level scroll bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Horizontal slide applied to the world next frame
    pub world_shift: f32,
    /// Edge position recorded at the last side contact
    pub current_x: f32,
}

/// Camera scroll rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraScroll {
    pub screen_width: f32,
    /// Edge zone width is `screen_width / dead_zone_divisor`
    pub dead_zone_divisor: f32,
    pub scroll_step: f32,
    /// Player speed restored outside the edge zones
    pub nominal_speed: f32,
}

impl CameraScroll {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            screen_width: settings.screen_width,
            dead_zone_divisor: settings.dead_zone_divisor,
            scroll_step: settings.scroll_step,
            nominal_speed: settings.player_speed,
        }
    }

    pub fn zone_width(&self) -> f32 {
        self.screen_width / self.dead_zone_divisor
    }

    /// Decide next frame's world shift and set the player's speed to match
    pub fn update(&self, player: &mut KinematicBody, scroll: &mut ScrollState) {
        let center_x = player.rect.center_x();
        let heading = player.velocity.x;
        let zone = self.zone_width();

        if center_x < zone && heading < 0.0 {
            scroll.world_shift = self.scroll_step;
            player.speed = 0.0;
        } else if center_x > self.screen_width - zone && heading > 0.0 {
            scroll.world_shift = -self.scroll_step;
            player.speed = 0.0;
        } else {
            scroll.world_shift = 0.0;
            player.speed = self.nominal_speed;
        }
    }
}

impl Default for CameraScroll {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Heading;
    use crate::sim::rect::Rect;
    use proptest::prelude::*;

    fn camera_1200() -> CameraScroll {
        CameraScroll {
            screen_width: 1200.0,
            dead_zone_divisor: 4.0,
            scroll_step: 8.0,
            nominal_speed: 8.0,
        }
    }

    fn player_centered_at(center_x: f32, heading: Heading) -> KinematicBody {
        let mut body = KinematicBody::new(Rect::new(center_x - 24.0, 0.0, 48.0, 56.0), 8.0);
        body.set_horizontal_direction(heading);
        body
    }

    #[test]
    fn test_left_edge_scrolls_world_right() {
        let camera = camera_1200();
        let mut player = player_centered_at(250.0, Heading::Left);
        let mut scroll = ScrollState::default();

        camera.update(&mut player, &mut scroll);
        assert_eq!(scroll.world_shift, 8.0);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_center_walks_freely() {
        let camera = camera_1200();
        let mut player = player_centered_at(600.0, Heading::Left);
        player.speed = 0.0;
        let mut scroll = ScrollState {
            world_shift: 8.0,
            current_x: 0.0,
        };

        camera.update(&mut player, &mut scroll);
        assert_eq!(scroll.world_shift, 0.0);
        assert_eq!(player.speed, 8.0);
    }

    #[test]
    fn test_right_edge_scrolls_world_left() {
        let camera = camera_1200();
        let mut player = player_centered_at(1000.0, Heading::Right);
        let mut scroll = ScrollState::default();

        camera.update(&mut player, &mut scroll);
        assert_eq!(scroll.world_shift, -8.0);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_edge_zone_heading_inward_does_not_scroll() {
        let camera = camera_1200();
        let mut player = player_centered_at(250.0, Heading::Right);
        let mut scroll = ScrollState::default();

        camera.update(&mut player, &mut scroll);
        assert_eq!(scroll.world_shift, 0.0);
        assert_eq!(player.speed, 8.0);
    }

    proptest! {
        #[test]
        fn prop_dead_zone_never_scrolls(center_x in 300.0f32..=900.0, heading in 0usize..3) {
            let heading = [Heading::Left, Heading::Idle, Heading::Right][heading];
            let camera = camera_1200();
            let mut player = player_centered_at(center_x, heading);
            let mut scroll = ScrollState::default();

            camera.update(&mut player, &mut scroll);
            prop_assert_eq!(scroll.world_shift, 0.0);
            prop_assert_eq!(player.speed, 8.0);
        }
    }
}
