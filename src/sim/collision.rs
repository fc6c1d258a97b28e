//! Tile collision resolution
//!
//! Two one-shot passes per frame, horizontal first. Each pass moves the body
//! along one axis, then snaps it out of every tile it overlaps. Tiles are
//! visited in layout order and each one is tested against the body as already
//! snapped by the previous tiles, so the last overlapping tile wins.
//!
//! Stepping is discrete: a body moving more than a tile per frame can pass
//! through thin geometry.

use super::body::KinematicBody;
use super::tilemap::TileMap;

/// Move the body horizontally and push it out of walls.
///
/// `current_x` is the edge position recorded at the last side contact. The
/// side flags only clear once the body has moved past that point or stopped
/// pushing, so resting against a wall does not flicker.
///
/// Returns the number of tiles the body was snapped against.
pub fn resolve_horizontal(
    body: &mut KinematicBody,
    tiles: &TileMap,
    current_x: &mut f32,
) -> usize {
    body.rect.x += body.velocity.x * body.speed;

    let mut snaps = 0;
    for tile in tiles.iter() {
        if !tile.rect.intersects(&body.rect) {
            continue;
        }
        if body.velocity.x < 0.0 {
            body.rect.set_left(tile.rect.right());
            body.on_left = true;
            *current_x = body.rect.left();
            snaps += 1;
        } else if body.velocity.x > 0.0 {
            body.rect.set_right(tile.rect.left());
            body.on_right = true;
            *current_x = body.rect.right();
            snaps += 1;
        }
    }

    if body.on_left && (body.rect.left() < *current_x || body.velocity.x >= 0.0) {
        body.on_left = false;
    }
    if body.on_right && (body.rect.right() > *current_x || body.velocity.x <= 0.0) {
        body.on_right = false;
    }

    snaps
}

/// Apply gravity and push the body out of floors and ceilings.
///
/// Returns the number of tiles the body was snapped against.
pub fn resolve_vertical(body: &mut KinematicBody, tiles: &TileMap, gravity: f32) -> usize {
    body.apply_gravity(gravity);

    let mut snaps = 0;
    for tile in tiles.iter() {
        if !tile.rect.intersects(&body.rect) {
            continue;
        }
        if body.velocity.y > 0.0 {
            body.rect.set_bottom(tile.rect.top());
            body.velocity.y = 0.0;
            body.on_ground = true;
            snaps += 1;
        } else if body.velocity.y < 0.0 {
            body.rect.set_top(tile.rect.bottom());
            body.velocity.y = 0.0;
            body.on_ceiling = true;
            snaps += 1;
        }
    }

    // Threshold of 1 (not 0) keeps the ground flag for one frame after
    // walking off a ledge.
    if (body.on_ground && body.velocity.y < 0.0) || body.velocity.y > 1.0 {
        body.on_ground = false;
    }
    if body.on_ceiling && body.velocity.y > 0.0 {
        body.on_ceiling = false;
    }

    snaps
}
