//! Draw list for an external renderer
//!
//! The crate does not bind a graphics API. Each frame it produces an ordered
//! list of rectangles tagged with what they show; back-to-front order is
//! tiles, items, NPCs, player, then the question overlay.

use serde::{Deserialize, Serialize};

use crate::sim::{
    Collectible, KinematicBody, LevelSession, Npc, Rect, SessionPhase, Tile, TileKind,
};

/// What a draw call shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Wall,
    Finish,
    Collectible,
    Npc { answered: bool },
    Player,
    /// Full-screen question panel for the NPC's question
    QuestionOverlay { question: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub sprite: Sprite,
    pub rect: Rect,
}

/// Something that adds itself to the draw list
pub trait Renderable {
    fn draw(&self, out: &mut Vec<DrawCall>);
}

impl Renderable for Tile {
    fn draw(&self, out: &mut Vec<DrawCall>) {
        let sprite = match self.kind {
            TileKind::Wall => Sprite::Wall,
            TileKind::Finish => Sprite::Finish,
        };
        out.push(DrawCall {
            sprite,
            rect: self.rect,
        });
    }
}

impl Renderable for Collectible {
    fn draw(&self, out: &mut Vec<DrawCall>) {
        if !self.collected {
            out.push(DrawCall {
                sprite: Sprite::Collectible,
                rect: self.rect,
            });
        }
    }
}

impl Renderable for Npc {
    fn draw(&self, out: &mut Vec<DrawCall>) {
        out.push(DrawCall {
            sprite: Sprite::Npc {
                answered: self.answered,
            },
            rect: self.rect,
        });
    }
}

impl Renderable for KinematicBody {
    fn draw(&self, out: &mut Vec<DrawCall>) {
        out.push(DrawCall {
            sprite: Sprite::Player,
            rect: self.rect,
        });
    }
}

/// Build the frame's draw list
pub fn draw_list(session: &LevelSession) -> Vec<DrawCall> {
    let mut out = Vec::with_capacity(
        session.tiles.len() + session.collectibles.len() + session.npcs.len() + 2,
    );

    for tile in session.tiles.iter() {
        tile.draw(&mut out);
    }
    for item in &session.collectibles {
        item.draw(&mut out);
    }
    for npc in &session.npcs {
        npc.draw(&mut out);
    }
    session.player.draw(&mut out);

    if let SessionPhase::QuestionPrompt { npc } = session.phase {
        if let Some(question) = session.npcs.get(npc).and_then(|n| n.question) {
            out.push(DrawCall {
                sprite: Sprite::QuestionOverlay { question },
                rect: Rect::new(
                    0.0,
                    0.0,
                    session.settings.screen_width,
                    session.settings.screen_height,
                ),
            });
        }
    }

    out
}
