// Per-frame game wiring

use anyhow::Result;
use glam::Vec2;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::assets::AssetLoader;
use crate::engine::input::{Action, InputState};
use crate::engine::renderer::{Camera, SpriteBatch, TextureManager};
use crate::game::assets;
use crate::game::config::GameConfig;
use crate::game::player::{FrameInput, Player};
use crate::game::world::{TileMap, WorldRenderer};

/// Zoom change per frame while a zoom key is held
const ZOOM_STEP: f32 = 0.002;
/// Camera pan in pixels per frame while an arrow key is held
const PAN_STEP: f32 = 1.0;

/// Owns the live game objects and runs one update/draw cycle per frame
pub struct Session {
    world: WorldRenderer,
    player: Player,
    rng: StdRng,
}

impl Session {
    /// Validate the config, load all art and roll the first map
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        textures: &mut TextureManager,
        loader: &AssetLoader,
        config: &GameConfig,
    ) -> Result<Self> {
        config.validate()?;

        let sprites = assets::load_tile_sprites(device, queue, textures, loader)?;
        let animations = assets::load_player_animations(device, queue, textures, loader, config)?;

        let mut rng = StdRng::from_os_rng();
        let map = TileMap::generate(&mut rng, &config.map);
        info!("Generated starting map, side {}", map.side());
        debug_assert!(map.tile(0, 0).is_walkable());

        let world = WorldRenderer::new(map, sprites, config.metrics(), config.map);
        let player = Player::new(animations, config);

        Ok(Self { world, player, rng })
    }

    /// Run one update tick from the current input state
    pub fn update(&mut self, dt: f32, input: &InputState, camera: &mut Camera) {
        if input.just_pressed(Action::RegenerateMap) {
            self.world.regenerate(&mut self.rng);
        }

        self.player.update(dt, &frame_input(input));
        apply_camera_controls(camera, input);
    }

    /// Queue every sprite for this frame in paint order
    pub fn draw(&self, batch: &mut SpriteBatch) {
        self.world.draw(batch, &self.player);
    }
}

/// Reduce the raw input state to the signals the player acts on
fn frame_input(input: &InputState) -> FrameInput {
    FrameInput {
        up: input.is_pressed(Action::MoveUp),
        down: input.is_pressed(Action::MoveDown),
        left: input.is_pressed(Action::MoveLeft),
        right: input.is_pressed(Action::MoveRight),
        attack: input.just_pressed(Action::Attack),
    }
}

/// Zoom and pan, one step per held frame
fn apply_camera_controls(camera: &mut Camera, input: &InputState) {
    if input.is_pressed(Action::ZoomIn) {
        camera.set_zoom(camera.zoom + ZOOM_STEP);
    }
    if input.is_pressed(Action::ZoomOut) {
        camera.set_zoom(camera.zoom - ZOOM_STEP);
    }

    let mut pan = Vec2::ZERO;
    if input.is_pressed(Action::PanLeft) {
        pan.x -= PAN_STEP;
    }
    if input.is_pressed(Action::PanRight) {
        pan.x += PAN_STEP;
    }
    if input.is_pressed(Action::PanUp) {
        pan.y += PAN_STEP;
    }
    if input.is_pressed(Action::PanDown) {
        pan.y -= PAN_STEP;
    }
    if pan != Vec2::ZERO {
        camera.set_position(camera.position + pan);
    }
}
