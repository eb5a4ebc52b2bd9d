// Loading tile and player art into GPU textures

use anyhow::{Context, Result};
use glam::Vec2;
use log::debug;

use crate::engine::assets::AssetLoader;
use crate::engine::renderer::{TextureHandle, TextureManager};
use crate::game::config::GameConfig;
use crate::game::player::{Activity, AnimationClip, AnimationSet, Direction};
use crate::game::world::TileSpriteSet;

/// Load the six tile textures from `<assets>/tiles/`
pub fn load_tile_sprites(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    textures: &mut TextureManager,
    loader: &AssetLoader,
) -> Result<TileSpriteSet> {
    let mut load = |name: &str| -> Result<TextureHandle> {
        let path = loader.tile_path(name);
        textures
            .load_texture(device, queue, &path)
            .with_context(|| format!("loading tile texture {}", path.display()))
    };

    Ok(TileSpriteSet {
        ground_a: load("ground_a.png")?,
        ground_b: load("ground_b.png")?,
        ground_c: load("ground_c.png")?,
        tree_a: load("tree_a.png")?,
        tree_b: load("tree_b.png")?,
        stump: load("stump.png")?,
    })
}

/// Load every facing/activity clip from
/// `<assets>/player/<facing>/<activity>/<index>.png`.
///
/// Frames are numbered from zero and play in numeric order. A missing or
/// empty folder fails the whole load.
pub fn load_player_animations(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    textures: &mut TextureManager,
    loader: &AssetLoader,
    config: &GameConfig,
) -> Result<AnimationSet> {
    let mut builder = AnimationSet::builder();

    for direction in Direction::ALL {
        for activity in Activity::ALL {
            let dir = loader.clip_dir(direction.asset_dir(), activity.asset_dir());
            let paths = loader
                .frame_paths(&dir)
                .with_context(|| format!("listing frames in {}", dir.display()))?;

            let mut frames = Vec::with_capacity(paths.len());
            for path in &paths {
                let handle = textures
                    .load_texture(device, queue, path)
                    .with_context(|| format!("loading frame {}", path.display()))?;
                frames.push(handle);
            }

            let frame_size = frames
                .first()
                .and_then(|&handle| textures.get(handle))
                .map(|texture| Vec2::new(texture.width as f32, texture.height as f32))
                .unwrap_or(Vec2::ZERO);

            let clip = AnimationClip::new(
                frames,
                frame_size,
                config.frame_duration,
                activity.loops(),
            )
            .with_context(|| {
                format!(
                    "building clip {}/{}",
                    direction.asset_dir(),
                    activity.asset_dir()
                )
            })?;
            debug!(
                "Loaded clip {}/{} ({} frames)",
                direction.asset_dir(),
                activity.asset_dir(),
                clip.frame_count()
            );
            builder = builder.clip(direction, activity, clip);
        }
    }

    Ok(builder.build()?)
}
