// Isoglade: an isometric tile world with a walking, brawling player

use std::sync::Arc;

use anyhow::Result;
use glam::Vec2;
use log::{debug, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::frame_clock::FrameClock;
use engine::input::InputManager;
use engine::renderer::{Renderer, SpriteBatch};
use game::{GameConfig, Session};

/// Camera center at startup, framing the map around the spawn cell
const CAMERA_START: Vec2 = Vec2::new(140.0, 360.0);

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Isoglade...");

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Isoglade")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    renderer.camera_mut().set_position(CAMERA_START);

    let loader = AssetLoader::new("assets");
    info!("Loading assets from {}", loader.base_path().display());

    let config = GameConfig::default();
    let mut session = {
        let (device, queue, textures) = renderer.load_context();
        Session::new(device, queue, textures, &loader, &config)?
    };
    info!("Loaded {} textures", renderer.texture_count());

    let mut input = InputManager::new();
    let mut clock = FrameClock::new();
    let mut batch = SpriteBatch::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Shutting down after {:.1}s and {} frames",
                        clock.elapsed().as_secs_f32(),
                        clock.frame_count()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::Focused(false) => {
                    // Releases that happen while unfocused never arrive
                    input.reset();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::RedrawRequested => {
                    let dt = clock.begin_frame();
                    session.update(dt, input.state(), renderer.camera_mut());
                    input.end_frame();

                    batch.clear();
                    session.draw(&mut batch);
                    if let Err(err) = renderer.render(&batch) {
                        warn!("Render error: {err}; reconfiguring surface");
                        renderer.reconfigure();
                    }

                    if clock.frame_count() % 600 == 0 {
                        debug!("fps: {:.1}", clock.fps());
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
