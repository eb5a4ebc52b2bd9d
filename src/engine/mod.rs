// Engine modules: rendering, input, assets and timing

pub mod assets;
pub mod frame_clock;
pub mod input;
pub mod renderer;
