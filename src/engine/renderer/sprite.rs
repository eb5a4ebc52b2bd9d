// Sprite batching and the pipeline that draws batches

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::camera::CameraUniform;
use super::texture::{TextureHandle, TextureManager};
use super::vertex::Vertex;

/// One queued sprite draw: which texture, where, and how big
#[derive(Debug, Clone, Copy)]
pub struct SpriteInstance {
    pub texture: TextureHandle,
    /// Bottom-left corner in world space
    pub position: Vec2,
    pub size: Vec2,
}

/// An ordered list of sprite draws for one frame.
///
/// Submission order is the paint order. The world renderer leans on that
/// for occlusion, so the batch never sorts or deduplicates anything; it
/// only collects.
#[derive(Debug, Default)]
pub struct SpriteBatch {
    sprites: Vec<SpriteInstance>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one sprite; (x, y) is the bottom-left corner
    pub fn draw(&mut self, texture: TextureHandle, x: f32, y: f32, width: f32, height: f32) {
        self.sprites.push(SpriteInstance {
            texture,
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        });
    }

    /// Forget everything queued so far
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Queued sprites in submission order
    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// A contiguous range of quads sharing one texture
struct DrawRun {
    texture: TextureHandle,
    index_range: std::ops::Range<u32>,
}

/// Turns a sprite batch into quad geometry and issues the draw calls.
///
/// Consecutive sprites with the same texture collapse into a single
/// draw call; order within and across runs is preserved exactly.
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    runs: Vec<DrawRun>,
}

impl SpriteRenderer {
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Sprite Pipeline Layout"),
                bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::identity()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
            vertex_buffer: None,
            index_buffer: None,
            runs: Vec::new(),
        }
    }

    /// Build this frame's quad geometry and texture runs, and make sure
    /// every referenced texture has a bind group
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        batch: &SpriteBatch,
        textures: &mut TextureManager,
    ) {
        self.runs.clear();
        if batch.is_empty() {
            self.vertex_buffer = None;
            self.index_buffer = None;
            return;
        }

        let mut vertices = Vec::with_capacity(batch.len() * 4);
        let mut indices: Vec<u32> = Vec::with_capacity(batch.len() * 6);

        for sprite in batch.sprites() {
            let base = vertices.len() as u32;
            let min = sprite.position;
            let max = sprite.position + sprite.size;

            // v runs top-down in texture space, so the top of the quad
            // samples the top of the image
            vertices.push(Vertex::new(min, Vec2::new(0.0, 1.0)));
            vertices.push(Vertex::new(Vec2::new(max.x, min.y), Vec2::new(1.0, 1.0)));
            vertices.push(Vertex::new(max, Vec2::new(1.0, 0.0)));
            vertices.push(Vertex::new(Vec2::new(min.x, max.y), Vec2::new(0.0, 0.0)));
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);

            let end = indices.len() as u32;
            match self.runs.last_mut() {
                Some(run) if run.texture == sprite.texture => run.index_range.end = end,
                _ => self.runs.push(DrawRun {
                    texture: sprite.texture,
                    index_range: end - 6..end,
                }),
            }

            textures.ensure_bind_group(device, &self.texture_bind_group_layout, sprite.texture);
        }

        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    /// Replay the prepared runs into a render pass
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        textures: &'a TextureManager,
    ) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for run in &self.runs {
            let Some(bind_group) = textures.bind_group(run.texture) else {
                continue;
            };
            render_pass.set_bind_group(1, bind_group, &[]);
            render_pass.draw_indexed(run.index_range.clone(), 0, 0..1);
        }
    }

    /// Buffer the per-frame camera uniform is written into
    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_submission_order() {
        let mut batch = SpriteBatch::new();
        batch.draw(TextureHandle::from_raw(2), 0.0, 0.0, 10.0, 10.0);
        batch.draw(TextureHandle::from_raw(0), 5.0, 5.0, 10.0, 10.0);
        batch.draw(TextureHandle::from_raw(2), 1.0, 1.0, 10.0, 10.0);

        let textures: Vec<usize> = batch
            .sprites()
            .iter()
            .map(|s| {
                if s.texture == TextureHandle::from_raw(2) {
                    2
                } else {
                    0
                }
            })
            .collect();
        assert_eq!(textures, vec![2, 0, 2]);
    }

    #[test]
    fn test_batch_keeps_duplicate_draws() {
        let mut batch = SpriteBatch::new();
        batch.draw(TextureHandle::from_raw(1), 0.0, 0.0, 8.0, 8.0);
        batch.draw(TextureHandle::from_raw(1), 0.0, 0.0, 8.0, 8.0);

        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_clear_empties_the_batch() {
        let mut batch = SpriteBatch::new();
        batch.draw(TextureHandle::from_raw(0), 0.0, 0.0, 1.0, 1.0);
        assert!(!batch.is_empty());

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_draw_records_position_and_size() {
        let mut batch = SpriteBatch::new();
        batch.draw(TextureHandle::from_raw(7), 3.0, -4.0, 64.0, 94.0);

        let sprite = batch.sprites()[0];
        assert_eq!(sprite.texture, TextureHandle::from_raw(7));
        assert_eq!(sprite.position, Vec2::new(3.0, -4.0));
        assert_eq!(sprite.size, Vec2::new(64.0, 94.0));
    }
}
