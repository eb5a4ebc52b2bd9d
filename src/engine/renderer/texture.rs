// Texture loading and GPU resource management

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::GenericImageView;

/// Opaque reference to a texture owned by the manager.
///
/// Handles index into the manager's texture list and are cheap to copy
/// around; everything above the renderer traffics in handles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

impl TextureHandle {
    /// Mint a handle directly; for tests and tooling that never touch
    /// a real GPU texture
    #[allow(dead_code)]
    pub fn from_raw(index: usize) -> Self {
        Self(index)
    }
}

/// A loaded GPU texture with its view and sampler
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Create a texture from encoded image bytes (PNG, JPEG)
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
    ) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .with_context(|| format!("decoding image '{}'", label))?;
        Self::from_image(device, queue, &img, Some(label))
    }

    /// Create a texture from a decoded image
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: Option<&str>,
    ) -> Result<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = img.dimensions();

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Nearest filtering keeps pixel art crisp
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
            width,
            height,
        })
    }
}

/// Owns every loaded texture plus the per-texture bind groups.
///
/// Loading the same path twice returns the first handle.
pub struct TextureManager {
    textures: Vec<Texture>,
    path_to_handle: HashMap<PathBuf, TextureHandle>,
    bind_groups: HashMap<TextureHandle, wgpu::BindGroup>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            path_to_handle: HashMap::new(),
            bind_groups: HashMap::new(),
        }
    }

    /// Load a texture from a file, reusing the cached copy if the path
    /// was loaded before
    pub fn load_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<TextureHandle> {
        if let Some(&handle) = self.path_to_handle.get(path) {
            return Ok(handle);
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("reading texture file {}", path.display()))?;
        let texture = Texture::from_bytes(device, queue, &bytes, &path.to_string_lossy())?;

        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        self.path_to_handle.insert(path.to_path_buf(), handle);
        Ok(handle)
    }

    /// Look up a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0)
    }

    /// Number of textures loaded
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Create the bind group for a texture if it does not exist yet
    pub fn ensure_bind_group(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        handle: TextureHandle,
    ) {
        if self.bind_groups.contains_key(&handle) {
            return;
        }
        let Some(texture) = self.textures.get(handle.0) else {
            return;
        };

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Texture Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        self.bind_groups.insert(handle, bind_group);
    }

    /// Bind group for a texture, if one has been created
    pub fn bind_group(&self, handle: TextureHandle) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(&handle)
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_compare_by_index() {
        assert_eq!(TextureHandle::from_raw(3), TextureHandle::from_raw(3));
        assert_ne!(TextureHandle::from_raw(3), TextureHandle::from_raw(4));
    }

    #[test]
    fn test_empty_manager_resolves_nothing() {
        let manager = TextureManager::new();
        assert_eq!(manager.texture_count(), 0);
        assert!(manager.get(TextureHandle::from_raw(0)).is_none());
        assert!(manager.bind_group(TextureHandle::from_raw(0)).is_none());
    }
}
