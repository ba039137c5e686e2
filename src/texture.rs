use anyhow::{Context, Result};
use std::path::Path;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// An RGBA texture living on the GPU, with the fixed sampler policy used by
/// the viewer: nearest minification, linear magnification, repeat wrapping.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Decodes an image file and uploads it. The image is flipped vertically
    /// so the (0,0) texture coordinate lands at the bottom-left, matching
    /// the cube's UV assignment.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .flipv()
            .to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self::from_rgba8(device, queue, &image, width, height))
    }

    /// Procedural two-tone checkerboard, used when no texture path is given
    /// so the viewer runs without external assets.
    pub fn checkerboard(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        const SIZE: u32 = 8;
        const CELL: u32 = 1;
        let data = checkerboard_rgba(SIZE, SIZE, CELL);
        Self::from_rgba8(device, queue, &data, SIZE, SIZE)
    }

    fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Cube Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Depth attachment sized to the surface; recreated on every resize.
    pub fn depth(
        device: &wgpu::Device,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

/// Interleaved RGBA8 checkerboard, `cell` pixels per square.
pub fn checkerboard_rgba(width: u32, height: u32, cell: u32) -> Vec<u8> {
    let light = [230u8, 230, 230, 255];
    let dark = [60u8, 60, 60, 255];

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) % 2;
            let color = if parity == 0 { light } else { dark };
            data.extend_from_slice(&color);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_length() {
        let data = checkerboard_rgba(8, 8, 1);
        assert_eq!(data.len(), 8 * 8 * 4);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let data = checkerboard_rgba(2, 2, 1);
        let pixel = |i: usize| &data[i * 4..i * 4 + 4];
        assert_eq!(pixel(0), pixel(3));
        assert_ne!(pixel(0), pixel(1));
        assert_eq!(pixel(1), pixel(2));
    }

    #[test]
    fn test_checkerboard_opaque() {
        let data = checkerboard_rgba(4, 4, 2);
        assert!(data.chunks(4).all(|px| px[3] == 255));
    }
}
