//! Copy a presented frame back to the CPU and save it as PNG.

use std::path::Path;

use anyhow::{Context, Result};

/// Read `texture` back and write it to `path`
pub fn save_frame(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    format: wgpu::TextureFormat,
    path: &Path,
) -> Result<()> {
    let width = texture.width();
    let height = texture.height();
    let bytes_per_pixel = 4; // RGBA8 / BGRA8
    let unpadded_bytes_per_row = width * bytes_per_pixel;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let padded_bytes_per_row = unpadded_bytes_per_row.div_ceil(align) * align;

    // Create buffer to read texture data
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Frame Capture Buffer"),
        size: (padded_bytes_per_row * height) as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Frame Capture Encoder"),
    });

    encoder.copy_texture_to_buffer(
        wgpu::ImageCopyTexture {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::ImageCopyBuffer {
            buffer: &buffer,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(padded_bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    queue.submit(std::iter::once(encoder.finish()));

    let buffer_slice = buffer.slice(..);
    buffer_slice.map_async(wgpu::MapMode::Read, |_| {});
    device.poll(wgpu::Maintain::Wait);

    let data = buffer_slice.get_mapped_range();
    let image_data = unpad_rows(
        &data,
        unpadded_bytes_per_row as usize,
        padded_bytes_per_row as usize,
        height as usize,
        is_bgra(format),
    );
    drop(data);
    buffer.unmap();

    image::save_buffer(path, &image_data, width, height, image::ColorType::Rgba8)
        .with_context(|| format!("failed to save frame to {}", path.display()))?;
    log::info!("Saved frame to {}", path.display());
    Ok(())
}

fn is_bgra(format: wgpu::TextureFormat) -> bool {
    matches!(
        format,
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
    )
}

/// Strip row padding, swapping B and R when the surface is BGRA
fn unpad_rows(
    data: &[u8],
    row_bytes: usize,
    padded_row_bytes: usize,
    rows: usize,
    bgra: bool,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(row_bytes * rows);
    for y in 0..rows {
        let start = y * padded_row_bytes;
        out.extend_from_slice(&data[start..start + row_bytes]);
    }
    if bgra {
        for px in out.chunks_exact_mut(4) {
            px.swap(0, 2);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpad_rows() {
        // Two rows of one pixel, padded to 8 bytes
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 0, 0, 0];
        assert_eq!(unpad_rows(&data, 4, 8, 2, false), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(unpad_rows(&data, 4, 8, 2, true), vec![3, 2, 1, 4, 7, 6, 5, 8]);
    }
}
