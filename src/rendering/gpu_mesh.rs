//! Uploaded meshes: vertex/index buffers plus a per-draw uniform bind group.

use wgpu::util::DeviceExt;

use super::uniforms::ObjectUniforms;
use crate::color::Color;
use crate::mesh::Vertex;
use crate::params::ShipKind;

/// Which scene entity a GPU mesh draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshOwner {
    Wave,
    Ship(ShipKind),
}

pub struct GpuMesh {
    pub owner: MeshOwner,
    pub base_color: Color,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    pub fn upload(
        device: &wgpu::Device,
        object_layout: &wgpu::BindGroupLayout,
        owner: MeshOwner,
        vertices: &[Vertex],
        indices: &[u32],
        base_color: Color,
    ) -> Self {
        let label = match owner {
            MeshOwner::Wave => "wave".to_string(),
            MeshOwner::Ship(kind) => format!("{:?}", kind),
        };

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniforms = ObjectUniforms::new(glam::Mat4::IDENTITY, base_color, false);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Object Uniforms", label)),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Object Bind Group", label)),
            layout: object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            owner,
            base_color,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
