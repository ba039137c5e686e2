use bytemuck::{Pod, Zeroable};

/// Interleaved vertex format for the cube: position, texture coordinate, normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], tex_coord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Float32x3];

    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &Self::ATTRIBUTES,
    };
}

/// Builds the cube geometry: 24 vertices (4 per face, no sharing so normals
/// stay flat per face) and 36 indices (6 quads, 2 triangles each).
///
/// Deterministic and pure. A non-positive `width` yields a degenerate or
/// inside-out cube rather than an error.
pub fn cube(width: f32) -> (Vec<Vertex>, Vec<u32>) {
    let h = width / 2.0;

    let vertices = vec![
        // +Z face
        Vertex::new([-h, h, h], [0.0, 1.0], [0.0, 0.0, 1.0]),
        Vertex::new([-h, -h, h], [0.0, 0.0], [0.0, 0.0, 1.0]),
        Vertex::new([h, h, h], [1.0, 1.0], [0.0, 0.0, 1.0]),
        Vertex::new([h, -h, h], [1.0, 0.0], [0.0, 0.0, 1.0]),
        // +X face
        Vertex::new([h, h, h], [0.0, 1.0], [1.0, 0.0, 0.0]),
        Vertex::new([h, -h, h], [0.0, 0.0], [1.0, 0.0, 0.0]),
        Vertex::new([h, h, -h], [1.0, 1.0], [1.0, 0.0, 0.0]),
        Vertex::new([h, -h, -h], [1.0, 0.0], [1.0, 0.0, 0.0]),
        // +Y face
        Vertex::new([h, h, h], [0.0, 1.0], [0.0, 1.0, 0.0]),
        Vertex::new([h, h, -h], [0.0, 0.0], [0.0, 1.0, 0.0]),
        Vertex::new([-h, h, h], [1.0, 1.0], [0.0, 1.0, 0.0]),
        Vertex::new([-h, h, -h], [1.0, 0.0], [0.0, 1.0, 0.0]),
        // -Z face
        Vertex::new([h, h, -h], [0.0, 1.0], [0.0, 0.0, -1.0]),
        Vertex::new([h, -h, -h], [0.0, 0.0], [0.0, 0.0, -1.0]),
        Vertex::new([-h, h, -h], [1.0, 1.0], [0.0, 0.0, -1.0]),
        Vertex::new([-h, -h, -h], [1.0, 0.0], [0.0, 0.0, -1.0]),
        // -X face
        Vertex::new([-h, h, h], [0.0, 1.0], [-1.0, 0.0, 0.0]),
        Vertex::new([-h, h, -h], [0.0, 0.0], [-1.0, 0.0, 0.0]),
        Vertex::new([-h, -h, h], [1.0, 1.0], [-1.0, 0.0, 0.0]),
        Vertex::new([-h, -h, -h], [1.0, 0.0], [-1.0, 0.0, 0.0]),
        // -Y face
        Vertex::new([-h, -h, h], [0.0, 1.0], [0.0, -1.0, 0.0]),
        Vertex::new([-h, -h, -h], [0.0, 0.0], [0.0, -1.0, 0.0]),
        Vertex::new([h, -h, h], [1.0, 1.0], [0.0, -1.0, 0.0]),
        Vertex::new([h, -h, -h], [1.0, 0.0], [0.0, -1.0, 0.0]),
    ];

    let mut indices = Vec::with_capacity(36);
    for i in (0..24u32).step_by(4) {
        indices.extend_from_slice(&[i, i + 1, i + 2, i + 2, i + 1, i + 3]);
    }

    (vertices, indices)
}
