use bytemuck::{Pod, Zeroable};

/// Interleaved mesh vertex: position, normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side indexed triangle mesh. Triangles wind counter-clockwise when
/// seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// Unit cube faces as (normal, [bottom-left, bottom-right, top-right, top-left]).
const CUBE_FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // back
    (
        [0.0, 0.0, -1.0],
        [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]],
    ),
    // front
    (
        [0.0, 0.0, 1.0],
        [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
    ),
    // left
    (
        [-1.0, 0.0, 0.0],
        [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
    ),
    // right
    (
        [1.0, 0.0, 0.0],
        [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]],
    ),
    // bottom
    (
        [0.0, -1.0, 0.0],
        [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
    ),
    // top
    (
        [0.0, 1.0, 0.0],
        [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
    ),
];

/// bl, br, tr, tr, tl, bl
const FACE_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

impl MeshData {
    /// Unit cube centred on the origin. Texture coordinates run `0..uv_repeat`
    /// on every face so a repeating sampler tiles the texture.
    pub fn cube(uv_repeat: f32) -> Self {
        let r = uv_repeat;
        let uvs = [[0.0, 0.0], [r, 0.0], [r, r], [0.0, r]];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, (normal, corners)) in CUBE_FACES.iter().enumerate() {
            let base = (face * 4) as u16;
            for (corner, uv) in corners.iter().zip(uvs) {
                vertices.push(MeshVertex {
                    position: *corner,
                    normal: *normal,
                    uv,
                });
            }
            indices.extend(FACE_INDICES.iter().map(|i| base + i));
        }

        Self { vertices, indices }
    }

    /// Unit quad in the XY plane facing +Z.
    pub fn quad() -> Self {
        let n = [0.0, 0.0, 1.0];
        let vertices = vec![
            MeshVertex { position: [-0.5, -0.5, 0.0], normal: n, uv: [0.0, 1.0] },
            MeshVertex { position: [0.5, -0.5, 0.0], normal: n, uv: [1.0, 1.0] },
            MeshVertex { position: [0.5, 0.5, 0.0], normal: n, uv: [1.0, 0.0] },
            MeshVertex { position: [-0.5, 0.5, 0.0], normal: n, uv: [0.0, 0.0] },
        ];

        Self {
            vertices,
            indices: FACE_INDICES.to_vec(),
        }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn assert_outward_ccw(mesh: &MeshData) {
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from(a.position);
            let face_normal = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            assert!(
                face_normal.dot(Vec3::from(a.normal)) > 0.0,
                "triangle {tri:?} winds against its normal"
            );
        }
    }

    #[test]
    fn cube_faces_wind_outward() {
        let cube = MeshData::cube(1.0);
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_outward_ccw(&cube);
    }

    #[test]
    fn cube_uvs_span_the_repeat_count() {
        let cube = MeshData::cube(4.0);
        let max_u = cube.vertices.iter().map(|v| v.uv[0]).fold(0.0, f32::max);
        let max_v = cube.vertices.iter().map(|v| v.uv[1]).fold(0.0, f32::max);
        assert_eq!((max_u, max_v), (4.0, 4.0));
    }

    #[test]
    fn quad_faces_positive_z() {
        let quad = MeshData::quad();
        assert_eq!(quad.index_count(), 6);
        assert_outward_ccw(&quad);
    }
}
