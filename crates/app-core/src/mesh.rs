//! Static meshes: the per-cell box and the ground quad.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

// (normal, tangent u, tangent v) per face, with u × v = normal so quads wind CCW.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

/// Axis-aligned cube of edge `side` centered on the origin, flat-shaded.
pub fn box_mesh(side: f32) -> Mesh {
    let h = side * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [
                (n[0] + su * u[0] + sv * v[0]) * h,
                (n[1] + su * u[1] + sv * v[1]) * h,
                (n[2] + su * u[2] + sv * v[2]) * h,
            ];
            vertices.push(MeshVertex {
                position,
                normal: n,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Mesh { vertices, indices }
}

/// Square in the XY plane facing +Z, `size` on a side, centered on the origin.
pub fn ground_mesh(size: f32) -> Mesh {
    let h = size * 0.5;
    let normal = [0.0, 0.0, 1.0];
    let vertices = [[-h, -h], [h, -h], [h, h], [-h, h]]
        .into_iter()
        .map(|[x, y]| MeshVertex {
            position: [x, y, 0.0],
            normal,
        })
        .collect();
    Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
