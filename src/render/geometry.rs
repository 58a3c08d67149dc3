//! Procedural geometry for the demo scene.
//!
//! Both generators produce interleaved position + normal vertices ready for
//! upload through [`Mesh`](crate::abs::Mesh).

use glam::{Vec3, vec3};
use glow::HasContext;

use crate::abs::Vertex;

/// A vertex of a lit mesh: position and normal, tightly interleaved.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct LitVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex for LitVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<LitVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

/// The 20 triangular faces of a regular icosahedron, hand-enumerated against
/// the vertex order produced by [`icosahedron`]: faces 0-4 fan out from the
/// north pole, 5-14 zigzag between the two rings, 15-19 close the south pole.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 2, 1],
    [0, 3, 2],
    [0, 4, 3],
    [0, 5, 4],
    [0, 1, 5],
    [6, 1, 7],
    [7, 1, 2],
    [7, 2, 8],
    [8, 2, 3],
    [8, 3, 9],
    [9, 3, 4],
    [9, 4, 10],
    [10, 4, 5],
    [10, 5, 6],
    [6, 5, 1],
    [7, 11, 6],
    [8, 11, 7],
    [9, 11, 8],
    [10, 11, 9],
    [6, 11, 10],
];

/// Edge length of a regular icosahedron with circumradius `radius`.
fn icosahedron_edge(radius: f32) -> f32 {
    4.0 * radius / (10.0 + 2.0 * 5.0_f32.sqrt()).sqrt()
}

/// Generates a regular icosahedron with the given circumradius.
///
/// The 12 vertices are placed as two poles on the z axis and two azimuthal
/// rings of five, the lower ring rotated half a step against the upper one.
/// Each face's flat normal is assigned to all three of its vertices; a
/// vertex shared between faces keeps whichever face wrote last.
pub fn icosahedron(radius: f32) -> (Vec<LitVertex>, Vec<u32>) {
    let a = icosahedron_edge(radius);
    let alpha = (1.0 - a * a / (2.0 * radius * radius)).acos();

    fn ring_vertex(radius: f32, polar: f32, azimuth_deg: f32) -> LitVertex {
        let azimuth = azimuth_deg.to_radians();
        LitVertex {
            position: vec3(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.sin() * azimuth.cos(),
                radius * polar.cos(),
            ),
            normal: Vec3::ZERO,
        }
    }

    let mut vertices = Vec::with_capacity(12);
    vertices.push(LitVertex {
        position: vec3(0.0, 0.0, radius),
        normal: Vec3::ZERO,
    });
    for i in 0..5 {
        vertices.push(ring_vertex(radius, alpha, i as f32 * 72.0));
    }
    for i in 0..5 {
        vertices.push(ring_vertex(
            radius,
            std::f32::consts::PI - alpha,
            -36.0 + i as f32 * 72.0,
        ));
    }
    vertices.push(LitVertex {
        position: vec3(0.0, 0.0, -radius),
        normal: Vec3::ZERO,
    });

    for face in &ICOSAHEDRON_FACES {
        let [i0, i1, i2] = face.map(|i| i as usize);
        let normal = face_normal(
            vertices[i0].position,
            vertices[i1].position,
            vertices[i2].position,
        );
        vertices[i0].normal = normal;
        vertices[i1].normal = normal;
        vertices[i2].normal = normal;
    }

    let indices = ICOSAHEDRON_FACES.iter().flatten().copied().collect();
    (vertices, indices)
}

/// Generates an axis-aligned cube centered on the origin.
///
/// Four vertices per face so every face carries its own flat normal,
/// wound counter-clockwise seen from outside.
pub fn cube(half_extent: f32) -> (Vec<LitVertex>, Vec<u32>) {
    let normals = [
        vec3(1.0, 0.0, 0.0),
        vec3(-1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, -1.0, 0.0),
        vec3(0.0, 0.0, 1.0),
        vec3(0.0, 0.0, -1.0),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for normal in normals {
        // Cyclic tangent frame; keeps the quad counter-clockwise for every axis.
        let u = vec3(normal.y, normal.z, normal.x);
        let v = normal.cross(u);

        let base = vertices.len() as u32;
        for (du, dv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            vertices.push(LitVertex {
                position: (normal + u * du + v * dv) * half_extent,
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v1).normalize()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const RADIUS: f32 = 0.75;
    const EPS: f32 = 1e-4;

    #[test]
    fn icosahedron_vertices_lie_on_the_circumsphere() {
        let (vertices, _) = icosahedron(RADIUS);
        assert_eq!(vertices.len(), 12);
        for v in &vertices {
            assert!(
                (v.position.length() - RADIUS).abs() < EPS,
                "|{:?}| = {}",
                v.position,
                v.position.length()
            );
        }
    }

    #[test]
    fn icosahedron_poles_are_exact() {
        let (vertices, _) = icosahedron(RADIUS);
        assert_eq!(vertices[0].position, vec3(0.0, 0.0, RADIUS));
        assert_eq!(vertices[11].position, vec3(0.0, 0.0, -RADIUS));
    }

    #[test]
    fn icosahedron_indices_cover_every_vertex() {
        let (vertices, indices) = icosahedron(RADIUS);
        assert_eq!(indices.len(), 20 * 3);
        let used: HashSet<u32> = indices.iter().copied().collect();
        let expected: HashSet<u32> = (0..vertices.len() as u32).collect();
        assert_eq!(used, expected);
    }

    #[test]
    fn icosahedron_faces_have_uniform_edge_length() {
        let (vertices, indices) = icosahedron(RADIUS);
        let edge = icosahedron_edge(RADIUS);
        for face in indices.chunks(3) {
            let [v0, v1, v2] =
                [face[0], face[1], face[2]].map(|i| vertices[i as usize].position);
            for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
                assert!(
                    (a.distance(b) - edge).abs() < EPS,
                    "edge {:?} -> {:?} has length {}, expected {}",
                    a,
                    b,
                    a.distance(b),
                    edge
                );
            }
        }
    }

    #[test]
    fn icosahedron_face_normals_are_unit_and_perpendicular() {
        let (vertices, indices) = icosahedron(RADIUS);
        for face in indices.chunks(3) {
            let [v0, v1, v2] =
                [face[0], face[1], face[2]].map(|i| vertices[i as usize].position);
            let normal = (v1 - v0).cross(v2 - v1).normalize();
            assert!((normal.length() - 1.0).abs() < EPS);
            assert!(normal.dot(v1 - v0).abs() < EPS);
            assert!(normal.dot(v2 - v1).abs() < EPS);
        }
    }

    #[test]
    fn icosahedron_vertex_normals_keep_the_last_writing_face() {
        let (vertices, indices) = icosahedron(RADIUS);
        for (i, vertex) in vertices.iter().enumerate() {
            let last_face = indices
                .chunks(3)
                .filter(|face| face.contains(&(i as u32)))
                .last()
                .unwrap();
            let [v0, v1, v2] =
                [last_face[0], last_face[1], last_face[2]].map(|j| vertices[j as usize].position);
            let expected = (v1 - v0).cross(v2 - v1).normalize();
            assert_eq!(vertex.normal, expected, "vertex {}", i);
        }
    }

    #[test]
    fn icosahedron_is_deterministic() {
        assert_eq!(icosahedron(RADIUS), icosahedron(RADIUS));
    }

    #[test]
    fn cube_vertices_lie_on_their_faces() {
        let half = 0.5;
        let (vertices, indices) = cube(half);
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        for v in &vertices {
            assert!((v.normal.length() - 1.0).abs() < EPS);
            // The vertex sits on the face its normal names.
            assert!((v.position.dot(v.normal) - half).abs() < EPS);
            assert!(v.position.abs().max_element() <= half + EPS);
        }
    }

    #[test]
    fn cube_winding_is_counter_clockwise() {
        let (vertices, indices) = cube(0.5);
        for face in indices.chunks(3) {
            let [v0, v1, v2] = [face[0], face[1], face[2]].map(|i| vertices[i as usize]);
            let computed = (v1.position - v0.position)
                .cross(v2.position - v1.position)
                .normalize();
            assert!(computed.dot(v0.normal) > 0.99);
        }
    }
}
