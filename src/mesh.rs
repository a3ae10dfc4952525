//! CPU-side mesh data, bounding boxes and model fitting

use crate::alg;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: alg::Vec3,
    pub normal:   alg::Vec3,
    pub uv:       alg::Vec2,
}

impl Vertex {
    pub fn new(position: alg::Vec3) -> Vertex {
        Vertex {
            position,
            .. Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormalMode {
    /// Each vertex takes the normal of the last face that references it
    Flat,
    /// Area-weighted average over adjacent faces
    Smooth,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices:  Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> MeshData {
        debug_assert!(indices.len() % 3 == 0);

        MeshData {
            vertices,
            indices,
        }
    }

    /// Overwrites any normals already present in `vertices`
    pub fn new_with_normals(
        vertices: Vec<Vertex>,
        indices:  Vec<u32>,
        mode:     NormalMode,
    ) -> MeshData {
        let mut mesh = MeshData::new(vertices, indices);
        mesh.compute_normals(mode);
        mesh
    }

    pub fn compute_normals(&mut self, mode: NormalMode) {
        for vertex in &mut self.vertices {
            vertex.normal = alg::Vec3::zero();
        }

        for triangle in self.indices.chunks_exact(3) {
            let (a, b, c) = (
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            );

            // Skip faces with out-of-range indices
            if a.max(b).max(c) >= self.vertices.len() {
                continue;
            }

            // Magnitude is twice the face area
            let weighted = (self.vertices[b].position - self.vertices[a].position)
                .cross(self.vertices[c].position - self.vertices[a].position);

            for &i in &[a, b, c] {
                match mode {
                    NormalMode::Flat => self.vertices[i].normal = weighted,
                    NormalMode::Smooth => self.vertices[i].normal += weighted,
                }
            }
        }

        for vertex in &mut self.vertices {
            // Isolated and degenerate vertices keep a zero normal
            if let Ok(normal) = vertex.normal.try_norm() {
                vertex.normal = normal;
            }
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|vertex| vertex.position))
    }

    /// Flat xyz array
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter()
            .flat_map(|vertex| vertex.position.to_array().to_vec())
            .collect()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other`, offsetting its indices
    pub fn extend(&mut self, other: &MeshData) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|index| index + offset));
    }

    /* Built-in shapes */

    /// Axis-aligned cube with faces wound to be seen from inside (skybox)
    pub fn cube(half: f32) -> MeshData {
        let corners = [
            alg::Vec3::new(-half, -half, -half),
            alg::Vec3::new( half, -half, -half),
            alg::Vec3::new( half,  half, -half),
            alg::Vec3::new(-half,  half, -half),
            alg::Vec3::new(-half, -half,  half),
            alg::Vec3::new( half, -half,  half),
            alg::Vec3::new( half,  half,  half),
            alg::Vec3::new(-half,  half,  half),
        ];

        let vertices = corners.iter()
            .map(|&position| Vertex {
                position,
                normal: -position.norm(),
                .. Default::default()
            }).collect();

        // Clockwise from outside
        let indices = vec![
            0, 1, 2,  0, 2, 3, // -Z
            4, 6, 5,  4, 7, 6, // +Z
            0, 7, 4,  0, 3, 7, // -X
            1, 5, 6,  1, 6, 2, // +X
            0, 4, 5,  0, 5, 1, // -Y
            3, 2, 6,  3, 6, 7, // +Y
        ];

        MeshData::new(vertices, indices)
    }

    /// Quad in the XY plane facing +Z, uvs spanning [0, 1] \
    /// v runs top to bottom to match `texture::Image` rows,
    /// and triangles are wound clockwise seen from +Z (front face CW)
    pub fn quad(half: f32) -> MeshData {
        let normal = alg::Vec3::fwd();

        let vertex = |x: f32, y: f32, u: f32, v: f32| Vertex {
            position: alg::Vec3::new(x, y, 0.0),
            normal,
            uv: alg::Vec2::new(u, v),
        };

        MeshData::new(
            vec![
                vertex(-half, -half, 0.0, 1.0),
                vertex( half, -half, 1.0, 1.0),
                vertex( half,  half, 1.0, 0.0),
                vertex(-half,  half, 0.0, 0.0),
            ],
            vec![0, 2, 1, 0, 3, 2],
        )
    }

    /// Floor rectangle in the XZ plane at y = 0, facing up
    pub fn floor(half: f32) -> MeshData {
        let normal = alg::Vec3::up();

        let vertex = |x: f32, z: f32, u: f32, v: f32| Vertex {
            position: alg::Vec3::new(x, 0.0, z),
            normal,
            uv: alg::Vec2::new(u, v),
        };

        MeshData::new(
            vec![
                vertex(-half, -half, 0.0, 0.0), // Back-left
                vertex( half, -half, 1.0, 0.0), // Back-right
                vertex( half,  half, 1.0, 1.0), // Front-right
                vertex(-half,  half, 0.0, 1.0), // Front-left
            ],
            vec![0, 2, 1, 0, 3, 2],
        )
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: alg::Vec3,
    pub max: alg::Vec3,
}

impl Bounds {
    pub fn new(min: alg::Vec3, max: alg::Vec3) -> Bounds {
        Bounds { min, max }
    }

    /// `None` if `points` is empty
    pub fn from_points<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = alg::Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(
            points.fold(
                Bounds::new(first, first),
                |bounds, point| Bounds::new(
                    bounds.min.min(point),
                    bounds.max.max(point),
                ),
            )
        )
    }

    pub fn center(&self) -> alg::Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> alg::Vec3 {
        self.max - self.min
    }

    pub fn max_extent(&self) -> f32 {
        self.size().max_component()
    }

    /// Bounds of the eight transformed corners
    pub fn transformed(&self, transform: &alg::Mat) -> Bounds {
        let (lo, hi) = (self.min, self.max);

        let corners = (0..8).map(|i| {
            alg::Vec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        }).map(|corner| *transform * corner);

        // Eight corners, never empty
        Bounds::from_points(corners).unwrap_or(*self)
    }
}

/// Scale policy for `fit_model_matrix`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitMode {
    /// Fixed factor regardless of size
    Uniform(f32),
    /// Shrink meshes larger than a unit box; leave smaller ones alone
    UnitBox,
    /// Scale so the largest extent becomes 1
    Normalize,
}

/// Center the mesh at the origin, scale it, then rotate about X \
/// Composed as `rotation * scale * translation`
pub fn fit_model_matrix(bounds: &Bounds, mode: FitMode, rotation_x: f32) -> alg::Mat {
    let translation = alg::Mat::translation_vec(-bounds.center());
    let max_extent = bounds.max_extent();

    let factor = match mode {
        FitMode::Uniform(factor) => factor,
        FitMode::UnitBox if max_extent > 1.0 => 1.0 / max_extent,
        FitMode::Normalize if max_extent > 0.0 => 1.0 / max_extent,
        _ => 1.0,
    };

    alg::Mat::rotation_x(rotation_x)
        * alg::Mat::uniform_scale(factor)
        * translation
}

/// Height at which a floor touches the bottom of the transformed mesh
pub fn floor_height(bounds: &Bounds, model: &alg::Mat) -> f32 {
    (*model * bounds.min).y
}
