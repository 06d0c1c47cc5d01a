use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Uv};
use crate::shape::{SurfaceMaterial, Triangle};

/// Indicated an inconsistency while building a textured mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A triangle references a vertex that does not exist.
    #[error(
        "triangle {triangle} references vertex {index} but the mesh only has {num_vertices} vertices"
    )]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The length of the vertex buffer.
        num_vertices: usize,
    },
    /// The texture coordinates buffer does not have one entry per vertex.
    #[error("expected one texture coordinate per vertex ({num_vertices}), got {num_uvs}")]
    UvCountMismatch {
        /// The length of the texture coordinates buffer.
        num_uvs: usize,
        /// The length of the vertex buffer.
        num_vertices: usize,
    },
}

/// A triangle of a [`TexturedMesh`], in world-space, with its texture coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TexturedTriangle {
    /// The world-space triangle.
    pub triangle: Triangle,
    /// The texture coordinates of the three vertices, if the mesh has any.
    pub uvs: Option<[Uv; 3]>,
}

impl TexturedTriangle {
    /// Interpolates the texture coordinates with the barycentric weights `[wa, wb, wc]`.
    #[inline]
    pub fn uv_at(&self, [wa, wb, wc]: [Real; 3]) -> Option<Uv> {
        self.uvs
            .map(|[a, b, c]| Uv::from(a.coords * wa + b.coords * wb + c.coords * wc))
    }
}

/// A triangle mesh with optional per-vertex texture coordinates and a single material.
///
/// This is what the external mesh loader hands to the voxelizers. The vertex buffer is
/// expressed in the mesh local space; `position` moves it to world-space, and every
/// triangle yielded by [`TexturedMesh::triangles`] is already transformed.
///
/// A mesh with zero triangles is valid: voxelizing it yields no voxels.
#[derive(Clone, Debug)]
pub struct TexturedMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    uvs: Option<Vec<Uv>>,
    material: SurfaceMaterial,
    position: Isometry<Real>,
}

impl TexturedMesh {
    /// Creates a new textured mesh from its vertex, index, and texture coordinate buffers.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        uvs: Option<Vec<Uv>>,
        material: SurfaceMaterial,
    ) -> Result<Self, MeshBuilderError> {
        if let Some(uvs) = &uvs {
            if uvs.len() != vertices.len() {
                return Err(MeshBuilderError::UvCountMismatch {
                    num_uvs: uvs.len(),
                    num_vertices: vertices.len(),
                });
            }
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(MeshBuilderError::IndexOutOfBounds {
                    triangle,
                    index: *index,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self {
            vertices,
            indices,
            uvs,
            material,
            position: Isometry::identity(),
        })
    }

    /// A mesh without any triangle.
    pub fn empty(material: SurfaceMaterial) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            uvs: None,
            material,
            position: Isometry::identity(),
        }
    }

    /// Sets the world-space placement of this mesh.
    pub fn with_position(mut self, position: Isometry<Real>) -> Self {
        self.position = position;
        self
    }

    /// Sets the world-space placement of this mesh.
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// The world-space placement of this mesh.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// The local-space vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The per-vertex texture coordinates, if any.
    #[inline]
    pub fn uvs(&self) -> Option<&[Uv]> {
        self.uvs.as_deref()
    }

    /// The material shared by every triangle of this mesh.
    #[inline]
    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh have zero triangles?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The `i`-th triangle of this mesh, in world-space.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_triangles()`.
    pub fn triangle(&self, i: usize) -> TexturedTriangle {
        let idx = self.indices[i];
        let pt = |k: usize| self.position * self.vertices[idx[k] as usize];

        TexturedTriangle {
            triangle: Triangle::new(pt(0), pt(1), pt(2)),
            uvs: self.uvs.as_ref().map(|uvs| {
                [
                    uvs[idx[0] as usize],
                    uvs[idx[1] as usize],
                    uvs[idx[2] as usize],
                ]
            }),
        }
    }

    /// An iterator through all the world-space triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = TexturedTriangle> + '_ {
        (0..self.indices.len()).map(move |i| self.triangle(i))
    }

    /// The world-space bounding box of the vertices referenced by the triangles.
    ///
    /// Invalid (see [`Aabb::is_valid`]) if the mesh has no triangle.
    pub fn world_aabb(&self) -> Aabb {
        Aabb::from_points(
            self.indices
                .iter()
                .flat_map(|idx| idx.iter())
                .map(|i| self.position * self.vertices[*i as usize]),
        )
    }
}
