use crate::math::Real;
use crate::shape::{sample_texture_color, SurfaceMaterial, TexturedMesh, TexturedTriangle};
use crate::voxelization::{VoxelGrid, VoxelGridFrame};
use rand::Rng;

#[cfg(feature = "parallel")]
use {
    rand::{rngs::StdRng, SeedableRng},
    rayon::prelude::*,
};

/// Draws uniformly distributed barycentric coordinates `[wa, wb, wc]` of a triangle.
///
/// Two uniform numbers `(a, b)` are drawn in `[0, 1)`. If they fall outside of the unit
/// lower triangle (`a + b > 1`), they are reflected to `(1 - a, 1 - b)`, which keeps the
/// distribution uniform without rejection.
#[inline]
pub fn random_barycentric<R: Rng + ?Sized>(rng: &mut R) -> [Real; 3] {
    let mut a: Real = rng.gen();
    let mut b: Real = rng.gen();

    if a + b > 1.0 {
        a = 1.0 - a;
        b = 1.0 - b;
    }

    [a, b, (1.0 - a - b).max(0.0)]
}

/// Voxelizes the surface of a mesh by drawing random points on its triangles.
///
/// Every triangle receives a number of samples proportional to its area measured in
/// voxel faces, multiplied by the `oversampling` factor. Each sample adds the texture
/// color under it to the voxel cell containing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SurfaceSampler {
    /// The number of samples drawn per voxel-sized area of a triangle.
    pub oversampling: u32,
}

impl Default for SurfaceSampler {
    fn default() -> Self {
        Self { oversampling: 4 }
    }
}

impl SurfaceSampler {
    /// Creates a sampler with the given oversampling factor.
    pub fn new(oversampling: u32) -> Self {
        Self { oversampling }
    }

    /// The number of samples drawn on a triangle with the given area.
    ///
    /// Degenerate (zero-area) triangles receive no sample. The count saturates at
    /// `usize::MAX`.
    #[inline]
    pub fn num_samples(&self, area: Real, voxel_size: Real) -> usize {
        if !(area > 0.0) || !(voxel_size > 0.0) {
            return 0;
        }

        let faces = (area / (voxel_size * voxel_size)).ceil();
        (faces as usize).saturating_mul(self.oversampling as usize)
    }

    /// Samples one world-space triangle into `grid`.
    ///
    /// Returns the number of samples drawn.
    pub fn sample_triangle<R: Rng + ?Sized>(
        &self,
        triangle: &TexturedTriangle,
        material: &SurfaceMaterial,
        frame: &VoxelGridFrame,
        rng: &mut R,
        grid: &mut VoxelGrid,
    ) -> usize {
        let num_samples = self.num_samples(triangle.triangle.area(), frame.voxel_size());

        for _ in 0..num_samples {
            let weights = random_barycentric(rng);
            let pt = triangle.triangle.point_at(weights);
            let color = sample_texture_color(material, triangle.uv_at(weights));
            grid.add_sample(frame.key_of(&pt), color);
        }

        num_samples
    }

    /// Samples every triangle of `mesh` into a new voxel grid.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        mesh: &TexturedMesh,
        frame: &VoxelGridFrame,
        rng: &mut R,
    ) -> VoxelGrid {
        let mut grid = VoxelGrid::new();
        let mut num_samples = 0;

        for triangle in mesh.triangles() {
            num_samples += self.sample_triangle(&triangle, mesh.material(), frame, rng, &mut grid);
        }

        log::debug!(
            "Sampled {} points on {} triangles into {} voxel cells (voxel size {}).",
            num_samples,
            mesh.num_triangles(),
            grid.len(),
            frame.voxel_size()
        );

        grid
    }

    /// Samples every triangle of `mesh` into a new voxel grid, in parallel.
    ///
    /// Each triangle is sampled with its own generator seeded from `seed` and the
    /// triangle index, so the set of occupied cells only depends on `seed`. Voxel colors
    /// may differ from one run to the next by floating-point rounding because the
    /// per-thread grids are summed in an arbitrary order.
    #[cfg(feature = "parallel")]
    pub fn sample_par(&self, mesh: &TexturedMesh, frame: &VoxelGridFrame, seed: u64) -> VoxelGrid {
        let grid = (0..mesh.num_triangles())
            .into_par_iter()
            .fold(VoxelGrid::new, |mut grid, i| {
                let mut rng = StdRng::seed_from_u64(triangle_seed(seed, i));
                let _ = self.sample_triangle(
                    &mesh.triangle(i),
                    mesh.material(),
                    frame,
                    &mut rng,
                    &mut grid,
                );
                grid
            })
            .reduce(VoxelGrid::new, |mut a, b| {
                a.merge(b);
                a
            });

        log::debug!(
            "Sampled {} points on {} triangles into {} voxel cells (voxel size {}).",
            grid.num_samples(),
            mesh.num_triangles(),
            grid.len(),
            frame.voxel_size()
        );

        grid
    }
}

#[cfg(feature = "parallel")]
#[inline]
fn triangle_seed(seed: u64, triangle: usize) -> u64 {
    seed ^ (triangle as u64).wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
