use crate::rendering::{MultiViewRasterizer, RenderBackend, Scene};
use crate::shape::TexturedMesh;
use crate::voxelization::{
    center_voxels, smooth_voxels, SurfaceSampler, Voxel, VoxelGrid, VoxelGridFrame,
    VoxelizationError, VoxelizationParameters,
};
use rand::Rng;

/// Voxelizes the surface of `mesh` by random sampling of its triangles.
///
/// All randomness comes from `rng`: two calls with identically seeded generators and
/// identical inputs return identical voxels. The output voxels are unique, centered
/// around the origin, sorted by coordinates, and smoothed if
/// `params.smoothing.iterations > 0`.
///
/// A mesh without any triangle yields an empty list.
pub fn voxelize_surface<R: Rng + ?Sized>(
    mesh: &TexturedMesh,
    params: &VoxelizationParameters,
    rng: &mut R,
) -> Result<Vec<Voxel>, VoxelizationError> {
    let resolution = params.effective_resolution()?;

    if mesh.is_empty() {
        log::debug!("Nothing to voxelize: the mesh has no triangle.");
        return Ok(Vec::new());
    }

    let frame = VoxelGridFrame::new(&mesh.world_aabb(), resolution)?;
    let grid = SurfaceSampler::new(params.oversampling).sample(mesh, &frame, rng);
    Ok(finish(grid, params))
}

/// Voxelizes the surface of `mesh` by random sampling of its triangles, on the rayon
/// thread pool.
///
/// See [`SurfaceSampler::sample_par`] for the reproducibility guarantees.
#[cfg(feature = "parallel")]
pub fn voxelize_surface_par(
    mesh: &TexturedMesh,
    params: &VoxelizationParameters,
    seed: u64,
) -> Result<Vec<Voxel>, VoxelizationError> {
    let resolution = params.effective_resolution()?;

    if mesh.is_empty() {
        log::debug!("Nothing to voxelize: the mesh has no triangle.");
        return Ok(Vec::new());
    }

    let frame = VoxelGridFrame::new(&mesh.world_aabb(), resolution)?;
    let grid = SurfaceSampler::new(params.oversampling).sample_par(mesh, &frame, seed);
    Ok(finish(grid, params))
}

/// Voxelizes the meshes of `scene` from six orthographic color and depth captures
/// rendered by `backend`.
///
/// Fails with [`VoxelizationError::MissingBackend`] before doing anything else if no
/// backend is given. The materials of `scene` are temporarily replaced while capturing
/// depth and are restored before this returns, including on failure. A scene without
/// any triangle, or whose views cover no pixel, yields an empty list.
pub fn voxelize_multiview(
    backend: Option<&mut dyn RenderBackend>,
    scene: &mut Scene,
    params: &VoxelizationParameters,
) -> Result<Vec<Voxel>, VoxelizationError> {
    let backend = backend.ok_or(VoxelizationError::MissingBackend)?;
    let resolution = params.effective_resolution()?;

    if scene.num_triangles() == 0 {
        log::debug!("Nothing to voxelize: the scene has no triangle.");
        return Ok(Vec::new());
    }

    let frame = VoxelGridFrame::new(&scene.world_aabb(), resolution)?;
    let grid = MultiViewRasterizer::default().capture(backend, scene, &frame, resolution)?;
    Ok(finish(grid, params))
}

fn finish(grid: VoxelGrid, params: &VoxelizationParameters) -> Vec<Voxel> {
    let mut voxels = grid.finalize();
    let _ = center_voxels(&mut voxels);

    if params.smoothing.iterations > 0 {
        voxels = smooth_voxels(&voxels, &params.smoothing);
    }

    log::debug!("Voxelization produced {} voxels.", voxels.len());
    voxels
}
