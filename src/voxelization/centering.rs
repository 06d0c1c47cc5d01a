use crate::math::{Vector, VoxelKey};
use crate::voxelization::Voxel;

/// The per-axis minimum and maximum coordinates of a set of voxels.
///
/// Returns `None` if `voxels` is empty.
pub fn voxel_bounds(voxels: &[Voxel]) -> Option<(VoxelKey, VoxelKey)> {
    let first = voxels.first()?.coords;
    Some(voxels[1..].iter().fold((first, first), |(mins, maxs), v| {
        (mins.inf(&v.coords), maxs.sup(&v.coords))
    }))
}

/// Translates `voxels` so that the center of their integer bounding box lies at the origin.
///
/// The center of each axis is `min + (max - min) / 2` with integer division, so an odd
/// span (an even number of cells) is centered toward its lower half. Colors and relative
/// positions are preserved. Returns the translation that was subtracted, which is zero
/// if `voxels` is empty.
///
/// Applying this twice is the same as applying it once.
pub fn center_voxels(voxels: &mut [Voxel]) -> Vector<i32> {
    let Some((mins, maxs)) = voxel_bounds(voxels) else {
        return Vector::zeros();
    };

    let center = mins.coords + (maxs - mins) / 2;
    for voxel in voxels.iter_mut() {
        voxel.coords -= center;
    }

    log::debug!(
        "Centered {} voxels by {:?}, bounds {:?} .. {:?}.",
        voxels.len(),
        center,
        mins - center,
        maxs - center
    );

    center
}
