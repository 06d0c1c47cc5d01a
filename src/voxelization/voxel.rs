use crate::math::{Rgb, VoxelKey};

/// A colored voxel of the output of a voxelization.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxel {
    /// The integer coordinates of this voxel.
    pub coords: VoxelKey,
    /// The mean color of the samples that landed in this voxel, channels in `[0, 1]`.
    pub color: Rgb,
}

impl Voxel {
    /// Creates a new voxel.
    #[inline]
    pub fn new(coords: VoxelKey, color: Rgb) -> Self {
        Self { coords, color }
    }
}

/// The lexicographic `(x, y, z)` order used to emit voxels deterministically.
#[inline]
pub(crate) fn key_order(key: &VoxelKey) -> (i32, i32, i32) {
    (key.x, key.y, key.z)
}

pub(crate) fn sort_voxels(voxels: &mut [Voxel]) {
    voxels.sort_unstable_by_key(|v| key_order(&v.coords));
}
