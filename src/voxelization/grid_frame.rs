use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, VoxelKey};
use crate::voxelization::VoxelizationError;

/// The mapping between world-space points and voxel cells for one voxelization run.
///
/// The grid origin is the minimum corner of the input bounding box and every cell is a
/// cube with a side equal to the largest extent of that box divided by the resolution.
/// The frame is derived once per run and never mutated afterward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelGridFrame {
    aabb: Aabb,
    voxel_size: Real,
    cells: Vector<i32>,
}

impl VoxelGridFrame {
    /// Builds the grid frame of `aabb` with `resolution` voxels along its largest extent.
    ///
    /// Fails if `resolution` is zero, or if `aabb` is invalid or has a zero largest
    /// extent (every vertex at the same location).
    pub fn new(aabb: &Aabb, resolution: u32) -> Result<Self, VoxelizationError> {
        if resolution == 0 {
            return Err(VoxelizationError::InvalidResolution);
        }

        if !aabb.is_valid() {
            return Err(VoxelizationError::DegenerateBounds);
        }

        let largest = aabb.largest_extent();
        if !largest.is_finite() || largest <= 0.0 {
            return Err(VoxelizationError::DegenerateBounds);
        }

        let voxel_size = largest / resolution as Real;
        let cells = aabb
            .extents()
            .map(|e| ((e / voxel_size).ceil() as i32).clamp(1, resolution as i32));

        Ok(Self {
            aabb: *aabb,
            voxel_size,
            cells,
        })
    }

    /// The bounding box this frame was built from.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The world-space position of the corner of the cell `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.aabb.mins
    }

    /// The side length of a voxel.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn cells(&self) -> Vector<i32> {
        self.cells
    }

    /// The key of the cell containing `pt`.
    ///
    /// This is `floor((pt - origin) / voxel_size)` on each axis, clamped to the grid so
    /// that points lying exactly on the maximum faces of the bounding box (or slightly
    /// outside of it because of rounding) land in the boundary cells.
    #[inline]
    pub fn key_of(&self, pt: &Point<Real>) -> VoxelKey {
        let rel = (pt - self.aabb.mins) / self.voxel_size;
        VoxelKey::new(
            (rel.x.floor() as i32).clamp(0, self.cells.x - 1),
            (rel.y.floor() as i32).clamp(0, self.cells.y - 1),
            (rel.z.floor() as i32).clamp(0, self.cells.z - 1),
        )
    }
}
