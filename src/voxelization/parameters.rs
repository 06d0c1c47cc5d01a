use crate::voxelization::VoxelizationError;

/// Parameters of the morphological smoothing pass.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SmoothingParameters {
    /// The number of smoothing steps. Zero disables smoothing.
    pub iterations: u32,
    /// A voxel with fewer occupied face neighbors than this is removed.
    pub keep_min_neighbors: usize,
    /// A voxel with more occupied face neighbors than this is removed.
    pub keep_max_neighbors: usize,
    /// An empty cell next to a voxel is filled if it has at least this many occupied
    /// face neighbors.
    pub fill_min_neighbors: usize,
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self {
            iterations: 0,
            keep_min_neighbors: 2,
            keep_max_neighbors: 5,
            fill_min_neighbors: 3,
        }
    }
}

impl SmoothingParameters {
    /// The default smoothing rules, applied `iterations` times.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

/// Parameters shared by both voxelizers.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VoxelizationParameters {
    /// The number of voxels along the largest dimension of the input bounding box.
    pub resolution: u32,
    /// Resolutions above this value are clamped to it.
    pub max_resolution: u32,
    /// The number of surface samples drawn per voxel-sized area of each triangle.
    pub oversampling: u32,
    /// The smoothing applied to the centered voxels.
    pub smoothing: SmoothingParameters,
}

impl Default for VoxelizationParameters {
    fn default() -> Self {
        Self {
            resolution: 32,
            max_resolution: 200,
            oversampling: 4,
            smoothing: SmoothingParameters::default(),
        }
    }
}

impl VoxelizationParameters {
    /// The default parameters with the given resolution.
    pub fn with_resolution(resolution: u32) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// The resolution actually used for voxelization.
    ///
    /// Fails if `self.resolution` is zero. Resolutions above `self.max_resolution` are
    /// clamped, with a warning.
    pub fn effective_resolution(&self) -> Result<u32, VoxelizationError> {
        if self.resolution == 0 {
            return Err(VoxelizationError::InvalidResolution);
        }

        let max = self.max_resolution.max(1);
        if self.resolution > max {
            log::warn!(
                "Voxel resolution {} exceeds the maximum {}, clamping.",
                self.resolution,
                max
            );
            Ok(max)
        } else {
            Ok(self.resolution)
        }
    }
}
