//! Conversion of textured triangle meshes into colored surface voxels.

pub use self::centering::{center_voxels, voxel_bounds};
pub use self::error::VoxelizationError;
pub use self::grid_frame::VoxelGridFrame;
pub use self::parameters::{SmoothingParameters, VoxelizationParameters};
pub use self::pipeline::{voxelize_multiview, voxelize_surface};
#[cfg(feature = "parallel")]
pub use self::pipeline::voxelize_surface_par;
pub use self::smoothing::{smooth_voxels, NEIGHBOR_OFFSETS};
pub use self::surface_sampler::{random_barycentric, SurfaceSampler};
pub use self::voxel::Voxel;
pub use self::voxel_grid::VoxelGrid;

mod centering;
mod error;
mod grid_frame;
mod parameters;
mod pipeline;
mod smoothing;
mod surface_sampler;
mod voxel;
mod voxel_grid;
