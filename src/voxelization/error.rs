use crate::rendering::RenderError;

/// Errors that can occur while voxelizing a mesh or a scene.
///
/// An empty input (no triangle, or no pixel covered by any view) is not an error:
/// the voxelizers return an empty voxel list in that case.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelizationError {
    /// The requested resolution is zero.
    #[error("the voxel resolution must be at least 1")]
    InvalidResolution,
    /// The bounding box of the input has a zero (or non-finite) largest extent, so no
    /// voxel size can be derived from it.
    #[error("the input bounding box is degenerate: its largest extent is zero or not finite")]
    DegenerateBounds,
    /// The multi-view rasterizer was called without any render backend.
    #[error("the multi-view rasterizer requires a render backend")]
    MissingBackend,
    /// The render backend failed while capturing a view.
    #[error("render backend failure: {0}")]
    Render(#[from] RenderError),
}
