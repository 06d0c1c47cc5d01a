use crate::rendering::{OrthographicCamera, Scene};

/// The handle of a render target allocated by a [`RenderBackend`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderTargetId(pub usize);

/// Errors reported by a [`RenderBackend`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A render target with a zero width or height was requested.
    #[error("cannot create a {width}x{height} render target")]
    ZeroSizedTarget {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// The backend could not allocate a render target.
    #[error("failed to allocate a {width}x{height} render target")]
    TargetAllocation {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// The render target does not exist, or was already released.
    #[error("unknown render target {0:?}")]
    UnknownTarget(RenderTargetId),
    /// Rendering was attempted before any camera was set.
    #[error("no camera was set before rendering")]
    MissingCamera,
    /// A readback returned a pixel buffer of the wrong size.
    #[error("expected {expected} pixels from the render target, got {actual}")]
    PixelCount {
        /// The number of pixels of the render target.
        expected: usize,
        /// The number of pixels read back.
        actual: usize,
    },
}

/// An off-screen renderer able to capture scenes through an orthographic camera.
///
/// Render targets are RGBA8 color buffers with their own depth buffer. Every call to
/// [`RenderBackend::render`] clears the target to transparent black before drawing, and
/// pixels covered by no triangle keep a zero alpha.
pub trait RenderBackend {
    /// Allocates a `width x height` render target.
    fn create_render_target(&mut self, width: u32, height: u32)
        -> Result<RenderTargetId, RenderError>;

    /// Frees a render target. Releasing an unknown target does nothing.
    fn release_render_target(&mut self, target: RenderTargetId);

    /// Sets the camera used by the next calls to [`RenderBackend::render`].
    fn set_camera(&mut self, camera: &OrthographicCamera);

    /// Clears `target` and renders every node of `scene` into it, with the node materials.
    fn render(&mut self, scene: &Scene, target: RenderTargetId) -> Result<(), RenderError>;

    /// Reads the pixels of `target` back, row-major with the first row at the top.
    fn read_pixels(&mut self, target: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError>;
}
