//! Off-screen capture of scenes from six orthographic views.
//!
//! The multi-view voxelizer only talks to a [`RenderBackend`]: it configures an
//! [`OrthographicCamera`], renders a [`Scene`] into a render target, and reads the pixels
//! back. [`SoftwareRasterizer`] implements this interface on the CPU.

pub use self::backend::{RenderBackend, RenderError, RenderTargetId};
pub use self::camera::{OrthographicCamera, ViewAxis};
pub use self::depth_packing::{pack_depth, unpack_depth, MAX_PACKED_DEPTH};
pub use self::multiview::MultiViewRasterizer;
pub use self::scene::{MaterialOverride, Scene, SceneMaterial, SceneNode};
pub use self::software::SoftwareRasterizer;

mod backend;
mod camera;
mod depth_packing;
mod multiview;
mod scene;
mod software;
