/*!
meshvox
========

**meshvox** converts textured triangle meshes into sparse sets of colored
surface voxels. Two reconstruction strategies share one output contract:

- stochastic surface sampling of the triangles ([`voxelize_surface`]);
- six-view orthographic color + depth capture through a [`rendering::RenderBackend`]
  ([`voxelize_multiview`]).

Both feed the same accumulation, centering, and morphological smoothing passes.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![doc(html_root_url = "http://docs.rs/meshvox/0.1.0")]
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub use crate::voxelization::{
    voxelize_multiview, voxelize_surface, Voxel, VoxelizationError, VoxelizationParameters,
};

pub mod bounding_volume;
pub mod rendering;
pub mod shape;
pub mod utils;
pub mod voxelization;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Point2, Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// A texture coordinate.
    pub type Uv = Point2<Real>;

    /// A linear RGB color with channels in `[0, 1]`.
    pub type Rgb = Vector3<Real>;

    /// The integer coordinates of a voxel cell.
    pub type VoxelKey = Point3<i32>;
}
