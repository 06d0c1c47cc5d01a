//! Shapes consumed by the voxelizers.

pub use self::texture::{sample_texture_color, SurfaceMaterial, Texture, TextureError};
pub use self::textured_mesh::{MeshBuilderError, TexturedMesh, TexturedTriangle};
pub use self::triangle::Triangle;

mod texture;
mod textured_mesh;
mod triangle;
