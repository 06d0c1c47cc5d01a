//! Surface materials and texture color lookup.

use crate::math::{Real, Rgb, Uv};
use alloc::sync::Arc;
use image::RgbImage;

/// Errors raised when building a [`Texture`] from raw pixel data.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureError {
    /// The texture has a zero width or height.
    #[error("a texture must have non-zero dimensions, got {width}x{height}")]
    ZeroSized {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// The pixel buffer length does not match `width * height * 3`.
    #[error("expected {expected} bytes of RGB8 pixel data, got {actual}")]
    BufferSize {
        /// The expected buffer length.
        expected: usize,
        /// The actual buffer length.
        actual: usize,
    },
}

/// A decoded 2D RGB texture.
///
/// Textures are decoded once by the mesh loader and are immutable afterward, so a
/// single instance can be shared (through an `Arc`) by every triangle of a mesh.
#[derive(Clone, Debug)]
pub struct Texture {
    image: RgbImage,
}

impl Texture {
    /// Wraps an already decoded image.
    pub fn new(image: RgbImage) -> Result<Self, TextureError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(TextureError::ZeroSized {
                width: image.width(),
                height: image.height(),
            });
        }

        Ok(Self { image })
    }

    /// Builds a texture from a row-major RGB8 buffer, first row at the top.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSized { width, height });
        }

        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let image = RgbImage::from_raw(width, height, data)
            .ok_or(TextureError::BufferSize { expected, actual })?;
        Self::new(image)
    }

    /// The texture width, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The texture height, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The underlying image.
    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// The pixel coordinates looked up for the texture coordinate `uv`.
    ///
    /// `uv` is clamped to `[0, 1]` (no tiling) and `v` is flipped so that `v = 1`
    /// maps to the first image row.
    pub fn texel_coords(&self, uv: Uv) -> (u32, u32) {
        let u = uv.x.clamp(0.0, 1.0);
        let v = uv.y.clamp(0.0, 1.0);
        let w = self.width();
        let h = self.height();

        let x = ((u * w as Real).floor() as u32).min(w - 1);
        let y = (((1.0 - v) * h as Real).floor() as u32).min(h - 1);
        (x, y)
    }

    /// The color of the texel under `uv`, with channels in `[0, 1]`.
    pub fn color_at(&self, uv: Uv) -> Rgb {
        let (x, y) = self.texel_coords(uv);
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Rgb::new(r as Real, g as Real, b as Real) / 255.0
    }
}

/// The appearance of a mesh: an optional texture and a constant fallback color.
#[derive(Clone, Debug)]
pub struct SurfaceMaterial {
    /// The texture sampled with the mesh UVs, if any.
    pub texture: Option<Arc<Texture>>,
    /// The color used when there is no texture, or when the mesh has no UVs.
    pub fallback_color: Rgb,
}

impl Default for SurfaceMaterial {
    fn default() -> Self {
        Self {
            texture: None,
            fallback_color: Rgb::repeat(0.5),
        }
    }
}

impl SurfaceMaterial {
    /// An untextured material with the given constant color.
    pub fn with_color(color: Rgb) -> Self {
        Self {
            texture: None,
            fallback_color: color,
        }
    }

    /// A textured material with the default mid-gray fallback color.
    pub fn with_texture(texture: Arc<Texture>) -> Self {
        Self {
            texture: Some(texture),
            ..Self::default()
        }
    }
}

/// Resolves the color of a surface point of a mesh using `material`.
///
/// Returns the material fallback color, without any lookup, if the material has no
/// texture or if `uv` is `None` (the mesh carries no texture coordinates).
#[inline]
pub fn sample_texture_color(material: &SurfaceMaterial, uv: Option<Uv>) -> Rgb {
    match (&material.texture, uv) {
        (Some(texture), Some(uv)) => texture.color_at(uv),
        _ => material.fallback_color,
    }
}
