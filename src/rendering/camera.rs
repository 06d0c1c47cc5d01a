use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// One of the six axis-aligned directions a scene is captured from.
///
/// `PosX` is the view from the `+X` side of the scene, looking toward `-X`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewAxis {
    /// Looking toward `-X` from the `+X` side.
    PosX,
    /// Looking toward `+X` from the `-X` side.
    NegX,
    /// Looking toward `-Y` from the `+Y` side.
    PosY,
    /// Looking toward `+Y` from the `-Y` side.
    NegY,
    /// Looking toward `-Z` from the `+Z` side.
    PosZ,
    /// Looking toward `+Z` from the `-Z` side.
    NegZ,
}

impl ViewAxis {
    /// All the views, in capture order.
    pub const ALL: [ViewAxis; 6] = [
        ViewAxis::PosX,
        ViewAxis::NegX,
        ViewAxis::PosY,
        ViewAxis::NegY,
        ViewAxis::PosZ,
        ViewAxis::NegZ,
    ];

    /// The unit direction the camera looks toward.
    pub fn forward(self) -> Vector<Real> {
        match self {
            ViewAxis::PosX => -Vector::x(),
            ViewAxis::NegX => Vector::x(),
            ViewAxis::PosY => -Vector::y(),
            ViewAxis::NegY => Vector::y(),
            ViewAxis::PosZ => -Vector::z(),
            ViewAxis::NegZ => Vector::z(),
        }
    }

    /// The up direction of the camera, orthogonal to [`Self::forward`].
    pub fn up(self) -> Vector<Real> {
        match self {
            ViewAxis::PosX | ViewAxis::NegX | ViewAxis::PosZ | ViewAxis::NegZ => Vector::y(),
            ViewAxis::PosY => -Vector::z(),
            ViewAxis::NegY => Vector::z(),
        }
    }
}

/// An orthographic camera.
///
/// The view volume is the box spanned by `right * [-half_width, half_width]`,
/// `up * [-half_height, half_height]`, and `forward * [near, far]` from `position`.
/// Normalized device coordinates are in `[-1, 1]` on the image plane with `y` pointing
/// up, and depth is in `[0, 1]` from the near plane to the far plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthographicCamera {
    /// The camera position.
    pub position: Point<Real>,
    /// The unit view direction.
    pub forward: Vector<Real>,
    /// The unit direction of increasing image `x`.
    pub right: Vector<Real>,
    /// The unit direction of increasing image `y`.
    pub up: Vector<Real>,
    /// Half the width of the view volume.
    pub half_width: Real,
    /// Half the height of the view volume.
    pub half_height: Real,
    /// The distance from `position` to the near plane.
    pub near: Real,
    /// The distance from `position` to the far plane.
    pub far: Real,
}

impl OrthographicCamera {
    /// The camera capturing `aabb` from `axis`.
    ///
    /// The image plane covers exactly the cross-section of `aabb`, so every pixel of the
    /// image samples the box. A cross-section axis with a zero extent gets a half extent
    /// of `margin` instead. The near and far planes are `margin` away from the box.
    pub fn framing(aabb: &Aabb, axis: ViewAxis, margin: Real) -> Self {
        let forward = axis.forward();
        let up = axis.up();
        let right = forward.cross(&up);
        let half_extents = aabb.half_extents();
        let image_half_extent = |dir: &Vector<Real>| {
            let half = half_extents.dot(&dir.abs());
            if half > 0.0 {
                half
            } else {
                margin
            }
        };

        let half_depth = half_extents.dot(&forward.abs());
        let position = aabb.center() - forward * (half_depth + margin * 2.0);

        Self {
            position,
            forward,
            right,
            up,
            half_width: image_half_extent(&right),
            half_height: image_half_extent(&up),
            near: margin,
            far: half_depth * 2.0 + margin * 3.0,
        }
    }

    /// The coordinates of `pt` along the `right`, `up`, and `forward` axes, relative to
    /// the camera position.
    #[inline]
    pub fn to_view_space(&self, pt: &Point<Real>) -> Vector<Real> {
        let dpt = pt - self.position;
        Vector::new(dpt.dot(&self.right), dpt.dot(&self.up), dpt.dot(&self.forward))
    }

    /// The normalized device coordinates `(x, y, depth)` of `pt`.
    #[inline]
    pub fn project(&self, pt: &Point<Real>) -> Point<Real> {
        let view = self.to_view_space(pt);
        Point::new(
            view.x / self.half_width,
            view.y / self.half_height,
            (view.z - self.near) / (self.far - self.near),
        )
    }

    /// The world-space point with the normalized device coordinates `(x, y, depth)`.
    #[inline]
    pub fn unproject(&self, x: Real, y: Real, depth: Real) -> Point<Real> {
        let distance = self.near + depth * (self.far - self.near);
        self.position
            + self.forward * distance
            + self.right * (x * self.half_width)
            + self.up * (y * self.half_height)
    }

    /// The normalized device coordinates of the center of the pixel `(px, py)` of a
    /// `width x height` image whose first row is at the top.
    #[inline]
    pub fn pixel_to_ndc(px: u32, py: u32, width: u32, height: u32) -> (Real, Real) {
        let x = (px as Real + 0.5) / width as Real * 2.0 - 1.0;
        let y = 1.0 - (py as Real + 0.5) / height as Real * 2.0;
        (x, y)
    }

    /// The continuous pixel coordinates of the normalized device coordinates `(x, y)`.
    #[inline]
    pub fn ndc_to_pixel(x: Real, y: Real, width: u32, height: u32) -> (Real, Real) {
        ((x + 1.0) * 0.5 * width as Real, (1.0 - y) * 0.5 * height as Real)
    }
}
