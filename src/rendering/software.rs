use crate::math::{Point, Real, Rgb, DEFAULT_EPSILON};
use crate::rendering::{
    pack_depth, OrthographicCamera, RenderBackend, RenderError, RenderTargetId, Scene,
    SceneMaterial,
};
use crate::shape::{sample_texture_color, TexturedTriangle};
use slab::Slab;

const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 0];

struct SoftwareTarget {
    width: u32,
    height: u32,
    color: Vec<[u8; 4]>,
    depth: Vec<Real>,
}

impl SoftwareTarget {
    fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![CLEAR_COLOR; len],
            depth: vec![Real::INFINITY; len],
        }
    }

    fn clear(&mut self) {
        self.color.fill(CLEAR_COLOR);
        self.depth.fill(Real::INFINITY);
    }
}

/// A [`RenderBackend`] rasterizing triangles on the CPU.
///
/// Triangles are rasterized at pixel centers with edge functions, without back-face
/// culling. Fragments outside of the camera depth range are clipped and the fragment
/// nearest to the camera wins. Surface materials are unlit: a fragment gets the texture
/// color under its interpolated texture coordinates, or the material fallback color.
pub struct SoftwareRasterizer {
    targets: Slab<SoftwareTarget>,
    camera: Option<OrthographicCamera>,
    max_target_size: u32,
}

impl Default for SoftwareRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareRasterizer {
    /// The default largest width or height of a render target.
    pub const DEFAULT_MAX_TARGET_SIZE: u32 = 4096;

    /// A rasterizer without any render target.
    pub fn new() -> Self {
        Self::with_max_target_size(Self::DEFAULT_MAX_TARGET_SIZE)
    }

    /// A rasterizer refusing to allocate render targets wider or taller than `max_target_size`.
    pub fn with_max_target_size(max_target_size: u32) -> Self {
        Self {
            targets: Slab::new(),
            camera: None,
            max_target_size,
        }
    }

    /// The number of render targets allocated and not released yet.
    pub fn num_live_targets(&self) -> usize {
        self.targets.len()
    }
}

impl RenderBackend for SoftwareRasterizer {
    fn create_render_target(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<RenderTargetId, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::ZeroSizedTarget { width, height });
        }

        if width > self.max_target_size || height > self.max_target_size {
            return Err(RenderError::TargetAllocation { width, height });
        }

        let id = self.targets.insert(SoftwareTarget::new(width, height));
        Ok(RenderTargetId(id))
    }

    fn release_render_target(&mut self, target: RenderTargetId) {
        if self.targets.contains(target.0) {
            let _ = self.targets.remove(target.0);
        }
    }

    fn set_camera(&mut self, camera: &OrthographicCamera) {
        self.camera = Some(*camera);
    }

    fn render(&mut self, scene: &Scene, target: RenderTargetId) -> Result<(), RenderError> {
        let camera = self.camera.ok_or(RenderError::MissingCamera)?;
        let target = self
            .targets
            .get_mut(target.0)
            .ok_or(RenderError::UnknownTarget(target))?;

        target.clear();

        for node in scene.nodes() {
            for triangle in node.mesh.triangles() {
                rasterize_triangle(target, &camera, &triangle, &node.material);
            }
        }

        Ok(())
    }

    fn read_pixels(&mut self, target: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError> {
        self.targets
            .get(target.0)
            .map(|t| t.color.clone())
            .ok_or(RenderError::UnknownTarget(target))
    }
}

#[inline]
fn edge(a: [Real; 2], b: [Real; 2], p: [Real; 2]) -> Real {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

#[inline]
fn color_to_rgba8(color: Rgb) -> [u8; 4] {
    let [r, g, b]: [u8; 3] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8).into();
    [r, g, b, 255]
}

fn rasterize_triangle(
    target: &mut SoftwareTarget,
    camera: &OrthographicCamera,
    triangle: &TexturedTriangle,
    material: &SceneMaterial,
) {
    let (width, height) = (target.width, target.height);
    let ndc: [Point<Real>; 3] = triangle.triangle.vertices().map(|pt| camera.project(&pt));
    let screen = ndc.map(|p| {
        let (x, y) = OrthographicCamera::ndc_to_pixel(p.x, p.y, width, height);
        [x, y]
    });

    let area = edge(screen[0], screen[1], screen[2]);
    if area.abs() <= DEFAULT_EPSILON {
        // Seen edge-on, or degenerate.
        return;
    }

    let mins_x = screen.iter().map(|p| p[0]).fold(Real::MAX, Real::min);
    let maxs_x = screen.iter().map(|p| p[0]).fold(-Real::MAX, Real::max);
    let mins_y = screen.iter().map(|p| p[1]).fold(Real::MAX, Real::min);
    let maxs_y = screen.iter().map(|p| p[1]).fold(-Real::MAX, Real::max);

    if maxs_x < 0.0 || maxs_y < 0.0 || mins_x > width as Real || mins_y > height as Real {
        return;
    }

    let x0 = mins_x.floor().max(0.0) as u32;
    let x1 = (maxs_x.ceil() as u32).min(width);
    let y0 = mins_y.floor().max(0.0) as u32;
    let y1 = (maxs_y.ceil() as u32).min(height);

    for py in y0..y1 {
        for px in x0..x1 {
            let p = [px as Real + 0.5, py as Real + 0.5];
            let weights = [
                edge(screen[1], screen[2], p) / area,
                edge(screen[2], screen[0], p) / area,
                edge(screen[0], screen[1], p) / area,
            ];

            if weights.iter().any(|w| *w < 0.0) {
                continue;
            }

            let depth = weights[0] * ndc[0].z + weights[1] * ndc[1].z + weights[2] * ndc[2].z;
            if !(0.0..=1.0).contains(&depth) {
                continue;
            }

            let i = py as usize * width as usize + px as usize;
            if depth >= target.depth[i] {
                continue;
            }

            target.depth[i] = depth;
            target.color[i] = match material {
                SceneMaterial::Surface(surface) => {
                    color_to_rgba8(sample_texture_color(surface, triangle.uv_at(weights)))
                }
                SceneMaterial::DepthPacking => pack_depth(depth),
            };
        }
    }
}
