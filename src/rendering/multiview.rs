use crate::math::{Real, Rgb};
use crate::rendering::{
    unpack_depth, OrthographicCamera, RenderBackend, RenderError, RenderTargetId, Scene,
    SceneMaterial, ViewAxis,
};
use crate::voxelization::{VoxelGrid, VoxelGridFrame};

/// The color and depth render targets leased for one capture.
///
/// Both targets are released when this is dropped, on every exit path of the capture.
struct CaptureTargets<'a, B: RenderBackend + ?Sized> {
    backend: &'a mut B,
    color: RenderTargetId,
    depth: RenderTargetId,
    size: u32,
}

impl<'a, B: RenderBackend + ?Sized> CaptureTargets<'a, B> {
    fn acquire(backend: &'a mut B, size: u32) -> Result<Self, RenderError> {
        let color = backend.create_render_target(size, size)?;
        let depth = match backend.create_render_target(size, size) {
            Ok(depth) => depth,
            Err(e) => {
                backend.release_render_target(color);
                return Err(e);
            }
        };

        Ok(Self {
            backend,
            color,
            depth,
            size,
        })
    }

    fn read(&mut self, target: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError> {
        let pixels = self.backend.read_pixels(target)?;
        let expected = self.size as usize * self.size as usize;
        if pixels.len() != expected {
            return Err(RenderError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(pixels)
    }
}

impl<B: RenderBackend + ?Sized> Drop for CaptureTargets<'_, B> {
    fn drop(&mut self) {
        self.backend.release_render_target(self.color);
        self.backend.release_render_target(self.depth);
    }
}

/// Reconstructs the surface voxels of a scene from six orthographic captures.
///
/// Each view is rendered twice into square targets of `supersampling * resolution`
/// pixels: once with the scene materials, once with every material replaced by
/// [`SceneMaterial::DepthPacking`]. Every pixel covered in the color capture is moved
/// back to world-space using its unpacked depth, and the first view hitting a voxel
/// cell sets its color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MultiViewRasterizer {
    /// The number of pixels per voxel along each image axis.
    pub supersampling: u32,
}

impl Default for MultiViewRasterizer {
    fn default() -> Self {
        Self { supersampling: 2 }
    }
}

impl MultiViewRasterizer {
    /// Captures `scene` from the six axis-aligned views of `frame` into a new voxel grid.
    ///
    /// The render targets are released, and the scene materials restored, before this
    /// returns, whether it succeeded or not.
    pub fn capture<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        scene: &mut Scene,
        frame: &VoxelGridFrame,
        resolution: u32,
    ) -> Result<VoxelGrid, RenderError> {
        let size = resolution.saturating_mul(self.supersampling.max(1));
        let mut targets = CaptureTargets::acquire(backend, size)?;
        let mut grid = VoxelGrid::new();
        let mut num_covered = 0;

        for axis in ViewAxis::ALL {
            let camera = OrthographicCamera::framing(frame.aabb(), axis, frame.voxel_size());
            targets.backend.set_camera(&camera);

            targets.backend.render(scene, targets.color)?;
            let color = targets.read(targets.color)?;

            {
                let depth_scene = scene.override_materials(SceneMaterial::DepthPacking);
                targets.backend.render(&depth_scene, targets.depth)?;
            }
            let depth = targets.read(targets.depth)?;

            let num_cells = grid.len();
            let covered = accumulate_view(&camera, frame, size, &color, &depth, &mut grid);
            num_covered += covered;

            log::trace!(
                "View {:?}: {} covered pixels, {} new voxel cells.",
                axis,
                covered,
                grid.len() - num_cells
            );
        }

        log::debug!(
            "Captured {} covered pixels from six {}x{} views into {} voxel cells.",
            num_covered,
            size,
            size,
            grid.len()
        );

        Ok(grid)
    }
}

fn accumulate_view(
    camera: &OrthographicCamera,
    frame: &VoxelGridFrame,
    size: u32,
    color: &[[u8; 4]],
    depth: &[[u8; 4]],
    grid: &mut VoxelGrid,
) -> usize {
    let mut covered = 0;

    for (i, (rgba, packed)) in color.iter().zip(depth).enumerate() {
        if rgba[3] == 0 {
            continue;
        }

        covered += 1;
        let px = (i % size as usize) as u32;
        let py = (i / size as usize) as u32;
        let (x, y) = OrthographicCamera::pixel_to_ndc(px, py, size, size);
        let pt = camera.unproject(x, y, unpack_depth(*packed));
        let color = Rgb::new(rgba[0] as Real, rgba[1] as Real, rgba[2] as Real) / 255.0;
        let _ = grid.insert_if_absent(frame.key_of(&pt), color);
    }

    covered
}
