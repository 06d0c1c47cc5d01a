use crate::{assert_colors_in_unit_range, assert_unique_keys, cuboid};
use meshvox::math::{Point, Rgb, Uv};
use meshvox::rendering::{
    OrthographicCamera, RenderBackend, RenderError, RenderTargetId, Scene, SceneMaterial,
    SceneNode, SoftwareRasterizer,
};
use meshvox::shape::{SurfaceMaterial, Texture, TexturedMesh};
use meshvox::{voxelize_multiview, VoxelizationError, VoxelizationParameters};
use std::sync::Arc;

fn red() -> Rgb {
    Rgb::new(1.0, 0.0, 0.0)
}

fn blue() -> Rgb {
    Rgb::new(0.0, 0.0, 1.0)
}

fn unit_cube_scene(color: Rgb) -> Scene {
    let mut scene = Scene::new();
    let _ = scene.add(SceneNode::new(cuboid(
        Point::origin(),
        Point::new(1.0, 1.0, 1.0),
        color,
    )));
    scene
}

fn surface_materials_restored(scene: &Scene) -> bool {
    scene
        .nodes()
        .iter()
        .all(|n| matches!(n.material, SceneMaterial::Surface(_)))
}

/// A backend whose render targets never get any pixel covered.
#[derive(Default)]
struct BlankBackend {
    targets: Vec<Option<usize>>,
}

impl RenderBackend for BlankBackend {
    fn create_render_target(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<RenderTargetId, RenderError> {
        self.targets.push(Some(width as usize * height as usize));
        Ok(RenderTargetId(self.targets.len() - 1))
    }

    fn release_render_target(&mut self, target: RenderTargetId) {
        self.targets[target.0] = None;
    }

    fn set_camera(&mut self, _: &OrthographicCamera) {}

    fn render(&mut self, _: &Scene, _: RenderTargetId) -> Result<(), RenderError> {
        Ok(())
    }

    fn read_pixels(&mut self, target: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError> {
        let len = self.targets[target.0].ok_or(RenderError::UnknownTarget(target))?;
        Ok(vec![[0; 4]; len])
    }
}

/// A software backend failing on its n-th render call.
struct FailingBackend {
    inner: SoftwareRasterizer,
    renders_before_failure: usize,
}

impl RenderBackend for FailingBackend {
    fn create_render_target(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<RenderTargetId, RenderError> {
        self.inner.create_render_target(width, height)
    }

    fn release_render_target(&mut self, target: RenderTargetId) {
        self.inner.release_render_target(target)
    }

    fn set_camera(&mut self, camera: &OrthographicCamera) {
        self.inner.set_camera(camera)
    }

    fn render(&mut self, scene: &Scene, target: RenderTargetId) -> Result<(), RenderError> {
        if self.renders_before_failure == 0 {
            return Err(RenderError::UnknownTarget(target));
        }

        self.renders_before_failure -= 1;
        self.inner.render(scene, target)
    }

    fn read_pixels(&mut self, target: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError> {
        self.inner.read_pixels(target)
    }
}

#[test]
fn unit_cube_gives_its_surface_shell() {
    let mut scene = unit_cube_scene(red());
    let mut backend = SoftwareRasterizer::new();

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(4),
    )
    .unwrap();

    // 4x4x4 cells minus the 2x2x2 interior.
    assert_eq!(voxels.len(), 56);
    assert_unique_keys(&voxels);
    assert!(voxels.iter().all(|v| v.color == red()));
    assert_eq!(backend.num_live_targets(), 0);
    assert!(surface_materials_restored(&scene));
}

#[test]
fn coarse_resolutions_still_cover_the_cube() {
    let mut scene = unit_cube_scene(red());
    let mut backend = SoftwareRasterizer::new();

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(1),
    )
    .unwrap();
    assert_eq!(voxels.len(), 1);
    assert_eq!(voxels[0].coords, Point::origin());
    assert_eq!(voxels[0].color, red());

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(2),
    )
    .unwrap();
    assert_eq!(voxels.len(), 8);
    assert_unique_keys(&voxels);
    assert_eq!(backend.num_live_targets(), 0);
}

#[test]
fn texture_colors_are_captured() {
    // 2x1 texture: left half black, right half white.
    let texture = Texture::from_rgb8(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
    let quad = TexturedMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
        Some(vec![
            Uv::new(0.0, 0.0),
            Uv::new(1.0, 0.0),
            Uv::new(1.0, 1.0),
            Uv::new(0.0, 1.0),
        ]),
        SurfaceMaterial::with_texture(Arc::new(texture)),
    )
    .unwrap();
    let mut scene = Scene::new();
    let _ = scene.add(SceneNode::new(quad));
    let mut backend = SoftwareRasterizer::new();

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(4),
    )
    .unwrap();

    // Cell columns 0..4 are centered to -1..=2.
    assert_eq!(voxels.len(), 16);
    assert_unique_keys(&voxels);
    for voxel in &voxels {
        let expected = if voxel.coords.x <= 0 { 0.0 } else { 1.0 };
        assert_eq!(voxel.color, Rgb::repeat(expected));
    }
}

#[test]
fn first_view_hitting_a_cell_sets_its_color() {
    let mut scene = Scene::new();
    let _ = scene.add(SceneNode::new(cuboid(
        Point::origin(),
        Point::new(1.0, 1.0, 1.0),
        red(),
    )));
    let _ = scene.add(SceneNode::new(cuboid(
        Point::new(3.0, 0.0, 0.0),
        Point::new(4.0, 1.0, 1.0),
        blue(),
    )));
    let mut backend = SoftwareRasterizer::new();

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(8),
    )
    .unwrap();

    assert_unique_keys(&voxels);
    assert_colors_in_unit_range(&voxels);
    assert!(voxels.iter().any(|v| v.color == red()));
    assert!(voxels.iter().any(|v| v.color == blue()));
    for voxel in &voxels {
        if voxel.color == red() {
            assert!(voxel.coords.x <= -1);
        } else {
            assert_eq!(voxel.color, blue());
            assert!(voxel.coords.x >= 2);
        }
    }
}

#[test]
fn missing_backend_is_an_error() {
    let mut scene = unit_cube_scene(red());
    assert_eq!(
        voxelize_multiview(None, &mut scene, &VoxelizationParameters::default()),
        Err(VoxelizationError::MissingBackend)
    );
}

#[test]
fn scene_without_mesh_gives_no_voxel() {
    let mut backend = SoftwareRasterizer::new();
    let params = VoxelizationParameters::default();

    let mut scene = Scene::new();
    let voxels = voxelize_multiview(Some(&mut backend), &mut scene, &params).unwrap();
    assert!(voxels.is_empty());

    let _ = scene.add(SceneNode::new(TexturedMesh::empty(SurfaceMaterial::default())));
    let voxels = voxelize_multiview(Some(&mut backend), &mut scene, &params).unwrap();
    assert!(voxels.is_empty());
}

#[test]
fn views_without_coverage_give_no_voxel() {
    let mut scene = unit_cube_scene(red());
    let mut backend = BlankBackend::default();

    let voxels = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(6),
    )
    .unwrap();

    assert!(voxels.is_empty());
    assert!(backend.targets.iter().all(|t| t.is_none()));
}

#[test]
fn backend_failure_restores_scene_and_releases_targets() {
    // The first color pass succeeds, the first depth pass fails.
    let mut scene = unit_cube_scene(red());
    let mut backend = FailingBackend {
        inner: SoftwareRasterizer::new(),
        renders_before_failure: 1,
    };

    let result = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(4),
    );

    assert!(matches!(
        result,
        Err(VoxelizationError::Render(RenderError::UnknownTarget(_)))
    ));
    assert!(surface_materials_restored(&scene));
    assert_eq!(backend.inner.num_live_targets(), 0);
}

#[test]
fn undersized_readback_is_reported() {
    struct ShortReadback(BlankBackend);

    impl RenderBackend for ShortReadback {
        fn create_render_target(
            &mut self,
            width: u32,
            height: u32,
        ) -> Result<RenderTargetId, RenderError> {
            self.0.create_render_target(width, height)
        }

        fn release_render_target(&mut self, target: RenderTargetId) {
            self.0.release_render_target(target)
        }

        fn set_camera(&mut self, camera: &OrthographicCamera) {
            self.0.set_camera(camera)
        }

        fn render(&mut self, scene: &Scene, target: RenderTargetId) -> Result<(), RenderError> {
            self.0.render(scene, target)
        }

        fn read_pixels(&mut self, _: RenderTargetId) -> Result<Vec<[u8; 4]>, RenderError> {
            Ok(vec![[255; 4]; 3])
        }
    }

    let mut scene = unit_cube_scene(red());
    let mut backend = ShortReadback(BlankBackend::default());
    let result = voxelize_multiview(
        Some(&mut backend),
        &mut scene,
        &VoxelizationParameters::with_resolution(2),
    );

    assert_eq!(
        result,
        Err(VoxelizationError::Render(RenderError::PixelCount {
            expected: 16,
            actual: 3
        }))
    );
    assert!(backend.0.targets.iter().all(|t| t.is_none()));
}
