use crate::cuboid;
use meshvox::math::{Point, Rgb, Vector3, VoxelKey};
use meshvox::voxelization::{center_voxels, voxel_bounds};
use meshvox::{voxelize_surface, Voxel, VoxelizationParameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_centered(voxels: &[Voxel]) {
    let (mins, maxs) = voxel_bounds(voxels).unwrap();
    assert_eq!(mins.coords + (maxs - mins) / 2, Vector3::zeros());
}

#[test]
fn voxelized_meshes_are_centered() {
    let mut rng = StdRng::seed_from_u64(17);
    for (mins, maxs) in [
        (Point::new(10.0, 10.0, 10.0), Point::new(11.0, 13.0, 12.0)),
        (Point::new(-5.0, 0.0, 2.0), Point::new(-4.5, 0.25, 2.75)),
    ] {
        let mesh = cuboid(mins, maxs, Rgb::new(0.5, 0.25, 1.0));
        let voxels =
            voxelize_surface(&mesh, &VoxelizationParameters::with_resolution(7), &mut rng).unwrap();
        assert_centered(&voxels);
    }
}

#[test]
fn centering_twice_is_centering_once() {
    let mut voxels: Vec<_> = [[3, 8, -2], [9, 8, 0], [4, 12, 5], [6, 9, 1]]
        .into_iter()
        .map(|k| Voxel::new(VoxelKey::from(k), Rgb::new(0.0, 0.5, 1.0)))
        .collect();

    let shift = center_voxels(&mut voxels);
    assert_eq!(shift, Vector3::new(6, 10, 1));
    assert_centered(&voxels);

    let once = voxels.clone();
    let _ = center_voxels(&mut voxels);
    assert_eq!(voxels, once);
}

#[test]
fn centering_nothing_is_a_no_op() {
    let mut voxels: Vec<Voxel> = vec![];
    assert_eq!(center_voxels(&mut voxels), Vector3::zeros());
    assert!(voxels.is_empty());
}
