use crate::assert_unique_keys;
use meshvox::math::{Rgb, VoxelKey};
use meshvox::voxelization::{smooth_voxels, SmoothingParameters};
use meshvox::Voxel;

/// The 26 boundary cells of a 3x3x3 block.
fn shell() -> Vec<Voxel> {
    let mut voxels = vec![];
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                if [x, y, z].iter().any(|c| *c == 0 || *c == 2) {
                    let color = Rgb::new(x as f32, y as f32, z as f32) / 2.0;
                    voxels.push(Voxel::new(VoxelKey::new(x, y, z), color));
                }
            }
        }
    }
    voxels
}

#[test]
fn no_iteration_returns_the_input() {
    let voxels = shell();
    assert_eq!(smooth_voxels(&voxels, &SmoothingParameters::default()), voxels);
}

#[test]
fn missing_corner_is_filled() {
    let corner = VoxelKey::new(2, 2, 2);
    let voxels: Vec<_> = shell().into_iter().filter(|v| v.coords != corner).collect();
    assert_eq!(voxels.len(), 25);

    let smoothed = smooth_voxels(&voxels, &SmoothingParameters::with_iterations(1));
    assert_unique_keys(&smoothed);

    let filled = smoothed.iter().find(|v| v.coords == corner).unwrap();
    // The corner inherits the color of one of its three neighbors.
    let neighbor_colors = [
        Rgb::new(0.5, 1.0, 1.0),
        Rgb::new(1.0, 0.5, 1.0),
        Rgb::new(1.0, 1.0, 0.5),
    ];
    assert!(neighbor_colors.contains(&filled.color));

    // Every shell cell has three or four occupied neighbors and is kept.
    for voxel in &voxels {
        assert!(smoothed.iter().any(|v| v.coords == voxel.coords));
    }
}

#[test]
fn iterations_run_exactly_n_times() {
    let voxels = vec![
        Voxel::new(VoxelKey::new(0, 0, 0), Rgb::zeros()),
        Voxel::new(VoxelKey::new(1, 0, 0), Rgb::zeros()),
        Voxel::new(VoxelKey::new(2, 0, 0), Rgb::zeros()),
    ];

    // The line shrinks to its middle cell, then disappears.
    let once = smooth_voxels(&voxels, &SmoothingParameters::with_iterations(1));
    assert_eq!(once.len(), 1);
    let twice = smooth_voxels(&voxels, &SmoothingParameters::with_iterations(2));
    assert!(twice.is_empty());
}
