use meshvox::math::{Point, Real, Rgb};
use meshvox::shape::{SurfaceMaterial, TexturedMesh};
use meshvox::utils::hashmap::HashSet;
use meshvox::Voxel;

mod centering;
mod multiview;
mod smoothing;

/// An axis-aligned box made of twelve triangles.
pub fn cuboid(mins: Point<Real>, maxs: Point<Real>, color: Rgb) -> TexturedMesh {
    let vertices = (0..8)
        .map(|i| {
            Point::new(
                if i & 1 == 0 { mins.x } else { maxs.x },
                if i & 2 == 0 { mins.y } else { maxs.y },
                if i & 4 == 0 { mins.z } else { maxs.z },
            )
        })
        .collect();
    let indices = vec![
        [0, 2, 1],
        [1, 2, 3],
        [4, 5, 6],
        [5, 7, 6],
        [0, 1, 4],
        [1, 5, 4],
        [2, 6, 3],
        [3, 6, 7],
        [0, 4, 2],
        [2, 4, 6],
        [1, 3, 5],
        [3, 7, 5],
    ];

    TexturedMesh::new(vertices, indices, None, SurfaceMaterial::with_color(color)).unwrap()
}

pub fn assert_unique_keys(voxels: &[Voxel]) {
    let keys: HashSet<_> = voxels.iter().map(|v| v.coords).collect();
    assert_eq!(keys.len(), voxels.len());
}

pub fn assert_colors_in_unit_range(voxels: &[Voxel]) {
    assert!(voxels
        .iter()
        .all(|v| v.color.iter().all(|c| (0.0..=1.0).contains(c))));
}
