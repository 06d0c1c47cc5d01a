use crate::math::{Rgb, Vector, VoxelKey};
use crate::utils::hashmap::{self, HashMap, HashSet};
use crate::voxelization::voxel::sort_voxels;
use crate::voxelization::{SmoothingParameters, Voxel};

/// The offsets of the six face-adjacent neighbors of a voxel.
pub const NEIGHBOR_OFFSETS: [[i32; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

#[inline]
fn neighbors(key: VoxelKey) -> impl Iterator<Item = VoxelKey> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |offset| key + Vector::from(offset))
}

#[inline]
fn count_occupied_neighbors(occupied: &HashSet<VoxelKey>, key: VoxelKey) -> usize {
    neighbors(key).filter(|n| occupied.contains(n)).count()
}

/// Runs `params.iterations` steps of neighbor-count smoothing on `voxels`.
///
/// Each step reads a snapshot of the current voxel set and builds a new one:
/// - a voxel is kept if its number of occupied face neighbors lies in
///   `[keep_min_neighbors, keep_max_neighbors]`;
/// - every empty face neighbor of a voxel with at least `fill_min_neighbors` occupied
///   neighbors of its own is filled with the color of that voxel.
///
/// A cell proposed several times in the same step is only inserted once, by the first
/// voxel (in `(x, y, z)` order) that proposed it. The output is sorted, and is equal
/// to the input if `params.iterations == 0` or if `voxels` is empty.
pub fn smooth_voxels(voxels: &[Voxel], params: &SmoothingParameters) -> Vec<Voxel> {
    if params.iterations == 0 || voxels.is_empty() {
        return voxels.to_vec();
    }

    let mut current = voxels.to_vec();
    sort_voxels(&mut current);

    for step in 0..params.iterations {
        current = smoothing_step(&current, params);
        log::trace!("Smoothing step {}: {} voxels.", step, current.len());
    }

    log::debug!(
        "Smoothed {} voxels into {} after {} iterations.",
        voxels.len(),
        current.len(),
        params.iterations
    );

    current
}

fn smoothing_step(voxels: &[Voxel], params: &SmoothingParameters) -> Vec<Voxel> {
    let keep_range = params.keep_min_neighbors..=params.keep_max_neighbors;
    let occupied: HashSet<VoxelKey> = voxels.iter().map(|v| v.coords).collect();
    let mut next: HashMap<VoxelKey, Rgb> = hashmap::with_capacity(voxels.len());

    for voxel in voxels {
        let num_neighbors = count_occupied_neighbors(&occupied, voxel.coords);
        if keep_range.contains(&num_neighbors) {
            let _ = next.entry(voxel.coords).or_insert(voxel.color);
        }

        for neighbor in neighbors(voxel.coords) {
            if occupied.contains(&neighbor) {
                continue;
            }

            if count_occupied_neighbors(&occupied, neighbor) >= params.fill_min_neighbors {
                let _ = next.entry(neighbor).or_insert(voxel.color);
            }
        }
    }

    let mut result: Vec<_> = next
        .into_iter()
        .map(|(coords, color)| Voxel::new(coords, color))
        .collect();
    sort_voxels(&mut result);
    result
}
