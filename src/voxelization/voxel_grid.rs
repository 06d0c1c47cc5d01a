use crate::math::{Real, Rgb, VoxelKey};
use crate::utils::hashmap::{self, Entry, HashMap};
use crate::voxelization::voxel::{sort_voxels, Voxel};

/// The running color sum and sample count of one voxel cell.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ColorAccumulator {
    sum: Rgb,
    count: u32,
}

impl ColorAccumulator {
    #[inline]
    fn new(color: Rgb) -> Self {
        Self {
            sum: color,
            count: 1,
        }
    }
}

/// A sparse set of voxel cells, each accumulating the colors of the samples that
/// landed in it.
///
/// The grid only grows while samples are staged. Once [`VoxelGrid::finalize`] is called
/// it is consumed and converted into the final list of [`Voxel`]s.
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    cells: HashMap<VoxelKey, ColorAccumulator>,
    num_samples: usize,
}

impl VoxelGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grid able to hold at least `capacity` cells without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: hashmap::with_capacity(capacity),
            num_samples: 0,
        }
    }

    /// Adds a color sample to the cell `key`, creating the cell if needed.
    #[inline]
    pub fn add_sample(&mut self, key: VoxelKey, color: Rgb) {
        self.num_samples += 1;
        match self.cells.entry(key) {
            Entry::Occupied(mut e) => {
                let acc = e.get_mut();
                acc.sum += color;
                acc.count += 1;
            }
            Entry::Vacant(e) => {
                let _ = e.insert(ColorAccumulator::new(color));
            }
        }
    }

    /// Sets the color of the cell `key` if it does not exist yet.
    ///
    /// Returns `true` if the cell was created. An existing cell is left untouched, so
    /// the first sample written to a cell determines its color.
    #[inline]
    pub fn insert_if_absent(&mut self, key: VoxelKey, color: Rgb) -> bool {
        match self.cells.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                self.num_samples += 1;
                let _ = e.insert(ColorAccumulator::new(color));
                true
            }
        }
    }

    /// Moves every sample of `other` into `self`.
    pub fn merge(&mut self, other: VoxelGrid) {
        self.num_samples += other.num_samples;
        for (key, acc) in other.cells {
            match self.cells.entry(key) {
                Entry::Occupied(mut e) => {
                    let mine = e.get_mut();
                    mine.sum += acc.sum;
                    mine.count += acc.count;
                }
                Entry::Vacant(e) => {
                    let _ = e.insert(acc);
                }
            }
        }
    }

    /// The number of distinct cells touched so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Does this grid contain no cell?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Does this grid contain the cell `key`?
    #[inline]
    pub fn contains(&self, key: &VoxelKey) -> bool {
        self.cells.contains_key(key)
    }

    /// The total number of samples accepted by this grid.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Converts the accumulated samples into one voxel per cell.
    ///
    /// Each voxel color is the arithmetic mean of its samples, clamped to `[0, 1]`.
    /// The voxels are sorted by their `(x, y, z)` coordinates.
    pub fn finalize(self) -> Vec<Voxel> {
        let mut voxels: Vec<_> = self
            .cells
            .into_iter()
            .filter(|(_, acc)| acc.count > 0)
            .map(|(key, acc)| {
                let mean = acc.sum / acc.count as Real;
                Voxel::new(key, mean.map(|c| c.clamp(0.0, 1.0)))
            })
            .collect();

        sort_voxels(&mut voxels);
        voxels
    }
}
