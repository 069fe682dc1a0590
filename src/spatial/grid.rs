//! Uniform bucket grid for threshold-bounded neighbor queries
//!
//! Bins instances into square cells at least as wide as the distance
//! threshold, so every neighbor of an instance lies in its own cell or one of
//! the eight adjacent cells.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::spatial::instance::SpatialInstance;
use ndarray::Array2;

/// Cell grid over the dataset's bounding box
///
/// Each cell stores arena indices in insertion order, so traversals that
/// follow arena order remain deterministic for a fixed input.
#[derive(Debug, Clone)]
pub struct BucketGrid {
    cells: Array2<Vec<usize>>,
    min_x: f64,
    min_y: f64,
    cell_size: f64,
}

impl BucketGrid {
    /// Bin instances into cells of at least `cell_size` on each side
    ///
    /// Cells are widened beyond `cell_size` when needed to keep the grid
    /// near one occupied instance per cell and under the dimension cap, so
    /// memory stays proportional to the dataset. Returns `None` when the
    /// grid cannot be built meaningfully: no instances, a non-positive or
    /// non-finite cell size, or a bounding box with non-finite extent.
    /// Callers fall back to a linear scan in those cases.
    pub fn build(instances: &[SpatialInstance], cell_size: f64) -> Option<Self> {
        if instances.is_empty() || cell_size <= 0.0 || !cell_size.is_finite() {
            return None;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for instance in instances {
            min_x = min_x.min(instance.x);
            min_y = min_y.min(instance.y);
            max_x = max_x.max(instance.x);
            max_y = max_y.max(instance.y);
        }
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }

        // Cells may grow but never shrink below the requested size, which is
        // what keeps the one-cell neighborhood search exhaustive.
        let target_dim = (instances.len() as f64)
            .sqrt()
            .ceil()
            .clamp(1.0, MAX_GRID_DIMENSION as f64);
        let side = cell_size
            .max((max_x - min_x) / target_dim)
            .max((max_y - min_y) / target_dim);

        let cols = ((max_x - min_x) / side).floor() as usize + 1;
        let rows = ((max_y - min_y) / side).floor() as usize + 1;

        let mut cells = Array2::from_elem((rows, cols), Vec::new());
        for (index, instance) in instances.iter().enumerate() {
            let col = (((instance.x - min_x) / side).floor() as usize).min(cols.saturating_sub(1));
            let row = (((instance.y - min_y) / side).floor() as usize).min(rows.saturating_sub(1));
            if let Some(cell) = cells.get_mut((row, col)) {
                cell.push(index);
            }
        }

        Some(Self {
            cells,
            min_x,
            min_y,
            cell_size: side,
        })
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    fn cell_of(&self, x: f64, y: f64) -> (usize, usize) {
        let (rows, cols) = self.cells.dim();
        let col = (((x - self.min_x) / self.cell_size).floor() as usize).min(cols.saturating_sub(1));
        let row = (((y - self.min_y) / self.cell_size).floor() as usize).min(rows.saturating_sub(1));
        (row, col)
    }

    /// Visit every arena index in the 3x3 cell block around a point
    ///
    /// Cells are visited top-to-bottom then left-to-right, and indices within
    /// a cell in insertion order, so the traversal is deterministic.
    pub fn for_each_nearby<F>(&self, x: f64, y: f64, mut visit: F)
    where
        F: FnMut(usize),
    {
        let (rows, cols) = self.cells.dim();
        if rows == 0 || cols == 0 {
            return;
        }
        let (row, col) = self.cell_of(x, y);
        for r in row.saturating_sub(1)..=(row + 1).min(rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(cols - 1) {
                if let Some(cell) = self.cells.get((r, c)) {
                    for &index in cell {
                        visit(index);
                    }
                }
            }
        }
    }
}
