//! Grid dimensions and the per-cell instance buffer handed to the renderer.

use bytemuck::{Pod, Zeroable};

use crate::constants::{CELL_GAP_FACTOR, DEFAULT_CUBE_SIDE, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::error::GridError;
use crate::heightfield::CellCoord;

/// Grid resolution and cube size. Rows run along X, columns along Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    rows: u32,
    cols: u32,
    cell_size: f32,
}

impl GridConfig {
    pub fn new(rows: u32, cols: u32, cell_size: f32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            rows,
            cols,
            cell_size,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space extent along X.
    pub fn width(&self) -> f32 {
        self.rows as f32 * CELL_GAP_FACTOR * self.cell_size
    }

    /// World-space extent along Y.
    pub fn height(&self) -> f32 {
        self.cols as f32 * CELL_GAP_FACTOR * self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn same_dimensions(&self, other: &GridConfig) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major buffer index. The renderer consumes instances positionally,
    /// so this layout is fixed.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            cell_size: DEFAULT_CUBE_SIDE,
        }
    }
}

/// One instance: a position offset. Orientation and scale are identity for
/// every cell, so they are not stored.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CellTransform {
    pub position: [f32; 3],
}

/// Instance transforms for every grid cell, rewritten in full each frame.
pub struct GridInstanceBuffer {
    config: GridConfig,
    transforms: Vec<CellTransform>,
    generation: u64,
    dirty: bool,
}

impl GridInstanceBuffer {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            transforms: vec![CellTransform::default(); config.cell_count()],
            generation: 0,
            dirty: false,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn transforms(&self) -> &[CellTransform] {
        &self.transforms
    }

    /// Number of reallocations so far; rebuilds at the same size leave it alone.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resize for a new grid. Contents are zeroed and not uploadable until
    /// the next [`rebuild`](Self::rebuild).
    pub fn reallocate(&mut self, config: GridConfig) {
        self.config = config;
        self.transforms.clear();
        self.transforms
            .resize(config.cell_count(), CellTransform::default());
        self.transforms.shrink_to(config.cell_count());
        self.generation += 1;
        self.dirty = false;
        log::debug!(
            "[grid] reallocated {}x{} ({} cells, generation {})",
            config.rows(),
            config.cols(),
            config.cell_count(),
            self.generation
        );
    }

    /// Rewrite every cell in row-major order from `height`, reallocating first
    /// when the grid dimensions changed. Marks the buffer ready for upload.
    pub fn rebuild(&mut self, config: &GridConfig, mut height: impl FnMut(&CellCoord) -> f32) {
        if !self.config.same_dimensions(config) {
            self.reallocate(*config);
        } else {
            self.config = *config;
        }
        let config = self.config;
        for row in 0..config.rows() {
            for col in 0..config.cols() {
                let cell = CellCoord::new(&config, row, col);
                let (x, y) = cell.planar(&config);
                let z = height(&cell);
                self.transforms[config.index(row, col)] = CellTransform {
                    position: [x, y, z],
                };
            }
        }
        self.dirty = true;
    }

    /// Hand the freshly rebuilt transforms to the renderer. Returns `None`
    /// when nothing changed since the last upload.
    pub fn take_upload(&mut self) -> Option<&[CellTransform]> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(&self.transforms)
    }
}
