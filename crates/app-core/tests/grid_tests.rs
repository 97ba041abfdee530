// Grid geometry and the instance buffer's layout guarantees.

use std::collections::HashSet;

use app_core::{GridConfig, GridError, GridInstanceBuffer};

#[test]
fn two_by_two_unit_grid_places_first_cell() {
    let grid = GridConfig::new(2, 2, 1.0).unwrap();
    assert!((grid.width() - 2.2).abs() < 1e-6);
    assert!((grid.height() - 2.2).abs() < 1e-6);

    let mut buffer = GridInstanceBuffer::new(grid);
    buffer.rebuild(&grid, |_| 0.0);
    let [x, y, z] = buffer.transforms()[grid.index(0, 0)].position;
    assert!((x + 1.1).abs() < 1e-6);
    assert!((y + 1.1).abs() < 1e-6);
    assert_eq!(z, 0.0);
}

#[test]
fn rejects_empty_or_bad_dimensions() {
    assert_eq!(
        GridConfig::new(0, 4, 0.02),
        Err(GridError::EmptyDimension { rows: 0, cols: 4 })
    );
    assert!(GridConfig::new(3, 0, 0.02).is_err());
    assert!(matches!(
        GridConfig::new(3, 3, -1.0),
        Err(GridError::InvalidCellSize(_))
    ));
    assert!(GridConfig::new(3, 3, f32::NAN).is_err());
}

#[test]
fn index_is_bijective_row_major() {
    let grid = GridConfig::new(7, 5, 0.02).unwrap();
    let mut seen = HashSet::new();
    for row in 0..7 {
        for col in 0..5 {
            let i = grid.index(row, col);
            assert_eq!(i, (row * 5 + col) as usize);
            assert!(i < grid.cell_count());
            assert_eq!(grid.cell_of(i), (row, col));
            assert!(seen.insert(i));
        }
    }
    assert_eq!(seen.len(), 35);
}

#[test]
fn buffer_size_tracks_reallocation() {
    let mut buffer = GridInstanceBuffer::new(GridConfig::new(3, 4, 0.02).unwrap());
    assert_eq!(buffer.len(), 12);
    for (rows, cols) in [(1, 1), (10, 3), (500, 500), (2, 9)] {
        let grid = GridConfig::new(rows, cols, 0.02).unwrap();
        buffer.reallocate(grid);
        assert_eq!(buffer.len(), (rows * cols) as usize);
    }
    assert_eq!(buffer.generation(), 4);
}

#[test]
fn rebuild_reallocates_on_dimension_change() {
    let small = GridConfig::new(2, 2, 0.02).unwrap();
    let large = GridConfig::new(4, 3, 0.02).unwrap();
    let mut buffer = GridInstanceBuffer::new(small);
    buffer.rebuild(&large, |cell| cell.row as f32);
    assert_eq!(buffer.len(), 12);
    assert_eq!(buffer.generation(), 1);
    assert_eq!(buffer.transforms()[large.index(3, 1)].position[2], 3.0);

    // same dimensions: no new generation
    buffer.rebuild(&large, |_| 0.0);
    assert_eq!(buffer.generation(), 1);
}

#[test]
fn upload_is_handed_out_once_per_rebuild() {
    let grid = GridConfig::new(2, 3, 0.02).unwrap();
    let mut buffer = GridInstanceBuffer::new(grid);
    assert!(buffer.take_upload().is_none());
    buffer.rebuild(&grid, |_| 1.0);
    assert_eq!(buffer.take_upload().map(|t| t.len()), Some(6));
    assert!(buffer.take_upload().is_none());

    buffer.rebuild(&grid, |_| 2.0);
    buffer.reallocate(GridConfig::new(1, 1, 0.02).unwrap());
    assert!(!buffer.is_dirty());
    assert!(buffer.take_upload().is_none());
}
