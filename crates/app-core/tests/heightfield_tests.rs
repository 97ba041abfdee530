// Height strategies: radial symmetry, the degenerate wave and bin lookup.

use app_core::{
    CellCoord, GridConfig, HeightField, RadialBins, RadialMapping, TravelingWave, WaveConfig,
    MAX_RADIAL,
};

fn wave(amplitude: f32, frequency_hz: f32) -> WaveConfig {
    WaveConfig {
        amplitude,
        frequency_hz,
    }
}

#[test]
fn generated_wave_is_radially_symmetric() {
    let grid = GridConfig::new(10, 10, 0.02).unwrap();
    let field = TravelingWave::new(&wave(1.3, 4.0), 12_345.0);
    // all four at radial distance 0.3 from the center
    let cells = [(2, 5), (5, 2), (8, 5), (5, 8)];
    let heights: Vec<f32> = cells
        .iter()
        .map(|&(r, c)| field.height(&CellCoord::new(&grid, r, c)))
        .collect();
    for h in &heights[1..] {
        assert!((h - heights[0]).abs() < 1e-4, "{heights:?}");
    }
}

#[test]
fn zero_frequency_is_flat_at_any_time() {
    let grid = GridConfig::new(7, 5, 0.02).unwrap();
    for elapsed_ms in [0.0, 16.7, 1_000.0, 9.9e7] {
        let field = TravelingWave::new(&wave(1.0, 0.0), elapsed_ms);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                assert_eq!(field.height(&CellCoord::new(&grid, row, col)), 0.0);
            }
        }
    }
}

#[test]
fn wave_height_stays_within_amplitude() {
    let grid = GridConfig::new(9, 9, 0.02).unwrap();
    let field = TravelingWave::new(&wave(2.0, 13.5), 777.0);
    for row in 0..9 {
        for col in 0..9 {
            let h = field.height(&CellCoord::new(&grid, row, col));
            assert!(h.abs() <= 2.0 + 1e-5);
        }
    }
}

#[test]
fn wave_phase_advances_with_time() {
    let grid = GridConfig::new(4, 4, 0.02).unwrap();
    let center = CellCoord::new(&grid, 2, 2);
    assert_eq!(center.radial, 0.0);
    // at the center only the phase term remains: sin(elapsed seconds)
    let field = TravelingWave::new(&wave(1.0, 4.0), 1_000.0);
    assert!((field.height(&center) - 1.0f32.sin()).abs() < 1e-5);
}

#[test]
fn corner_cell_has_max_radial() {
    let grid = GridConfig::new(6, 6, 0.02).unwrap();
    let corner = CellCoord::new(&grid, 0, 0);
    assert!((corner.radial - MAX_RADIAL).abs() < 1e-6);
}

#[test]
fn radial_bins_scale_to_corner() {
    // cell (0, 2) on a 4x4 grid: u = 0, v = 0.5, radial = 0.5
    let grid = GridConfig::new(4, 4, 0.02).unwrap();
    let cell = CellCoord::new(&grid, 0, 2);
    assert!((cell.radial - 0.5).abs() < 1e-6);

    let bins = [0.0, 10.0];
    let corner = RadialBins::new(&bins, RadialMapping::Corner).height(&cell);
    assert!((corner - 7.0711).abs() < 1e-3, "got {corner}");

    let raw = RadialBins::new(&bins, RadialMapping::Raw).height(&cell);
    assert!((raw - 5.0).abs() < 1e-5, "got {raw}");
}

#[test]
fn empty_bins_give_flat_grid() {
    let grid = GridConfig::new(3, 3, 0.02).unwrap();
    let field = RadialBins::new(&[], RadialMapping::default());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(field.height(&CellCoord::new(&grid, row, col)), 0.0);
        }
    }
}
