// Interpolated sampler: endpoints, degenerate series and monotonicity.

use app_core::sample;

#[test]
fn endpoints_return_first_and_last_sample() {
    let series = [3.0, -1.0, 7.5, 2.0];
    assert_eq!(sample(&series, 0.0), 3.0);
    assert_eq!(sample(&series, 1.0), 2.0);
}

#[test]
fn single_sample_series_is_constant() {
    for t in [0.0, 0.25, 0.5, 0.99, 1.0] {
        assert_eq!(sample(&[4.25], t), 4.25);
    }
}

#[test]
fn empty_series_reads_zero() {
    for t in [0.0, 0.3, 1.0, -2.0, f32::INFINITY] {
        assert_eq!(sample(&[], t), 0.0);
    }
}

#[test]
fn increasing_series_samples_non_decreasing() {
    let series: Vec<f32> = (0..17).map(|i| (i * i) as f32 * 0.5).collect();
    let mut prev = f32::NEG_INFINITY;
    for step in 0..=1000 {
        let t = step as f32 / 1000.0;
        let v = sample(&series, t);
        assert!(v >= prev, "sample decreased at t={t}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn interpolates_between_neighbours() {
    // t = 0.25 over 5 samples lands exactly on index 1
    let series = [0.0, 10.0, 20.0, 30.0, 40.0];
    assert!((sample(&series, 0.25) - 10.0).abs() < 1e-5);
    // halfway between index 1 and 2
    assert!((sample(&series, 0.375) - 15.0).abs() < 1e-4);
}
