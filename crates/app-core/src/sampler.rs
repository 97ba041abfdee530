/// Sample a sparse 1D series at a normalized coordinate by linear interpolation.
///
/// `t` is expected in \[0, 1\]; values outside are clamped and a non-finite `t`
/// reads as 0. An empty series samples as 0 everywhere, which keeps a silent
/// or not-yet-connected analyzer from producing anything but a flat grid.
pub fn sample(series: &[f32], t: f32) -> f32 {
    if series.is_empty() {
        return 0.0;
    }
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let raw = t * (series.len() - 1) as f32;
    let below = raw.floor();
    let lower = series[below as usize];
    let upper = series[raw.ceil() as usize];
    lower + (raw - below) * (upper - lower)
}
