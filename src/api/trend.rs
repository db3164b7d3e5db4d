/// Flags samples where the temperature trend turns.
///
/// A sample is a peak when it is not below its left neighbor and strictly
/// above its right one, and a trough in the mirrored case. After a flag, the
/// next `min_distance - 1` samples are skipped so labels do not pile up. The
/// first and last sample are never flagged.
#[must_use]
pub fn detect_trend_changes(values: &[f64], min_distance: usize) -> Vec<bool> {
    let mut flags = vec![false; values.len()];
    let mut last_flagged: Option<usize> = None;

    for (offset, window) in values.windows(3).enumerate() {
        let index = offset + 1;
        let (previous, current, next) = (window[0], window[1], window[2]);

        let is_peak = previous <= current && next < current;
        let is_trough = previous >= current && next > current;
        if !(is_peak || is_trough) {
            continue;
        }

        let far_enough = last_flagged.is_none_or(|last| index - last >= min_distance);
        if far_enough {
            flags[index] = true;
            last_flagged = Some(index);
        }
    }
    flags
}
