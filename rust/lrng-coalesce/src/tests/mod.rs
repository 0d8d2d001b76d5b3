use crate::LabeledRange;


/// Generates `count` random valid ranges over `labels` distinct labels.
///
/// Bounds are drawn from a narrow window so that overlaps and chains are common.
pub(crate) fn random_ranges(count: usize, labels: u8, span: i64) -> Vec<LabeledRange<u8>> {
    (0..count)
        .map(|_| {
            let start = fastrand::i64(-span..span);
            let stop = start + fastrand::i64(0..(span / 4).max(1));
            LabeledRange::new(fastrand::u8(0..labels), start, stop)
        })
        .collect()
}

/// Reference coverage check: the set of `(label, point)` pairs covered by `ranges`
/// within `[lo, hi]`.
pub(crate) fn covered_points(ranges: &[LabeledRange<u8>], lo: i64, hi: i64) -> Vec<(u8, i64)> {
    let mut points: Vec<(u8, i64)> = ranges
        .iter()
        .flat_map(|r| (r.start.max(lo)..=r.stop.min(hi)).map(move |p| (r.label, p)))
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}
