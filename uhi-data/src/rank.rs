//! Ordering and axis domain for the ranked bar chart.

use std::cmp::Ordering;

use uhi_cdc::region::RegionRecord;

/// Region indices sorted by descending value of `attribute`.
///
/// The sort is stable: regions with equal values, and the no-data run at
/// the end, keep their input order across repeated calls. No-data sorts
/// below every recorded value.
pub fn ranked_indices(regions: &[RegionRecord], attribute: &str) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..regions.len()).collect();
    indices.sort_by(|&a, &b| {
        let va = regions[a].value(attribute).as_f64();
        let vb = regions[b].value(attribute).as_f64();
        match (va, vb) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    indices
}

/// Upper bound of the bar chart's linear scale: the maximum recorded value
/// of `attribute`, or 0 when nothing is recorded. The chart's domain is
/// `[0, axis_max]` -- deliberately not the classification domain, since the
/// bars show relative magnitude rather than statistical grouping.
pub fn axis_max(regions: &[RegionRecord], attribute: &str) -> f64 {
    regions
        .iter()
        .filter_map(|r| r.value(attribute).as_f64())
        .fold(0.0, f64::max)
}
