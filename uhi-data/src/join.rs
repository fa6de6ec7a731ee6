//! Merge tabular indicator rows into region records by region code.

use std::collections::HashSet;

use log::warn;
use uhi_cdc::attribute::AttributeCatalog;
use uhi_cdc::indicator::{IndicatorRow, IndicatorValue};
use uhi_cdc::region::RegionRecord;

/// Counts from one join pass, for logging and data-quality checks.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct JoinReport {
    /// Rows that matched a region.
    pub matched: usize,
    /// Rows with no matching region (dropped).
    pub dropped_rows: usize,
    /// Rows repeating an already-matched region code (last write wins).
    pub duplicate_rows: usize,
}

/// Attach indicator values to region records by exact code equality.
///
/// Every region ends up with an entry for every catalog attribute: the
/// matched row's coerced value, or `NoData` when the row is absent, the
/// cell is blank, or the cell does not parse. Rows without a matching
/// region are dropped. A row repeating an earlier row's code overwrites
/// it (last write wins); both conditions are logged, neither is fatal.
///
/// Mutates only the regions' value maps; rows and geometry are untouched.
pub fn join_rows(
    rows: &[IndicatorRow],
    regions: &mut [RegionRecord],
    catalog: &AttributeCatalog,
) -> JoinReport {
    for region in regions.iter_mut() {
        for code in catalog.codes() {
            region
                .values
                .insert(code.to_string(), IndicatorValue::NoData);
        }
    }

    let mut report = JoinReport::default();
    let mut seen: HashSet<&str> = HashSet::new();
    for row in rows {
        let region = match regions.iter_mut().find(|r| r.code == row.code) {
            Some(region) => region,
            None => {
                warn!("indicator row {} has no matching region, dropped", row.code);
                report.dropped_rows += 1;
                continue;
            }
        };
        if seen.insert(row.code.as_str()) {
            report.matched += 1;
        } else {
            warn!("duplicate indicator row for {}, last write wins", row.code);
            report.duplicate_rows += 1;
        }
        for code in catalog.codes() {
            let value = match row.raw_value(code) {
                Some(raw) => IndicatorValue::coerce(raw),
                None => IndicatorValue::NoData,
            };
            region.values.insert(code.to_string(), value);
        }
    }
    report
}
