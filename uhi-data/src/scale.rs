//! Quantile color classification for one expressed attribute.

use std::cmp::Ordering;

use uhi_cdc::indicator::IndicatorValue;
use uhi_cdc::region::RegionRecord;

/// Classification parameters. The palette length sets the bucket count.
#[derive(Debug, PartialEq, Clone)]
pub struct ScaleConfig {
    /// One fill color per bucket, lowest bucket first.
    pub palette: Vec<String>,
    /// Reserved color for missing or unparseable values.
    pub no_data_color: String,
}

impl Default for ScaleConfig {
    /// Five-class sequential BuPu palette with a grey no-data color.
    fn default() -> Self {
        ScaleConfig {
            palette: vec![
                "#edf8fb".to_string(),
                "#b3cde3".to_string(),
                "#8c96c6".to_string(),
                "#8856a7".to_string(),
                "#810f7c".to_string(),
            ],
            no_data_color: "#cccccc".to_string(),
        }
    }
}

impl ScaleConfig {
    pub fn bucket_count(&self) -> usize {
        self.palette.len()
    }
}

/// Quantile-bucketed color mapping built for one attribute over the full
/// dataset. Never mutated: an attribute change builds a new scale.
#[derive(Debug, PartialEq, Clone)]
pub struct ClassificationScale {
    attribute: String,
    /// N-1 bucket boundaries, ascending. Empty when no values exist.
    breaks: Vec<f64>,
    colors: Vec<String>,
    no_data_color: String,
    /// (min, max) of the recorded values; `None` for an empty collection.
    domain: Option<(f64, f64)>,
}

impl ClassificationScale {
    /// Build a scale for `attribute` over all region records.
    ///
    /// Boundaries sit at the k/N quantiles (k = 1..N-1) of the recorded
    /// values, computed by linear interpolation between order statistics.
    /// A pure function of its inputs: identical records and attribute give
    /// identical breaks and lookups.
    pub fn build(regions: &[RegionRecord], attribute: &str, config: &ScaleConfig) -> Self {
        let mut values: Vec<f64> = regions
            .iter()
            .filter_map(|r| r.value(attribute).as_f64())
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let domain = match (values.first(), values.last()) {
            (Some(min), Some(max)) => Some((*min, *max)),
            _ => None,
        };
        let buckets = config.palette.len();
        let breaks = if values.is_empty() || buckets < 2 {
            Vec::new()
        } else {
            (1..buckets)
                .map(|k| quantile(&values, k as f64 / buckets as f64))
                .collect()
        };
        ClassificationScale {
            attribute: attribute.to_string(),
            breaks,
            colors: config.palette.clone(),
            no_data_color: config.no_data_color.clone(),
            domain,
        }
    }

    /// Fill color for a value. `NoData` always maps to the no-data color,
    /// as does any lookup against a scale with an empty domain. A value
    /// exactly on a boundary lands in the lower-adjacent bucket.
    pub fn color_for(&self, value: IndicatorValue) -> &str {
        let v = match (self.domain, value) {
            (Some(_), IndicatorValue::Recorded(v)) => v,
            _ => return &self.no_data_color,
        };
        if self.colors.is_empty() {
            return &self.no_data_color;
        }
        for (bucket, boundary) in self.breaks.iter().enumerate() {
            if v <= *boundary {
                return &self.colors[bucket];
            }
        }
        &self.colors[self.colors.len() - 1]
    }

    /// Fill color for a region's value of this scale's attribute.
    pub fn color_for_region(&self, region: &RegionRecord) -> &str {
        self.color_for(region.value(&self.attribute))
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn no_data_color(&self) -> &str {
        &self.no_data_color
    }

    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }
}

/// Quantile of sorted values at probability `p`, interpolating linearly
/// between order statistics (the same estimate d3.scaleQuantile uses).
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}
