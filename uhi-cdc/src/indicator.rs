use csv::ReaderBuilder;
use log::warn;
use serde::{Deserialize, Serialize};

/// Embedded CDC alcohol indicator dataset for all 50 states plus DC.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/cdc_alcohol_by_state.csv");

/// A single indicator value for one region.
/// - `Recorded(f64)`: a finite numeric measurement
/// - `NoData`: blank, unparseable, or otherwise missing
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum IndicatorValue {
    Recorded(f64),
    NoData,
}

impl IndicatorValue {
    /// Coerce raw CSV text to a value. Blank cells and the usual missing-data
    /// markers become `NoData`, as does anything that does not parse to a
    /// finite number.
    pub fn coerce(raw: &str) -> IndicatorValue {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "null" | "n/a" | "na" | "---" => return IndicatorValue::NoData,
            _ => {}
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => IndicatorValue::Recorded(v),
            _ => IndicatorValue::NoData,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndicatorValue::Recorded(v) => Some(*v),
            IndicatorValue::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, IndicatorValue::NoData)
    }
}

/// One tabular row as loaded: region key plus raw column text, kept
/// un-coerced until the join attaches values to region records.
#[derive(Debug, PartialEq, Clone)]
pub struct IndicatorRow {
    pub code: String,
    pub name: String,
    /// (column header, raw cell text) for every column after code and name.
    pub raw: Vec<(String, String)>,
}

impl IndicatorRow {
    /// Raw text for a column, if the row has it.
    pub fn raw_value(&self, column: &str) -> Option<&str> {
        self.raw
            .iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Get indicator rows from the embedded CSV.
    pub fn get_row_vector() -> Vec<IndicatorRow> {
        if let Ok(rows) = IndicatorRow::parse_indicator_csv(CSV_OBJECT) {
            rows
        } else {
            panic!("failed to parse embedded indicator csv")
        }
    }

    /// Parse a CSV string of indicator data into rows.
    ///
    /// Expected columns: `code,name,<one column per attribute code>`.
    /// Rows with a blank region code are skipped.
    pub fn parse_indicator_csv(csv_object: &str) -> Result<Vec<IndicatorRow>, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();
        let mut rows: Vec<IndicatorRow> = Vec::new();
        for record in rdr.records() {
            let rho = record?;
            let code = rho.get(0).unwrap_or("").trim().to_string();
            if code.is_empty() {
                warn!("indicator row with blank region code skipped");
                continue;
            }
            let name = rho.get(1).unwrap_or("").trim().to_string();
            let raw = headers
                .iter()
                .enumerate()
                .skip(2)
                .map(|(i, header)| {
                    (
                        header.trim().to_string(),
                        rho.get(i).unwrap_or("").to_string(),
                    )
                })
                .collect();
            rows.push(IndicatorRow { code, name, raw });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_recorded() {
        assert_eq!(IndicatorValue::coerce("13.1"), IndicatorValue::Recorded(13.1));
        assert_eq!(IndicatorValue::coerce("  42 "), IndicatorValue::Recorded(42.0));
    }

    #[test]
    fn test_coerce_no_data() {
        assert_eq!(IndicatorValue::coerce(""), IndicatorValue::NoData);
        assert_eq!(IndicatorValue::coerce("N/A"), IndicatorValue::NoData);
        assert_eq!(IndicatorValue::coerce("---"), IndicatorValue::NoData);
        assert_eq!(IndicatorValue::coerce("twelve"), IndicatorValue::NoData);
        assert_eq!(IndicatorValue::coerce("NaN"), IndicatorValue::NoData);
        assert_eq!(IndicatorValue::coerce("inf"), IndicatorValue::NoData);
    }

    #[test]
    fn test_embedded_row_vector() {
        let rows = IndicatorRow::get_row_vector();
        assert_eq!(rows.len(), 51);
        let wisconsin = rows.iter().find(|r| r.code == "WI").unwrap();
        assert_eq!(wisconsin.name, "Wisconsin");
        assert_eq!(wisconsin.raw_value("binge_pct"), Some("24.2"));
        // DC has an intentionally blank per-capita cell
        let dc = rows.iter().find(|r| r.code == "DC").unwrap();
        assert_eq!(dc.raw_value("per_capita_gal"), Some(""));
    }

    #[test]
    fn test_parse_skips_blank_code() {
        let csv = "code,name,x\nCA,California,1.0\n,Nowhere,2.0\n";
        let rows = IndicatorRow::parse_indicator_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "CA");
    }
}
