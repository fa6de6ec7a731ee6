use log::warn;
use serde::{Deserialize, Serialize};

/// Describes one displayable indicator attribute.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Attribute code, matching a column header in the indicator CSV.
    pub code: String,
    /// Short display label for selectors and chart titles.
    pub label: String,
    /// Long-form description shown verbatim when the attribute is expressed.
    pub description: String,
}

impl AttributeDescriptor {
    pub fn new(code: &str, label: &str, description: &str) -> Self {
        AttributeDescriptor {
            code: code.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Registry of the attribute codes known to the application.
///
/// The set is fixed at startup; every code expressed by the views must
/// exist here. Iteration order is construction order, and the first
/// attribute is the default expressed attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeCatalog {
    attributes: Vec<AttributeDescriptor>,
}

impl AttributeCatalog {
    /// Build a catalog from descriptors, keeping first occurrence of each code.
    pub fn new(attributes: Vec<AttributeDescriptor>) -> Self {
        let mut seen: Vec<String> = Vec::new();
        let mut kept = Vec::with_capacity(attributes.len());
        for descriptor in attributes {
            if seen.iter().any(|code| code == &descriptor.code) {
                warn!("duplicate attribute code {} dropped", descriptor.code);
                continue;
            }
            seen.push(descriptor.code.clone());
            kept.push(descriptor);
        }
        AttributeCatalog { attributes: kept }
    }

    /// The built-in CDC alcohol indicator set.
    ///
    /// Codes match the column headers of `indicator::CSV_OBJECT`.
    pub fn cdc_alcohol() -> Self {
        AttributeCatalog::new(vec![
            AttributeDescriptor::new(
                "binge_pct",
                "Binge drinking (%)",
                "Percentage of adults reporting at least one episode of binge \
                 drinking in the past 30 days (BRFSS survey estimate).",
            ),
            AttributeDescriptor::new(
                "heavy_pct",
                "Heavy drinking (%)",
                "Percentage of adults classified as heavy drinkers: more than \
                 two drinks per day for men or one for women.",
            ),
            AttributeDescriptor::new(
                "per_capita_gal",
                "Per-capita consumption (gal)",
                "Gallons of ethanol consumed per person aged 14 and over, \
                 derived from state beverage sales data.",
            ),
            AttributeDescriptor::new(
                "deaths_per_100k",
                "Alcohol-induced deaths (per 100k)",
                "Age-adjusted alcohol-induced death rate per 100,000 \
                 population, from CDC WONDER mortality data.",
            ),
            AttributeDescriptor::new(
                "dui_per_100k",
                "DUI arrests (per 100k)",
                "Arrests for driving under the influence per 100,000 \
                 population, from FBI UCR arrest counts.",
            ),
        ])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.attributes.iter().any(|a| a.code == code)
    }

    pub fn get(&self, code: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.code == code)
    }

    /// The default expressed attribute: the first code in the catalog.
    pub fn default_code(&self) -> &str {
        &self
            .attributes
            .first()
            .expect("attribute catalog is empty")
            .code
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.code.as_str())
    }

    pub fn descriptors(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdc_alcohol_catalog() {
        let catalog = AttributeCatalog::cdc_alcohol();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.default_code(), "binge_pct");
        assert!(catalog.contains("deaths_per_100k"));
        assert!(!catalog.contains("bogus"));
    }

    #[test]
    fn test_get_descriptor() {
        let catalog = AttributeCatalog::cdc_alcohol();
        let descriptor = catalog.get("heavy_pct").unwrap();
        assert_eq!(descriptor.label, "Heavy drinking (%)");
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_codes_keep_first() {
        let catalog = AttributeCatalog::new(vec![
            AttributeDescriptor::new("a", "First", ""),
            AttributeDescriptor::new("a", "Second", ""),
            AttributeDescriptor::new("b", "Other", ""),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().label, "First");
    }
}
