//! The single currently-expressed attribute.

use std::fmt;

use uhi_cdc::attribute::AttributeCatalog;

/// Rejection of an attribute code that is not in the catalog.
#[derive(Debug, PartialEq, Clone)]
pub struct InvalidAttribute(pub String);

impl fmt::Display for InvalidAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attribute code: {}", self.0)
    }
}

impl std::error::Error for InvalidAttribute {}

/// Holds the one attribute code all views currently express.
///
/// Always a valid catalog code: construction takes the catalog's default
/// and `set_expressed` rejects anything the catalog does not contain,
/// leaving the previous value in place.
#[derive(Debug, PartialEq, Clone)]
pub struct ViewState {
    expressed: String,
}

impl ViewState {
    pub fn new(catalog: &AttributeCatalog) -> Self {
        ViewState {
            expressed: catalog.default_code().to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.expressed
    }

    /// Switch the expressed attribute. Fails without any state change if
    /// `code` is not a catalog code.
    pub fn set_expressed(
        &mut self,
        code: &str,
        catalog: &AttributeCatalog,
    ) -> Result<(), InvalidAttribute> {
        if !catalog.contains(code) {
            return Err(InvalidAttribute(code.to_string()));
        }
        self.expressed = code.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializes_to_first_catalog_code() {
        let catalog = AttributeCatalog::cdc_alcohol();
        let state = ViewState::new(&catalog);
        assert_eq!(state.current(), "binge_pct");
    }

    #[test]
    fn test_set_expressed_valid() {
        let catalog = AttributeCatalog::cdc_alcohol();
        let mut state = ViewState::new(&catalog);
        assert!(state.set_expressed("heavy_pct", &catalog).is_ok());
        assert_eq!(state.current(), "heavy_pct");
    }

    #[test]
    fn test_set_expressed_invalid_leaves_state() {
        let catalog = AttributeCatalog::cdc_alcohol();
        let mut state = ViewState::new(&catalog);
        let err = state.set_expressed("bogus", &catalog).unwrap_err();
        assert_eq!(err, InvalidAttribute("bogus".to_string()));
        assert_eq!(state.current(), "binge_pct");
    }
}
