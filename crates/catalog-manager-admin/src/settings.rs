//! Catalog admin settings
//!
//! Settings are plain serde structs, usually read from the `[catalog_admin]`
//! table of the project settings file.

use crate::content_type::ContentType;
use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

/// Default number of rows per listing page
pub const DEFAULT_PAGE_LENGTH: usize = 30;

/// Default HTML id of admin edit forms
pub const DEFAULT_FORM_HTML_ID: &str = "Form_EditForm";

/// Settings for catalog admin screens
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::settings::CatalogAdminSettings;
///
/// let settings = CatalogAdminSettings::from_toml_str("page_length = 50").unwrap();
/// assert_eq!(settings.page_length, 50);
/// assert_eq!(settings.locale, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogAdminSettings {
	/// Rows per listing page when a content type declares none
	pub page_length: usize,
	/// Locale of admin messages
	pub locale: String,
	/// HTML id given to edit forms
	pub form_html_id: String,
}

impl Default for CatalogAdminSettings {
	fn default() -> Self {
		Self {
			page_length: DEFAULT_PAGE_LENGTH,
			locale: "en".to_string(),
			form_html_id: DEFAULT_FORM_HTML_ID.to_string(),
		}
	}
}

impl CatalogAdminSettings {
	/// Parse settings from TOML; missing keys take their defaults
	pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
		toml::from_str(source).map_err(|e| CatalogError::Settings(e.to_string()))
	}

	/// Listing page size for `content_type`
	pub fn page_length_for(&self, content_type: &ContentType) -> usize {
		content_type.page_length().unwrap_or(self.page_length)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_source_gives_defaults() {
		let settings = CatalogAdminSettings::from_toml_str("").unwrap();

		assert_eq!(settings, CatalogAdminSettings::default());
	}

	#[rstest]
	fn test_invalid_source() {
		let result = CatalogAdminSettings::from_toml_str("page_length = \"many\"");

		assert!(matches!(result, Err(CatalogError::Settings(_))));
	}

	#[rstest]
	fn test_type_page_length_wins() {
		let settings = CatalogAdminSettings::default();
		let product = ContentType::new("Product", "Product").with_page_length(12);
		let brand = ContentType::new("Brand", "Brand");

		assert_eq!(settings.page_length_for(&product), 12);
		assert_eq!(settings.page_length_for(&brand), DEFAULT_PAGE_LENGTH);
	}
}
