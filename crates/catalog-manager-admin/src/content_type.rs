//! Content type descriptors
//!
//! A content type describes one record kind shown in the admin. What the admin
//! can do with it is decided once, when it is registered, through its
//! [`AdminCapability`].

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier of a content type (its class name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentTypeId(String);

impl ContentTypeId {
	/// Create an identifier
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Identifier as a string slice
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ContentTypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ContentTypeId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for ContentTypeId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl Borrow<str> for ContentTypeId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for ContentTypeId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

/// A single form field supplied by a content type for its admin screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminField {
	/// Field name
	pub name: String,
	/// Human-readable label
	pub label: String,
	/// Initial value
	pub initial: serde_json::Value,
}

impl AdminField {
	/// Create a field with no initial value
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			initial: serde_json::Value::Null,
		}
	}

	/// Set the initial value
	pub fn with_initial(mut self, initial: serde_json::Value) -> Self {
		self.initial = initial;
		self
	}
}

/// Content types whose admin screen is a single custom field
pub trait SingleFieldProvider: Send + Sync {
	/// The field shown as the whole admin screen
	fn admin_list_field(&self) -> AdminField;
}

/// What the admin can do with a content type
#[derive(Clone)]
pub enum AdminCapability {
	/// Participates in a catalog hierarchy
	Catalog {
		/// Column holding the manual sort order, if the type is orderable
		sort_field: Option<String>,
		/// Types that must have records before records of this type make sense
		parent_types: Vec<ContentTypeId>,
	},
	/// Edited through one custom field
	SingleField(Arc<dyn SingleFieldProvider>),
	/// Edited through the framework's default editor
	Standard,
}

impl AdminCapability {
	/// Catalog capability with an optional sort field and parent types
	///
	/// # Examples
	///
	/// ```
	/// use catalog_manager_admin::content_type::AdminCapability;
	///
	/// let capability = AdminCapability::catalog(Some("Sort"), ["Category", "Brand"]);
	/// assert!(matches!(capability, AdminCapability::Catalog { .. }));
	/// ```
	pub fn catalog<I, P>(sort_field: Option<&str>, parent_types: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<ContentTypeId>,
	{
		Self::Catalog {
			sort_field: sort_field.map(str::to_string),
			parent_types: parent_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Single-field capability backed by `provider`
	pub fn single_field(provider: impl SingleFieldProvider + 'static) -> Self {
		Self::SingleField(Arc::new(provider))
	}
}

impl fmt::Debug for AdminCapability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Catalog {
				sort_field,
				parent_types,
			} => f
				.debug_struct("Catalog")
				.field("sort_field", sort_field)
				.field("parent_types", parent_types)
				.finish(),
			Self::SingleField(_) => f.write_str("SingleField(..)"),
			Self::Standard => f.write_str("Standard"),
		}
	}
}

/// A record kind managed through the admin
#[derive(Debug, Clone)]
pub struct ContentType {
	id: ContentTypeId,
	singular_name: String,
	capability: AdminCapability,
	page_length: Option<usize>,
}

impl ContentType {
	/// Create a standard content type
	pub fn new(id: impl Into<ContentTypeId>, singular_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			singular_name: singular_name.into(),
			capability: AdminCapability::Standard,
			page_length: None,
		}
	}

	/// Set the admin capability
	pub fn with_capability(mut self, capability: AdminCapability) -> Self {
		self.capability = capability;
		self
	}

	/// Set the listing page size, overriding the admin default
	pub fn with_page_length(mut self, page_length: usize) -> Self {
		self.page_length = Some(page_length);
		self
	}

	/// Identifier
	pub fn id(&self) -> &ContentTypeId {
		&self.id
	}

	/// Human-readable singular name
	pub fn singular_name(&self) -> &str {
		&self.singular_name
	}

	/// Admin capability
	pub fn capability(&self) -> &AdminCapability {
		&self.capability
	}

	/// Listing page size declared by the type
	pub fn page_length(&self) -> Option<usize> {
		self.page_length
	}

	/// Whether records of this type live in a catalog hierarchy
	pub fn is_catalog_aware(&self) -> bool {
		matches!(self.capability, AdminCapability::Catalog { .. })
	}

	/// Sort field name, if the type declares a non-empty one
	pub fn sort_field(&self) -> Option<&str> {
		match &self.capability {
			AdminCapability::Catalog {
				sort_field: Some(field),
				..
			} if !field.is_empty() => Some(field.as_str()),
			_ => None,
		}
	}

	/// Declared parent types; empty for types outside a catalog
	pub fn parent_types(&self) -> &[ContentTypeId] {
		match &self.capability {
			AdminCapability::Catalog { parent_types, .. } => parent_types,
			_ => &[],
		}
	}
}

/// Registry of content types known to the admin
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::content_type::{ContentType, ContentTypeRegistry};
///
/// let mut registry = ContentTypeRegistry::new();
/// registry.register(ContentType::new("Category", "Category")).unwrap();
/// assert!(registry.get("Category").is_some());
/// assert!(registry.register(ContentType::new("Category", "Category")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct ContentTypeRegistry {
	types: HashMap<ContentTypeId, ContentType>,
}

impl ContentTypeRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a content type
	pub fn register(&mut self, content_type: ContentType) -> CatalogResult<()> {
		if self.types.contains_key(content_type.id()) {
			return Err(CatalogError::DuplicateContentType(
				content_type.id().to_string(),
			));
		}
		tracing::debug!(
			content_type = %content_type.id(),
			capability = ?content_type.capability(),
			"registered content type"
		);
		self.types.insert(content_type.id().clone(), content_type);
		Ok(())
	}

	/// Look up a content type
	pub fn get(&self, id: &str) -> Option<&ContentType> {
		self.types.get(id)
	}

	/// Look up a content type, failing if it is not registered
	pub fn require(&self, id: &str) -> CatalogResult<&ContentType> {
		self.get(id)
			.ok_or_else(|| CatalogError::UnknownContentType(id.to_string()))
	}

	/// Singular display name of a registered type
	pub fn singular_name(&self, id: &str) -> Option<&str> {
		self.get(id).map(ContentType::singular_name)
	}

	/// Number of registered types
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether no type is registered
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some("Sort"), Some("Sort"))]
	#[case(Some(""), None)]
	#[case(None, None)]
	fn test_sort_field_requires_non_empty_name(
		#[case] declared: Option<&str>,
		#[case] expected: Option<&str>,
	) {
		let product = ContentType::new("Product", "Product")
			.with_capability(AdminCapability::catalog(declared, ["Category"]));

		assert_eq!(product.sort_field(), expected);
	}

	#[rstest]
	fn test_standard_type_has_no_catalog_traits() {
		let page = ContentType::new("Page", "Page");

		assert!(!page.is_catalog_aware());
		assert!(page.parent_types().is_empty());
		assert_eq!(page.sort_field(), None);
	}

	#[rstest]
	fn test_require_unknown_type() {
		let registry = ContentTypeRegistry::new();

		assert_eq!(
			registry.require("Missing").unwrap_err(),
			CatalogError::UnknownContentType("Missing".to_string())
		);
	}
}
