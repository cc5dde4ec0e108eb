//! Catalog admin edit surfaces
//!
//! This module provides access to the catalog admin through unified imports
//! from the `catalog_manager::admin` namespace.
//!
//! ## Example
//!
//! ```rust
//! use catalog_manager::admin::*;
//! use std::sync::Arc;
//!
//! let mut registry = ContentTypeRegistry::new();
//! registry.register(ContentType::new("Category", "Category")).unwrap();
//! registry
//!     .register(
//!         ContentType::new("Product", "Product")
//!             .with_capability(AdminCapability::catalog(Some("Sort"), ["Category"])),
//!     )
//!     .unwrap();
//!
//! let resolver = EditSurfaceResolver::new(
//!     Arc::new(registry),
//!     Arc::new(InMemoryRecordStore::new()),
//!     CatalogAdminSettings::default(),
//! );
//! assert_eq!(resolver.settings().page_length, 30);
//! ```

pub use catalog_manager_admin::prelude::*;
pub use catalog_manager_admin::{
	builder, content_type, error, form, grid, i18n, parents, records, resolver, settings, stage,
};
