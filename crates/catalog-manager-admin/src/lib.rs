//! # Catalog Manager Admin
//!
//! Admin edit surfaces for hierarchical, versioned content types ("catalog
//! pages"). Instead of editing catalog pages through the page tree, a content
//! type's admin screen lists its records in a grid where they can be filtered,
//! reordered, edited and published.
//!
//! ## Features
//!
//! - **Edit surface resolution**: list editor for catalog-aware types, a
//!   single-field form for types that declare one, the default editor otherwise
//! - **Draft-stage listings**: listings are always read from the draft stage and
//!   the ambient stage is restored afterwards, on every exit path
//! - **Ordering and publishing**: orderable rows for types with a sort field,
//!   a publish row action instead of delete
//! - **Parent readiness**: a warning when no parent record exists yet
//!
//! ## Architecture
//!
//! ```text
//! catalog-manager-admin
//! ├── content_type - Content type descriptors and registry
//! ├── records      - Record store trait and in-memory store
//! ├── stage        - Versioning stage, ambient state and scoped guard
//! ├── grid         - Grid field and its component configuration
//! ├── form         - Edit forms, fields, actions and messages
//! ├── i18n         - Message catalog with named substitutions
//! ├── parents      - Parent readiness advisor
//! ├── builder      - Catalog list editor builder
//! ├── resolver     - Edit surface resolver and extension hooks
//! └── settings     - Admin settings loaded from TOML
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_manager_admin::prelude::*;
//! use std::sync::Arc;
//!
//! let mut registry = ContentTypeRegistry::new();
//! registry.register(ContentType::new("Category", "Category"))?;
//! registry.register(
//!     ContentType::new("Product", "Product")
//!         .with_capability(AdminCapability::catalog(Some("Sort"), ["Category"])),
//! )?;
//!
//! let resolver = EditSurfaceResolver::new(
//!     Arc::new(registry),
//!     Arc::new(InMemoryRecordStore::new()),
//!     CatalogAdminSettings::default(),
//! );
//! let state = VersionedState::new(Stage::Live);
//! let surface = resolver.resolve_edit_surface("Product", None, None, &state).await?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod content_type;
pub mod form;
pub mod grid;
pub mod i18n;
pub mod parents;
pub mod records;
pub mod resolver;
pub mod settings;
pub mod stage;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	pub use crate::builder::CatalogListBuilder;
	pub use crate::content_type::{
		AdminCapability, AdminField, ContentType, ContentTypeId, ContentTypeRegistry,
		SingleFieldProvider,
	};
	pub use crate::error::{CatalogError, CatalogResult};
	pub use crate::form::{EditForm, FormAction, FormField, FormMessage, MessageLevel};
	pub use crate::grid::{
		GridComponent, GridComponentKind, GridField, GridFieldConfig, ItemRequest,
	};
	pub use crate::i18n::{MessageCatalog, Translator};
	pub use crate::parents::ParentReadinessAdvisor;
	pub use crate::records::{CatalogRecord, InMemoryRecordStore, RecordId, RecordStore};
	pub use crate::resolver::{
		DefaultEditor, EditFormExtension, EditSurface, EditSurfaceResolver, StandardEditor,
	};
	pub use crate::settings::CatalogAdminSettings;
	pub use crate::stage::{Stage, StageAccessor, StageGuard, VersionedState};
}

/// Catalog admin error types
pub mod error {
	use thiserror::Error;

	/// Catalog admin errors
	#[derive(Error, Debug, Clone, PartialEq, Eq)]
	pub enum CatalogError {
		/// The record store failed to answer a query
		#[error("Record store error: {0}")]
		Store(String),

		/// No content type registered under the given id
		#[error("Unknown content type: {0}")]
		UnknownContentType(String),

		/// A content type with the same id is already registered
		#[error("Content type already registered: {0}")]
		DuplicateContentType(String),

		/// Settings could not be parsed
		#[error("Invalid settings: {0}")]
		Settings(String),
	}

	/// Result type for catalog admin operations
	pub type CatalogResult<T> = Result<T, CatalogError>;
}
