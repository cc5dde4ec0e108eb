//! Grid field configuration
//!
//! A grid lists records and carries a set of components: headers, row
//! actions, the paginator and the detail form that edits a single record.
//! Rendering is left to the admin front end; this module only decides which
//! components a grid has.

use crate::records::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Handler for edit requests on a single grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRequest {
	/// The framework's plain record edit request
	Default,
	/// Catalog page edit request, aware of stages and parent records
	Catalog,
}

/// Detail form editing one record of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailForm {
	item_request: ItemRequest,
}

impl DetailForm {
	/// Detail form using the default item request
	pub fn new() -> Self {
		Self {
			item_request: ItemRequest::Default,
		}
	}

	/// Current item request handler
	pub fn item_request(&self) -> ItemRequest {
		self.item_request
	}

	/// Replace the item request handler
	pub fn set_item_request(&mut self, item_request: ItemRequest) {
		self.item_request = item_request;
	}
}

impl Default for DetailForm {
	fn default() -> Self {
		Self::new()
	}
}

/// A component attached to a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridComponent {
	/// Row of buttons above the grid
	ButtonRow,
	/// Button creating a new record
	AddNewButton,
	/// Toolbar header
	ToolbarHeader,
	/// Column headers that sort the listing
	SortableHeader,
	/// Column filters
	FilterHeader,
	/// Data columns
	DataColumns,
	/// Per-row edit button
	EditButton,
	/// Per-row delete action
	DeleteAction,
	/// Per-row publish action
	PublishAction,
	/// Paginator
	Paginator {
		/// Rows per page
		page_length: usize,
	},
	/// Detail form for a single row
	DetailForm(DetailForm),
	/// Drag-and-drop row reordering
	OrderableRows {
		/// Column storing the manual order
		sort_field: String,
	},
}

/// Discriminant of a [`GridComponent`], used for lookups by type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridComponentKind {
	/// See [`GridComponent::ButtonRow`]
	ButtonRow,
	/// See [`GridComponent::AddNewButton`]
	AddNewButton,
	/// See [`GridComponent::ToolbarHeader`]
	ToolbarHeader,
	/// See [`GridComponent::SortableHeader`]
	SortableHeader,
	/// See [`GridComponent::FilterHeader`]
	FilterHeader,
	/// See [`GridComponent::DataColumns`]
	DataColumns,
	/// See [`GridComponent::EditButton`]
	EditButton,
	/// See [`GridComponent::DeleteAction`]
	DeleteAction,
	/// See [`GridComponent::PublishAction`]
	PublishAction,
	/// See [`GridComponent::Paginator`]
	Paginator,
	/// See [`GridComponent::DetailForm`]
	DetailForm,
	/// See [`GridComponent::OrderableRows`]
	OrderableRows,
}

impl GridComponent {
	/// Kind of this component
	pub fn kind(&self) -> GridComponentKind {
		match self {
			Self::ButtonRow => GridComponentKind::ButtonRow,
			Self::AddNewButton => GridComponentKind::AddNewButton,
			Self::ToolbarHeader => GridComponentKind::ToolbarHeader,
			Self::SortableHeader => GridComponentKind::SortableHeader,
			Self::FilterHeader => GridComponentKind::FilterHeader,
			Self::DataColumns => GridComponentKind::DataColumns,
			Self::EditButton => GridComponentKind::EditButton,
			Self::DeleteAction => GridComponentKind::DeleteAction,
			Self::PublishAction => GridComponentKind::PublishAction,
			Self::Paginator { .. } => GridComponentKind::Paginator,
			Self::DetailForm(_) => GridComponentKind::DetailForm,
			Self::OrderableRows { .. } => GridComponentKind::OrderableRows,
		}
	}
}

/// Ordered set of grid components
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFieldConfig {
	components: Vec<GridComponent>,
}

impl GridFieldConfig {
	/// Configuration with no components
	pub fn new() -> Self {
		Self::default()
	}

	/// Configuration for listing, adding, editing and deleting records
	///
	/// # Examples
	///
	/// ```
	/// use catalog_manager_admin::grid::{GridComponentKind, GridFieldConfig};
	///
	/// let config = GridFieldConfig::record_editor(30);
	/// assert!(config.contains(GridComponentKind::DeleteAction));
	/// assert!(config.contains(GridComponentKind::DetailForm));
	/// ```
	pub fn record_editor(page_length: usize) -> Self {
		Self {
			components: vec![
				GridComponent::ButtonRow,
				GridComponent::AddNewButton,
				GridComponent::ToolbarHeader,
				GridComponent::SortableHeader,
				GridComponent::FilterHeader,
				GridComponent::DataColumns,
				GridComponent::EditButton,
				GridComponent::DeleteAction,
				GridComponent::Paginator { page_length },
				GridComponent::DetailForm(DetailForm::new()),
			],
		}
	}

	/// Append a component
	pub fn add_component(&mut self, component: GridComponent) -> &mut Self {
		self.components.push(component);
		self
	}

	/// Remove every component of `kind`
	pub fn remove_components_by_kind(&mut self, kind: GridComponentKind) -> &mut Self {
		self.components.retain(|component| component.kind() != kind);
		self
	}

	/// First component of `kind`
	pub fn component_by_kind(&self, kind: GridComponentKind) -> Option<&GridComponent> {
		self.components
			.iter()
			.find(|component| component.kind() == kind)
	}

	/// The detail form, if the grid has one
	pub fn detail_form_mut(&mut self) -> Option<&mut DetailForm> {
		self.components.iter_mut().find_map(|component| match component {
			GridComponent::DetailForm(detail) => Some(detail),
			_ => None,
		})
	}

	/// Whether a component of `kind` is attached
	pub fn contains(&self, kind: GridComponentKind) -> bool {
		self.component_by_kind(kind).is_some()
	}

	/// Number of attached components of `kind`
	pub fn count_of(&self, kind: GridComponentKind) -> usize {
		self.components
			.iter()
			.filter(|component| component.kind() == kind)
			.count()
	}

	/// All components in attachment order
	pub fn components(&self) -> &[GridComponent] {
		&self.components
	}
}

/// A grid listing records of one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridField {
	name: String,
	records: Vec<CatalogRecord>,
	config: GridFieldConfig,
}

impl GridField {
	/// Create a grid
	pub fn new(
		name: impl Into<String>,
		records: Vec<CatalogRecord>,
		config: GridFieldConfig,
	) -> Self {
		Self {
			name: name.into(),
			records,
			config,
		}
	}

	/// Field name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Listed records
	pub fn records(&self) -> &[CatalogRecord] {
		&self.records
	}

	/// Component configuration
	pub fn config(&self) -> &GridFieldConfig {
		&self.config
	}
}

/// Turn a content type id into a field name safe for HTML ids
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::grid::sanitise_class_name;
///
/// assert_eq!(sanitise_class_name("Shop\\Model\\Product"), "Shop-Model-Product");
/// assert_eq!(sanitise_class_name("shop::Product"), "shop-Product");
/// ```
pub fn sanitise_class_name(class_name: &str) -> String {
	class_name.replace("::", "-").replace('\\', "-")
}
