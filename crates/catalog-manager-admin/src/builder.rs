//! Catalog list editor
//!
//! Catalog-aware content types are edited through a grid of all their records
//! instead of the page tree. Records are always listed from the draft stage so
//! that unpublished pages can be edited and published from the grid.

use crate::content_type::{ContentType, ContentTypeRegistry};
use crate::error::CatalogResult;
use crate::form::{EditForm, EditSurface, FormField, MessageLevel};
use crate::grid::{
	GridComponent, GridComponentKind, GridField, GridFieldConfig, ItemRequest, sanitise_class_name,
};
use crate::i18n::Translator;
use crate::parents::ParentReadinessAdvisor;
use crate::records::RecordStore;
use crate::settings::CatalogAdminSettings;
use crate::stage::{Stage, StageAccessor, StageGuard};

/// Builds the list/detail editor of a catalog-aware content type
pub struct CatalogListBuilder<'a> {
	registry: &'a ContentTypeRegistry,
	store: &'a dyn RecordStore,
	settings: &'a CatalogAdminSettings,
	translator: &'a dyn Translator,
}

impl<'a> CatalogListBuilder<'a> {
	/// Create a builder
	pub fn new(
		registry: &'a ContentTypeRegistry,
		store: &'a dyn RecordStore,
		settings: &'a CatalogAdminSettings,
		translator: &'a dyn Translator,
	) -> Self {
		Self {
			registry,
			store,
			settings,
			translator,
		}
	}

	/// Build the list editor for `content_type`
	///
	/// The ambient stage of `stage` is switched to draft while the listing is
	/// fetched and is back at its previous value when this returns, whether or
	/// not the fetch succeeded.
	pub async fn build_list_editor(
		&self,
		content_type: &ContentType,
		stage: &dyn StageAccessor,
	) -> CatalogResult<EditSurface> {
		let records = {
			let _draft = StageGuard::enter(stage, Stage::Draft);
			self.store.list(content_type.id(), Stage::Draft).await?
		};

		let page_length = self.settings.page_length_for(content_type);
		let mut config = GridFieldConfig::record_editor(page_length);
		config
			.remove_components_by_kind(GridComponentKind::DeleteAction)
			.add_component(GridComponent::PublishAction);

		if let Some(detail) = config.detail_form_mut() {
			detail.set_item_request(ItemRequest::Catalog);
		}

		if let Some(sort_field) = content_type.sort_field() {
			config.add_component(GridComponent::OrderableRows {
				sort_field: sort_field.to_string(),
			});
		}

		let grid = GridField::new(
			sanitise_class_name(content_type.id().as_str()),
			records,
			config,
		);
		let mut form = EditForm::new(vec![FormField::Grid(grid)], vec![])
			.with_html_id(&self.settings.form_html_id);

		let advisor = ParentReadinessAdvisor::new(self.registry, self.translator);
		if let Some(message) = advisor
			.describe_missing_parents(
				self.store,
				content_type.parent_types(),
				content_type,
				stage.stage(),
			)
			.await?
		{
			form.set_message(message, MessageLevel::Warning);
		}

		tracing::debug!(
			content_type = %content_type.id(),
			orderable = content_type.sort_field().is_some(),
			warning = form.message().is_some(),
			"built catalog list editor"
		);
		Ok(EditSurface::ListEditor(form))
	}
}
