//! Edit surface resolution
//!
//! Picks the editor for a content type's admin screen. The order of the checks
//! is the priority: catalog-aware types get the list editor, types with a
//! single custom field get a one-field form, everything else gets the default
//! editor. Registered [`EditFormExtension`]s then get a chance to change the
//! result.

use crate::builder::CatalogListBuilder;
use crate::content_type::{AdminCapability, ContentType, ContentTypeRegistry, SingleFieldProvider};
use crate::error::CatalogResult;
use crate::form::{EditForm, FormAction, FormField, MessageLevel};
use crate::grid::{GridField, GridFieldConfig, sanitise_class_name};
use crate::i18n::{MessageCatalog, Translator};
use crate::records::{RecordId, RecordStore};
use crate::settings::CatalogAdminSettings;
use crate::stage::StageAccessor;
use async_trait::async_trait;
use std::sync::Arc;

pub use crate::form::EditSurface;

/// Hook that may change an edit surface before it is returned
pub trait EditFormExtension: Send + Sync {
	/// Update the produced surface in place
	fn update_edit_form(&self, surface: &mut EditSurface);
}

/// The framework's editor for content types without special handling
#[async_trait]
pub trait DefaultEditor: Send + Sync {
	/// Build the default edit form of `content_type`
	async fn edit_form(
		&self,
		content_type: &ContentType,
		store: &dyn RecordStore,
		stage: &dyn StageAccessor,
		settings: &CatalogAdminSettings,
	) -> CatalogResult<EditForm>;
}

/// Default editor listing records of the current stage in a record editor grid
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEditor;

#[async_trait]
impl DefaultEditor for StandardEditor {
	async fn edit_form(
		&self,
		content_type: &ContentType,
		store: &dyn RecordStore,
		stage: &dyn StageAccessor,
		settings: &CatalogAdminSettings,
	) -> CatalogResult<EditForm> {
		let records = store.list(content_type.id(), stage.stage()).await?;
		let grid = GridField::new(
			sanitise_class_name(content_type.id().as_str()),
			records,
			GridFieldConfig::record_editor(settings.page_length_for(content_type)),
		);
		Ok(EditForm::new(vec![FormField::Grid(grid)], vec![]).with_html_id(&settings.form_html_id))
	}
}

/// Produces the edit surface of a content type's admin screen
pub struct EditSurfaceResolver {
	registry: Arc<ContentTypeRegistry>,
	store: Arc<dyn RecordStore>,
	settings: CatalogAdminSettings,
	translator: Arc<dyn Translator>,
	default_editor: Arc<dyn DefaultEditor>,
	extensions: Vec<Arc<dyn EditFormExtension>>,
}

impl EditSurfaceResolver {
	/// Create a resolver with an empty message catalog for the configured
	/// locale and the [`StandardEditor`]
	pub fn new(
		registry: Arc<ContentTypeRegistry>,
		store: Arc<dyn RecordStore>,
		settings: CatalogAdminSettings,
	) -> Self {
		let translator: Arc<dyn Translator> = Arc::new(MessageCatalog::new(&settings.locale));
		Self {
			registry,
			store,
			settings,
			translator,
			default_editor: Arc::new(StandardEditor),
			extensions: Vec::new(),
		}
	}

	/// Use `translator` for admin messages
	pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = translator;
		self
	}

	/// Use `default_editor` for content types without special handling
	pub fn with_default_editor(mut self, default_editor: Arc<dyn DefaultEditor>) -> Self {
		self.default_editor = default_editor;
		self
	}

	/// Register a hook run on every produced surface, in registration order
	pub fn add_extension(&mut self, extension: Arc<dyn EditFormExtension>) {
		self.extensions.push(extension);
	}

	/// Settings in use
	pub fn settings(&self) -> &CatalogAdminSettings {
		&self.settings
	}

	/// Resolve the edit surface of the content type registered as `id`
	pub async fn resolve_by_id(
		&self,
		id: &str,
		record_id: Option<RecordId>,
		field_subset: Option<&[&str]>,
		stage: &dyn StageAccessor,
	) -> CatalogResult<EditSurface> {
		let content_type = self.registry.require(id)?;
		Ok(self
			.resolve_edit_surface(content_type, record_id, field_subset, stage)
			.await)
	}

	/// Resolve the edit surface of `content_type`
	///
	/// Always returns a usable surface. When the catalog listing cannot be
	/// built the default editor is returned instead, carrying an error
	/// message. `record_id` and `field_subset` are accepted for the admin
	/// router's benefit; the catalog list editor always lists every record.
	pub async fn resolve_edit_surface(
		&self,
		content_type: &ContentType,
		record_id: Option<RecordId>,
		field_subset: Option<&[&str]>,
		stage: &dyn StageAccessor,
	) -> EditSurface {
		let mut surface = match content_type.capability() {
			AdminCapability::Catalog { .. } => {
				let builder = CatalogListBuilder::new(
					&self.registry,
					self.store.as_ref(),
					&self.settings,
					self.translator.as_ref(),
				);
				match builder.build_list_editor(content_type, stage).await {
					Ok(surface) => surface,
					Err(err) => {
						tracing::warn!(
							content_type = %content_type.id(),
							error = %err,
							"catalog list editor unavailable, using default editor"
						);
						let mut form = self.default_form(content_type, stage).await;
						form.set_message(err.to_string(), MessageLevel::Error);
						EditSurface::Default(form)
					}
				}
			}
			AdminCapability::SingleField(provider) => {
				EditSurface::SingleField(self.single_field_form(provider.as_ref()))
			}
			AdminCapability::Standard => {
				EditSurface::Default(self.default_form(content_type, stage).await)
			}
		};

		for extension in &self.extensions {
			extension.update_edit_form(&mut surface);
		}

		tracing::debug!(
			content_type = %content_type.id(),
			record_id = ?record_id,
			fields = ?field_subset,
			surface = surface.kind(),
			"resolved edit surface"
		);
		surface
	}

	fn single_field_form(&self, provider: &dyn SingleFieldProvider) -> EditForm {
		EditForm::new(
			vec![FormField::Admin(provider.admin_list_field())],
			vec![FormAction::save()],
		)
		.with_html_id(&self.settings.form_html_id)
	}

	async fn default_form(
		&self,
		content_type: &ContentType,
		stage: &dyn StageAccessor,
	) -> EditForm {
		match self
			.default_editor
			.edit_form(content_type, self.store.as_ref(), stage, &self.settings)
			.await
		{
			Ok(form) => form,
			Err(err) => {
				tracing::warn!(
					content_type = %content_type.id(),
					error = %err,
					"default editor failed, returning an empty form"
				);
				let mut form =
					EditForm::new(vec![], vec![]).with_html_id(&self.settings.form_html_id);
				form.set_message(err.to_string(), MessageLevel::Error);
				form
			}
		}
	}
}
