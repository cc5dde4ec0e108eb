//! Tests for the catalog list editor

use async_trait::async_trait;
use catalog_manager_admin::builder::CatalogListBuilder;
use catalog_manager_admin::content_type::{
	AdminCapability, ContentType, ContentTypeId, ContentTypeRegistry,
};
use catalog_manager_admin::error::{CatalogError, CatalogResult};
use catalog_manager_admin::form::{EditSurface, MessageLevel};
use catalog_manager_admin::grid::{GridComponent, GridComponentKind, ItemRequest};
use catalog_manager_admin::i18n::MessageCatalog;
use catalog_manager_admin::records::{CatalogRecord, InMemoryRecordStore, RecordStore};
use catalog_manager_admin::settings::CatalogAdminSettings;
use catalog_manager_admin::stage::{Stage, StageAccessor, VersionedState};
use parking_lot::Mutex;
use rstest::{fixture, rstest};
use std::sync::Arc;

fn product(sort_field: Option<&str>) -> ContentType {
	ContentType::new("Product", "Product")
		.with_capability(AdminCapability::catalog(sort_field, ["Category", "Brand"]))
}

#[fixture]
fn registry() -> ContentTypeRegistry {
	let mut registry = ContentTypeRegistry::new();
	registry
		.register(ContentType::new("Category", "Category"))
		.unwrap();
	registry.register(ContentType::new("Brand", "Brand")).unwrap();
	registry.register(product(Some("Sort"))).unwrap();
	registry
}

async fn build(
	registry: &ContentTypeRegistry,
	store: &dyn RecordStore,
	content_type: &ContentType,
	state: &VersionedState,
) -> CatalogResult<EditSurface> {
	let settings = CatalogAdminSettings::default();
	let catalog = MessageCatalog::new("en");
	CatalogListBuilder::new(registry, store, &settings, &catalog)
		.build_list_editor(content_type, state)
		.await
}

/// Store failing every query
struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
	async fn list(&self, _: &ContentTypeId, _: Stage) -> CatalogResult<Vec<CatalogRecord>> {
		Err(CatalogError::Store("connection refused".to_string()))
	}

	async fn count(&self, _: &ContentTypeId, _: Stage) -> CatalogResult<usize> {
		Err(CatalogError::Store("connection refused".to_string()))
	}
}

/// Store remembering the ambient stage seen while listing
struct StageSpyStore {
	inner: InMemoryRecordStore,
	state: Arc<VersionedState>,
	seen: Mutex<Vec<Stage>>,
}

#[async_trait]
impl RecordStore for StageSpyStore {
	async fn list(
		&self,
		content_type: &ContentTypeId,
		stage: Stage,
	) -> CatalogResult<Vec<CatalogRecord>> {
		self.seen.lock().push(self.state.stage());
		self.inner.list(content_type, stage).await
	}

	async fn count(&self, content_type: &ContentTypeId, stage: Stage) -> CatalogResult<usize> {
		self.inner.count(content_type, stage).await
	}
}

#[rstest]
#[tokio::test]
async fn test_missing_parents_warning(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	let message = surface.form().message().expect("warning attached");
	assert_eq!(
		message.text,
		"You must create a Category or Brand before you can create a Product."
	);
	assert_eq!(message.level, MessageLevel::Warning);
}

#[rstest]
#[tokio::test]
async fn test_one_parent_record_suppresses_warning(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	store.write(CatalogRecord::new(1, "Category", "Shoes"));
	let state = VersionedState::new(Stage::Draft);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	assert!(surface.form().message().is_none());
}

#[rstest]
#[tokio::test]
async fn test_no_parent_types_never_warns(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);
	let category = ContentType::new("Category", "Category")
		.with_capability(AdminCapability::catalog(None, ["Category"]));

	let surface = build(&registry, &store, &category, &state).await.unwrap();

	assert!(surface.form().message().is_none());
}

#[rstest]
#[tokio::test]
async fn test_self_is_not_listed_as_parent(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);
	let product = ContentType::new("Product", "Product")
		.with_capability(AdminCapability::catalog(None, ["Product", "Category"]));

	let surface = build(&registry, &store, &product, &state).await.unwrap();

	assert_eq!(
		surface.form().message().unwrap().text,
		"You must create a Category before you can create a Product."
	);
}

#[rstest]
#[tokio::test]
async fn test_grid_without_sort_field(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Live);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	assert!(matches!(surface, EditSurface::ListEditor(_)));
	let config = surface.form().grid_field().unwrap().config();
	assert!(!config.contains(GridComponentKind::DeleteAction));
	assert_eq!(config.count_of(GridComponentKind::PublishAction), 1);
	assert_eq!(config.count_of(GridComponentKind::OrderableRows), 0);
	assert!(surface.form().actions().is_empty());
}

#[rstest]
#[case(Some("Sort"), 1)]
#[case(Some(""), 0)]
#[case(None, 0)]
#[tokio::test]
async fn test_orderable_rows_follow_sort_field(
	registry: ContentTypeRegistry,
	#[case] sort_field: Option<&str>,
	#[case] expected: usize,
) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);

	let surface = build(&registry, &store, &product(sort_field), &state)
		.await
		.unwrap();

	let config = surface.form().grid_field().unwrap().config();
	assert_eq!(config.count_of(GridComponentKind::OrderableRows), expected);
	if expected == 1 {
		assert_eq!(
			config.component_by_kind(GridComponentKind::OrderableRows),
			Some(&GridComponent::OrderableRows {
				sort_field: "Sort".to_string()
			})
		);
	}
}

#[rstest]
#[tokio::test]
async fn test_detail_form_uses_catalog_item_request(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	let config = surface.form().grid_field().unwrap().config();
	match config.component_by_kind(GridComponentKind::DetailForm) {
		Some(GridComponent::DetailForm(detail)) => {
			assert_eq!(detail.item_request(), ItemRequest::Catalog)
		}
		other => panic!("expected detail form, got {other:?}"),
	}
}

#[rstest]
#[tokio::test]
async fn test_form_shape(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);
	let product = ContentType::new("Shop\\Product", "Product")
		.with_capability(AdminCapability::catalog(None, ["Category"]))
		.with_page_length(12);

	let surface = build(&registry, &store, &product, &state).await.unwrap();

	let form = surface.form();
	assert_eq!(form.name(), "EditForm");
	assert_eq!(form.html_id(), Some("Form_EditForm"));
	assert_eq!(form.fields().len(), 1);
	let grid = form.grid_field().unwrap();
	assert_eq!(grid.name(), "Shop-Product");
	assert_eq!(
		grid.config().component_by_kind(GridComponentKind::Paginator),
		Some(&GridComponent::Paginator { page_length: 12 })
	);
}

#[rstest]
#[tokio::test]
async fn test_listing_reads_draft_records(registry: ContentTypeRegistry) {
	let store = InMemoryRecordStore::new();
	store.write(CatalogRecord::new(1, "Product", "Unpublished boot"));
	store.write(CatalogRecord::new(2, "Product", "Sandal"));
	store.publish("Product", 2);
	let state = VersionedState::new(Stage::Live);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	let titles: Vec<_> = surface
		.form()
		.grid_field()
		.unwrap()
		.records()
		.iter()
		.map(|record| record.title.as_str())
		.collect();
	assert_eq!(titles, vec!["Unpublished boot", "Sandal"]);
}

#[rstest]
#[case(Stage::Draft)]
#[case(Stage::Live)]
#[tokio::test]
async fn test_stage_is_draft_while_listing_and_restored_after(
	registry: ContentTypeRegistry,
	#[case] prior: Stage,
) {
	let state = Arc::new(VersionedState::new(prior));
	let store = StageSpyStore {
		inner: InMemoryRecordStore::new(),
		state: Arc::clone(&state),
		seen: Mutex::new(Vec::new()),
	};

	build(&registry, &store, &product(None), &state).await.unwrap();

	assert_eq!(*store.seen.lock(), vec![Stage::Draft]);
	assert_eq!(state.stage(), prior);
}

#[rstest]
#[case(Stage::Draft)]
#[case(Stage::Live)]
#[tokio::test]
async fn test_stage_restored_when_listing_fails(
	registry: ContentTypeRegistry,
	#[case] prior: Stage,
) {
	let state = VersionedState::new(prior);

	let result = build(&registry, &FailingStore, &product(None), &state).await;

	assert_eq!(
		result.unwrap_err(),
		CatalogError::Store("connection refused".to_string())
	);
	assert_eq!(state.stage(), prior);
}

#[rstest]
#[tokio::test]
async fn test_unregistered_parent_is_named_by_id() {
	let mut registry = ContentTypeRegistry::new();
	registry.register(ContentType::new("Brand", "Brand")).unwrap();
	let product = ContentType::new("Product", "Product")
		.with_capability(AdminCapability::catalog(None, ["Category"]));
	registry.register(product.clone()).unwrap();
	let store = InMemoryRecordStore::new();
	let state = VersionedState::new(Stage::Draft);

	let surface = build(&registry, &store, &product, &state).await.unwrap();

	assert_eq!(
		surface.form().message().unwrap().text,
		"You must create a Category before you can create a Product."
	);
}

#[rstest]
#[case(Stage::Live, true)]
#[case(Stage::Draft, false)]
#[tokio::test]
async fn test_parent_readiness_counts_in_ambient_stage(
	registry: ContentTypeRegistry,
	#[case] prior: Stage,
	#[case] warns: bool,
) {
	let store = InMemoryRecordStore::new();
	store.write(CatalogRecord::new(1, "Category", "Unpublished shoes"));
	let state = VersionedState::new(prior);

	let surface = build(&registry, &store, &product(None), &state).await.unwrap();

	assert_eq!(surface.form().message().is_some(), warns);
	assert_eq!(state.stage(), prior);
}
