//! Catalog record storage
//!
//! The admin only needs two queries from persistence: the records of a type
//! under an explicit stage, and how many records of a type exist.

use crate::content_type::ContentTypeId;
use crate::error::CatalogResult;
use crate::stage::Stage;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Record identifier
pub type RecordId = u64;

/// One record of a catalog content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
	/// Record id, shared by its draft and live copies
	pub id: RecordId,
	/// Content type of the record
	pub content_type: ContentTypeId,
	/// Title shown in listings
	pub title: String,
	/// Manual sort position
	pub sort: Option<i64>,
	/// Parent record in the catalog hierarchy
	pub parent_id: Option<RecordId>,
	/// Remaining field values
	pub data: serde_json::Value,
}

impl CatalogRecord {
	/// Create a record with no sort position and no parent
	pub fn new(
		id: RecordId,
		content_type: impl Into<ContentTypeId>,
		title: impl Into<String>,
	) -> Self {
		Self {
			id,
			content_type: content_type.into(),
			title: title.into(),
			sort: None,
			parent_id: None,
			data: serde_json::Value::Null,
		}
	}

	/// Set the sort position
	pub fn with_sort(mut self, sort: i64) -> Self {
		self.sort = Some(sort);
		self
	}

	/// Set the parent record
	pub fn with_parent(mut self, parent_id: RecordId) -> Self {
		self.parent_id = Some(parent_id);
		self
	}
}

/// Persistence queries used by the admin
#[async_trait]
pub trait RecordStore: Send + Sync {
	/// Records of `content_type` as stored in `stage`, in listing order
	async fn list(
		&self,
		content_type: &ContentTypeId,
		stage: Stage,
	) -> CatalogResult<Vec<CatalogRecord>>;

	/// Number of records of `content_type` stored in `stage`
	async fn count(&self, content_type: &ContentTypeId, stage: Stage) -> CatalogResult<usize>;
}

/// Record store kept in memory, keyed by content type and stage
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::records::{CatalogRecord, InMemoryRecordStore};
/// use catalog_manager_admin::stage::Stage;
///
/// let store = InMemoryRecordStore::new();
/// store.write(CatalogRecord::new(1, "Category", "Shoes"));
/// assert_eq!(store.len("Category", Stage::Draft), 1);
/// assert_eq!(store.len("Category", Stage::Live), 0);
///
/// assert!(store.publish("Category", 1));
/// assert_eq!(store.len("Category", Stage::Live), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
	records: RwLock<HashMap<(ContentTypeId, Stage), Vec<CatalogRecord>>>,
}

impl InMemoryRecordStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace a record in `stage`
	pub fn insert(&self, stage: Stage, record: CatalogRecord) {
		let mut records = self.records.write();
		let bucket = records
			.entry((record.content_type.clone(), stage))
			.or_default();
		match bucket.iter_mut().find(|existing| existing.id == record.id) {
			Some(existing) => *existing = record,
			None => bucket.push(record),
		}
	}

	/// Insert or replace the draft copy of a record
	pub fn write(&self, record: CatalogRecord) {
		self.insert(Stage::Draft, record);
	}

	/// Copy the draft of a record to the live stage
	///
	/// Returns `false` when no draft exists.
	pub fn publish(&self, content_type: &str, id: RecordId) -> bool {
		let draft = self
			.records
			.read()
			.get(&(ContentTypeId::from(content_type), Stage::Draft))
			.and_then(|bucket| bucket.iter().find(|record| record.id == id).cloned());

		match draft {
			Some(record) => {
				self.insert(Stage::Live, record);
				true
			}
			None => false,
		}
	}

	/// Number of stored records of a type in `stage`
	pub fn len(&self, content_type: &str, stage: Stage) -> usize {
		self.records
			.read()
			.get(&(ContentTypeId::from(content_type), stage))
			.map_or(0, Vec::len)
	}
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
	async fn list(
		&self,
		content_type: &ContentTypeId,
		stage: Stage,
	) -> CatalogResult<Vec<CatalogRecord>> {
		let mut records = self
			.records
			.read()
			.get(&(content_type.clone(), stage))
			.cloned()
			.unwrap_or_default();
		// Unsorted records go last, ties keep insertion order by id
		records.sort_by_key(|record| (record.sort.is_none(), record.sort, record.id));
		Ok(records)
	}

	async fn count(&self, content_type: &ContentTypeId, stage: Stage) -> CatalogResult<usize> {
		Ok(self
			.records
			.read()
			.get(&(content_type.clone(), stage))
			.map_or(0, Vec::len))
	}
}
