//! Parent readiness
//!
//! Catalog records hang below parent records (products below categories, for
//! example). Until a parent record exists the editor is warned that one must
//! be created first.

use crate::content_type::{ContentType, ContentTypeId, ContentTypeRegistry};
use crate::error::CatalogResult;
use crate::i18n::Translator;
use crate::records::RecordStore;
use crate::stage::Stage;

/// Translation key of the missing parent message
pub const PARENT_REQUIRED_KEY: &str = "CatalogPageAdmin.PARENT_REQUIRED";

/// Default template of the missing parent message
pub const PARENT_REQUIRED_TEMPLATE: &str =
	"You must create a {parent_class_list} before you can create a {model_name}.";

/// Decides whether parent records exist and words the warning when they don't
pub struct ParentReadinessAdvisor<'a> {
	registry: &'a ContentTypeRegistry,
	translator: &'a dyn Translator,
}

impl<'a> ParentReadinessAdvisor<'a> {
	/// Create an advisor resolving names through `registry`
	pub fn new(registry: &'a ContentTypeRegistry, translator: &'a dyn Translator) -> Self {
		Self {
			registry,
			translator,
		}
	}

	/// Warning text when no parent record exists yet, `None` otherwise
	///
	/// `self_type` is never its own prerequisite. Readiness is judged on the
	/// total number of records across all remaining parent types, and the
	/// message names every one of them.
	pub async fn describe_missing_parents(
		&self,
		store: &dyn RecordStore,
		required: &[ContentTypeId],
		self_type: &ContentType,
		stage: Stage,
	) -> CatalogResult<Option<String>> {
		let parents = exclude_self(required, self_type.id());
		if parents.is_empty() {
			return Ok(None);
		}

		let mut existing = 0;
		for parent in &parents {
			existing += store.count(parent, stage).await?;
		}
		if existing > 0 {
			return Ok(None);
		}

		tracing::debug!(
			content_type = %self_type.id(),
			parents = parents.len(),
			"no parent records exist"
		);
		Ok(Some(self.missing_parents_message(required, self_type)))
	}

	/// The missing parent message for `self_type`
	pub fn missing_parents_message(
		&self,
		required: &[ContentTypeId],
		self_type: &ContentType,
	) -> String {
		let parent_class_list = self.parent_class_list(required, self_type.id());
		self.translator.translate(
			PARENT_REQUIRED_KEY,
			PARENT_REQUIRED_TEMPLATE,
			&[
				("parent_class_list", parent_class_list.as_str()),
				("model_name", self_type.singular_name()),
			],
		)
	}

	/// Singular names of the parent types joined as a disjunction
	///
	/// Parent types missing from the registry are named by their id.
	pub fn parent_class_list(
		&self,
		required: &[ContentTypeId],
		self_type: &ContentTypeId,
	) -> String {
		let names: Vec<&str> = exclude_self(required, self_type)
			.into_iter()
			.map(|parent| {
				self.registry
					.singular_name(parent.as_str())
					.unwrap_or_else(|| {
						tracing::debug!(parent = %parent, "naming unregistered parent type by id");
						parent.as_str()
					})
			})
			.collect();
		join_disjunction(&names)
	}
}

fn exclude_self<'r>(
	required: &'r [ContentTypeId],
	self_type: &ContentTypeId,
) -> Vec<&'r ContentTypeId> {
	required.iter().filter(|parent| *parent != self_type).collect()
}

/// Join names as `A`, `A or B`, `A, B or C`
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::parents::join_disjunction;
///
/// assert_eq!(join_disjunction(&["Category"]), "Category");
/// assert_eq!(join_disjunction(&["Category", "Brand"]), "Category or Brand");
/// assert_eq!(join_disjunction(&["Category", "Brand", "Range"]), "Category, Brand or Range");
/// ```
pub fn join_disjunction<S: AsRef<str>>(names: &[S]) -> String {
	match names {
		[] => String::new(),
		[only] => only.as_ref().to_string(),
		[init @ .., last] => {
			let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
			format!("{} or {}", head.join(", "), last.as_ref())
		}
	}
}
