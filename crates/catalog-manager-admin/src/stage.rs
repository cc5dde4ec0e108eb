//! Versioning stages
//!
//! Catalog records are written to the draft stage and copied to the live stage
//! when published. Which stage a request reads from is ambient state held per
//! request by a [`StageAccessor`]; [`StageGuard`] switches it for a scope and
//! puts the previous value back when the scope ends.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A version axis of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
	/// Unpublished working copy
	Draft,
	/// Published copy visible to site visitors
	Live,
}

impl Stage {
	/// Every stage, in draft-to-live order
	pub const ALL: [Stage; 2] = [Stage::Draft, Stage::Live];

	/// Stage name as used in query strings and logs
	pub fn as_str(&self) -> &'static str {
		match self {
			Stage::Draft => "Stage",
			Stage::Live => "Live",
		}
	}
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Read and write access to the ambient reading stage
pub trait StageAccessor: Send + Sync {
	/// Current reading stage
	fn stage(&self) -> Stage;

	/// Replace the current reading stage
	fn set_stage(&self, stage: Stage);
}

/// Request-local reading stage
///
/// One instance is created per request (or session) so that switching the
/// stage while building an admin screen never leaks into other requests.
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::stage::{Stage, StageAccessor, VersionedState};
///
/// let state = VersionedState::new(Stage::Live);
/// state.set_stage(Stage::Draft);
/// assert_eq!(state.stage(), Stage::Draft);
/// ```
#[derive(Debug)]
pub struct VersionedState {
	stage: Mutex<Stage>,
}

impl VersionedState {
	/// Create state reading from `stage`
	pub fn new(stage: Stage) -> Self {
		Self {
			stage: Mutex::new(stage),
		}
	}
}

impl StageAccessor for VersionedState {
	fn stage(&self) -> Stage {
		*self.stage.lock()
	}

	fn set_stage(&self, stage: Stage) {
		*self.stage.lock() = stage;
	}
}

/// Scoped switch of the ambient reading stage
///
/// The stage observed when the guard was entered is restored on drop, so an
/// early return through `?` or a panic unwinding through the scope still
/// leaves the accessor as it was found.
///
/// # Examples
///
/// ```
/// use catalog_manager_admin::stage::{Stage, StageAccessor, StageGuard, VersionedState};
///
/// let state = VersionedState::new(Stage::Live);
/// {
///     let guard = StageGuard::enter(&state, Stage::Draft);
///     assert_eq!(guard.original(), Stage::Live);
///     assert_eq!(state.stage(), Stage::Draft);
/// }
/// assert_eq!(state.stage(), Stage::Live);
/// ```
pub struct StageGuard<'a> {
	accessor: &'a dyn StageAccessor,
	original: Stage,
}

impl<'a> StageGuard<'a> {
	/// Record the current stage of `accessor` and switch it to `stage`
	pub fn enter(accessor: &'a dyn StageAccessor, stage: Stage) -> Self {
		let original = accessor.stage();
		if original != stage {
			tracing::debug!(from = %original, to = %stage, "switching reading stage");
		}
		accessor.set_stage(stage);
		Self { accessor, original }
	}

	/// Stage that will be restored when the guard is dropped
	pub fn original(&self) -> Stage {
		self.original
	}
}

impl Drop for StageGuard<'_> {
	fn drop(&mut self) {
		self.accessor.set_stage(self.original);
		tracing::debug!(stage = %self.original, "restored reading stage");
	}
}
