//! Admin edit forms
//!
//! [`EditForm`] is the top-level form of an admin screen. [`EditSurface`]
//! tags it with the kind of editor that produced it.

use crate::content_type::AdminField;
use crate::grid::GridField;
use serde::{Deserialize, Serialize};

/// Severity of a message shown on a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageLevel {
	/// Informational
	Info,
	/// Operation succeeded
	Success,
	/// Non-blocking problem the editor should know about
	Warning,
	/// Operation failed
	Error,
}

/// Message shown above a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
	/// Message text
	pub text: String,
	/// Severity
	pub level: MessageLevel,
}

/// Submit button of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAction {
	/// Handler name
	pub name: String,
	/// Button title
	pub title: String,
}

impl FormAction {
	/// Create an action
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
		}
	}

	/// The `Save` action
	pub fn save() -> Self {
		Self::new("do_save", "Save")
	}
}

/// A field of an edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormField {
	/// Record grid
	Grid(GridField),
	/// Custom field supplied by the content type
	Admin(AdminField),
}

impl FormField {
	/// Field name
	pub fn name(&self) -> &str {
		match self {
			Self::Grid(grid) => grid.name(),
			Self::Admin(field) => &field.name,
		}
	}
}

/// Top-level form of an admin screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditForm {
	name: String,
	html_id: Option<String>,
	fields: Vec<FormField>,
	actions: Vec<FormAction>,
	message: Option<FormMessage>,
}

impl EditForm {
	/// Create a form named `EditForm`
	pub fn new(fields: Vec<FormField>, actions: Vec<FormAction>) -> Self {
		Self {
			name: "EditForm".to_string(),
			html_id: None,
			fields,
			actions,
			message: None,
		}
	}

	/// Set the HTML id
	pub fn with_html_id(mut self, html_id: impl Into<String>) -> Self {
		self.html_id = Some(html_id.into());
		self
	}

	/// Form name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// HTML id
	pub fn html_id(&self) -> Option<&str> {
		self.html_id.as_deref()
	}

	/// Fields in display order
	pub fn fields(&self) -> &[FormField] {
		&self.fields
	}

	/// Submit actions
	pub fn actions(&self) -> &[FormAction] {
		&self.actions
	}

	/// Mutable submit actions
	pub fn actions_mut(&mut self) -> &mut Vec<FormAction> {
		&mut self.actions
	}

	/// Message shown above the form
	pub fn message(&self) -> Option<&FormMessage> {
		self.message.as_ref()
	}

	/// Replace the message shown above the form
	pub fn set_message(&mut self, text: impl Into<String>, level: MessageLevel) {
		self.message = Some(FormMessage {
			text: text.into(),
			level,
		});
	}

	/// The first grid field
	pub fn grid_field(&self) -> Option<&GridField> {
		self.fields.iter().find_map(|field| match field {
			FormField::Grid(grid) => Some(grid),
			FormField::Admin(_) => None,
		})
	}
}

/// Editing surface produced for one admin request
///
/// Exactly one editor kind is produced per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditSurface {
	/// Catalog list/detail editor
	ListEditor(EditForm),
	/// Single custom field with a `Save` action
	SingleField(EditForm),
	/// Framework default editor
	Default(EditForm),
}

impl EditSurface {
	/// The produced form
	pub fn form(&self) -> &EditForm {
		match self {
			Self::ListEditor(form) | Self::SingleField(form) | Self::Default(form) => form,
		}
	}

	/// The produced form, mutably
	pub fn form_mut(&mut self) -> &mut EditForm {
		match self {
			Self::ListEditor(form) | Self::SingleField(form) | Self::Default(form) => form,
		}
	}

	/// Short editor kind name for logs
	pub fn kind(&self) -> &'static str {
		match self {
			Self::ListEditor(_) => "list_editor",
			Self::SingleField(_) => "single_field",
			Self::Default(_) => "default",
		}
	}
}
