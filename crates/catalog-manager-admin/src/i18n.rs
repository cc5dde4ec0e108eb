//! Translated admin messages
//!
//! Messages are looked up by key; when the active catalog has no translation
//! the default (English) template is used. `{name}` placeholders are replaced
//! by named substitutions after lookup.

use std::collections::HashMap;

/// Lookup of translated message templates
pub trait Translator: Send + Sync {
	/// Translate `key`, falling back to `default`, and interpolate `substitutions`
	fn translate(&self, key: &str, default: &str, substitutions: &[(&str, &str)]) -> String;
}

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use catalog_manager_admin::i18n::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add_translation("Greeting", "Hallo {name}");
///
/// assert_eq!(catalog.translate("Greeting", "Hello {name}", &[("name", "Ada")]), "Hallo Ada");
/// assert_eq!(catalog.translate("Farewell", "Bye {name}", &[("name", "Ada")]), "Bye Ada");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, key: &str) -> Option<&String> {
		self.messages.get(key)
	}
}

impl Translator for MessageCatalog {
	fn translate(&self, key: &str, default: &str, substitutions: &[(&str, &str)]) -> String {
		let template = self.get(key).map_or(default, String::as_str);
		interpolate(template, substitutions)
	}
}

/// Replace `{name}` placeholders with named substitutions
///
/// Unknown placeholders and unbalanced braces are left as written. Substituted
/// values are not scanned again.
pub fn interpolate(template: &str, substitutions: &[(&str, &str)]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		match after.find('}') {
			Some(close) => {
				let name = &after[..close];
				match substitutions.iter().find(|(key, _)| *key == name) {
					Some((_, value)) => out.push_str(value),
					None => {
						out.push('{');
						out.push_str(name);
						out.push('}');
					}
				}
				rest = &after[close + 1..];
			}
			None => {
				out.push_str(&rest[open..]);
				rest = "";
			}
		}
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Hello {name}", "Hello Ada")]
	#[case("{name}{name}", "AdaAda")]
	#[case("Hello {other}", "Hello {other}")]
	#[case("Hello {name", "Hello {name")]
	#[case("no placeholders", "no placeholders")]
	fn test_interpolate(#[case] template: &str, #[case] expected: &str) {
		assert_eq!(interpolate(template, &[("name", "Ada")]), expected);
	}

	#[rstest]
	fn test_catalog_falls_back_to_default_template() {
		let mut catalog = MessageCatalog::new("fr_FR");
		catalog.add_translation("Save", "Enregistrer");

		assert_eq!(catalog.locale(), "fr_FR");
		assert_eq!(catalog.translate("Save", "Save", &[]), "Enregistrer");
		assert_eq!(catalog.translate("Publish", "Publish", &[]), "Publish");
	}

	#[rstest]
	fn test_substituted_values_are_not_rescanned() {
		assert_eq!(
			interpolate("{a} {b}", &[("a", "{b}"), ("b", "x")]),
			"{b} x"
		);
	}
}
