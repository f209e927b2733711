use super::document::Document;
use super::value::VariableValue;
use indexmap::{IndexMap, IndexSet};

/// Which document's `url` becomes the base URL when several declare one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlPolicy {
    #[default]
    FirstWins,
    LastWins,
}

/// Defaults accumulated across every loaded document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalSettings {
    pub url: String,
    pub headers: IndexSet<String>,
    pub options: IndexSet<String>,
    pub variables: IndexMap<String, VariableValue>,
}

impl GlobalSettings {
    /// Folds one document's global keys in. Returns the document's imports.
    pub fn absorb(&mut self, document: &Document, policy: UrlPolicy) -> Vec<String> {
        if let Some(url) = document.url.as_deref().filter(|u| !u.is_empty()) {
            match policy {
                UrlPolicy::FirstWins if !self.url.is_empty() => {}
                _ => self.url = url.to_string(),
            }
        }
        self.headers.extend(document.headers.iter().cloned());
        self.options.extend(document.options.iter().cloned());
        for (name, value) in &document.variables {
            self.variables.insert(name.clone(), value.clone());
        }
        document.files.clone()
    }
}
