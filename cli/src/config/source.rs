use super::error::ConfigError;
use super::keywords::YAML_EXTENSIONS;
use crate::core::logger::Logger;
use std::fs;
use std::path::{Path, PathBuf};

/// A raw document: its name within the source and its bytes.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub content: Vec<u8>,
}

/// Where configuration documents come from.
pub trait ConfigSource {
    /// Entry documents, in load order.
    fn entries(&self) -> Result<Vec<RawDocument>, ConfigError>;
    /// Reads a document named by a `files` import.
    fn read(&self, name: &str) -> Result<RawDocument, ConfigError>;
}

/// Appends `.yaml` unless the name already carries a YAML extension.
pub fn document_name(name: &str) -> String {
    if has_yaml_extension(Path::new(name)) {
        name.to_string()
    } else {
        format!("{name}.yaml")
    }
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| YAML_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Reads documents from a directory: either one named entry file, or every
/// YAML file directly inside it.
pub struct FileSource {
    directory: PathBuf,
    file: Option<String>,
}

impl FileSource {
    pub fn new(directory: impl Into<PathBuf>, file: Option<String>) -> Self {
        Self {
            directory: directory.into(),
            file: file.filter(|f| !f.is_empty()),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn read_path(&self, name: &str) -> Result<RawDocument, ConfigError> {
        let path = self.directory.join(name);
        Logger::debug(&format!(
            "Reading {}",
            crate::core::paths::display_path(&path)
        ));
        let content = fs::read(&path).map_err(|source| ConfigError::DocumentRead {
            name: name.to_string(),
            source,
        })?;
        Ok(RawDocument {
            name: name.to_string(),
            content,
        })
    }

    fn yaml_files_in_directory(&self) -> Result<Vec<String>, ConfigError> {
        let read_error = |source| ConfigError::DocumentRead {
            name: crate::core::paths::display_path(&self.directory),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && has_yaml_extension(&path) {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ConfigSource for FileSource {
    fn entries(&self) -> Result<Vec<RawDocument>, ConfigError> {
        match &self.file {
            Some(file) => Ok(vec![self.read_path(&document_name(file))?]),
            None => self
                .yaml_files_in_directory()?
                .iter()
                .map(|name| self.read_path(name))
                .collect(),
        }
    }

    fn read(&self, name: &str) -> Result<RawDocument, ConfigError> {
        self.read_path(&document_name(name))
    }
}

/// In-memory documents, keyed by name. Entries load in insertion order.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySource {
    entries: Vec<String>,
    documents: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, content: &str) -> Self {
        self.entries.push(document_name(name));
        self.documents.insert(document_name(name), content.to_string());
        self
    }

    /// A document reachable only through `files` imports.
    pub fn import(mut self, name: &str, content: &str) -> Self {
        self.documents.insert(document_name(name), content.to_string());
        self
    }
}

#[cfg(test)]
impl ConfigSource for MemorySource {
    fn entries(&self) -> Result<Vec<RawDocument>, ConfigError> {
        self.entries.iter().map(|name| self.read(name)).collect()
    }

    fn read(&self, name: &str) -> Result<RawDocument, ConfigError> {
        let name = document_name(name);
        self.documents
            .get(&name)
            .map(|content| RawDocument {
                name: name.clone(),
                content: content.clone().into_bytes(),
            })
            .ok_or_else(|| ConfigError::DocumentRead {
                name,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            })
    }
}
