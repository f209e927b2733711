use super::document::{EndpointDeclaration, QueryDeclaration};
use super::error::ConfigError;
use super::globals::GlobalSettings;
use super::keywords::DEFAULT_METHOD;
use super::template::{CallTemplate, EntityKind, Executable};
use super::value::VariableValue;
use indexmap::IndexMap;
use serde_yaml::Mapping;

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub name: String,
    pub template: CallTemplate,
    /// Declared parameter defaults; carried along, never substituted.
    pub parameters: IndexMap<String, VariableValue>,
}

impl Endpoint {
    /// Resolves a declaration. `base_url` is the global url in effect where
    /// the endpoint was declared; headers and options come from the fully
    /// accumulated globals.
    pub fn build(
        name: &str,
        declaration: &EndpointDeclaration,
        base_url: &str,
        globals: &GlobalSettings,
    ) -> Result<Self, ConfigError> {
        let path = declaration
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ConfigError::MissingPath(name.to_string()))?;

        let mut template = CallTemplate {
            url: declaration
                .url
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| base_url.to_string()),
            path: path.to_string(),
            method: declaration
                .method
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_METHOD)
                .to_string(),
            headers: globals.headers.clone(),
            options: globals.options.clone(),
            ..CallTemplate::default()
        };

        match &declaration.query {
            Some(QueryDeclaration::Raw(query)) => template.query = query.clone(),
            Some(QueryDeclaration::Names(names)) => {
                for query_name in names {
                    template
                        .query_list
                        .insert(query_name.clone(), format!("{{{query_name}}}"));
                }
            }
            None => {}
        }

        template.headers.extend(declaration.headers.iter().cloned());
        template.options.extend(declaration.options.iter().cloned());

        Ok(Self {
            name: name.to_string(),
            template,
            parameters: declaration
                .parameters
                .as_ref()
                .map(parameter_defaults)
                .unwrap_or_default(),
        })
    }
}

fn parameter_defaults(mapping: &Mapping) -> IndexMap<String, VariableValue> {
    mapping
        .iter()
        .filter_map(|(key, value)| Some((key.as_str()?.to_string(), VariableValue::from(value))))
        .collect()
}

impl Executable for Endpoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Endpoint
    }

    fn template(&self) -> &CallTemplate {
        &self.template
    }

    fn parameters(&self) -> Option<&IndexMap<String, VariableValue>> {
        Some(&self.parameters).filter(|p| !p.is_empty())
    }
}
