use super::document::RequestDeclaration;
use super::endpoint::Endpoint;
use super::error::ConfigError;
use super::globals::GlobalSettings;
use super::resolve::substitute_all;
use super::template::{CallTemplate, EntityKind, Executable};
use super::value::VariableValue;
use indexmap::IndexMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub name: String,
    pub endpoint: String,
    pub parameters: IndexMap<String, VariableValue>,
    pub template: CallTemplate,
}

impl Request {
    pub fn build(
        declaration: &RequestDeclaration,
        endpoints: &BTreeMap<String, Endpoint>,
        globals: &GlobalSettings,
    ) -> Result<Self, ConfigError> {
        let endpoint_name = declaration
            .endpoint
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEndpointReference(declaration.name.clone()))?;
        let endpoint =
            endpoints
                .get(endpoint_name)
                .ok_or_else(|| ConfigError::EndpointNotFound {
                    request: declaration.name.clone(),
                    endpoint: endpoint_name.to_string(),
                })?;

        Ok(Self::instantiate(
            &declaration.name,
            endpoint,
            declaration.parameters.clone(),
            globals,
        ))
    }

    /// A request bound to nothing but the globals, used to run an endpoint
    /// directly.
    pub fn from_endpoint(endpoint: &Endpoint, globals: &GlobalSettings) -> Self {
        Self::instantiate(&endpoint.name, endpoint, IndexMap::new(), globals)
    }

    fn instantiate(
        name: &str,
        endpoint: &Endpoint,
        parameters: IndexMap<String, VariableValue>,
        globals: &GlobalSettings,
    ) -> Self {
        let mut template = endpoint.template.clone();
        substitute_all(&mut template, &parameters);
        substitute_all(&mut template, &globals.variables);

        Self {
            name: name.to_string(),
            endpoint: endpoint.name.clone(),
            parameters,
            template,
        }
    }
}

impl Executable for Request {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Request
    }

    fn template(&self) -> &CallTemplate {
        &self.template
    }

    fn endpoint(&self) -> Option<&str> {
        Some(self.endpoint.as_str())
    }

    fn parameters(&self) -> Option<&IndexMap<String, VariableValue>> {
        Some(&self.parameters).filter(|p| !p.is_empty())
    }
}
