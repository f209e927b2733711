pub mod document;
pub mod endpoint;
pub mod error;
pub mod globals;
pub mod keywords;
pub mod request;
pub mod resolve;
pub mod source;
pub mod template;
pub mod value;

pub use endpoint::Endpoint;
pub use error::ConfigError;
pub use globals::{GlobalSettings, UrlPolicy};
pub use request::Request;
pub use source::{ConfigSource, FileSource};
pub use template::{EntityKind, Executable};
pub use value::VariableValue;

use crate::core::logger::Logger;
use document::{Document, EndpointDeclaration, RequestDeclaration};
use indexmap::IndexMap;
use source::RawDocument;
use std::collections::BTreeMap;

/// The resolved catalogue. Built once by [`Configuration::load`] and only
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub globals: GlobalSettings,
    pub endpoints: BTreeMap<String, Endpoint>,
    pub requests: BTreeMap<String, Request>,
}

impl Configuration {
    pub fn load(source: &dyn ConfigSource, policy: UrlPolicy) -> Result<Self, ConfigError> {
        let mut loader = Loader::new(source, policy);
        for raw in source.entries()? {
            loader.ingest(raw)?;
        }
        loader.finish()
    }

    /// Looks a name up as a request first, then as an endpoint.
    pub fn find(&self, name: &str) -> Option<&dyn Executable> {
        if let Some(request) = self.requests.get(name) {
            return Some(request);
        }
        self.endpoints.get(name).map(|e| e as &dyn Executable)
    }

    /// The request to execute for `name`: a declared request, or a
    /// parameterless request against the endpoint of that name.
    pub fn runnable(&self, name: &str) -> Option<Request> {
        if let Some(request) = self.requests.get(name) {
            return Some(request.clone());
        }
        self.endpoints
            .get(name)
            .map(|endpoint| Request::from_endpoint(endpoint, &self.globals))
    }
}

/// An endpoint declaration paired with the global url in effect where it
/// was declared.
struct PendingEndpoint {
    declaration: EndpointDeclaration,
    base_url: String,
}

struct Loader<'a> {
    source: &'a dyn ConfigSource,
    policy: UrlPolicy,
    globals: GlobalSettings,
    endpoints: IndexMap<String, PendingEndpoint>,
    requests: Vec<RequestDeclaration>,
    import_stack: Vec<String>,
}

impl<'a> Loader<'a> {
    fn new(source: &'a dyn ConfigSource, policy: UrlPolicy) -> Self {
        Self {
            source,
            policy,
            globals: GlobalSettings::default(),
            endpoints: IndexMap::new(),
            requests: Vec::new(),
            import_stack: Vec::new(),
        }
    }

    fn ingest(&mut self, raw: RawDocument) -> Result<(), ConfigError> {
        if self.import_stack.contains(&raw.name) {
            return Err(ConfigError::ImportCycle(raw.name));
        }
        Logger::debug(&format!("Loading document {}", raw.name));

        let document = Document::parse(&raw)?;
        let imports = self.globals.absorb(&document, self.policy);

        self.import_stack.push(raw.name);
        for import in &imports {
            crate::debug_log!("Importing '{import}' from {}", document.name);
            let imported = self.source.read(import)?;
            self.ingest(imported)?;
        }
        self.import_stack.pop();

        for (name, declaration) in document.endpoints {
            let base_url = self.globals.url.clone();
            self.endpoints.insert(
                name,
                PendingEndpoint {
                    declaration,
                    base_url,
                },
            );
        }
        self.requests.extend(document.requests);
        Ok(())
    }

    fn finish(self) -> Result<Configuration, ConfigError> {
        let mut configuration = Configuration {
            globals: self.globals,
            ..Configuration::default()
        };

        for (name, pending) in &self.endpoints {
            let endpoint = Endpoint::build(
                name,
                &pending.declaration,
                &pending.base_url,
                &configuration.globals,
            )?;
            configuration.endpoints.insert(name.clone(), endpoint);
        }
        validate(&configuration)?;

        for declaration in &self.requests {
            let request = Request::build(
                declaration,
                &configuration.endpoints,
                &configuration.globals,
            )?;
            configuration
                .requests
                .insert(declaration.name.clone(), request);
        }

        crate::debug_log!(
            "Loaded {} endpoint(s) and {} request(s)",
            configuration.endpoints.len(),
            configuration.requests.len()
        );
        Ok(configuration)
    }
}

fn validate(configuration: &Configuration) -> Result<(), ConfigError> {
    if configuration.endpoints.is_empty() {
        return Err(ConfigError::MissingEndpoints);
    }
    if configuration
        .endpoints
        .values()
        .any(|endpoint| endpoint.template.url.is_empty())
    {
        return Err(ConfigError::MissingUrl);
    }
    Ok(())
}
