use super::hit_client_models::HitConfig;
use super::runner::CommandRunner;
use crate::config::{Configuration, Executable, FileSource};
use crate::core::error::HitError;
use crate::core::logger::Logger;
use crate::render::{self, placeholders, ValueSource};
use std::path::Path;

pub struct HitClient {
    configuration: Configuration,
}

impl HitClient {
    pub fn load(config: &HitConfig) -> Result<Self, HitError> {
        let directory = Path::new(&config.directory);
        if !directory.is_dir() {
            return Err(HitError::DirectoryNotFound(config.directory.clone()));
        }

        let source = FileSource::new(directory, config.file.clone());
        Logger::debug(&format!(
            "Loading configuration from {}",
            crate::core::paths::display_path(source.directory())
        ));
        let configuration = Configuration::load(&source, config.url_policy)?;
        Ok(Self { configuration })
    }

    #[cfg(test)]
    pub fn from_configuration(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn requests(&self) -> Vec<&dyn Executable> {
        self.configuration
            .requests
            .values()
            .map(|r| r as &dyn Executable)
            .collect()
    }

    pub fn endpoints(&self) -> Vec<&dyn Executable> {
        self.configuration
            .endpoints
            .values()
            .map(|e| e as &dyn Executable)
            .collect()
    }

    pub fn find(&self, name: &str) -> Result<&dyn Executable, HitError> {
        self.configuration
            .find(name)
            .ok_or_else(|| HitError::EntityNotFound(name.to_string()))
    }

    /// Materializes `name` into curl arguments, fills what is still unresolved
    /// from `args` then `values`, and hands the result to `runner`.
    pub fn run(
        &self,
        name: &str,
        args: &[String],
        runner: &dyn CommandRunner,
        values: &dyn ValueSource,
    ) -> Result<(), HitError> {
        let request = self
            .configuration
            .runnable(name)
            .ok_or_else(|| HitError::EntityNotFound(name.to_string()))?;

        let mut tokens = render::execution_tokens(&request);
        placeholders::fill(&mut tokens, args, values);
        crate::debug_log!("Running {name} with {} argument(s)", tokens.len());
        runner.run(&tokens)
    }
}
