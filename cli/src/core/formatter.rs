use crate::config::{EntityKind, Executable, VariableValue};
use crate::render;
use clap::ValueEnum;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
pub struct EntityView<'a> {
    pub name: &'a str,
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<&'a str>,
    pub method: &'a str,
    pub url: &'a str,
    pub path: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub query: &'a str,
    #[serde(skip_serializing_if = "has_no_pairs")]
    pub query_list: &'a IndexMap<String, String>,
    /// `query` and `query_list` combined, as sent.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub encoded_query: String,
    pub headers: &'a IndexSet<String>,
    pub options: &'a IndexSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<&'a IndexMap<String, VariableValue>>,
    pub command: String,
}

impl<'a> EntityView<'a> {
    fn new(entity: &'a dyn Executable, oneline: bool) -> Self {
        let template = entity.template();
        Self {
            name: entity.name(),
            kind: entity.kind(),
            endpoint: entity.endpoint(),
            method: &template.method,
            url: &template.url,
            path: &template.path,
            query: &template.query,
            query_list: &template.query_list,
            encoded_query: template.encoded_query(),
            headers: &template.headers,
            options: &template.options,
            parameters: entity.parameters(),
            command: render_command(entity, oneline),
        }
    }
}

fn is_blank(text: &&str) -> bool {
    text.is_empty()
}

fn has_no_pairs(pairs: &&IndexMap<String, String>) -> bool {
    pairs.is_empty()
}

fn render_command(entity: &dyn Executable, oneline: bool) -> String {
    if oneline {
        render::display_compact(entity)
    } else {
        render::display(entity)
    }
}

fn render_text(entity: &dyn Executable, oneline: bool) -> String {
    format!(
        "{} {}:\n{}\n",
        entity.kind().as_str(),
        entity.name(),
        render_command(entity, oneline)
    )
}

pub struct Formatter {
    engine: OutputFormat,
    oneline: bool,
}

impl Formatter {
    pub fn new(engine: OutputFormat, oneline: bool) -> Self {
        Self { engine, oneline }
    }

    pub fn format(&self, entity: &dyn Executable) -> String {
        match self.engine {
            OutputFormat::Text => render_text(entity, self.oneline),
            OutputFormat::Json => {
                let view = EntityView::new(entity, self.oneline);
                format!(
                    "{}\n",
                    serde_json::to_string_pretty(&view).unwrap_or_default()
                )
            }
        }
    }

    /// Entities in the given order; text entries are separated by a blank line.
    pub fn format_list(&self, list: &[&dyn Executable], empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    format!("{empty_msg}\n")
                } else {
                    list.iter()
                        .map(|entity| format!("{}\n", render_text(*entity, self.oneline)))
                        .collect()
                }
            }
            OutputFormat::Json => {
                let views: Vec<EntityView> = list
                    .iter()
                    .map(|entity| EntityView::new(*entity, self.oneline))
                    .collect();
                format!(
                    "{}\n",
                    serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".to_string())
                )
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat, oneline: bool) -> Formatter {
    Formatter::new(*output_format, oneline)
}
