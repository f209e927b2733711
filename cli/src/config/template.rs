use super::value::VariableValue;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// The curl-facing shape shared by endpoints and requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallTemplate {
    pub url: String,
    pub path: String,
    /// Literal query string, without the leading `?`.
    pub query: String,
    /// Query parameters sent with `--data-urlencode`, name to value.
    pub query_list: IndexMap<String, String>,
    pub method: String,
    pub headers: IndexSet<String>,
    pub options: IndexSet<String>,
}

impl CallTemplate {
    /// `<url><path>[?<query>]`
    pub fn address(&self) -> String {
        if self.query.is_empty() {
            format!("{}{}", self.url, self.path)
        } else {
            format!("{}{}?{}", self.url, self.path, self.query)
        }
    }

    /// The literal query followed by the query list as `name=value` pairs.
    pub fn encoded_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.query.is_empty() {
            parts.push(self.query.clone());
        }
        parts.extend(
            self.query_list
                .iter()
                .map(|(name, value)| format!("{name}={value}")),
        );
        parts.join("&")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Endpoint,
    Request,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Endpoint => "Endpoint",
            EntityKind::Request => "Request",
        }
    }
}

/// Anything that can be rendered into a curl command.
pub trait Executable {
    fn name(&self) -> &str;
    fn kind(&self) -> EntityKind;
    fn template(&self) -> &CallTemplate;

    /// The endpoint a request is bound to.
    fn endpoint(&self) -> Option<&str> {
        None
    }

    /// Bound parameter values, for entities that carry any.
    fn parameters(&self) -> Option<&IndexMap<String, VariableValue>> {
        None
    }
}
