use super::error::ConfigError;
use super::keywords::{KEY_ENDPOINT, KEY_ENDPOINTS, KEY_REQUESTS, TOP_LEVEL_KEYS};
use super::source::RawDocument;
use super::value::VariableValue;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// `query` is either a literal query string or a list of parameter names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryDeclaration {
    Raw(String),
    Names(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndpointDeclaration {
    pub path: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub query: Option<QueryDeclaration>,
    pub headers: Vec<String>,
    pub options: Vec<String>,
    pub parameters: Option<Mapping>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDeclaration {
    pub name: String,
    pub endpoint: Option<String>,
    pub parameters: IndexMap<String, VariableValue>,
}

/// The global part of a document; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GlobalDeclaration {
    url: Option<String>,
    headers: Vec<String>,
    options: Vec<String>,
    variables: IndexMap<String, Value>,
    files: Vec<String>,
}

/// One parsed document, before any cross-document resolution.
#[derive(Debug, Default)]
pub struct Document {
    pub name: String,
    pub url: Option<String>,
    pub headers: Vec<String>,
    pub options: Vec<String>,
    pub variables: IndexMap<String, VariableValue>,
    pub files: Vec<String>,
    pub endpoints: IndexMap<String, EndpointDeclaration>,
    pub requests: Vec<RequestDeclaration>,
}

impl Document {
    pub fn parse(raw: &RawDocument) -> Result<Self, ConfigError> {
        let name = raw.name.as_str();
        let root: Value =
            serde_yaml::from_slice(&raw.content).map_err(|e| ConfigError::syntax(name, e))?;

        let mut mapping = match root {
            Value::Null => Mapping::new(),
            Value::Mapping(m) => m,
            _ => {
                return Err(ConfigError::Syntax {
                    name: name.to_string(),
                    message: "top level must be a mapping".to_string(),
                })
            }
        };

        for key in mapping.keys() {
            let key = key_text(key);
            if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
                return Err(ConfigError::InvalidAttribute(key));
            }
        }

        let endpoints = mapping.remove(KEY_ENDPOINTS);
        let requests = mapping.remove(KEY_REQUESTS);
        let globals: GlobalDeclaration = serde_yaml::from_value(Value::Mapping(mapping))
            .map_err(|e| ConfigError::syntax(name, e))?;

        Ok(Self {
            name: name.to_string(),
            url: globals.url,
            headers: globals.headers,
            options: globals.options,
            variables: globals
                .variables
                .iter()
                .map(|(k, v)| (k.clone(), VariableValue::from(v)))
                .collect(),
            files: globals.files,
            endpoints: parse_endpoints(name, endpoints)?,
            requests: parse_requests(name, requests)?,
        })
    }
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn entries(name: &str, section: &str, value: Option<Value>) -> Result<Mapping, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(Mapping::new()),
        Some(Value::Mapping(m)) => Ok(m),
        Some(_) => Err(ConfigError::Syntax {
            name: name.to_string(),
            message: format!("'{section}' must be a mapping"),
        }),
    }
}

fn parse_endpoints(
    name: &str,
    value: Option<Value>,
) -> Result<IndexMap<String, EndpointDeclaration>, ConfigError> {
    let mut endpoints = IndexMap::new();
    for (key, body) in entries(name, KEY_ENDPOINTS, value)? {
        // A bare `name:` with nothing under it still declares the endpoint.
        let declaration = match body {
            Value::Mapping(_) => {
                serde_yaml::from_value(body).map_err(|e| ConfigError::Syntax {
                    name: name.to_string(),
                    message: format!("endpoint '{}': {e}", key_text(&key)),
                })?
            }
            _ => EndpointDeclaration::default(),
        };
        endpoints.insert(key_text(&key), declaration);
    }
    Ok(endpoints)
}

fn parse_requests(
    name: &str,
    value: Option<Value>,
) -> Result<Vec<RequestDeclaration>, ConfigError> {
    let mut requests = Vec::new();
    for (key, body) in entries(name, KEY_REQUESTS, value)? {
        let request_name = key_text(&key);
        let mut endpoint = None;
        let mut parameters = IndexMap::new();

        if let Value::Mapping(fields) = body {
            for (field, value) in fields {
                let field = key_text(&field);
                if field == KEY_ENDPOINT {
                    endpoint = value.as_str().map(str::to_string);
                } else {
                    parameters.insert(field, VariableValue::from(&value));
                }
            }
        }

        requests.push(RequestDeclaration {
            name: request_name,
            endpoint,
            parameters,
        });
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Document, ConfigError> {
        Document::parse(&RawDocument {
            name: "test.yaml".to_string(),
            content: content.as_bytes().to_vec(),
        })
    }

    #[test]
    fn test_parse_globals() {
        let doc = parse(
            r#"
url: https://localhost
headers:
  - "Accept: application/json"
options:
  - --compress
variables:
  version: 2
  verbose: true
files:
  - shared
"#,
        )
        .unwrap();

        assert_eq!(doc.url.as_deref(), Some("https://localhost"));
        assert_eq!(doc.headers, vec!["Accept: application/json"]);
        assert_eq!(doc.options, vec!["--compress"]);
        assert_eq!(doc.variables["version"], VariableValue::Integer(2));
        assert_eq!(doc.variables["verbose"], VariableValue::Bool(true));
        assert_eq!(doc.files, vec!["shared"]);
    }

    #[test]
    fn test_parse_endpoint_query_forms() {
        let doc = parse(
            r#"
endpoints:
  raw:
    path: /raw
    query: name={name}
  list:
    path: /list
    query: [name, date]
    method: POST
"#,
        )
        .unwrap();

        assert_eq!(
            doc.endpoints["raw"].query,
            Some(QueryDeclaration::Raw("name={name}".to_string()))
        );
        assert_eq!(
            doc.endpoints["list"].query,
            Some(QueryDeclaration::Names(vec![
                "name".to_string(),
                "date".to_string()
            ]))
        );
        assert_eq!(doc.endpoints["list"].method.as_deref(), Some("POST"));
    }

    #[test]
    fn test_bare_endpoint_is_empty_declaration() {
        let doc = parse("endpoints:\n  test:\n  method: GET\n").unwrap();
        assert_eq!(doc.endpoints.len(), 2);
        assert_eq!(doc.endpoints["test"], EndpointDeclaration::default());
        assert_eq!(doc.endpoints.keys().next().map(String::as_str), Some("test"));
    }

    #[test]
    fn test_request_parameters_exclude_endpoint() {
        let doc = parse(
            r#"
requests:
  my_request:
    endpoint: test
    variable: value
    count: 3
"#,
        )
        .unwrap();

        let request = &doc.requests[0];
        assert_eq!(request.name, "my_request");
        assert_eq!(request.endpoint.as_deref(), Some("test"));
        assert_eq!(request.parameters.len(), 2);
        assert_eq!(request.parameters["count"], VariableValue::Integer(3));
    }

    #[test]
    fn test_invalid_attribute() {
        match parse("url: local\ninvalid: true\n") {
            Err(ConfigError::InvalidAttribute(key)) => assert_eq!(key, "invalid"),
            other => panic!("expected InvalidAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_yaml_is_syntax_error() {
        assert!(matches!(
            parse("url: [unclosed\n"),
            Err(ConfigError::Syntax { .. })
        ));
        assert!(matches!(
            parse("- just\n- a list\n"),
            Err(ConfigError::Syntax { .. })
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("").unwrap();
        assert!(doc.url.is_none());
        assert!(doc.endpoints.is_empty());
        assert!(doc.requests.is_empty());
    }
}
