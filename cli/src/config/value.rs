use super::keywords::INVALID_TYPE_SENTINEL;
use serde::Serialize;
use serde_yaml::Value;
use std::borrow::Cow;

/// A parameter or variable value as declared in a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Integer(i64),
    String(String),
    /// Any other YAML kind; carries the kind name for diagnostics.
    Unsupported(String),
}

impl VariableValue {
    /// Text written in place of a `{placeholder}`.
    pub fn replacement(&self) -> Cow<'_, str> {
        match self {
            VariableValue::Bool(b) => Cow::Owned(b.to_string()),
            VariableValue::Integer(i) => Cow::Owned(i.to_string()),
            VariableValue::String(s) => Cow::Borrowed(s.as_str()),
            VariableValue::Unsupported(_) => Cow::Borrowed(INVALID_TYPE_SENTINEL),
        }
    }
}

impl From<&Value> for VariableValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => VariableValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => VariableValue::Integer(i),
                None => VariableValue::Unsupported("float".to_string()),
            },
            Value::String(s) => VariableValue::String(s.clone()),
            Value::Null => VariableValue::Unsupported("null".to_string()),
            Value::Sequence(_) => VariableValue::Unsupported("sequence".to_string()),
            Value::Mapping(_) => VariableValue::Unsupported("mapping".to_string()),
            Value::Tagged(tagged) => VariableValue::from(&tagged.value),
        }
    }
}
