use super::template::CallTemplate;
use super::value::VariableValue;
use crate::core::logger::Logger;
use indexmap::IndexSet;

/// Replaces every `{key}` in the template's textual fields with `value`.
pub fn substitute(template: &mut CallTemplate, key: &str, value: &VariableValue) {
    let placeholder = format!("{{{key}}}");
    let fields = [&template.url, &template.path, &template.query];
    let used = fields.iter().any(|f| f.contains(&placeholder))
        || template.query_list.values().any(|v| v.contains(&placeholder))
        || template.headers.iter().any(|h| h.contains(&placeholder))
        || template.options.iter().any(|o| o.contains(&placeholder));
    if !used {
        return;
    }

    if let VariableValue::Unsupported(kind) = value {
        Logger::debug(&format!(
            "Value for '{key}' has unsupported type {kind}; substituting a marker"
        ));
    }
    let replacement = value.replacement();

    template.url = template.url.replace(&placeholder, &replacement);
    template.path = template.path.replace(&placeholder, &replacement);
    template.query = template.query.replace(&placeholder, &replacement);
    for v in template.query_list.values_mut() {
        *v = v.replace(&placeholder, &replacement);
    }
    rename_members(&mut template.headers, &placeholder, &replacement);
    rename_members(&mut template.options, &placeholder, &replacement);
}

/// Applies each `(key, value)` pair in turn.
pub fn substitute_all<'a, I>(template: &mut CallTemplate, values: I)
where
    I: IntoIterator<Item = (&'a String, &'a VariableValue)>,
{
    for (key, value) in values {
        substitute(template, key, value);
    }
}

// Set members are keyed by their own text, so a rename re-keys the entry.
// Position is kept; a rename onto an existing member collapses the two.
fn rename_members(set: &mut IndexSet<String>, placeholder: &str, replacement: &str) {
    if !set.iter().any(|m| m.contains(placeholder)) {
        return;
    }
    *set = std::mem::take(set)
        .into_iter()
        .map(|m| m.replace(placeholder, replacement))
        .collect();
}
