use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER_PATTERN: Regex = Regex::new(r"\{(.+?)\}").unwrap();
}

/// Supplies a value for a placeholder nobody bound, e.g. by asking the user.
pub trait ValueSource {
    /// `placeholder` is the literal text, braces included.
    fn read(&self, placeholder: &str) -> String;
}

/// Distinct unresolved placeholders, in order of first appearance.
pub fn unresolved(tokens: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for token in tokens {
        for m in PLACEHOLDER_PATTERN.find_iter(token) {
            if !found.iter().any(|f| f == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
    }
    found
}

/// Fills every remaining placeholder: the n-th distinct placeholder takes the
/// n-th argument, the rest come from `source`.
pub fn fill(tokens: &mut [String], args: &[String], source: &dyn ValueSource) {
    for (position, placeholder) in unresolved(tokens).iter().enumerate() {
        let value = match args.get(position) {
            Some(arg) => arg.clone(),
            None => source.read(placeholder),
        };
        for token in tokens.iter_mut() {
            if token.contains(placeholder.as_str()) {
                *token = token.replace(placeholder.as_str(), &value);
            }
        }
    }
}
