use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PATTERN: Regex =
        Regex::new(r#"[^\s"']+|"([^"]*)"|'([^']*)'"#).unwrap();
}

/// Splits a free-form option declaration into shell words. Quoted runs keep
/// their inner whitespace and lose the quotes.
pub fn tokenize(input: &str) -> Vec<String> {
    WORD_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
