pub const KEY_URL: &str = "url";
pub const KEY_HEADERS: &str = "headers";
pub const KEY_OPTIONS: &str = "options";
pub const KEY_VARIABLES: &str = "variables";
pub const KEY_FILES: &str = "files";
pub const KEY_ENDPOINTS: &str = "endpoints";
pub const KEY_REQUESTS: &str = "requests";
pub const TOP_LEVEL_KEYS: &[&str] = &[
    KEY_URL,
    KEY_HEADERS,
    KEY_OPTIONS,
    KEY_VARIABLES,
    KEY_FILES,
    KEY_ENDPOINTS,
    KEY_REQUESTS,
];

pub const KEY_ENDPOINT: &str = "endpoint";

pub const DEFAULT_METHOD: &str = "GET";
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
pub const INVALID_TYPE_SENTINEL: &str = "<<Error: invalid type>>";
