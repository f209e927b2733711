use crate::config::UrlPolicy;

/// Where to load the catalogue from and how to merge it.
#[derive(Debug, Clone)]
pub struct HitConfig {
    pub directory: String,
    pub file: Option<String>,
    pub url_policy: UrlPolicy,
}
