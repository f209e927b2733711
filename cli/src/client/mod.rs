mod hit_client;
mod hit_client_models;
pub mod runner;

pub use hit_client::HitClient;
pub use hit_client_models::HitConfig;
pub use runner::{CommandRunner, CurlRunner, PromptValueSource};
