pub mod command;
pub mod placeholders;
pub mod shell;

pub use command::{display, display_compact, execution_tokens};
pub use placeholders::ValueSource;
