//! Types shared by the SuperMe config and client crates.

pub mod errors;
pub mod id;
pub mod types;

pub use errors::ConfigError;
pub use id::{ConversationId, TargetIdentity};
pub use types::{Message, Role};
