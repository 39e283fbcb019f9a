//! SuperMe client facade.
//!
//! Ties the session manager to a chat transport and exposes the
//! conversation-aware `ask` calls, the OpenAI-compatible passthrough and
//! raw authenticated requests.

mod api;
mod instance;


pub use instance::SuperMeClient;
