//! Session management: credentials in, bearer token out.
//!
//! API-key clients are authenticated from the start, the key being the
//! bearer value. Password clients hold no token until `login()` trades the
//! credentials for one. Tokens are never refreshed here; the server's
//! response to each call is the only judge of validity.

mod manager;
mod types;


pub use manager::SessionManager;
pub use types::BearerToken;
