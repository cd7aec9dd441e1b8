//! Client-side login state for the companion web front-end.
//!
//! `AuthStore` owns the session; the network hop is behind `LoginTransport` so the
//! store can be driven by reqwest in production and by a scripted transport in tests.
pub mod error;
pub mod store;
pub mod transport;

pub use error::AuthError;
pub use store::{AuthState, AuthStore};
pub use transport::{HttpLoginTransport, LoginRequest, LoginResponse, LoginTransport, User, LOGIN_PATH};
