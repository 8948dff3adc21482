/// Request middleware
pub mod auth;

pub use auth::{auth_middleware, resolve_bearer, AuthenticatedUser, MaybeAuthenticatedUser};
