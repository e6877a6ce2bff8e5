//! Data models for authorization-request evaluation.

pub mod authentication;
pub mod profile;
pub mod request_params;

pub use authentication::Authentication;
pub use profile::{FederatedProfile, AUTHENTICATION_DATE_ATTRIBUTE};
pub use request_params::MaxAge;
