//! Helpers shared by controllers: CSRF validation for the login flow and resolving the
//! session's profile for protected endpoints.

pub mod csrf;
pub mod get_profile;
