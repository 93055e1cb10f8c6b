//! Authentication service layer.
//!
//! Handles the OAuth2 authorization code flow against the identity provider: building the
//! login URL and turning the callback's code into a portal profile.

pub mod callback;
pub mod login;
