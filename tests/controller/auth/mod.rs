//! Tests for authentication controller endpoints.
//!
//! Covers the login redirect, the identity-provider callback, logout and the session
//! lookup used by the client on start-up.

mod callback;
mod login;
mod logout;
mod session;

use super::*;
