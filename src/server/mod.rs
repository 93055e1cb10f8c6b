//! Server application core modules.
//!
//! This module contains all server-side functionality of the portal: HTTP routing with
//! OpenAPI documentation, OAuth2 authentication against the identity provider, session
//! handling and the service and repository layers over the portal database.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
