pub mod api;
pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;
