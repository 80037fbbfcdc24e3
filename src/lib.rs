pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use db::Database;
pub use state::AppState;
