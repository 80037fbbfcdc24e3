use std::{env, net::SocketAddr, path::PathBuf};

use tracing::warn;

pub const DEFAULT_DB_PATH: &str = "todo.db";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("TODO_DB_PATH").ok(), env::var("PORT").ok())
    }

    fn from_vars(db_path: Option<String>, port: Option<String>) -> Self {
        let db_path = db_path
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let port = match port {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT {value:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { db_path, port }
    }

    /// All interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
