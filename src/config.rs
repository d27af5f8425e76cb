use anyhow::Context;
use std::{env, time::Duration};

pub const SERVER_PORT: u16 = 8000;

/// Runtime settings, read from the process environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database: String,
    pub pool_size: u32,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> anyhow::Result<Self> {
        let required = |key: &str| lookup(key).with_context(|| format!("{} not found", key));

        let database_port = match lookup("DATABASE_PORT") {
            Some(port) => port.parse().context("DATABASE_PORT is not a port number")?,
            None => 3306,
        };
        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(size) => size.parse().context("DATABASE_POOL_SIZE is not a number")?,
            None => 10,
        };
        let connect_timeout = match lookup("DATABASE_CONNECT_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse()
                .context("DATABASE_CONNECT_TIMEOUT_SECS is not a number")?,
            None => 30,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            database_host: required("DATABASE_HOST")?,
            database_port,
            database_user: required("DATABASE_USER")?,
            database_password: required("DATABASE_PASSWORD")?,
            database: required("DATABASE")?,
            pool_size,
            connect_timeout: Duration::from_secs(connect_timeout),
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database
        )
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.server_host.clone(), SERVER_PORT)
    }
}
