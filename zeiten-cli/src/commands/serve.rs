//! HTTP server command
//!
//! Builds the Postgres pool, checks it once in the background and runs the
//! server until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use zeiten_server::db::{create_pool, verify_connection, DEFAULT_MAX_CONNECTIONS};
use zeiten_server::{run_server, AppState, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Database URL (postgres://...)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Directory with index.html and client assets
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url, args.max_connections)
        .context("Failed to create database pool")?;

    // Startup does not wait for the database
    let check = pool.clone();
    tokio::spawn(async move {
        match verify_connection(&check).await {
            Ok(()) => tracing::info!("database connected"),
            Err(e) => tracing::error!("Failed to connect to database: {}", e),
        }
    });

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        public_dir: args.public_dir,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(database_url: Option<&str>) -> ServeArgs {
        ServeArgs {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            database_url: database_url.map(str::to_owned),
            public_dir: PathBuf::from("public"),
            max_connections: 1,
        }
    }

    #[test]
    fn parses_explicit_flags() {
        let parsed = ServeArgs::try_parse_from([
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--database-url",
            "postgres://localhost/zeiten",
            "--public-dir",
            "web",
            "--max-connections",
            "8",
        ])
        .unwrap();

        assert_eq!(parsed.port, 3000);
        assert_eq!(parsed.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(parsed.public_dir, PathBuf::from("web"));
        assert_eq!(parsed.max_connections, 8);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(ServeArgs::try_parse_from(["serve", "--port", "70000"]).is_err());
    }

    #[tokio::test]
    async fn missing_database_url_is_an_error() {
        let err = run_serve(args(None)).await.unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[tokio::test]
    async fn invalid_database_url_is_an_error() {
        let err = run_serve(args(Some("not a url"))).await.unwrap_err();
        assert!(err.to_string().contains("Failed to create database pool"));
    }
}
