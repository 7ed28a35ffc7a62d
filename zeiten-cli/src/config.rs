//! Environment file loading

use std::path::PathBuf;

/// Variables consulted for the deployment environment, in order
const ENV_VARS: &[&str] = &["APP_ENV", "NODE_ENV"];

/// Environment name that disables `.env` loading
const PRODUCTION: &str = "production";

/// Outcome of looking for a `.env` file
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Invalid(dotenvy::Error),
    Skipped,
}

/// Load `.env` into the process environment unless `APP_ENV` or `NODE_ENV`
/// is `production`.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() -> EnvFile {
    let production = ENV_VARS
        .iter()
        .any(|name| is_production(std::env::var(name).ok().as_deref()));
    if production {
        return EnvFile::Skipped;
    }

    match dotenvy::dotenv() {
        Ok(path) => EnvFile::Loaded(path),
        Err(e) if e.not_found() => EnvFile::Missing,
        Err(e) => EnvFile::Invalid(e),
    }
}

fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|v| v.eq_ignore_ascii_case(PRODUCTION))
}
