use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    /// Directory served at `/` (must contain `index.html`).
    pub const PUBLIC_DIR: &str = "NOTES_PUBLIC_DIR";
    /// Optional JSON file replacing the embedded seed notes.
    pub const SEED_PATH: &str = "NOTES_SEED_PATH";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const PUBLIC_DIR: &str = "public";
}

/// Returns the absolute path to the notes-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// to notes-backend/ regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the default public files directory
pub fn default_public_dir() -> PathBuf {
    backend_dir().join(defaults::PUBLIC_DIR)
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            public_dir: default_public_dir(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string()),
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            public_dir: env::var(env_vars::PUBLIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_public_dir()),
            seed_path: env::var(env_vars::SEED_PATH)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Path of the page served for `GET /`
    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}
