//! Server wiring for the naughty & nice list: configuration loading and the
//! top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use nicelist_core::store::NiceListStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `NICELIST_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file. A leading `~/` is expanded.
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` and the environment over the
  /// built-in defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8787)?
      .set_default("store_path", "nicelist.db")?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("NICELIST"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The application router with per-request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: NiceListStore + 'static,
{
  nicelist_api::router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use nicelist_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn temp_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
      "nicelist-config-{}-{}.toml",
      std::process::id(),
      contents.len()
    ));
    std::fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/nicelist.toml")).unwrap();
    assert_eq!(cfg.port, 8787);
    assert_eq!(cfg.store_path, PathBuf::from("nicelist.db"));
  }

  #[test]
  fn file_values_override_defaults() {
    let path = temp_config("host = \"0.0.0.0\"\nport = 9000\n");
    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.address(), "0.0.0.0:9000");
  }

  #[test]
  fn tilde_in_store_path_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    let cfg = ServerConfig {
      host:       "127.0.0.1".into(),
      port:       8787,
      store_path: PathBuf::from("~/lists/nicelist.db"),
    };
    assert_eq!(
      cfg.resolved_store_path(),
      PathBuf::from(home).join("lists/nicelist.db")
    );
    assert_eq!(expand_tilde(Path::new("/abs.db")), PathBuf::from("/abs.db"));
  }

  #[tokio::test]
  async fn app_serves_api_routes() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let resp = app(Arc::new(store))
      .oneshot(Request::builder().uri("/api/people").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
