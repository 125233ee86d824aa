//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouterConfig;

/// Watches a configuration file and emits every valid new version.
///
/// Invalid edits are logged and dropped, so receivers only ever see
/// configurations that passed validation.
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouterConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouterConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. Keep the returned handle alive for as long as updates are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let reload_path = path.clone();

        let handler = move |res: notify::Result<Event>| match res {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                tracing::info!(path = ?reload_path, "Route config changed, reloading");
                match load_config(&reload_path) {
                    Ok(config) => {
                        if update_tx.send(config).is_err() {
                            tracing::debug!("Config receiver dropped, ignoring reload");
                        }
                    }
                    Err(e) => tracing::error!(
                        error = %e,
                        "Failed to reload route config, keeping current routing table"
                    ),
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = ?e, "Watch error"),
        };

        let mut watcher = RecommendedWatcher::new(
            handler,
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Route config watcher started");
        Ok(watcher)
    }
}
