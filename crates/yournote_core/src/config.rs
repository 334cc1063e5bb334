//! Typed runtime settings.
//!
//! The core reads no configuration files; callers build these values.

use crate::logging::default_log_level;
use crate::sync::reconciler::SyncMode;
use std::path::PathBuf;

/// Settings for [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// One of `trace|debug|info|warn|error` (case-insensitive).
    pub level: String,
    /// Absolute directory receiving rolling log files.
    pub log_dir: PathBuf,
}

impl LogSettings {
    /// Uses the build-mode default level.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: log_dir.into(),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

/// Settings for [`crate::service::workspace_service::NotesWorkspace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub sync_mode: SyncMode,
}

impl WorkspaceConfig {
    pub fn with_sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }
}
