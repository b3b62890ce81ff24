// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              DepsError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+------+
//!   |        |        |        |        |      |
//!   v        v        v        v        v      v
//! Config  Install  Process  Network    Fs   Io/Other
//!  Box      Box      Box      Box      Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ConfigurationMissing, ReadError, ParseError, InvalidValue
//!   Install UnknownDependency, RetrievalFailed, MissingArtifact
//!   Process ExecutableNotFound, SpawnFailed, CommandFailed
//!   Network DownloadFailed, HttpStatus, Reqwest, Io
//!   Fs      NotFound, IoError
//! ```
//!
//! Fatal kinds (`ConfigurationMissing`, `UnknownDependency`) stop the run
//! before any installer starts. Everything raised inside a lifecycle stage is
//! downgraded to an `ERROR` outcome by the runner.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DepsError`].
pub type DepsResult<T> = std::result::Result<T, DepsError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DepsError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Installer orchestration error.
    #[error("install error: {0}")]
    Install(#[from] Box<InstallError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DepsError {
                fn from(err: $error) -> Self {
                    DepsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    InstallError => Install,
    ProcessError => Process,
    NetworkError => Network,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base configuration document does not exist.
    #[error("base configuration not found: {path}")]
    ConfigurationMissing { path: String },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}'")]
    MissingKey { key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Install Errors ---

/// Installer orchestration errors.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A requested dependency name is not installable.
    #[error("unknown dependency '{name}' (available: {})", available.join(", "))]
    UnknownDependency {
        name: String,
        available: Vec<String>,
    },

    /// Every source retrieval method failed.
    #[error("could not retrieve sources for '{name}': {}", attempts.join("; "))]
    RetrievalFailed { name: String, attempts: Vec<String> },

    /// An expected build artifact was not produced.
    #[error("expected artifact not found: {path}")]
    MissingArtifact { path: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("command '{command}' failed with exit code {code}")]
    CommandFailed {
        command: String,
        code: i32,
        output_tail: Vec<String>,
    },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// I/O error during download.
    #[error("io error during download: {0}")]
    Io(#[from] std::io::Error),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
