// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-sourceable rendering of an [`Env`].
//!
//! ```text
//! Sh    export CC="mpicc"
//!       export PATH="/x/bin${PATH:+:$PATH}"
//! Csh   setenv CC "mpicc"
//!       if ( $?PATH ) then
//!           setenv PATH "/x/bin:${PATH}"
//!       else
//!           setenv PATH "/x/bin"
//!       endif
//! Json  {"CC": "mpicc", "PATH": "<resolved against current env>"}
//! ```

use super::container::Env;
use super::types::EnvFlags;
use crate::error::Result;
use anyhow::Context;

/// Output syntax for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellFormat {
    /// POSIX shells (`sh`, `bash`, `zsh`).
    #[default]
    Sh,
    /// C shells (`csh`, `tcsh`).
    Csh,
    /// A JSON object of resolved values.
    Json,
}

/// Escapes a value for use inside double quotes.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

fn render_sh(env: &Env) -> String {
    let mut out = String::new();
    for (key, entry) in env.iter() {
        let line = match entry.flags() {
            EnvFlags::Replace => format!("export {key}={}\n", quote(entry.value())),
            EnvFlags::Prepend => format!(
                "export {key}=\"{}${{{key}:+:${key}}}\"\n",
                escape(entry.value())
            ),
        };
        out.push_str(&line);
    }
    out
}

fn render_csh(env: &Env) -> String {
    let mut out = String::new();
    for (key, entry) in env.iter() {
        match entry.flags() {
            EnvFlags::Replace => {
                out.push_str(&format!("setenv {key} {}\n", quote(entry.value())));
            }
            EnvFlags::Prepend => {
                let value = escape(entry.value());
                out.push_str(&format!("if ( $?{key} ) then\n"));
                out.push_str(&format!("    setenv {key} \"{value}:${{{key}}}\"\n"));
                out.push_str("else\n");
                out.push_str(&format!("    setenv {key} \"{value}\"\n"));
                out.push_str("endif\n");
            }
        }
    }
    out
}

/// Renders the environment in the given syntax.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(env: &Env, format: ShellFormat) -> Result<String> {
    match format {
        ShellFormat::Sh => Ok(render_sh(env)),
        ShellFormat::Csh => Ok(render_csh(env)),
        ShellFormat::Json => {
            let resolved = env.resolved(|key| std::env::var(key).ok());
            let mut json =
                serde_json::to_string_pretty(&resolved).context("failed to serialize environment")?;
            json.push('\n');
            Ok(json)
        }
    }
}
