// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use crate::cmd::install::effective_order;
use crate::config::ConfigDocument;
use crate::installer::registry::InstallerRegistry;

/// Formats one line per dependency: order entries first, then installers
/// that are registered but not ordered.
///
/// ```text
/// hdf5          1.14.4.3   installer
/// my_lib        -          no installer
/// extra         -          installer (not in installation_order)
/// ```
#[must_use]
pub fn format_listing(config: &ConfigDocument, registry: &InstallerRegistry) -> Vec<String> {
    let order = effective_order(config);
    let width = order
        .iter()
        .map(String::len)
        .chain(registry.names().iter().map(String::len))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = order
        .iter()
        .map(|name| {
            let version = config
                .dependency(name)
                .version
                .unwrap_or_else(|| "-".to_string());
            let status = if registry.contains(name) {
                "installer"
            } else {
                "no installer"
            };
            format!("{name:<width$}  {version:<10} {status}")
        })
        .collect();

    lines.extend(
        registry
            .names()
            .into_iter()
            .filter(|name| !order.contains(name))
            .map(|name| {
                format!(
                    "{name:<width$}  {:<10} installer (not in installation_order)",
                    "-"
                )
            }),
    );
    lines
}

/// Main handler for list command.
pub fn run_list_command(config: &ConfigDocument) {
    let lines = format_listing(config, &InstallerRegistry::builtin());
    if lines.is_empty() {
        println!("No dependencies found");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
}
