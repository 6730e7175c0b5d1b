//! High-level command orchestration for the CLI.
//!
//! One handler per subcommand in `main.rs`. Handlers coordinate:
//! - `crate::ui` for output,
//! - `crate::paths` for filesystem locations,
//! - `crate::profiles` and `crate::switch` for the actual synchronization,
//! - `crate::state` for the active-profile pointer.
//!
//! Per-entry sync outcomes are printed here and never turn into process
//! failures; only manifest- and profile-level errors propagate.

use anstyle::AnsiColor;
use anyhow::Result;

use crate::manifest::Manifest;
use crate::paths::Paths;
use crate::profiles::{backup_profile, restore_profile};
use crate::state::{read_active, resolve_active_profile};
use crate::switch::{SwitchReport, switch_profile};
use crate::sync::SyncOutcome;
use crate::ui::Ui;

/// List all profiles defined in the manifest
pub fn list(paths: &Paths, manifest: &Manifest, ui: &Ui) -> Result<()> {
    if manifest.profiles.is_empty() {
        ui.warn("No profiles defined in manifest.");
        return Ok(());
    }

    let active = resolve_active_profile(paths, manifest).ok();

    let mut table = ui.simple_table();
    table.set_header(vec![
        ui.header_cell(""),
        ui.header_cell("Profile"),
        ui.header_cell("Entries"),
        ui.header_cell("Backup location"),
        ui.header_cell("Status"),
    ]);

    for (name, spec) in &manifest.profiles {
        let is_active = active.as_deref() == Some(name.as_str());
        let icon = if is_active { ui.icon_ok() } else { " " };
        let status_cell = if is_active {
            ui.colored_cell("active", AnsiColor::Green)
        } else {
            ui.cell("-")
        };
        let location = spec
            .backup_location
            .clone()
            .unwrap_or_else(|| "(internal)".to_string());

        table.add_row(vec![
            ui.cell(icon),
            ui.cell(name),
            ui.cell(spec.files.len().to_string()),
            ui.cell(location),
            status_cell,
        ]);
    }

    ui.section("Profiles");
    ui.println(table.to_string());
    Ok(())
}

/// Show the resolved active profile and pointer-file status
pub fn current(paths: &Paths, manifest: &Manifest, ui: &Ui) -> Result<()> {
    let active = resolve_active_profile(paths, manifest)?;
    let stored = read_active(paths)?;

    ui.section("Current Profile");
    ui.newline();

    let mut table = ui.simple_table();
    table.add_row(vec![ui.cell("Active profile:"), ui.header_cell(&active)]);

    match stored {
        Some(name) if name == active => {
            table.add_row(vec![
                ui.cell("Pointer file:"),
                ui.cell(paths.active_file.display().to_string()),
            ]);
        }
        Some(stale) => {
            table.add_row(vec![
                ui.cell("Pointer file:"),
                ui.colored_cell(
                    format!("'{}' is not in the manifest (using fallback)", stale),
                    AnsiColor::Yellow,
                ),
            ]);
        }
        None => {
            table.add_row(vec![
                ui.cell("Pointer file:"),
                ui.cell("(not set; using fallback)"),
            ]);
        }
    }

    ui.println(table.to_string());
    Ok(())
}

/// Back up a profile's live files into its backup store
pub fn backup(paths: &Paths, manifest: &Manifest, profile: Option<&str>, ui: &Ui) -> Result<()> {
    let name = match profile {
        Some(name) => name.to_string(),
        None => resolve_active_profile(paths, manifest)?,
    };

    let spinner = ui.spinner(format!("Backing up profile '{}'...", name));
    match backup_profile(paths, manifest, &name) {
        Ok(outcomes) => {
            ui.spinner_finish_ok(&spinner, format!("Backed up profile '{}'", name));
            report_outcomes(ui, &outcomes);
            Ok(())
        }
        Err(e) => {
            ui.spinner_finish_err(&spinner, format!("Failed to back up profile '{}'", name));
            Err(e)
        }
    }
}

/// Restore a profile's backup to the live locations
pub fn restore(paths: &Paths, manifest: &Manifest, profile: Option<&str>, ui: &Ui) -> Result<()> {
    let name = match profile {
        Some(name) => name.to_string(),
        None => resolve_active_profile(paths, manifest)?,
    };

    let spinner = ui.spinner(format!("Restoring profile '{}'...", name));
    match restore_profile(paths, manifest, &name) {
        Ok(outcomes) => {
            ui.spinner_finish_ok(&spinner, format!("Restored profile '{}'", name));
            report_outcomes(ui, &outcomes);
            Ok(())
        }
        Err(e) => {
            ui.spinner_finish_err(&spinner, format!("Failed to restore profile '{}'", name));
            Err(e)
        }
    }
}

/// Switch profiles: back up the current one, then restore the target
pub fn switch(paths: &Paths, manifest: &Manifest, name: &str, ui: &Ui) -> Result<()> {
    match switch_profile(paths, manifest, name)? {
        SwitchReport::AlreadyActive { name } => {
            ui.info(format!("Profile '{}' is already active.", name));
        }
        SwitchReport::Switched {
            from,
            to,
            backup,
            restore,
        } => {
            ui.println(format!("Backed up '{}':", from));
            report_outcomes(ui, &backup);
            ui.println(format!("Restored '{}':", to));
            report_outcomes(ui, &restore);
            ui.newline();
            ui.ok(format!("Switched from '{}' to '{}'", from, to));
        }
    }
    Ok(())
}

/// Print per-item sync outcomes with a summary line
fn report_outcomes(ui: &Ui, outcomes: &[SyncOutcome]) {
    let mut copied = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for outcome in outcomes {
        match outcome {
            SyncOutcome::Copied { source, dest } => {
                copied += 1;
                ui.println(format!(
                    "  {} {} -> {}",
                    ui.icon_ok(),
                    source.display(),
                    ui.dim(dest.display().to_string())
                ));
            }
            SyncOutcome::Skipped { path, reason } => {
                skipped += 1;
                ui.warn(format!("{}: {}", path.display(), reason));
            }
            SyncOutcome::Failed { path, error } => {
                failed += 1;
                ui.err(format!("{}: {}", path.display(), error));
            }
        }
    }

    ui.info(format!(
        "{} copied, {} skipped, {} failed",
        copied, skipped, failed
    ));
}
