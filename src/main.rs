//! codefield command-line tools

use anyhow::{bail, Context, Result};
use clap::Parser;

use codefield::assets::scan_asset_dir;
use codefield::cli::{CliArgs, CliCommand};
use codefield::clipboard::{ClipboardBinding, SystemClipboard};
use codefield::picker::entry_label;
use codefield::update::update;
use codefield::{
    EditorHandle, EditorRegistry, EditorValueRecord, FieldConfig, FieldMsg, FieldWidget,
    MemoryEditor,
};

fn main() -> Result<()> {
    codefield::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        CliCommand::Scan { dir } => {
            let catalog = scan_asset_dir(&dir)
                .with_context(|| format!("Failed to scan {}", dir.display()))?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }

        CliCommand::Check { config, assets } => {
            let path = CliCommand::config_path(config).map_err(anyhow::Error::msg)?;
            let field = FieldConfig::load(&path)?;
            let resolved = field.resolve()?;

            for mode in resolved.catalog.iter() {
                let marker = if mode.matches(&resolved.default_mode) {
                    "*"
                } else {
                    " "
                };
                println!("{} {:<16} {}", marker, mode.name, entry_label(mode));
            }

            if let Some(dir) = assets {
                let installed = scan_asset_dir(&dir)?;
                let mut missing: Vec<String> = resolved
                    .catalog
                    .iter()
                    .filter(|mode| !installed.has_mode(&mode.name))
                    .map(|mode| format!("mode '{}'", mode.name))
                    .collect();
                if !installed.has_theme(&field.theme) {
                    missing.push(format!("theme '{}'", field.theme));
                }
                if !missing.is_empty() {
                    bail!("Not installed in {}: {}", dir.display(), missing.join(", "));
                }
            }
        }

        CliCommand::Demo {
            config,
            value,
            mode,
        } => {
            let path = CliCommand::config_path(config).map_err(anyhow::Error::msg)?;
            let field = FieldConfig::load(&path)?;

            let mut record = match value {
                Some(json) => EditorValueRecord::adopt(Some(
                    EditorValueRecord::from_json(&json).context("Invalid --value JSON")?,
                )),
                None => EditorValueRecord::adopt(None),
            };

            let mut registry = EditorRegistry::new();
            let clipboard = SystemClipboard::acquire()
                .map(|c| Box::new(c) as Box<dyn ClipboardBinding>);
            let mut widget = FieldWidget::mount(
                "demo",
                &field,
                MemoryEditor::new(),
                &record,
                &mut registry,
                clipboard,
            )?;

            if let Some(mode) = mode {
                update(&mut widget, FieldMsg::select_mode(mode), &mut record, &registry);
            }
            update(&mut widget, FieldMsg::Blur, &mut record, &registry);

            println!("mode: {}", widget.picker().current_label());
            println!("--- editor ---\n{}", widget.controller().editor().text());
            println!("--- value ---\n{}", record.to_json()?);

            widget.teardown(&mut registry);
        }
    }

    Ok(())
}
