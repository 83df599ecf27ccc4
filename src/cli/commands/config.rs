use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

use std::path::Path;
use std::process::Command;

fn launch_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if launch_editor(&editor_to_use, &path) {
                println!(
                    "✅ Configuration file edited successfully using '{}'",
                    editor_to_use
                );
            } else {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );

                if launch_editor(&default_editor, &path) {
                    println!(
                        "✅ Configuration file edited successfully using fallback '{}'",
                        default_editor
                    );
                } else {
                    eprintln!(
                        "❌ Failed to edit configuration file using fallback '{}'",
                        default_editor
                    );
                }
            }
        }
    }

    Ok(())
}
