use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use std::process::Command;

/// `--editor`, else `$EDITOR`/`$VISUAL`, else the platform's plain editor.
fn pick_editor(explicit: Option<&str>) -> String {
    if let Some(e) = explicit {
        return e.to_string();
    }
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let editor = pick_editor(editor.as_deref());
            match Command::new(&editor).arg(&path).status() {
                Ok(s) if s.success() => success(format!("Configuration edited using '{editor}'")),
                _ => error(format!("Failed to edit {} using '{editor}'", path.display())),
            }
        }
    }

    Ok(())
}
