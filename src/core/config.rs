use crate::config::{Config, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the configuration file.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use).",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let missing = missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys (defaults used): {}", missing.join(", ")));
        }
        Ok(missing)
    }

    /// Open the configuration file in `editor`, `$EDITOR`, `$VISUAL` or a
    /// platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed).arg(path).status();
        if matches!(status, Ok(s) if s.success()) {
            success(format!("Configuration file edited with '{}'", ed));
            return Ok(());
        }

        if ed == default_editor {
            return Err(AppError::Config(format!("editor '{}' failed", ed)));
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            ed, default_editor
        ));
        let fallback = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;
        if !fallback.success() {
            return Err(AppError::Config(format!(
                "editor '{}' failed",
                default_editor
            )));
        }

        success(format!(
            "Configuration file edited with fallback '{}'",
            default_editor
        ));
        Ok(())
    }
}
