use crate::config::Config;
use crate::presentation::{CommandResult, ConsolePresentable, ConsoleRenderer, StatusBadge};
use crate::types::{Language, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

impl ConsolePresentable for ConfigViewModel {
    fn render_console(&self, _lang: Language) -> String {
        let mut out = format!("# {}", self.path.display());
        if !self.exists {
            out.push_str(" (not found, showing defaults)");
        }
        out.push('\n');
        match toml::to_string_pretty(&self.config) {
            Ok(text) => out.push_str(&text),
            Err(e) => out.push_str(&format!("# failed to serialize config: {}\n", e)),
        }
        out
    }
}

/// Print the effective config: file contents merged with command-line overrides
pub fn handle_show(
    config: &Config,
    path: &Path,
    format: OutputFormat,
    lang: Language,
) -> Result<()> {
    let view_model = ConfigViewModel {
        path: path.to_path_buf(),
        exists: path.exists(),
        config: config.clone(),
    };
    ConsoleRenderer::new(format, lang).render(CommandResult::new(view_model))
}

pub fn handle_init(path: &Path, force: bool, format: OutputFormat, lang: Language) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    let view_model = ConfigViewModel {
        path: path.to_path_buf(),
        exists: true,
        config,
    };
    let result = CommandResult::new(view_model)
        .with_badge(StatusBadge::success(format!("Wrote {}", path.display())));
    ConsoleRenderer::new(format, lang).render(result)
}
