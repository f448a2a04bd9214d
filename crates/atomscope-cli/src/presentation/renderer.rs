use super::view_models::ConsolePresentable;
use crate::types::{Language, OutputFormat};
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            label: label.into(),
        }
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            StatusLevel::Success => "✓",
            StatusLevel::Info => "•",
            StatusLevel::Warning => "!",
            StatusLevel::Error => "✗",
        }
    }
}

/// A command's payload plus optional status line and follow-up hints
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    lang: Language,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, lang: Language) -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            format,
            lang,
            color,
        }
    }

    /// Text form of a result, without the trailing output step
    pub fn to_text<T>(&self, result: &CommandResult<T>) -> Result<String>
    where
        T: Serialize + ConsolePresentable,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(&result.content)?));
        }

        let mut out = String::new();
        if let Some(badge) = &result.badge {
            let line = format!("{} {}", badge.icon(), badge.label);
            if self.color {
                let colored = match badge.level {
                    StatusLevel::Success => line.green().bold().to_string(),
                    StatusLevel::Info => line.bold().to_string(),
                    StatusLevel::Warning => line.yellow().bold().to_string(),
                    StatusLevel::Error => line.red().bold().to_string(),
                };
                out.push_str(&colored);
            } else {
                out.push_str(&line);
            }
            out.push_str("\n\n");
        }

        out.push_str(&result.content.render_console(self.lang));

        if !result.suggestions.is_empty() {
            out.push('\n');
            for tip in &result.suggestions {
                if self.color {
                    out.push_str(&format!("  {} {}\n", "→".cyan(), tip));
                } else {
                    out.push_str(&format!("  → {}\n", tip));
                }
            }
        }
        Ok(out)
    }

    pub fn render<T>(&self, result: CommandResult<T>) -> Result<()>
    where
        T: Serialize + ConsolePresentable,
    {
        print!("{}", self.to_text(&result)?);
        Ok(())
    }
}
