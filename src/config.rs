//! Key-value environment file.
//!
//! The format is a small INI dialect: `#` comments, `[section]` headers and
//! `key = value` lines. Keys that appear before the first header are globals.
//! Values may be wrapped in double quotes.
//!
//! ```text
//! [deploy]
//! mode = developer
//!
//! [dev/debug]
//! debug_logging = 1
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};
use crate::filesystem::write_atomic;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub globals: BTreeMap<String, String>,
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`LogError::Io`] if the file cannot be read, [`LogError::ConfigParse`]
    /// if a line is malformed.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
        Self::parse(&content)
    }

    /// Parses environment file content.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigParse`] with the 1-based line number of the
    /// first line that is neither blank, a comment, a header nor an assignment.
    pub fn parse(content: &str) -> LogResult<Self> {
        let mut cfg = Self::empty();
        let mut current_section: Option<String> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim();
                if name.is_empty() {
                    return Err(LogError::ConfigParse {
                        line: idx + 1,
                        reason: "empty section name".into(),
                    });
                }
                current_section = Some(name.to_string());
                continue;
            }

            let Some(pos) = line.find('=') else {
                return Err(LogError::ConfigParse {
                    line: idx + 1,
                    reason: format!("expected `key = value`, got `{line}`"),
                });
            };

            let key = line[..pos].trim();
            if key.is_empty() {
                return Err(LogError::ConfigParse {
                    line: idx + 1,
                    reason: "empty key".into(),
                });
            }
            let value = unquote(line[pos + 1..].trim());

            match &current_section {
                None => {
                    cfg.globals.insert(key.to_string(), value.to_string());
                }
                Some(sec) => {
                    cfg.sections
                        .entry(sec.clone())
                        .or_default()
                        .insert(key.to_string(), value.to_string());
                }
            }
        }
        Ok(cfg)
    }

    pub fn empty() -> Self {
        Self {
            globals: BTreeMap::new(),
            sections: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }

    /// Reads a boolean flag. Missing or empty keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`LogError::InvalidFlag`] when the value is not a recognised boolean.
    pub fn get_bool(&self, section: &str, key: &str) -> LogResult<Option<bool>> {
        let Some(raw) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(Some(true)),
            "0" | "false" | "off" | "no" => Ok(Some(false)),
            _ => Err(LogError::InvalidFlag {
                key: format!("{section}/{key}"),
                value: raw.to_string(),
            }),
        }
    }

    /// Stores `value` under `[section] key`.
    ///
    /// # Errors
    ///
    /// [`LogError::InvalidValue`] if the value contains a line break, since
    /// every entry must fit on one line of the file.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) -> LogResult<()> {
        let value = value.into();
        if value.contains(['\r', '\n']) {
            return Err(LogError::InvalidValue {
                key: format!("{section}/{key}"),
            });
        }
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    /// Serialises back into the file format. Globals come first, sections
    /// follow in name order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.globals {
            let _ = writeln!(out, "{k} = {}", quote_if_needed(v));
        }
        for (name, entries) in &self.sections {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "[{name}]");
            for (k, v) in entries {
                let _ = writeln!(out, "{k} = {}", quote_if_needed(v));
            }
        }
        out
    }

    /// Atomically replaces the file at `path` with [`render`](Self::render).
    ///
    /// # Errors
    ///
    /// [`LogError::Io`] if the temporary file cannot be written or renamed.
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        write_atomic(path.as_ref(), self.render())
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || value.contains(['#', '"']) || value.trim() != value {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
