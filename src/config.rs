//! daymail configuration.
//!
//! One TOML file holds everything a run needs: the calendar to read, who
//! the digest goes to, and how to reach the SMTP server.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::File;
use serde::Deserialize;

use crate::error::{DaymailError, DaymailResult};

static DEFAULT_TIMEZONE: &str = "Asia/Shanghai";
static DEFAULT_SUBJECT: &str = "Today's agenda";

fn default_smtp_port() -> u16 {
    587
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

/// Settings at ~/.config/daymail/config.toml (or the `--config` override).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Sender address ("Name <addr>" or bare address)
    pub email_from: String,
    /// Recipient address
    pub email_to: String,
    /// SMTP server hostname
    pub smtp_server: String,
    /// SMTP submission port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP login
    pub username: String,
    /// SMTP password
    pub password: String,
    /// Path to the .ics calendar file (`~` is expanded)
    pub calendar_file: PathBuf,
    /// IANA zone the digest is rendered in
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Mail subject line
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Config {
    /// Load settings from `path`, or from the default location when no
    /// override is given.
    ///
    /// A missing file at the default location is answered by writing a
    /// commented template there and returning an error pointing to it.
    pub fn load(path: Option<&Path>) -> DaymailResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.is_none() && !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Err(DaymailError::Config(format!(
                "no configuration found; a template was written to {}, fill it in and rerun",
                config_path.display()
            )));
        }

        config::Config::builder()
            .add_source(File::from(config_path))
            .build()
            .map_err(|e| DaymailError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaymailError::Config(e.to_string()))
    }

    /// Default config location: ~/.config/daymail/config.toml
    pub fn default_path() -> DaymailResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaymailError::Config("Could not determine config directory".into()))?
            .join("daymail");

        Ok(config_dir.join("config.toml"))
    }

    /// The calendar file path with `~` expanded.
    pub fn calendar_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.calendar_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The configured zone as a tz database entry.
    pub fn timezone(&self) -> DaymailResult<Tz> {
        self.timezone
            .parse()
            .map_err(|_| DaymailError::Config(format!("Unknown timezone '{}'", self.timezone)))
    }

    /// Create a template config with every key listed but commented out.
    fn create_default_config(path: &Path) -> DaymailResult<()> {
        let contents = format!(
            "\
# daymail configuration

# Sender and recipient:
# email_from = \"Daymail <daymail@example.com>\"
# email_to = \"you@example.com\"

# SMTP submission:
# smtp_server = \"smtp.example.com\"
# smtp_port = 587
# username = \"daymail@example.com\"
# password = \"app-password\"

# Calendar to read:
# calendar_file = \"~/calendar/personal.ics\"

# Digest rendering:
# timezone = \"{}\"
# subject = \"{}\"
",
            DEFAULT_TIMEZONE, DEFAULT_SUBJECT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaymailError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaymailError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
