use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text for the theme toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light mode",
            Theme::Dark => "dark mode",
        }
    }
}

/// User preferences the editor reads, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub show_fifth: bool,
    pub theme: Theme,
}

impl Preferences {
    /// Save preferences to disk as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load preferences from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load preferences, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("failed to load preferences from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Flip the theme and persist the result.
    pub fn toggle_theme(&mut self, path: &Path) -> io::Result<Theme> {
        self.theme = self.theme.toggle();
        self.save(path)?;
        Ok(self.theme)
    }
}
