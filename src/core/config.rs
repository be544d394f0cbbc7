//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pagemenu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::options::{
    DEFAULT_MENU_ANIMATION, DEFAULT_PAGE_ANIMATION, DEFAULT_VISIBLE_MENU_ITEM_COUNT,
    PageMenuOptions, supported_visible_count,
};
use crate::core::snap::FAST_DECELERATION_RATE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PageMenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub pages: PagesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<usize>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub visible_items: Option<usize>,
    /// Strip height in terminal rows.
    pub height: Option<u16>,
    pub deceleration_rate: Option<f32>,
    pub animation_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PagesConfig {
    pub animation_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Terminal rows for the menu strip: one label row inside a border.
pub const DEFAULT_MENU_ROWS: u16 = 3;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_page: usize,
    pub visible_items: usize,
    pub menu_rows: u16,
    pub deceleration_rate: f32,
    pub menu_animation: Duration,
    pub page_animation: Duration,
    pub log_level: String,
}

impl ResolvedConfig {
    /// Widget options for a terminal host: one logical unit per cell.
    pub fn to_options(&self) -> PageMenuOptions {
        PageMenuOptions {
            visible_menu_item_count: self.visible_items,
            menu_height: f32::from(self.menu_rows),
            start_page: self.start_page,
            deceleration_rate: self.deceleration_rate,
            menu_animation: self.menu_animation,
            page_animation: self.page_animation,
        }
    }
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_page: Option<usize>,
    pub visible_items: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pagemenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pagemenu").join("config.toml"))
}

/// Load config from `explicit` if given, else `~/.pagemenu/config.toml`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an I/O error. Malformed TOML is
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<PageMenuConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PageMenuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PageMenuConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<PageMenuConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PageMenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# pagemenu configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = 0                     # Or set PAGEMENU_START_PAGE
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [menu]
# visible_items = 3                  # 1 or 3; Or set PAGEMENU_VISIBLE_ITEMS
# height = 3                         # Terminal rows, border included
# deceleration_rate = 0.99           # Fling decay per millisecond
# animation_ms = 250

# [pages]
# animation_ms = 300
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PageMenuConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &PageMenuConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_usize = |key: &str| {
        let raw = env(key)?;
        match raw.trim().parse::<usize>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring {key}={raw:?}: {e}");
                None
            }
        }
    };

    // Start page: CLI → env → config → default
    let start_page = cli
        .start_page
        .or_else(|| env_usize("PAGEMENU_START_PAGE"))
        .or(config.general.start_page)
        .unwrap_or(0);

    // Visible items: CLI → env → config → default, then rounded to a count
    // the strip can centre
    let requested_items = cli
        .visible_items
        .or_else(|| env_usize("PAGEMENU_VISIBLE_ITEMS"))
        .or(config.menu.visible_items)
        .unwrap_or(DEFAULT_VISIBLE_MENU_ITEM_COUNT);
    let visible_items = supported_visible_count(requested_items);
    if visible_items != requested_items {
        warn!("visible_items {requested_items} cannot centre every tab, using {visible_items}");
    }

    let deceleration_rate = match config.menu.deceleration_rate {
        Some(rate) if (0.0..1.0).contains(&rate) => rate,
        Some(rate) => {
            warn!("deceleration_rate {rate} outside [0, 1), using default");
            FAST_DECELERATION_RATE
        }
        None => FAST_DECELERATION_RATE,
    };

    ResolvedConfig {
        start_page,
        visible_items,
        menu_rows: config.menu.height.unwrap_or(DEFAULT_MENU_ROWS).max(1),
        deceleration_rate,
        menu_animation: config
            .menu
            .animation_ms
            .map_or(DEFAULT_MENU_ANIMATION, Duration::from_millis),
        page_animation: config
            .pages
            .animation_ms
            .map_or(DEFAULT_PAGE_ANIMATION, Duration::from_millis),
        log_level: config
            .general
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}
