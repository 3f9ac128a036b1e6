/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to the classic arena tuning if the file is missing or incomplete.
///
/// Every tunable the simulation uses lives in `GameConfig`, which is passed
/// by reference into the transition functions. Nothing here is global.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub speed: SpeedConfig,
    pub rules: RulesConfig,
}

/// Grid geometry. All pixel values derive from these four numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pub cell_width: i32,   // [pixels]
    pub cell_height: i32,  // [pixels]
    pub grid_width: i32,   // [cells]
    pub grid_height: i32,  // [cells]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedConfig {
    pub tick_rate_ms: u64,
    pub walk: i32,          // px/frame, horizontal
    pub climb: i32,         // px/frame, vertical (also fall speed)
    pub jump_impulse: i32,  // px/frame, negative = upward
    pub gravity: i32,       // px/frame added to dY each airborne frame
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulesConfig {
    pub initial_time: u32,
    pub egg_bonus: u32,
    pub food_bonus: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config.toml parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ArenaConfig {
    pub fn width_px(&self) -> i32 {
        self.grid_width * self.cell_width
    }

    pub fn height_px(&self) -> i32 {
        self.grid_height * self.cell_height
    }

    /// Largest x a character may occupy (its left edge, one cell from the right wall).
    pub fn max_x(&self) -> i32 {
        self.width_px() - self.cell_width
    }

    /// How far above the feet to look when deciding whether a stair starts overhead.
    pub fn climb_lookahead(&self) -> i32 {
        self.cell_height / 8
    }

    /// Vertical offset to the bottom pixel row of a character standing in a cell.
    pub fn foot_offset(&self) -> i32 {
        self.cell_height - 1
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    arena: TomlArena,
    #[serde(default)]
    speed: TomlSpeed,
    #[serde(default)]
    rules: TomlRules,
}

#[derive(Deserialize, Debug)]
struct TomlArena {
    #[serde(default = "default_cell_width")]
    cell_width: i32,
    #[serde(default = "default_cell_height")]
    cell_height: i32,
    #[serde(default = "default_grid_width")]
    grid_width: i32,
    #[serde(default = "default_grid_height")]
    grid_height: i32,
}

#[derive(Deserialize, Debug)]
struct TomlSpeed {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_walk")]
    walk: i32,
    #[serde(default = "default_climb")]
    climb: i32,
    #[serde(default = "default_jump_impulse")]
    jump_impulse: i32,
    #[serde(default = "default_gravity")]
    gravity: i32,
}

#[derive(Deserialize, Debug)]
struct TomlRules {
    #[serde(default = "default_initial_time")]
    initial_time: u32,
    #[serde(default = "default_egg_bonus")]
    egg_bonus: u32,
    #[serde(default = "default_food_bonus")]
    food_bonus: u32,
}

// ── Defaults ──
// Sprites are 24x16 drawn at 2x, hence 48x32 cells.

fn default_cell_width() -> i32 { 48 }
fn default_cell_height() -> i32 { 32 }
fn default_grid_width() -> i32 { 20 }
fn default_grid_height() -> i32 { 24 }

fn default_tick_rate() -> u64 { 30 }
fn default_walk() -> i32 { default_cell_width() / 6 }
fn default_climb() -> i32 { default_cell_height() / 4 }
fn default_jump_impulse() -> i32 { -default_cell_height() / 2 }
fn default_gravity() -> i32 { default_cell_height() / 16 }

fn default_initial_time() -> u32 { 2666 }  // ~80s at 30ms ticks
fn default_egg_bonus() -> u32 { 100 }
fn default_food_bonus() -> u32 { 50 }

impl Default for TomlArena {
    fn default() -> Self {
        TomlArena {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
        }
    }
}

impl Default for TomlSpeed {
    fn default() -> Self {
        TomlSpeed {
            tick_rate_ms: default_tick_rate(),
            walk: default_walk(),
            climb: default_climb(),
            jump_impulse: default_jump_impulse(),
            gravity: default_gravity(),
        }
    }
}

impl Default for TomlRules {
    fn default() -> Self {
        TomlRules {
            initial_time: default_initial_time(),
            egg_bonus: default_egg_bonus(),
            food_bonus: default_food_bonus(),
        }
    }
}

impl From<TomlConfig> for GameConfig {
    fn from(t: TomlConfig) -> Self {
        GameConfig {
            arena: ArenaConfig {
                cell_width: t.arena.cell_width,
                cell_height: t.arena.cell_height,
                grid_width: t.arena.grid_width,
                grid_height: t.arena.grid_height,
            },
            speed: SpeedConfig {
                tick_rate_ms: t.speed.tick_rate_ms,
                walk: t.speed.walk,
                climb: t.speed.climb,
                jump_impulse: t.speed.jump_impulse,
                gravity: t.speed.gravity,
            },
            rules: RulesConfig {
                initial_time: t.rules.initial_time,
                egg_bonus: t.rules.egg_bonus,
                food_bonus: t.rules.food_bonus,
            },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults;
    /// unreadable or invalid files are reported and ignored.
    pub fn load() -> Self {
        for dir in candidate_dirs() {
            let path = dir.join("config.toml");
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    log::warn!("{e}");
                    log::warn!("Using default settings.");
                    return GameConfig::default();
                }
            }
        }
        GameConfig::default()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a TOML document. Absent tables and keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: TomlConfig = toml::from_str(text)?;
        let cfg = GameConfig::from(raw);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject tunings the frame stepper cannot honor.
    ///
    /// Walk and climb speeds must divide the cell size, otherwise a moving
    /// character steps over every cell boundary and never snaps to rest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.arena;
        let s = &self.speed;
        positive("arena.cell_width", a.cell_width)?;
        positive("arena.cell_height", a.cell_height)?;
        positive("arena.grid_width", a.grid_width)?;
        positive("arena.grid_height", a.grid_height)?;
        positive("speed.walk", s.walk)?;
        positive("speed.climb", s.climb)?;
        positive("speed.gravity", s.gravity)?;
        if a.cell_width % s.walk != 0 {
            return Err(invalid("speed.walk", format!(
                "{} does not divide cell_width {}", s.walk, a.cell_width,
            )));
        }
        if a.cell_height % s.climb != 0 {
            return Err(invalid("speed.climb", format!(
                "{} does not divide cell_height {}", s.climb, a.cell_height,
            )));
        }
        if s.jump_impulse >= 0 {
            return Err(invalid("speed.jump_impulse", format!(
                "must be negative (upward), got {}", s.jump_impulse,
            )));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: i32) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_arena() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.arena.cell_width, 48);
        assert_eq!(cfg.arena.cell_height, 32);
        assert_eq!(cfg.arena.width_px(), 960);
        assert_eq!(cfg.arena.max_x(), 912);
        assert_eq!(cfg.speed.walk, 8);
        assert_eq!(cfg.speed.climb, 8);
        assert_eq!(cfg.speed.jump_impulse, -16);
        assert_eq!(cfg.speed.gravity, 2);
        assert_eq!(cfg.rules.initial_time, 2666);
        assert_eq!(cfg.arena.climb_lookahead(), 4);
        assert_eq!(cfg.arena.foot_offset(), 31);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = GameConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = GameConfig::from_toml_str(
            "[rules]\ninitial_time = 100\n\n[speed]\nwalk = 12\n",
        ).unwrap();
        assert_eq!(cfg.rules.initial_time, 100);
        assert_eq!(cfg.rules.egg_bonus, 100);
        assert_eq!(cfg.speed.walk, 12);
        assert_eq!(cfg.speed.climb, 8);
        assert_eq!(cfg.arena.grid_width, 20);
    }

    #[test]
    fn walk_speed_must_divide_cell() {
        let err = GameConfig::from_toml_str("[speed]\nwalk = 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "speed.walk", .. }));
    }

    #[test]
    fn upward_jump_required() {
        let err = GameConfig::from_toml_str("[speed]\njump_impulse = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "speed.jump_impulse", .. }));
    }

    #[test]
    fn zero_cell_rejected() {
        let err = GameConfig::from_toml_str("[arena]\ncell_height = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "arena.cell_height", .. }));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("[speed\nwalk = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::from_path(Path::new("/nonexistent/henhouse/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
