//! Layered demo settings: built-in defaults, then an optional TOML file, then
//! `CHASE_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use gc_core::{Position, SimConfig};
use serde::Deserialize;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "chase.toml";

/// How pac-man moves between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Stationary,
    Random,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    /// Headerless 0/1 CSV maze.  `None` uses the built-in maze.
    pub maze:         Option<PathBuf>,
    pub ghost:        [i32; 2],
    pub pacman:       [i32; 2],
    pub target:       TargetKind,
    /// Chance per tick that a random target moves.
    pub target_move_probability: f64,
    /// Wait for Enter between ticks; `q` quits.
    pub interactive:  bool,
    pub clear_screen: bool,
    pub ascii:        bool,
    pub trace_csv:    Option<PathBuf>,
    pub sim:          SimConfig,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            maze:         None,
            ghost:        [5, 0],
            pacman:       [2, 4],
            target:       TargetKind::Stationary,
            target_move_probability: 0.5,
            interactive:  true,
            clear_screen: false,
            ascii:        false,
            trace_csv:    None,
            sim:          SimConfig::default(),
        }
    }
}

impl ChaseConfig {
    pub fn ghost_position(&self) -> Position {
        self.ghost.into()
    }

    pub fn pacman_position(&self) -> Position {
        self.pacman.into()
    }
}

/// Load settings from `path` (if it exists) and the environment.
pub fn load_config(path: &Path) -> Result<ChaseConfig, ConfigError> {
    info!(path = %path.display(), "loading configuration");
    load_config_with(path, Environment::with_prefix("CHASE"))
}

fn load_config_with(path: &Path, env: Environment) -> Result<ChaseConfig, ConfigError> {
    let env = env
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("ghost")
        .with_list_parse_key("pacman");

    let settings = Config::builder()
        .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
        .add_source(env)
        .build()?;

    let config: ChaseConfig = settings.try_deserialize()?;
    debug!(?config, "configuration resolved");
    Ok(config)
}
