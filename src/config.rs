use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CFG_FILE_NAME: &str = "linkdump.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("posts"),
            assets_dir: PathBuf::from("assets"),
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Paths {
    pub fn post_output_dir(&self) -> PathBuf {
        self.output_dir.join("posts")
    }

    pub fn tags_output_dir(&self) -> PathBuf {
        self.output_dir.join("tags")
    }

    pub fn assets_output_dir(&self) -> PathBuf {
        self.output_dir.join("assets")
    }

    /// Resolves relative paths against `root`.
    pub fn relative_to(&self, root: &Path) -> Paths {
        Paths {
            posts_dir: root.join(&self.posts_dir),
            assets_dir: root.join(&self.assets_dir),
            template_dir: root.join(&self.template_dir),
            output_dir: root.join(&self.output_dir),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Cache {
    pub post_capacity: usize,
    pub template_capacity: usize,
}

impl Default for Cache {
    fn default() -> Self {
        Cache {
            post_capacity: 100,
            template_capacity: 10,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default)]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub cache: Cache,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> std::result::Result<Config, toml::de::Error> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content)?;

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
        assets_dir: parse_path(cfg.paths.assets_dir),
        template_dir: parse_path(cfg.paths.template_dir),
        output_dir: parse_path(cfg.paths.output_dir),
    };
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| Error::Config {
        path: cfg_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_config(&cfg_content).map_err(|e| Error::Config {
        path: cfg_path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Reads `linkdump.toml` from `dir` when present, otherwise the default
/// layout is used. Relative paths are resolved against `dir`.
pub fn open_config(dir: &Path) -> Result<Config> {
    let cfg_path = dir.join(CFG_FILE_NAME);
    let mut cfg = if cfg_path.exists() {
        read_config(&cfg_path)?
    } else {
        Config::default()
    };

    cfg.paths = cfg.paths.relative_to(dir);
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(|location| dir.join(location));
    }

    Ok(cfg)
}
