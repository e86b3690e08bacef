use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error opening configuration file {path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
    #[error("Error parsing configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Site {
    /// Appended to every page title
    pub name: String,
    pub title: String,
    pub description: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            name: "Kambas do Java".to_string(),
            title: "Kambas do Java - Comunidade Java de Luanda".to_string(),
            description: "Comunidade de desenvolvedores Java de Luanda, Angola. Eventos, tutoriais e notícias sobre Java e tecnologia.".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub events_dir: PathBuf,
    pub members_dir: PathBuf,
    pub template_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub site_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("posts"),
            events_dir: PathBuf::from("events"),
            members_dir: PathBuf::from("members"),
            template_dir: PathBuf::from("templates"),
            assets_dir: PathBuf::from("assets"),
            site_dir: PathBuf::from("site"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Defaults {
    /// Posts shown on the index page
    pub recent_posts: usize,
    /// Upcoming events shown on the index page
    pub upcoming_events: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            recent_posts: 3,
            upcoming_events: 2,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    /// Resolves every relative path against `base_dir`.
    pub fn relative_to(mut self, base_dir: &Path) -> Config {
        let resolve = |path: PathBuf| if path.is_absolute() { path } else { base_dir.join(path) };
        self.paths = Paths {
            posts_dir: resolve(self.paths.posts_dir),
            events_dir: resolve(self.paths.events_dir),
            members_dir: resolve(self.paths.members_dir),
            template_dir: resolve(self.paths.template_dir),
            assets_dir: resolve(self.paths.assets_dir),
            site_dir: resolve(self.paths.site_dir),
        };
        self
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(exe_dir) => PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config, ConfigError> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content)?;

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
        events_dir: parse_path(cfg.paths.events_dir),
        members_dir: parse_path(cfg.paths.members_dir),
        template_dir: parse_path(cfg.paths.template_dir),
        assets_dir: parse_path(cfg.paths.assets_dir),
        site_dir: parse_path(cfg.paths.site_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config, ConfigError> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|source| ConfigError::Io {
        path: cfg_path.display().to_string(),
        source,
    })?;

    parse_config(&cfg_content)
}
