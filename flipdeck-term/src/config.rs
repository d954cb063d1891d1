use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use flipdeck_lib::deck::OrderPolicy;
use flipdeck_lib::sources::DEFAULT_QUOTES_URL;

use crate::ui::colors::Theme;

pub const DEFAULT_CONFIG_ID: &str = "default";
pub const DEFAULT_ASSET_PATH: &str = "assets/quotes.json";

/// Which quote source variant the app loads at startup.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(ascii_case_insensitive)]
pub enum SourceKind {
    #[default]
    Asset,
    Remote,
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub id: String,
    pub theme: String,
    pub source: SourceKind,
    pub remote_url: String,
    pub asset_path: String,
    pub order: OrderPolicy,
}

impl Config {
    pub fn default() -> Self {
        Self {
            id: DEFAULT_CONFIG_ID.to_string(),
            theme: Theme::Blue.to_string(),
            source: SourceKind::Asset,
            remote_url: DEFAULT_QUOTES_URL.to_string(),
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            order: OrderPolicy::Shuffled,
        }
    }
}

pub fn parse_source_kind(value: &str) -> Option<SourceKind> {
    SourceKind::from_str(value).ok()
}

pub struct ConfigManager {
    path: String,
    configs: HashMap<String, Config>,
}

impl ConfigManager {
    pub fn new(path: &str) -> Self {
        let f: Result<std::fs::File, std::io::Error> = std::fs::File::open(path);

        match f {
            Ok(file) => {
                let configs: HashMap<String, Config> = serde_yaml::from_reader(file).unwrap();
                Self {
                    path: String::from(path),
                    configs,
                }
            }
            Err(_) => {
                let default_conf = Config::default();
                let mut configs: HashMap<String, Config> = HashMap::new();
                configs.insert(default_conf.id.clone(), default_conf.clone());
                let mut man = Self {
                    path: String::from(path),
                    configs,
                };
                man.write();
                man
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<Config> {
        self.configs.get(id).cloned()
    }

    pub fn create(&mut self, config: &Config) {
        self.configs.insert(config.id.clone(), config.clone());
        self.write();
    }

    pub fn update_config(&mut self, new_config: Config) {
        self.configs.insert(new_config.id.clone(), new_config);
        self.write();
    }

    fn write(&mut self) {
        let serialized = serde_yaml::to_string(&self.configs).unwrap();
        std::fs::write(&self.path, serialized).unwrap();
    }
}
