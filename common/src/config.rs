use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Looks values up by name, first in the environment, then in the configured scope of the
/// hocon document and finally at the root of the document.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!("Loaded config {:?} with scope {}", path, scope);

        Ok(Self::from_hocon(hocon, scope, base_dir))
    }

    /// Builds a loader from an in-memory document. Relative paths resolve against the current
    /// directory.
    pub fn from_contents(contents: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(contents)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::from_hocon(hocon, scope, PathBuf::from(".")))
    }

    fn from_hocon(hocon: Hocon, scope: String, base_dir: PathBuf) -> Self {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self {
            hocon,
            env,
            scope,
            base_dir,
        }
    }

    pub fn get(&self, name: &str) -> Option<ConfigValue> {
        if let Some(value) = self.env.get(name) {
            return Some(ConfigValue::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    /// Resolves a path valued key relative to the directory holding the config file.
    pub fn get_relative_path(&self, name: &str) -> Result<PathBuf> {
        let value = self
            .get(name)
            .and_then(|v| v.as_string())
            .ok_or_else(|| anyhow!("Config value {} is missing", name))?;

        Ok(self.base_dir.join(value))
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<ConfigValue> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(ConfigValue::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(ConfigValue::Integer(*i64)),
            Hocon::String(string) => Some(ConfigValue::String(string.clone())),
            Hocon::Boolean(bool) => Some(ConfigValue::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(val) => Some(*val),
            ConfigValue::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ConfigValue::Integer(val) => usize::try_from(*val).ok(),
            ConfigValue::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ConfigValue::Integer(val) => u64::try_from(*val).ok(),
            ConfigValue::String(val) => val.parse::<u64>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            ConfigValue::Float(val) => Some(*val),
            ConfigValue::Integer(val) => Some(*val as f32),
            ConfigValue::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            ConfigValue::String(val) => Some(val.clone()),
            ConfigValue::Boolean(true) => Some("true".to_string()),
            ConfigValue::Boolean(false) => Some("false".to_string()),
            ConfigValue::Float(val) => Some(val.to_string()),
            ConfigValue::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
