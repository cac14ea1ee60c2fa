//! INI file configuration adapter.

use std::path::Path;

use configparser::ini::Ini;

use crate::domain::error::PortvalError;
use crate::ports::config_port::ConfigPort;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PortvalError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config.load(path).map_err(|reason| PortvalError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, PortvalError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| PortvalError::ConfigParse {
                file: "<inline>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config
            .get(section, key)
            .filter(|value| !value.trim().is_empty())
    }

    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, String> {
        if self.get_string(section, key).is_none() {
            return Ok(None);
        }
        self.config.getint(section, key)
    }

    fn get_double(&self, section: &str, key: &str) -> Result<Option<f64>, String> {
        if self.get_string(section, key).is_none() {
            return Ok(None);
        }
        self.config.getfloat(section, key)
    }
}
