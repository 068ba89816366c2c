// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub registro: ConfigSectionLog,
    pub salida: ConfigSectionOutput,
}

impl ConfigRoot {
    pub const FILE_NAME: &'static str = "parlante.toml";

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reads `parlante.toml` next to `script`, falling back to the defaults
    /// when there is no such file.
    pub fn load_for(script: &Path) -> anyhow::Result<Self> {
        let directory = script.parent().unwrap_or(Path::new("."));
        let path = directory.join(Self::FILE_NAME);

        if !path.is_file() {
            return Ok(Self::default());
        }

        debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("No se pudo leer {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Configuración no válida en {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub depurar: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionOutput {
    pub color: bool,
}

impl Default for ConfigSectionOutput {
    fn default() -> Self {
        Self {
            color: true,
        }
    }
}
