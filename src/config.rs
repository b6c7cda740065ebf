// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, ops::RangeInclusive, path::Path};

use crate::charset::CharacterClassSelection;
use crate::error::{Error, Result};
use crate::password::GenerationRequest;

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=50;
pub const COUNT_RANGE: RangeInclusive<usize> = 1..=10;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub length: usize,
    pub count: usize,
    pub character_classes: CharacterClassSelection,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: 12,
            count: 1,
            character_classes: CharacterClassSelection {
                uppercase: true,
                lowercase: true,
                numbers: true,
                symbols: false,
            },
        }
    }
}

impl Config {
    /// Checks the ranges the command line accepts and builds a request from it.
    pub fn to_request(&self) -> Result<GenerationRequest> {
        self.validate()?;

        if self.character_classes.is_empty() {
            return Err(Error::EmptySelection);
        }

        GenerationRequest::new(self.length, self.count, self.character_classes)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_length()?;
        if !COUNT_RANGE.contains(&self.count) {
            return Err(Error::InvalidConfig(format!(
                "count must be between {} and {}, got {}",
                COUNT_RANGE.start(),
                COUNT_RANGE.end(),
                self.count
            )));
        }
        Ok(())
    }

    pub fn validate_length(&self) -> Result<()> {
        if !LENGTH_RANGE.contains(&self.length) {
            return Err(Error::InvalidConfig(format!(
                "length must be between {} and {}, got {}",
                LENGTH_RANGE.start(),
                LENGTH_RANGE.end(),
                self.length
            )));
        }
        Ok(())
    }
}

/// Reads a config file as is; ranges are checked once command line overrides are applied.
pub fn read_config(config_path: &Path) -> Result<Config> {
    let path_string = config_path.display().to_string();
    debug!("Reading config at: {path_string}");

    let mut config_data: String = String::new();
    File::open(config_path)
        .and_then(|mut config_file| config_file.read_to_string(&mut config_data))
        .map_err(|source| Error::ConfigRead {
            path: path_string,
            source,
        })?;

    Ok(serde_yaml::from_str(&config_data)?)
}
