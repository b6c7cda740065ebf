// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),
    #[error("Please select at least one character set")]
    EmptySelection,
    #[error("Failed to generate passwords - please check your settings")]
    GenerationFailed,
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
