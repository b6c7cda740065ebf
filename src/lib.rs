// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! Random password generation from configurable character classes, with a
//! configuration-based strength assessment.

pub mod charset;
pub mod config;
pub mod error;
pub mod output;
pub mod password;
pub mod strength;

pub use error::{Error, Result};
