// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use serde::Serialize;

use crate::error::Result;
use crate::strength::{StrengthAssessment, MAX_SCORE};

#[derive(Debug, Serialize)]
pub struct GenerationReport<'a> {
    pub passwords: &'a [String],
    pub strength: &'a StrengthAssessment,
}

impl GenerationReport<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn render_passwords(passwords: &[String]) -> String {
    if let [password] = passwords {
        return format!("{password}\n");
    }

    passwords
        .iter()
        .enumerate()
        .map(|(index, password)| format!("{}. {}\n", index + 1, password))
        .collect()
}

pub fn render_strength(assessment: &StrengthAssessment) -> String {
    let factors: String = assessment
        .factors
        .iter()
        .map(|factor| format!("• {factor}\n"))
        .collect();

    format!(
        "{} (score {}/{})\nStrength factors:\n{}",
        assessment.tier, assessment.score, MAX_SCORE, factors
    )
}

pub fn render_text(passwords: &[String], assessment: &StrengthAssessment) -> String {
    format!(
        "{}\n{}",
        render_passwords(passwords),
        render_strength(assessment)
    )
}
