// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::charset::{CharacterClass, CharacterClassSelection};

pub const MAX_SCORE: u8 = 7;

const GOOD_LENGTH: usize = 12;
const ADEQUATE_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 6 {
            StrengthTier::Strong
        } else if score >= 4 {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "Weak Password"),
            StrengthTier::Medium => write!(f, "Medium Strength Password"),
            StrengthTier::Strong => write!(f, "Strong Password"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrengthAssessment {
    pub score: u8,
    pub tier: StrengthTier,
    pub factors: Vec<&'static str>,
}

fn class_contribution(class: CharacterClass) -> (u8, &'static str) {
    match class {
        CharacterClass::Uppercase => (1, "Uppercase letters"),
        CharacterClass::Lowercase => (1, "Lowercase letters"),
        CharacterClass::Numbers => (1, "Numbers"),
        CharacterClass::Symbols => (2, "Special symbols"),
    }
}

fn length_contribution(length: usize) -> Option<(u8, &'static str)> {
    if length >= GOOD_LENGTH {
        Some((2, "Good length (12+ characters)"))
    } else if length >= ADEQUATE_LENGTH {
        Some((1, "Adequate length (8+ characters)"))
    } else {
        None
    }
}

/// Scores a configuration, independent of any generated characters.
pub fn score_strength(selection: &CharacterClassSelection, length: usize) -> StrengthAssessment {
    let (score, factors) = selection
        .enabled()
        .map(class_contribution)
        .chain(length_contribution(length))
        .fold((0u8, Vec::new()), |(score, mut factors), (points, label)| {
            factors.push(label);
            (score + points, factors)
        });

    let tier = StrengthTier::from_score(score);
    debug!("Strength score {}/{} ({:?})", score, MAX_SCORE, tier);

    StrengthAssessment {
        score,
        tier,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> CharacterClassSelection {
        CharacterClassSelection {
            uppercase,
            lowercase,
            numbers,
            symbols,
        }
    }

    #[test]
    fn letters_and_numbers_with_good_length_is_medium() {
        let assessment = score_strength(&selection(true, true, true, false), 12);

        assert_eq!(assessment.score, 5);
        assert_eq!(assessment.tier, StrengthTier::Medium);
        assert_eq!(
            assessment.factors,
            vec![
                "Uppercase letters",
                "Lowercase letters",
                "Numbers",
                "Good length (12+ characters)"
            ]
        );
    }

    #[test]
    fn everything_enabled_is_strong() {
        let assessment = score_strength(&CharacterClassSelection::all(), 16);

        assert_eq!(assessment.score, MAX_SCORE);
        assert_eq!(assessment.tier, StrengthTier::Strong);
        assert_eq!(assessment.factors.len(), 5);
        assert_eq!(assessment.factors[3], "Special symbols");
    }

    #[test]
    fn short_uppercase_only_is_weak() {
        let assessment = score_strength(&selection(true, false, false, false), 6);

        assert_eq!(assessment.score, 1);
        assert_eq!(assessment.tier, StrengthTier::Weak);
        assert_eq!(assessment.factors, vec!["Uppercase letters"]);
    }

    #[test]
    fn length_brackets() {
        let numbers = selection(false, false, true, false);

        assert_eq!(score_strength(&numbers, 7).score, 1);
        assert_eq!(
            score_strength(&numbers, 8).factors,
            vec!["Numbers", "Adequate length (8+ characters)"]
        );
        assert_eq!(score_strength(&numbers, 11).score, 2);
        assert_eq!(score_strength(&numbers, 12).score, 3);
        assert_eq!(score_strength(&numbers, 50).score, 3);
    }

    #[test]
    fn empty_selection_scores_length_only() {
        let assessment = score_strength(&CharacterClassSelection::default(), 10);

        assert_eq!(assessment.score, 1);
        assert_eq!(assessment.tier, StrengthTier::Weak);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(6), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(7), StrengthTier::Strong);
    }

    #[test]
    fn scoring_is_pure() {
        let selection = selection(false, true, false, true);

        let first = score_strength(&selection, 9);
        score_strength(&CharacterClassSelection::all(), 40);
        let second = score_strength(&selection, 9);

        assert_eq!(first, second);
    }

    #[test]
    fn tier_display() {
        assert_eq!(StrengthTier::Strong.to_string(), "Strong Password");
        assert_eq!(StrengthTier::Medium.to_string(), "Medium Strength Password");
        assert_eq!(StrengthTier::Weak.to_string(), "Weak Password");
    }
}
