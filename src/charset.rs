// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::trace;
use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four disjoint character sets a password can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in alphabet concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Which character classes are enabled for a generation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClassSelection {
    pub fn all() -> Self {
        CharacterClassSelection {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }

    /// Enabled classes in alphabet concatenation order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }
}

/// Ordered characters available for sampling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

pub fn assemble_alphabet(selection: &CharacterClassSelection) -> Alphabet {
    let characters: Vec<char> = selection
        .enabled()
        .flat_map(|class| class.characters().chars())
        .collect();

    trace!("Assembled alphabet of {} characters", characters.len());

    Alphabet(characters)
}
