// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::{debug, trace};
use rand::Rng;

use crate::charset::{assemble_alphabet, Alphabet, CharacterClassSelection};
use crate::error::{Error, Result};
use crate::strength::{score_strength, StrengthAssessment};

/// Draws `length` characters uniformly, with replacement, from `alphabet`.
///
/// Returns `None` for an empty alphabet.
pub fn generate_one<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: &Alphabet,
) -> Option<String> {
    if alphabet.is_empty() {
        return None;
    }

    trace!("Generating random password");

    let characters = alphabet.as_slice();
    let password: String = (0..length)
        .map(|_| characters[rng.random_range(0..characters.len())])
        .collect();
    Some(password)
}

/// Generates `count` independent passwords sharing one configuration.
///
/// An empty selection yields an empty batch.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    length: usize,
    selection: &CharacterClassSelection,
) -> Vec<String> {
    let alphabet = assemble_alphabet(selection);

    debug!(
        "Generating {} password(s) of length {} from {} characters",
        count,
        length,
        alphabet.len()
    );

    (0..count)
        .filter_map(|_| generate_one(&mut *rng, length, &alphabet))
        .collect()
}

/// A validated request for one batch of passwords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    count: usize,
    selection: CharacterClassSelection,
}

impl GenerationRequest {
    pub fn new(length: usize, count: usize, selection: CharacterClassSelection) -> Result<Self> {
        if length < 1 {
            return Err(Error::InvalidRequest(String::from(
                "password length must be at least 1",
            )));
        }
        if count < 1 {
            return Err(Error::InvalidRequest(String::from(
                "password count must be at least 1",
            )));
        }

        Ok(GenerationRequest {
            length,
            count,
            selection,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selection(&self) -> &CharacterClassSelection {
        &self.selection
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        generate_batch(rng, self.count, self.length, &self.selection)
    }

    pub fn assess(&self) -> StrengthAssessment {
        score_strength(&self.selection, self.length)
    }
}
