//! Random password generation.
//!
//! Passwords are built by rejection sampling: one random decimal digit, one
//! word drawn from the word source, and optionally one special character are
//! shuffled and concatenated; the candidate is accepted when its length falls
//! inside the configured bounds and it contains no excluded character.
//! Combining a digit with a dictionary word keeps the result memorable while
//! the shuffle randomizes digit and symbol placement.
//!
//! The loop is bounded: a configuration whose constraints the word source
//! cannot satisfy yields [`GeneratorError::UnsatisfiableConstraints`] after
//! [`MAX_ATTEMPTS`] rounds instead of spinning forever.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{GeneratorError, GeneratorResult};
use crate::wordlist::WordSource;

/// ASCII punctuation pool the generator draws special characters from.
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Upper bound on rejection-sampling rounds before the configuration is
/// declared unsatisfiable.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Parameters for password generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Minimum accepted password length in characters.
    pub min_length: usize,
    /// Maximum accepted password length in characters.
    pub max_length: usize,
    /// Whether to mix one special character into each candidate.
    pub include_special: bool,
    /// Characters that must not appear anywhere in the password.
    pub excluded: HashSet<char>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 7,
            max_length: 25,
            include_special: true,
            excluded: HashSet::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted length bounds.
    pub fn with_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Enables or disables the special-character token.
    pub fn with_special_characters(mut self, include: bool) -> Self {
        self.include_special = include;
        self
    }

    /// Adds characters to the exclusion set.
    pub fn exclude(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.excluded.extend(chars);
        self
    }

    /// Rejects configurations that can never produce a password, before any
    /// sampling happens.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.min_length > self.max_length {
            return Err(GeneratorError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

/// Generates a password with an injected RNG.
///
/// The word source is passed explicitly so callers control vocabulary and
/// tests control randomness; no process-wide state is consulted.
pub fn generate(
    config: &GeneratorConfig,
    words: &WordSource,
    rng: &mut impl Rng,
) -> GeneratorResult<String> {
    config.validate()?;
    if words.is_empty() {
        return Err(GeneratorError::EmptyWordList);
    }

    let specials: Vec<char> = SPECIAL_CHARACTERS.chars().collect();

    for _ in 0..MAX_ATTEMPTS {
        let mut tokens = vec![
            rng.random_range(0..10u32).to_string(),
            words
                .words()
                .choose(rng)
                .expect("word list checked non-empty")
                .clone(),
        ];
        if config.include_special {
            let special = *specials.choose(rng).expect("special pool is non-empty");
            tokens.push(special.to_string());
        }
        tokens.shuffle(rng);
        let candidate = tokens.concat();

        if accepts(config, &candidate) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::UnsatisfiableConstraints {
        attempts: MAX_ATTEMPTS,
    })
}

/// Generates a password using the thread RNG.
pub fn generate_password(config: &GeneratorConfig, words: &WordSource) -> GeneratorResult<String> {
    generate(config, words, &mut rand::rng())
}

fn accepts(config: &GeneratorConfig, candidate: &str) -> bool {
    let length = candidate.chars().count();
    length >= config.min_length
        && length <= config.max_length
        && !candidate.chars().any(|c| config.excluded.contains(&c))
}
