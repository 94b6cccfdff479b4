//! Generation requests and their validated form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::CharacterClass;

/// Smallest allowed password length.
pub const MINIMUM_LENGTH: u8 = 8;
/// Largest allowed password length.
pub const MAXIMUM_LENGTH: u8 = 64;
/// Smallest allowed number of passwords per run.
pub const MINIMUM_COUNT: u8 = 1;
/// Largest allowed number of passwords per run.
pub const MAXIMUM_COUNT: u8 = 100;

/// Password generator request options.
///
/// This is the record the configuration layer assembles from CLI flags,
/// interactive prompts or the saved config file, and the record that gets
/// persisted to disk. It carries no validity guarantees; convert it into a
/// [`GenerationPolicy`] before generating.
#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PasswordGeneratorRequest {
    /// Include lowercase characters (a-z).
    pub lowercase: bool,
    /// Include uppercase characters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (!@#$%...).
    pub symbols: bool,
    /// Exclude characters that are easy to misread (I, l, 1, O, 0).
    pub avoid_ambiguous: bool,
    /// Requested password length.
    pub length: u8,
    /// How many passwords to produce in one run.
    pub count: u8,
}

impl Default for PasswordGeneratorRequest {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            avoid_ambiguous: false,
            length: 16,
            count: 1,
        }
    }
}

/// The reasons a request is rejected by policy validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPolicyError {
    /// Requested length is outside [`MINIMUM_LENGTH`]..=[`MAXIMUM_LENGTH`].
    #[error("password length must be between 8 and 64")]
    InvalidLength,
    /// Requested count is outside [`MINIMUM_COUNT`]..=[`MAXIMUM_COUNT`].
    #[error("password count must be between 1 and 100")]
    InvalidCount,
    /// The request enables no character class at all.
    #[error("at least one character class must be enabled")]
    NoClassesEnabled,
}

/// A validated, immutable generation policy.
///
/// Only obtainable through `TryFrom<PasswordGeneratorRequest>`, which is
/// where the bounds are enforced. The generation functions assume a policy
/// is well formed and do not re-validate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationPolicy {
    length: usize,
    enabled_classes: Vec<CharacterClass>,
    avoid_ambiguous: bool,
    count: usize,
}

impl GenerationPolicy {
    /// Password length, in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Enabled classes, in the fixed [`CharacterClass::ALL`] order.
    pub fn enabled_classes(&self) -> &[CharacterClass] {
        &self.enabled_classes
    }

    /// Whether ambiguous characters are excluded.
    pub fn avoid_ambiguous(&self) -> bool {
        self.avoid_ambiguous
    }

    /// Number of passwords to produce in one run.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl TryFrom<PasswordGeneratorRequest> for GenerationPolicy {
    type Error = InvalidPolicyError;

    fn try_from(request: PasswordGeneratorRequest) -> Result<Self, Self::Error> {
        if !(MINIMUM_LENGTH..=MAXIMUM_LENGTH).contains(&request.length) {
            return Err(InvalidPolicyError::InvalidLength);
        }
        if !(MINIMUM_COUNT..=MAXIMUM_COUNT).contains(&request.count) {
            return Err(InvalidPolicyError::InvalidCount);
        }

        let toggles = [
            (CharacterClass::Lowercase, request.lowercase),
            (CharacterClass::Uppercase, request.uppercase),
            (CharacterClass::Digit, request.digits),
            (CharacterClass::Symbol, request.symbols),
        ];
        let enabled_classes: Vec<CharacterClass> = toggles
            .into_iter()
            .filter_map(|(class, enabled)| enabled.then_some(class))
            .collect();
        if enabled_classes.is_empty() {
            return Err(InvalidPolicyError::NoClassesEnabled);
        }

        Ok(Self {
            length: request.length.into(),
            enabled_classes,
            avoid_ambiguous: request.avoid_ambiguous,
            count: request.count.into(),
        })
    }
}
