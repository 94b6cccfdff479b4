#![doc = include_str!("../README.md")]

mod charset;
mod password;
mod policy;

pub use charset::{build_alphabet, CharacterClass, EffectiveAlphabet};
pub use password::{password, password_with_rng, synthesize, PasswordError};
pub use policy::{
    GenerationPolicy, InvalidPolicyError, PasswordGeneratorRequest, MAXIMUM_COUNT, MAXIMUM_LENGTH,
    MINIMUM_COUNT, MINIMUM_LENGTH,
};
