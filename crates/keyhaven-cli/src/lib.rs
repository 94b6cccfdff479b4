#![doc = include_str!("../README.md")]

mod color;

pub use color::{install_color_eyre, Color};
use inquire::{error::InquireResult, validator::Validation, Confirm, CustomType};

/// Prompt for a yes/no answer, prefilled with `default`.
pub fn confirm_prompt(prompt: &str, default: bool) -> InquireResult<bool> {
    Confirm::new(prompt).with_default(default).prompt()
}

/// Prompt for a whole number within `min..=max`, prefilled with `default`.
///
/// Out-of-range or non-numeric answers are rejected and the prompt is shown
/// again.
pub fn number_prompt(prompt: &str, default: u8, min: u8, max: u8) -> InquireResult<u8> {
    CustomType::<u8>::new(prompt)
        .with_default(default)
        .with_validator(move |value: &u8| {
            if (min..=max).contains(value) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("value must be between {min} and {max}").into(),
                ))
            }
        })
        .with_error_message("please type a whole number")
        .prompt()
}
