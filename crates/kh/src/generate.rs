//! The generate command: resolve a request, validate it, run the batch.

use clap::Args;
use keyhaven_cli::{confirm_prompt, number_prompt};
use keyhaven_generators::{
    build_alphabet, synthesize, GenerationPolicy, PasswordError, PasswordGeneratorRequest,
    MAXIMUM_COUNT, MAXIMUM_LENGTH, MINIMUM_COUNT, MINIMUM_LENGTH,
};
use tracing::warn;

use crate::{
    config,
    render::{CommandOutput, CommandResult, PasswordBatch},
};

#[derive(Args, Clone)]
pub struct GenerateArgs {
    #[arg(short = 'l', long, action, help = "Include lowercase characters (a-z)")]
    pub lowercase: bool,

    #[arg(short = 'u', long, action, help = "Include uppercase characters (A-Z)")]
    pub uppercase: bool,

    #[arg(short = 'd', long, action, help = "Include digits (0-9)")]
    pub digits: bool,

    #[arg(short = 's', long, action, help = "Include symbols (!@#$%...)")]
    pub symbols: bool,

    #[arg(long, help = "Exclude ambiguous characters (I, l, 1, O, 0)")]
    pub avoid_ambiguous: bool,

    #[arg(long, help = "Length of each generated password (8-64)")]
    pub length: Option<u8>,

    #[arg(short = 'c', long, help = "Number of passwords to generate (1-100)")]
    pub count: Option<u8>,

    #[arg(short = 'i', long, help = "Prompt for every setting interactively")]
    pub interactive: bool,
}

impl GenerateArgs {
    pub fn run(&self) -> CommandResult {
        let saved = config::load_or_default()?;

        let request = if self.interactive {
            prompt_for_request(&saved)?
        } else {
            self.resolve_request(saved)
        };
        let policy = GenerationPolicy::try_from(request)?;

        let alphabet = build_alphabet(policy.enabled_classes(), policy.avoid_ambiguous());
        let mut rng = rand::thread_rng();
        let mut passwords = Vec::with_capacity(policy.count());
        let mut failed = 0;
        for _ in 0..policy.count() {
            match synthesize(&mut rng, &alphabet, policy.length()) {
                Ok(password) => passwords.push(password),
                // Recoverable per attempt; keep generating the rest.
                Err(PasswordError::EmptyAlphabet) => failed += 1,
            }
        }

        if failed > 0 {
            warn!(failed, "some attempts produced no password");
        }

        Ok(CommandOutput::Passwords(PasswordBatch { passwords, failed }))
    }

    /// Merge the flags into the saved configuration. Class flags win as a
    /// group: naming any class enables exactly the named ones.
    fn resolve_request(&self, saved: PasswordGeneratorRequest) -> PasswordGeneratorRequest {
        let mut request = saved;

        if self.lowercase || self.uppercase || self.digits || self.symbols {
            request.lowercase = self.lowercase;
            request.uppercase = self.uppercase;
            request.digits = self.digits;
            request.symbols = self.symbols;
        }
        if self.avoid_ambiguous {
            request.avoid_ambiguous = true;
        }
        if let Some(length) = self.length {
            request.length = length;
        }
        if let Some(count) = self.count {
            request.count = count;
        }

        request
    }
}

/// Ask for every setting, prefilled with the saved values. Keeps asking
/// until at least one character class is selected; the range checks live in
/// the prompts themselves.
fn prompt_for_request(
    saved: &PasswordGeneratorRequest,
) -> color_eyre::eyre::Result<PasswordGeneratorRequest> {
    loop {
        let request = PasswordGeneratorRequest {
            length: number_prompt(
                "Password length",
                saved.length,
                MINIMUM_LENGTH,
                MAXIMUM_LENGTH,
            )?,
            lowercase: confirm_prompt("Include lowercase letters (a-z)?", saved.lowercase)?,
            uppercase: confirm_prompt("Include uppercase letters (A-Z)?", saved.uppercase)?,
            digits: confirm_prompt("Include digits (0-9)?", saved.digits)?,
            symbols: confirm_prompt("Include symbols (!@#$%...)?", saved.symbols)?,
            avoid_ambiguous: confirm_prompt(
                "Exclude ambiguous characters (I, l, 1, O, 0)?",
                saved.avoid_ambiguous,
            )?,
            count: number_prompt("How many passwords?", saved.count, MINIMUM_COUNT, MAXIMUM_COUNT)?,
        };

        if request.lowercase || request.uppercase || request.digits || request.symbols {
            return Ok(request);
        }
        eprintln!("At least one character class must be selected.");
    }
}
