//! Rendering of command results.

use clap::ValueEnum;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Output {
    Plain,
    Json,
    None,
}

/// The passwords produced by one generate run, plus the number of attempts
/// that yielded nothing.
pub struct PasswordBatch {
    pub passwords: Vec<String>,
    pub failed: usize,
}

pub enum CommandOutput {
    Plain(String),
    Object(serde_json::Value),
    Passwords(PasswordBatch),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

pub struct RenderConfig {
    pub output: Output,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            quiet: cli.quiet,
        }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        // Quiet still reports errors through the exit code.
        if self.quiet || self.output == Output::None {
            return result.map(|_| ());
        }

        match result {
            // Errors will be passed through to the caller, and rendered by the main function
            Err(e) => Err(e),

            // Plain text is just output as is
            Ok(CommandOutput::Plain(text)) => {
                println!("{}", text);
                Ok(())
            }

            // Objects are always serialized as JSON
            Ok(CommandOutput::Object(obj)) => {
                print_pretty_json(&obj)
            }

            Ok(CommandOutput::Passwords(batch)) => match self.output {
                Output::Json => print_pretty_json(&serde_json::json!({
                    "passwords": batch.passwords,
                    "failed": batch.failed,
                })),
                _ => {
                    for password in &batch.passwords {
                        println!("{}", password);
                    }
                    Ok(())
                }
            },
        }
    }
}

fn print_pretty_json(value: &serde_json::Value) -> color_eyre::eyre::Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    // Keep a trailing newline for consistency with the plain output
    json.push('\n');
    print!("{}", json);
    Ok(())
}
