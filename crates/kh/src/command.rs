//! Command line surface of `kh`.

use clap::{Parser, Subcommand};
use keyhaven_cli::Color;

use crate::{config::ConfigCommand, generate::GenerateArgs, render::Output};

#[derive(Parser, Clone)]
#[command(
    name = "Keyhaven CLI",
    version,
    about = "Keyhaven password generator",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::Plain)]
    pub output: Output,

    #[arg(long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,

    // Clap uses uppercase V for the short flag by default, but we want lowercase v
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "Generate one or more passwords.")]
    #[command(after_help = r#"Notes:
    Without class flags the saved configuration (or the built-in default of
    all four classes) applies. Length must be within 8-64, count within 1-100.

Examples:
    kh generate
    kh generate -l -d --length 24
    kh generate -luds --count 5 --avoid-ambiguous
    kh generate --interactive
    "#)]
    Generate(GenerateArgs),

    #[command(long_about = "Inspect or change the saved generator configuration.")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}
