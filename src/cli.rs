use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cyk::NormalForm;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print YES if the grammar generates the input, NO otherwise
    Check(CheckArgs),

    /// Print random sentences of the grammar
    Generate(GenerateArgs),

    /// Print YES if the input has no two consecutive `a`s, NO otherwise
    DoubleA {
        /// String over `a` and `b` (default: empty)
        input: Option<String>,
    },
}

#[derive(Args)]
pub struct GrammarArgs {
    /// File containing the grammar
    pub file: PathBuf,

    /// Require the grammar to be in Chomsky normal form
    #[arg(long)]
    pub chomsky: bool,
}

impl GrammarArgs {
    pub fn normal_form(&self) -> NormalForm {
        if self.chomsky {
            NormalForm::Chomsky
        } else {
            NormalForm::Second
        }
    }
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// String to recognize (default: empty)
    pub input: Option<String>,

    /// Skip the rule line pattern check
    #[arg(long)]
    pub permissive: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// Amount to generate (default: 1)
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub amount: Option<u32>,

    /// Deepest derivation allowed before giving up on a sentence
    #[arg(long, value_name = "LIMIT", default_value_t = 64)]
    pub depth: usize,
}
