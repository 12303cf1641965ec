mod cli;

use std::fmt::Display;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use itertools::Itertools;
use tracing::info;

use cli::{CheckArgs, Cli, Command, GenerateArgs};
use cyk::automaton::{Automaton, DoubleA};
use cyk::generator::Generator;
use cyk::parser::{self, line_check, LoadErrors};
use cyk::{logging, recognizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
        }
    }
}

fn load_failure(errors: LoadErrors) -> anyhow::Error {
    anyhow!(errors.iter().join("\n"))
}

fn check(args: &CheckArgs) -> anyhow::Result<Verdict> {
    let file = &args.grammar.file;
    let lines = parser::read_lines(file).map_err(load_failure)?;

    // A line outside the rule pattern means the answer is NO, without ever
    // building the grammar
    if !args.permissive && !line_check::lines_are_well_formed(lines.iter().map(|line| line.text.as_str())) {
        info!(file = %file.display(), "grammar file has malformed lines");
        return Ok(Verdict::No);
    }

    let grammar = parser::parse_source_lines(&lines, file, args.grammar.normal_form()).map_err(load_failure)?;
    let input = args.input.as_deref().unwrap_or_default();

    Ok(recognizer::accepts(&grammar, input).into())
}

fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    let grammar = parser::parse_file(&args.grammar.file, args.grammar.normal_form()).map_err(load_failure)?;
    let mut generator = Generator::new(&grammar, args.depth);

    let amount = args.amount.unwrap_or(1);
    let sentences = (0..amount).map(|_| generator.generate()).collect::<Result<Vec<_>, _>>()?;
    Ok(sentences)
}

fn double_a(input: &str) -> Option<Verdict> {
    if !DoubleA::in_alphabet(input) {
        return None;
    }

    Some(DoubleA.accepts(input).into())
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check(args) => println!("{}", check(&args)?),
        Command::Generate(args) => {
            for sentence in generate(&args)? {
                println!("{}", sentence);
            }
        }
        Command::DoubleA { input } => match double_a(input.as_deref().unwrap_or_default()) {
            Some(verdict) => println!("{}", verdict),
            None => println!("Only expected a or b."),
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(&cli.log_level) {
        eprintln!("{e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;
    use std::path::PathBuf;

    use super::*;
    use crate::cli::GrammarArgs;

    fn check_args(file: &str, input: &str, chomsky: bool, permissive: bool) -> CheckArgs {
        CheckArgs {
            grammar: GrammarArgs { file: PathBuf::from(file), chomsky },
            input: Some(input.to_string()),
            permissive,
        }
    }

    #[test]
    fn check_balanced_file() {
        let inputs = vec!["ab", "aabb", "ba", "abab", ""];
        let answers = vec![Verdict::Yes, Verdict::Yes, Verdict::No, Verdict::No, Verdict::No];

        for (input, answer) in zip(inputs, answers) {
            let args = check_args("example_data/balanced.cfg", input, true, false);
            assert_eq!(check(&args).unwrap(), answer, "input {:?}", input);
        }
    }

    #[test]
    fn check_terminal_rules() {
        let inputs = vec!["ab", "aaabbb", "aab"];
        let answers = vec![Verdict::Yes, Verdict::Yes, Verdict::No];

        for (input, answer) in zip(inputs, answers) {
            let args = check_args("example_data/terminals.cfg", input, false, false);
            assert_eq!(check(&args).unwrap(), answer, "input {:?}", input);
        }
    }

    #[test]
    fn malformed_line_answers_no() {
        // The grammar itself is fine and generates "ab"
        let strict = check_args("example_data/malformed.cfg", "ab", false, false);
        let permissive = check_args("example_data/malformed.cfg", "ab", false, true);

        assert_eq!(check(&strict).unwrap(), Verdict::No);
        assert_eq!(check(&permissive).unwrap(), Verdict::Yes);
    }

    #[test]
    fn malformed_line_short_circuits_invalid_grammar() {
        // Would fail verification, but the line check answers first
        let args = check_args("example_data/too_long.cfg", "ab", false, false);

        assert_eq!(check(&args).unwrap(), Verdict::No);
    }

    #[test]
    fn check_permissive_grammars() {
        let cases = vec![
            ("example_data/epsilon.cfg", "", Verdict::Yes),
            ("example_data/epsilon.cfg", "ab", Verdict::Yes),
            ("example_data/epsilon.cfg", "a", Verdict::No),
            ("example_data/unit.cfg", "a", Verdict::Yes),
        ];

        for (file, input, answer) in cases {
            let args = check_args(file, input, false, true);
            assert_eq!(check(&args).unwrap(), answer, "{} {:?}", file, input);
        }
    }

    #[test]
    fn check_reports_invalid_grammar() {
        let args = check_args("example_data/unit.cfg", "a", true, true);
        let error = check(&args).unwrap_err().to_string();

        assert!(error.contains("example_data/unit.cfg:1"), "{}", error);
        assert!(error.contains("not in Chomsky normal form"), "{}", error);
    }

    #[test]
    fn check_reports_missing_file() {
        let args = check_args("example_data/missing.cfg", "a", false, false);

        assert!(check(&args).unwrap_err().to_string().contains("File error"));
    }

    #[test]
    fn generate_from_file() {
        let args = GenerateArgs {
            grammar: GrammarArgs { file: PathBuf::from("example_data/spaced.cfg"), chomsky: true },
            amount: Some(3),
            depth: 16,
        };

        assert_eq!(generate(&args).unwrap(), vec!["ab", "ab", "ab"]);
    }

    #[test]
    fn double_a_answers() {
        assert_eq!(double_a("abab"), Some(Verdict::Yes));
        assert_eq!(double_a(""), Some(Verdict::Yes));
        assert_eq!(double_a("baab"), Some(Verdict::No));
        assert_eq!(double_a("abc"), None);
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::from(true).to_string(), "YES");
        assert_eq!(Verdict::from(false).to_string(), "NO");
    }
}
