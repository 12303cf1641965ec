/*
    This module parses grammar files
*/

mod lexer;
pub mod line_check;

use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::error_handling::*;
use crate::grammar::*;

#[derive(Debug, Error)]
pub enum LoadErrorType {
    // There was an issue with reading a file
    #[error("File error: {0}")]
    FileError(std::io::Error),
    // The rules were read but do not make a valid grammar
    #[error("{0}")]
    Grammar(GrammarError),
}

impl ErrorType for LoadErrorType {}

impl PartialEq for LoadErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LoadErrorType::FileError(a), LoadErrorType::FileError(b)) => a.kind() == b.kind(),
            (LoadErrorType::Grammar(a), LoadErrorType::Grammar(b)) => a == b,
            _ => false,
        }
    }
}

pub type LoadError = Error<LoadErrorType>;
pub type LoadErrors = Errors<LoadErrorType>;

pub type FileResult<T> = std::result::Result<T, LoadErrors>;

/// A line of a grammar file, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

fn io_error(error: std::io::Error, file: &Path) -> LoadError {
    LoadError {
        location: Location::new(file.to_path_buf(), 0),
        error: LoadErrorType::FileError(error),
    }
}

fn is_rule_line(line: &SourceLine) -> bool {
    !line.text.trim().is_empty()
}

/// Reads every line of a grammar file. Reading stops at the first failure,
/// and no lines are returned in that case.
pub fn read_lines(path: &Path) -> FileResult<Vec<SourceLine>> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path)])?;

    std::io::BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(num, line)| {
            line.map(|text| SourceLine { number: num + 1, text })
                .map_err(|e| vec![io_error(e, path)])
        })
        .collect()
}

// Places grammar errors on the line the offending rule came from
fn locate_grammar_error(error: GrammarError, lines: &[SourceLine], file: &Path) -> LoadError {
    let line = error
        .index()
        .and_then(|index| lines.get(index))
        .map_or(0, |line| line.number);

    LoadError {
        location: Location::new(file.to_path_buf(), line),
        error: LoadErrorType::Grammar(error),
    }
}

fn grammar_from_lines(lines: &[SourceLine], file: &Path, form: NormalForm) -> FileResult<Grammar> {
    let symbol_lists = lines.iter().map(|line| lexer::lex_line(&line.text)).collect_vec();

    let grammar = Grammar::from_symbol_lists(symbol_lists, form).map_err(|errors| {
        errors
            .into_iter()
            .map(|error| locate_grammar_error(error, lines, file))
            .collect_vec()
    })?;

    debug!(
        file = %file.display(),
        rules = grammar.rules().len(),
        variables = grammar.variables().len(),
        start = grammar.start_variable(),
        "loaded grammar"
    );
    Ok(grammar)
}

/// Builds a grammar from lines already read from `file`. Blank lines are
/// skipped.
pub fn parse_source_lines(lines: &[SourceLine], file: &Path, form: NormalForm) -> FileResult<Grammar> {
    let rule_lines = lines.iter().filter(|line| is_rule_line(line)).cloned().collect_vec();

    grammar_from_lines(&rule_lines, file, form)
}

pub fn parse_file(path: &Path, form: NormalForm) -> FileResult<Grammar> {
    let lines = read_lines(path)?;

    parse_source_lines(&lines, path, form)
}

/// Builds a grammar from text where every line is a rule, so a blank line is
/// an empty rule.
pub fn parse_str(text: &str, form: NormalForm) -> FileResult<Grammar> {
    let lines = text
        .lines()
        .enumerate()
        .map(|(num, text)| SourceLine { number: num + 1, text: text.to_string() })
        .collect_vec();

    grammar_from_lines(&lines, &PathBuf::new(), form)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    fn grammar_error(file: &str, line: usize, error: GrammarError) -> LoadError {
        LoadError {
            location: Location::new(PathBuf::from(file), line),
            error: LoadErrorType::Grammar(error),
        }
    }

    #[test]
    fn parse_normal_str() {
        let grammar = parse_str("S:A,B\nA:a,e\nB:b\nS:e", NormalForm::Chomsky).unwrap();

        assert_eq!(grammar.start_variable(), "S");
        assert_eq!(grammar.rules(), &[
            Rule::new("S", &["A", "B"]),
            Rule::new("A", &["a"]),
            Rule::new("B", &["b"]),
            Rule::new("S", &[]),
        ]);
    }

    #[test]
    fn display_reparses_to_same_grammar() {
        let grammar = parse_str("S:A,B\nS:e\nA:a,e\nB:b,B\nB:b", NormalForm::Second).unwrap();

        assert_eq!(parse_str(&grammar.to_string(), NormalForm::Second).unwrap(), grammar);
    }

    #[test]
    fn parse_str_rejects_blank_line() {
        let errors = parse_str("S:A,B\n\nA:a\nB:b", NormalForm::Second).unwrap_err();

        assert_eq!(errors, vec![grammar_error("", 2, GrammarError::EmptyRule { index: 1 })]);
    }

    #[test]
    fn parse_str_rejects_empty_text() {
        let errors = parse_str("", NormalForm::Second).unwrap_err();

        assert_eq!(errors, vec![grammar_error("", 0, GrammarError::NoRules)]);
    }

    #[test]
    fn parse_normal_file() {
        let path = PathBuf::from("example_data/balanced.cfg");
        let grammar = parse_file(&path, NormalForm::Chomsky).unwrap();

        assert_eq!(grammar.start_variable(), "0");
        assert_eq!(grammar.rules(), &[
            Rule::new("0", &["1", "10"]),
            Rule::new("0", &["1", "11"]),
            Rule::new("10", &["0", "11"]),
            Rule::new("1", &["a"]),
            Rule::new("11", &["b"]),
        ]);
    }

    #[test]
    fn parse_file_skips_blank_lines() {
        let path = PathBuf::from("example_data/spaced.cfg");
        let grammar = parse_file(&path, NormalForm::Second).unwrap();

        assert_eq!(grammar.rules().len(), 3);
        assert_eq!(grammar.start_variable(), "0");
    }

    #[test]
    fn parse_malformed_file() {
        let path = PathBuf::from("example_data/too_long.cfg");
        let errors = parse_file(&path, NormalForm::Second).unwrap_err();

        // Line numbers count the blank line that was skipped
        assert_eq!(errors, vec![grammar_error(
            "example_data/too_long.cfg",
            4,
            GrammarError::RhsTooLong { index: 2, rule: "B:b,b,b".to_string(), len: 3 },
        )]);
    }

    #[test]
    fn parse_non_chomsky_file() {
        let path = PathBuf::from("example_data/unit.cfg");

        assert!(parse_file(&path, NormalForm::Second).is_ok());
        assert_eq!(parse_file(&path, NormalForm::Chomsky).unwrap_err(), vec![grammar_error(
            "example_data/unit.cfg",
            1,
            GrammarError::NotChomsky { index: 0, rule: "S:A".to_string() },
        )]);
    }

    #[test]
    fn parse_missing_file() {
        let path = PathBuf::from("example_data/does_not_exist.cfg");
        let errors = parse_file(&path, NormalForm::Second).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, Location::new(path.clone(), 0));
        assert!(matches!(&errors[0].error, LoadErrorType::FileError(e) if e.kind() == ErrorKind::NotFound));
    }

    #[test]
    fn read_numbered_lines() {
        let lines = read_lines(Path::new("example_data/spaced.cfg")).unwrap();

        assert_eq!(lines.iter().map(|line| line.number).collect_vec(), (1..=lines.len()).collect_vec());
        assert!(line_check::lines_are_well_formed(lines.iter().map(|line| line.text.as_str())));
    }
}
