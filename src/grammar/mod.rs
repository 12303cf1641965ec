/*
    This module is for storing and validating grammars
*/

mod verifier;

use std::collections::HashSet;
use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

// Written in place of a missing symbol in the text format
pub const EMPTY_SYMBOL: &str = "e";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    // There is nothing to take the start variable from
    #[error("Grammar has no rules (expected at least one to pick the start variable)")]
    NoRules,
    // A rule without even a left-hand side
    #[error("Found empty rule {index} (expected at least a variable)")]
    EmptyRule { index: usize },
    // More than two symbols after the left-hand side
    #[error("Rule `{rule}` has {len} symbols on the right-hand side (expected 2 or less)")]
    RhsTooLong { index: usize, rule: String, len: usize },
    // Chomsky tier only
    #[error("Rule `{rule}` is not in Chomsky normal form")]
    NotChomsky { index: usize, rule: String },
}

impl GrammarError {
    // Position of the offending rule in the order it was supplied
    pub fn index(&self) -> Option<usize> {
        match self {
            GrammarError::NoRules => None,
            GrammarError::EmptyRule { index }
            | GrammarError::RhsTooLong { index, .. }
            | GrammarError::NotChomsky { index, .. } => Some(*index),
        }
    }
}

pub type GrammarErrors = Vec<GrammarError>;
pub type GrammarResult<T> = Result<T, GrammarErrors>;

/// How strictly the right-hand sides of a grammar are constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalForm {
    /// At most two symbols on every right-hand side.
    #[default]
    Second,
    /// Second normal form, where additionally every rule is `S -> ε` for the
    /// start variable, `A -> terminal`, or `A -> B C` over variables.
    Chomsky,
}

/// A single production. An empty right-hand side is an ε-production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub lhs: String,
    pub rhs: Vec<String>,
}

impl Rule {
    pub fn new(lhs: impl Into<String>, rhs: &[&str]) -> Self {
        Rule {
            lhs: lhs.into(),
            rhs: rhs.iter().map(|s| s.to_string()).collect(),
        }
    }

    // The first symbol is the left-hand side, the rest the right-hand side
    pub fn from_symbols(symbols: Vec<String>) -> Option<Self> {
        let mut symbols = symbols.into_iter();
        let lhs = symbols.next()?;
        Some(Rule { lhs, rhs: symbols.collect() })
    }

    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rhs.is_empty() {
            write!(f, "{}:{}", self.lhs, EMPTY_SYMBOL)
        } else {
            write!(f, "{}:{}", self.lhs, self.rhs.iter().join(","))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    rules: Vec<Rule>,
    variables: HashSet<String>,
    start_variable: String,
    form: NormalForm,
}

impl Grammar {
    /// Builds a grammar and validates it against `form`. The start variable is
    /// the left-hand side of the first rule.
    pub fn new(rules: Vec<Rule>, form: NormalForm) -> GrammarResult<Self> {
        let start_variable = match rules.first() {
            Some(rule) => rule.lhs.clone(),
            None => return Err(vec![GrammarError::NoRules]),
        };
        let variables: HashSet<String> = rules.iter().map(|rule| rule.lhs.clone()).collect();

        verifier::verify_rules(&rules, &variables, &start_variable, form)?;

        Ok(Grammar {
            rules,
            variables,
            start_variable,
            form,
        })
    }

    /// Builds a grammar from raw `[lhs, rhs...]` symbol lists.
    pub fn from_symbol_lists(lists: Vec<Vec<String>>, form: NormalForm) -> GrammarResult<Self> {
        let (rules, errors): (Vec<_>, Vec<_>) = lists
            .into_iter()
            .enumerate()
            .map(|(index, symbols)| Rule::from_symbols(symbols).ok_or(GrammarError::EmptyRule { index }))
            .partition(Result::is_ok);

        if !errors.is_empty() {
            return Err(errors.into_iter().filter_map(Result::err).collect());
        }

        Grammar::new(rules.into_iter().filter_map(Result::ok).collect(), form)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn variables(&self) -> &HashSet<String> {
        &self.variables
    }

    pub fn start_variable(&self) -> &str {
        &self.start_variable
    }

    pub fn form(&self) -> NormalForm {
        self.form
    }

    pub fn is_variable(&self, symbol: &str) -> bool {
        self.variables.contains(symbol)
    }

    // Only an ε-production of the start variable puts "" in the language
    pub fn derives_empty(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.is_epsilon() && rule.lhs == self.start_variable)
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rules.iter().join("\n"))
    }
}
