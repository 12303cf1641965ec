/*
    This module generates sentences of a grammar
*/

use std::collections::HashMap;

use rand::prelude::*;
use thiserror::Error;
use tracing::trace;

use crate::grammar::{Grammar, Rule};

#[derive(Debug, PartialEq, Error)]
pub enum GenerateError {
    // The derivation kept expanding variables past the limit
    #[error("Derivation of `{variable}` went deeper than {limit} steps")]
    DepthLimitExceeded { variable: String, limit: usize },
}

pub type GenResult = Result<String, GenerateError>;

pub struct Generator<'g, R: Rng = ThreadRng> {
    start_variable: &'g str,
    rules: HashMap<&'g str, Vec<&'g Rule>>,
    depth_limit: usize,
    rng: R,
}

impl<'g> Generator<'g, ThreadRng> {
    pub fn new(grammar: &'g Grammar, depth_limit: usize) -> Self {
        Generator::with_rng(grammar, depth_limit, thread_rng())
    }
}

impl<'g, R: Rng> Generator<'g, R> {
    pub fn with_rng(grammar: &'g Grammar, depth_limit: usize, rng: R) -> Self {
        let mut rules: HashMap<&str, Vec<&Rule>> = HashMap::new();
        for rule in grammar.rules() {
            rules.entry(rule.lhs.as_str()).or_default().push(rule);
        }

        Generator {
            start_variable: grammar.start_variable(),
            rules,
            depth_limit,
            rng,
        }
    }

    // Generates a sentence starting from the start variable
    pub fn generate(&mut self) -> GenResult {
        self.generate_variable(self.start_variable, 0)
    }

    fn generate_variable(&mut self, variable: &'g str, depth: usize) -> GenResult {
        if depth > self.depth_limit {
            return Err(GenerateError::DepthLimitExceeded {
                variable: variable.to_string(),
                limit: self.depth_limit,
            });
        }

        // Every variable is some rule's left-hand side, so there is always a
        // rule to pick; anything else is a terminal
        let rule = match self.rules.get(variable).and_then(|rules| rules.choose(&mut self.rng)) {
            Some(rule) => *rule,
            None => return Ok(variable.to_string()),
        };
        trace!(depth, rule = %rule, "expanding");

        let mut result = String::new();
        for symbol in &rule.rhs {
            result.push_str(&self.generate_symbol(symbol, depth + 1)?);
        }

        Ok(result)
    }

    fn generate_symbol(&mut self, symbol: &'g str, depth: usize) -> GenResult {
        if self.rules.contains_key(symbol) {
            self.generate_variable(symbol, depth)
        } else {
            Ok(symbol.to_string())
        }
    }
}
