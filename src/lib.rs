//! Membership testing for context-free grammars in second or Chomsky normal
//! form, using the CYK algorithm.

pub mod automaton;
pub mod error_handling;
pub mod generator;
pub mod grammar;
pub mod logging;
pub mod parser;
pub mod recognizer;

pub use grammar::{Grammar, GrammarError, NormalForm, Rule};
pub use recognizer::accepts;
