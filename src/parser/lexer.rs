use crate::grammar::EMPTY_SYMBOL;

// Separates the left-hand side from the right-hand side
const RULE_SEPARATOR: char = ':';
// Separates the symbols of the right-hand side
const SYMBOL_SEPARATOR: char = ',';

/// Splits a trimmed `LHS:RHS1,RHS2` line into its symbols. Placeholders for a
/// missing symbol (`e`) and empty pieces are dropped, so `S:e` lexes to just
/// `["S"]`.
pub fn lex_line(line: &str) -> Vec<String> {
    line.trim()
        .split([RULE_SEPARATOR, SYMBOL_SEPARATOR])
        .filter(|piece| !piece.is_empty() && *piece != EMPTY_SYMBOL)
        .map(str::to_string)
        .collect()
}
