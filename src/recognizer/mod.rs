/*
    This module decides membership of strings with the CYK algorithm
*/

mod table;

use tracing::{debug, trace};

use crate::grammar::Grammar;
use table::MembershipTable;

// A -> x, where x is a terminal character or a variable (unit production)
struct UnitRule<'g> {
    lhs: &'g str,
    symbol: &'g str,
}

// A -> x y, where each side may be a variable or a literal terminal string
struct BinaryRule<'g> {
    lhs: &'g str,
    first: &'g str,
    second: &'g str,
    first_chars: Vec<char>,
    second_chars: Vec<char>,
}

impl<'g> BinaryRule<'g> {
    fn new(lhs: &'g str, first: &'g str, second: &'g str) -> Self {
        BinaryRule {
            lhs,
            first,
            second,
            first_chars: first.chars().collect(),
            second_chars: second.chars().collect(),
        }
    }

    // Whether the rule derives input[i..=j], given that all shorter spans
    // are already complete in the table
    fn matches(&self, table: &MembershipTable<'g>, input: &[char], i: usize, j: usize) -> bool {
        let span = &input[i..=j];

        let split = (i..j).any(|k| table.contains(i, k, self.first) && table.contains(k + 1, j, self.second));
        if split {
            return true;
        }

        let first_len = self.first_chars.len();
        let prefix = span.starts_with(&self.first_chars)
            && i + first_len <= j
            && table.contains(i + first_len, j, self.second);
        if prefix {
            return true;
        }

        let second_len = self.second_chars.len();
        let suffix = span.ends_with(&self.second_chars)
            && j >= i + second_len
            && table.contains(i, j - second_len, self.first);
        if suffix {
            return true;
        }

        span.len() == first_len + second_len
            && span.starts_with(&self.first_chars)
            && span.ends_with(&self.second_chars)
    }
}

/// Returns whether `input` is in the language of `grammar`.
///
/// The table is the classic CYK triangle, extended so that right-hand sides
/// may mix variables with literal terminal strings of any length, and so that
/// unit productions propagate inside a cell.
pub fn accepts(grammar: &Grammar, input: &str) -> bool {
    let input: Vec<char> = input.chars().collect();
    let n = input.len();

    if n == 0 {
        let accepted = grammar.derives_empty();
        debug!(accepted, "recognized empty input");
        return accepted;
    }

    let mut unit_rules = Vec::new();
    let mut binary_rules = Vec::new();
    for rule in grammar.rules() {
        match rule.rhs.as_slice() {
            [symbol] => unit_rules.push(UnitRule { lhs: &rule.lhs, symbol }),
            [first, second] => binary_rules.push(BinaryRule::new(&rule.lhs, first, second)),
            _ => {}
        }
    }

    let mut table = MembershipTable::new(n);

    for (i, c) in input.iter().enumerate() {
        for rule in &unit_rules {
            if is_single_char(rule.symbol, *c) {
                trace!(i, variable = rule.lhs, "terminal match");
                table.insert(i, i, rule.lhs);
            }
        }
    }

    for l in 1..=n {
        for i in 0..=n - l {
            let j = i + l - 1;

            for rule in &binary_rules {
                if !table.contains(i, j, rule.lhs) && rule.matches(&table, &input, i, j) {
                    trace!(i, j, variable = rule.lhs, first = rule.first, second = rule.second, "binary match");
                    table.insert(i, j, rule.lhs);
                }
            }

            close_unit_rules(&mut table, &unit_rules, i, j);
        }
    }

    let accepted = table.contains(0, n - 1, grammar.start_variable());
    debug!(len = n, rules = grammar.rules().len(), form = ?grammar.form(), accepted, "recognized input");
    accepted
}

// Adds A to (i, j) for every A -> B with B in (i, j), until nothing changes
fn close_unit_rules<'g>(table: &mut MembershipTable<'g>, unit_rules: &[UnitRule<'g>], i: usize, j: usize) {
    let mut changed = true;
    while changed {
        changed = false;
        for rule in unit_rules {
            if table.contains(i, j, rule.symbol) && table.insert(i, j, rule.lhs) {
                trace!(i, j, variable = rule.lhs, from = rule.symbol, "unit propagation");
                changed = true;
            }
        }
    }
}

fn is_single_char(symbol: &str, c: char) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(c) && chars.next().is_none()
}
