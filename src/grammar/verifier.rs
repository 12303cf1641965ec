use std::collections::HashSet;

use tracing::debug;

use super::{GrammarError, GrammarErrors, GrammarResult, NormalForm, Rule};

// Longest right-hand side any tier accepts
const MAX_RHS_LEN: usize = 2;

fn get_long_rules(rules: &[Rule]) -> GrammarErrors {
    rules.iter()
        .enumerate()
        .filter(|(_, rule)| rule.rhs.len() > MAX_RHS_LEN)
        .map(|(index, rule)| GrammarError::RhsTooLong {
            index,
            rule: rule.to_string(),
            len: rule.rhs.len()
        })
        .collect()
}

fn is_chomsky_rule(rule: &Rule, variables: &HashSet<String>, start_variable: &str) -> bool {
    match rule.rhs.as_slice() {
        [] => rule.lhs == start_variable,
        [terminal] => !variables.contains(terminal),
        [first, second] => variables.contains(first) && variables.contains(second),
        _ => false
    }
}

fn get_non_chomsky_rules(rules: &[Rule], variables: &HashSet<String>, start_variable: &str) -> GrammarErrors {
    // Rules that are too long are already reported by the second normal form
    // check, so only the shape of the short ones is looked at here
    rules.iter()
        .enumerate()
        .filter(|(_, rule)| rule.rhs.len() <= MAX_RHS_LEN)
        .filter(|(_, rule)| !is_chomsky_rule(rule, variables, start_variable))
        .map(|(index, rule)| GrammarError::NotChomsky {
            index,
            rule: rule.to_string()
        })
        .collect()
}

pub fn verify_rules(
    rules: &[Rule],
    variables: &HashSet<String>,
    start_variable: &str,
    form: NormalForm
) -> GrammarResult<()> {
    let mut errors = Vec::new();

    errors.extend(get_long_rules(rules));

    if form == NormalForm::Chomsky {
        errors.extend(get_non_chomsky_rules(rules, variables, start_variable));
        errors.sort_by_key(GrammarError::index);
    }

    if errors.len() > 0 {
        debug!(count = errors.len(), ?form, "grammar failed verification");
        Err(errors)
    } else {
        Ok(())
    }
}
