use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Binary-named variables over the terminals `a` and `b`, always with an
    // explicit second symbol (`e` when there is none)
    static ref RULE_LINE: Regex = Regex::new(r"^[01]+:([01]+|a|b),([01]+|a|b|e)$")
        .expect("rule line pattern is valid");
}

pub fn is_well_formed_line(line: &str) -> bool {
    line.is_empty() || RULE_LINE.is_match(line)
}

/// Whether every line of a grammar file passes the pattern check. Blank lines
/// are allowed.
pub fn lines_are_well_formed<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
    lines.into_iter().all(is_well_formed_line)
}
