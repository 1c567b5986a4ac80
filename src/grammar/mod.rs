/*
    This module stores grammars as rewrite rules and prints them back out
*/

use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;

// The reserved symbol for an alternative deriving the empty string. It only
// ever appears as the sole symbol of a production.
pub const EPSILON: &str = "ε";

// The base unit in a grammar rule. A symbol is a nonterminal exactly when
// some rule carries its name; everything else is a terminal.
pub type Symbol = String;

// One alternative a rule can derive, never empty
pub type Production = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Productions = Vec<Production>;

#[derive(Debug, PartialEq)]
pub struct RuleSet {
    pub rules: HashMap<String, Productions>,
}

impl RuleSet {
    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    // Picks a name for a synthetic rule: `base` when still free, otherwise
    // the first free numbered variant
    pub fn fresh_name(&self, base: &str) -> String {
        if !self.rules.contains_key(base) {
            return base.to_string();
        }

        let mut counter = 2;
        loop {
            let candidate = format!("{}{}", base, counter);
            if !self.rules.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in self.rules.keys().sorted() {
            writeln!(f, "{}", name)?;
            for production in &self.rules[name] {
                writeln!(f, "\t{}", production.iter().join(" "))?;
            }
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production(symbols: &[&str]) -> Production {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn expression_rules() -> RuleSet {
        let mut rules = HashMap::new();
        rules.insert("E".to_string(), vec![production(&["T", "E_LR"])]);
        rules.insert("E_LR".to_string(), vec![
            production(&["+", "T", "E_LR"]),
            production(&[EPSILON])
        ]);
        RuleSet { rules }
    }

    #[test]
    fn nonterminals_are_rule_names() {
        let rules = expression_rules();

        assert!(rules.is_nonterminal("E"));
        assert!(rules.is_nonterminal("E_LR"));
        assert!(!rules.is_nonterminal("T"));
        assert!(!rules.is_nonterminal("+"));
        assert!(!rules.is_nonterminal(EPSILON));
    }

    #[test]
    fn fresh_name_prefers_the_base() {
        let rules = expression_rules();

        assert_eq!(rules.fresh_name("T_LR"), "T_LR");
    }

    #[test]
    fn fresh_name_steps_past_taken_names() {
        let mut rules = expression_rules();

        assert_eq!(rules.fresh_name("E_LR"), "E_LR2");

        rules.rules.insert("E_LR2".to_string(), vec![production(&["x"])]);
        assert_eq!(rules.fresh_name("E_LR"), "E_LR3");
    }

    #[test]
    fn display_prints_sorted_rules_with_indented_productions() {
        let rules = expression_rules();

        assert_eq!(
            format!("{}", rules),
            "E\n\tT E_LR\nE_LR\n\t+ T E_LR\n\tε\n"
        );
    }
}
