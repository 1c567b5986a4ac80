/*
    This module rewrites a rule set into a form a top-down parser can use
*/

pub mod factoring;
pub mod recursion;

use std::fmt::Display;
use std::path::PathBuf;

use crate::error_handling::*;
use crate::grammar::{Production, RuleSet};

#[derive(Debug, PartialEq)]
pub enum RewriteErrorType {
    // Recursion that passes through another rule before coming back
    IndirectLeftRecursion(String),
}

impl ErrorType for RewriteErrorType {}

impl Display for RewriteErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteErrorType::IndirectLeftRecursion(rule) => write!(f, "Indirect left recursion through `{}` is not supported", rule),
        }
    }
}

pub type RewriteError = Error<RewriteErrorType>;
pub type RewriteResult = Result<(), RewriteError>;

// A production's first symbol. An empty production cannot appear in a
// well-formed rule set.
fn leading(production: &Production) -> &str {
    production.first().expect("production without symbols")
}

// Checks the rule set for the unsupported kind of recursion, then applies
// the requested rewrites in place
pub fn normalize(rules: &mut RuleSet, solve_left_recursion: bool, solve_left_factoring: bool, file: PathBuf) -> RewriteResult {
    if let Some(rule) = recursion::find_indirect_left_recursion(rules) {
        return Err(RewriteError {
            location: Location::start_of(file),
            error: RewriteErrorType::IndirectLeftRecursion(rule)
        });
    }

    if solve_left_recursion {
        recursion::eliminate_left_recursion(rules);
    }

    if solve_left_factoring {
        factoring::factor_left(rules);
    }

    return Ok(());
}
