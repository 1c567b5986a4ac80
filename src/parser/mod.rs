/*
    This module reads grammar description files
*/

mod lexer;

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::BufRead;
use std::path::PathBuf;

use crate::error_handling::*;
use crate::grammar::{Production, RuleSet};
use itertools::Itertools;
use lexer::*;

#[derive(Debug)]
pub enum CompileErrorType {
    // A rule line has no `->` after its name
    MissingArrow,
    // A `->` showed up again among the derived symbols
    UnexpectedArrow,
    // The line starts with `->` instead of a rule name
    MissingRuleName,
    // Nothing follows the `->`
    EmptyProduction,
    // A blank line got too deep into the parser
    // This is a problem with llnorm, not the grammar
    UnexpectedBlankLine,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        if let CompileErrorType::FileError(a) = self {
            if let CompileErrorType::FileError(b) = other {
                return a.kind() == b.kind();
            }
        }
        return std::mem::discriminant(self) == std::mem::discriminant(other);
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MissingArrow => write!(f, "Expected `->` after the rule name"),
            CompileErrorType::UnexpectedArrow => write!(f, "Unexpected `->` encountered"),
            CompileErrorType::MissingRuleName => write!(f, "Tried to define a rule without a name"),
            CompileErrorType::EmptyProduction => write!(f, "A rule must derive at least one symbol"),
            CompileErrorType::UnexpectedBlankLine => write!(f, "Blank line encountered in rule parser (this is a problem with llnorm, not the grammar)"),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

fn io_error(error: std::io::Error, file: PathBuf) -> CompileError {
    CompileError {
        location: Location::start_of(file),
        error: CompileErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

// One line of the file: a single alternative of a single rule
#[derive(PartialEq, Debug)]
struct RuleLine {
    name: String,
    production: Production,
}

fn parse_production(tokens: &[Token]) -> Result<Production> {
    let symbols = tokens.iter().map(|t| match t {
        Token::Arrow => Err(CompileErrorType::UnexpectedArrow),
        Token::Symbol(s) => Ok(s.clone())
    }).collect::<Result<Production>>()?;

    if symbols.is_empty() {
        return Err(CompileErrorType::EmptyProduction);
    }

    return Ok(symbols);
}

fn parse_line(tokens: &[Token]) -> Result<RuleLine> {
    // Try to get the name the line defines an alternative for. The match
    // returns a result which is then unwrapped with the ? operator
    let name = match tokens.first() {
        Some(Token::Symbol(s)) => Ok(s.clone()),
        Some(Token::Arrow) => Err(CompileErrorType::MissingRuleName),
        None => Err(CompileErrorType::UnexpectedBlankLine)
    }?;

    if tokens.get(1) != Some(&Token::Arrow) {
        return Err(CompileErrorType::MissingArrow);
    }

    let production = parse_production(&tokens[2..])?;

    return Ok(RuleLine {
        name,
        production
    });
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<RuleLine> {
    parse_line(&lex_line(line)).map_err(|error| CompileError { location, error })
}

fn is_rule_line(line: &String) -> bool {
    !line.trim().is_empty()
}

// Returns an iterator over the rule lines of a file, with the io errors
// wrapped in CompileError and enumerated
fn file_line_nums<'a>(file: File, path: &'a PathBuf) -> impl Iterator<Item = (usize, LineResult<String>)> + 'a {
    std::io::BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|e| io_error(e, path.clone())))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line) || line.is_err())
        .map(|(num, line)| (num + 1, line))
}

// Folds the parsed lines into a rule map, alternatives kept in file order
fn ruleset_from_lines(lines: Vec<RuleLine>) -> RuleSet {
    let mut rules = HashMap::<String, Vec<Production>>::new();
    for line in lines {
        rules.entry(line.name).or_default().push(line.production);
    }

    return RuleSet { rules };
}

pub fn parse_file(path: &PathBuf) -> FileResult<RuleSet> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path.clone())])?;
    let lines = file_line_nums(file, path);

    let parsed_lines = lines.map(|(num, line_res)| {
        line_res.and_then(|line| parse_lex_line(&line, Location {
            file: path.clone(),
            line: num
        }))
    });

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition(LineResult::is_ok);
    if errors.len() > 0 {
        return Err(errors.into_iter().map(LineResult::unwrap_err).collect_vec());
    }
    let lines_unwrapped = rules.into_iter().map(LineResult::unwrap).collect_vec();

    return Ok(ruleset_from_lines(lines_unwrapped));
}
