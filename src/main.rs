mod cli;
mod error_handling;
mod grammar;
mod parser;
mod rewrite;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    let mut rules = match parser::parse_file(&args.file) {
        Ok(rules) => rules,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            std::process::exit(1);
        }
    };

    if let Err(error) = rewrite::normalize(&mut rules, args.left_recursion, args.left_factoring, args.file) {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    print!("{}", rules);
}
