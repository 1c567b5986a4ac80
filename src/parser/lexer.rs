#[derive(PartialEq, Debug)]
pub enum Token {
    Arrow,
    Symbol(String)
}

// Tokens are separated by whitespace alone; there is no quoting or escaping
// in this format, so `->` only separates when it stands on its own
pub fn lex_line(line: &str) -> Vec<Token> {
    line.split_whitespace()
        .map(|word| match word {
            "->" => Token::Arrow,
            symbol => Token::Symbol(symbol.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    fn t_symbol(text: &str) -> Token {
        Token::Symbol(text.to_string())
    }

    #[test]
    fn lex_normal_line() {
        let lines = vec![
            "E -> E + T",
            "S -> if E then S else S",
            "F -> id"
        ];
        let answers = vec![
            vec![t_symbol("E"), Token::Arrow, t_symbol("E"), t_symbol("+"), t_symbol("T")],
            vec![
                t_symbol("S"), Token::Arrow, t_symbol("if"), t_symbol("E"),
                t_symbol("then"), t_symbol("S"), t_symbol("else"), t_symbol("S")
            ],
            vec![t_symbol("F"), Token::Arrow, t_symbol("id")]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(lex_line(line), answer);
        }
    }

    #[test]
    fn lex_glued_arrow_stays_a_symbol() {
        assert_eq!(lex_line("E->T"), vec![t_symbol("E->T")]);
        assert_eq!(
            lex_line("E -> T->F"),
            vec![t_symbol("E"), Token::Arrow, t_symbol("T->F")]
        );
    }

    #[test]
    fn lex_blank_lines() {
        assert_eq!(lex_line(""), vec![]);
        assert_eq!(lex_line("   \t  "), vec![]);
    }
}
