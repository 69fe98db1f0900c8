//! 정규화된 수식 문자열을 토큰 스트림으로 바꾼다.
//!
//! 인식 대상: 숫자(정수/소수/지수 표기), 식별자(ASCII 영문자 또는 `π`로 시작),
//! `+ - * / ^ ** ( ) ,`. 그 밖의 문자는 `Illegal`로 내보내 파서가 거부한다.

use std::iter::Peekable;
use std::str::Chars;

use super::token::Token;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// 다음 토큰을 반환한다. 입력이 끝나면 계속 `Eof`를 돌려준다.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.input.next() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('*') => {
                if self.input.peek() == Some(&'*') {
                    self.input.next();
                    Token::Power
                } else {
                    Token::Star
                }
            }
            Some('/') => Token::Slash,
            Some('^') => Token::Power,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(',') => Token::Comma,
            Some('π') => Token::Identifier("π".to_string()),
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch),
            Some(ch) if ch.is_ascii_alphabetic() => self.read_identifier(ch),
            None => Token::Eof,
            Some(ch) => Token::Illegal(ch),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    fn read_number(&mut self, first_char: char) -> Token {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        self.read_exponent(&mut number_str);

        match number_str.parse::<f64>() {
            Ok(n) => Token::Number(n),
            // "." 단독 등
            Err(_) => Token::Illegal(first_char),
        }
    }

    /// `e`/`E` 뒤에 (부호와) 숫자가 올 때만 지수부로 소비한다. `2e`는 숫자 2와
    /// 식별자 `e`로 남는다.
    fn read_exponent(&mut self, number_str: &mut String) {
        let mut look = self.input.clone();
        match look.next() {
            Some('e') | Some('E') => {}
            _ => return,
        }
        let mut sign = None;
        if let Some(&s) = look.peek() {
            if s == '+' || s == '-' {
                sign = Some(s);
                look.next();
            }
        }
        if !matches!(look.peek(), Some(d) if d.is_ascii_digit()) {
            return;
        }

        self.input.next();
        number_str.push('e');
        if let Some(s) = sign {
            self.input.next();
            number_str.push(s);
        }
        while let Some(&ch) = self.input.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            number_str.push(ch);
            self.input.next();
        }
    }

    fn read_identifier(&mut self, first_char: char) -> Token {
        let mut ident = String::from(first_char);
        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_alphanumeric() {
                ident.push(ch);
                self.input.next();
            } else {
                break;
            }
        }
        Token::Identifier(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok == Token::Eof {
                break;
            }
            out.push(tok);
        }
        out
    }

    #[test]
    fn tokenizes_simple_math() {
        assert_eq!(
            tokens("1 + 2.5"),
            vec![Token::Number(1.0), Token::Plus, Token::Number(2.5)]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            tokens("2**3*4"),
            vec![
                Token::Number(2.0),
                Token::Power,
                Token::Number(3.0),
                Token::Star,
                Token::Number(4.0)
            ]
        );
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(tokens("1.5e3"), vec![Token::Number(1500.0)]);
        assert_eq!(tokens("2E-2"), vec![Token::Number(0.02)]);
    }

    #[test]
    fn trailing_e_stays_identifier() {
        assert_eq!(
            tokens("2e"),
            vec![Token::Number(2.0), Token::Identifier("e".to_string())]
        );
        assert_eq!(
            tokens("2e+"),
            vec![
                Token::Number(2.0),
                Token::Identifier("e".to_string()),
                Token::Plus
            ]
        );
    }

    #[test]
    fn identifiers_and_pi_glyph() {
        assert_eq!(
            tokens("log10(π)"),
            vec![
                Token::Identifier("log10".to_string()),
                Token::LParen,
                Token::Identifier("π".to_string()),
                Token::RParen
            ]
        );
    }

    #[test]
    fn underscore_and_quotes_are_illegal() {
        assert_eq!(tokens("_")[0], Token::Illegal('_'));
        assert_eq!(tokens("'os'")[0], Token::Illegal('\''));
    }

    #[test]
    fn lone_dot_is_illegal() {
        assert_eq!(tokens("."), vec![Token::Illegal('.')]);
    }
}
