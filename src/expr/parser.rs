//! 토큰 스트림을 수식 트리로 바꾸는 재귀 하강 파서.
//!
//! 문법:
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> ("-" | "+") unary | power
//!   power          --> primary ( ("^" | "**") unary )?
//!   primary        --> NUMBER | CONSTANT | call | "(" expression ")"
//!   call           --> FUNCTION "(" expression ("," expression)* ")"

use super::ast::{BinaryOperator, Constant, Expression, Function, UnaryOperator};
use super::lexer::Lexer;
use super::token::Token;

/// 구문 오류.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// 트리 깊이 상한. 괄호/단항 부호/함수 호출 중첩과 이항 연산 사슬 길이를 합해 센다.
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            depth: 0,
        }
    }

    /// 전체 입력을 파싱한다. 남는 토큰이 있으면 오류.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.current_token == Token::Eof {
            return Err(ParseError::new("empty expression"));
        }

        let expr = self.parse_additive()?;

        if self.current_token != Token::Eof {
            return Err(ParseError::new(format!(
                "unexpected {} after expression",
                self.current_token
            )));
        }
        Ok(expr)
    }

    /// 한 단계 깊이 들어간다. 상한을 넘으면 오류이며, 이때 파싱 전체가 중단되므로
    /// 깊이를 되돌리지 않는다.
    fn descend(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::new("expression is nested too deeply"));
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "expected {expected}, found {}",
                self.current_token
            )))
        }
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;
        let mut chain = 0;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            // 왼쪽으로 쌓이는 사슬도 트리 깊이를 늘린다
            self.descend()?;
            chain += 1;
            let right = self.parse_multiplicative()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        self.depth -= chain;
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;
        let mut chain = 0;

        loop {
            let op = match self.current_token {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();
            self.descend()?;
            chain += 1;
            let right = self.parse_unary()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        self.depth -= chain;
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        self.descend()?;
        let expr = self.parse_signed()?;
        self.depth -= 1;
        Ok(expr)
    }

    fn parse_signed(&mut self) -> ParseResult<Expression> {
        let op = match self.current_token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// 거듭제곱은 단항 부호보다 강하게 묶이고 오른쪽 결합이다 (-2^2 = -4).
    fn parse_power(&mut self) -> ParseResult<Expression> {
        let left = self.parse_primary()?;

        if self.current_token == Token::Power {
            self.advance();
            let right = self.parse_unary()?;
            return Ok(Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Power,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.current_token.clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expression::Number(n))
            }
            Token::Identifier(name) => {
                self.advance();
                self.parse_identifier(name)
            }
            Token::LParen => {
                self.advance();
                self.descend()?;
                let expr = self.parse_additive()?;
                self.expect(Token::RParen)?;
                self.depth -= 1;
                Ok(expr)
            }
            Token::Eof => Err(ParseError::new("unexpected end of expression")),
            Token::Illegal(ch) => Err(ParseError::new(format!("illegal character '{ch}'"))),
            token => Err(ParseError::new(format!("unexpected {token}"))),
        }
    }

    /// 식별자는 허용된 함수 호출 또는 상수로만 해석된다.
    fn parse_identifier(&mut self, name: String) -> ParseResult<Expression> {
        if self.current_token == Token::LParen {
            let function = Function::from_name(&name)
                .ok_or_else(|| ParseError::new(format!("unknown function '{name}'")))?;
            return self.parse_call(function);
        }

        if let Some(constant) = Constant::from_name(&name) {
            return Ok(Expression::Constant(constant));
        }
        if Function::from_name(&name).is_some() {
            return Err(ParseError::new(format!("function '{name}' needs arguments")));
        }
        Err(ParseError::new(format!("unknown name '{name}'")))
    }

    fn parse_call(&mut self, function: Function) -> ParseResult<Expression> {
        self.advance();
        self.descend()?;

        let mut args = Vec::new();
        if self.current_token != Token::RParen {
            args.push(self.parse_additive()?);
            while self.current_token == Token::Comma {
                self.advance();
                args.push(self.parse_additive()?);
            }
        }
        self.expect(Token::RParen)?;
        self.depth -= 1;

        if args.len() != function.arity() {
            return Err(ParseError::new(format!(
                "{}() takes {} argument(s), {} given",
                function.name(),
                function.arity(),
                args.len()
            )));
        }

        Ok(Expression::Call { function, args })
    }
}

/// 수식 문자열을 바로 파싱한다.
pub fn parse(input: &str) -> ParseResult<Expression> {
    Parser::new(input).parse()
}
