use log::debug;

use super::ast::{BinaryOperator, Expression, Function, UnaryOperator};
use super::parser::{parse, ParseError};
use crate::error::ErrorKind;

/// 수식 평가 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// 구문 오류, 0으로 나누기, 정의역 오류, NaN/무한대 결과
    InvalidExpression(String),
    /// 역수 계산에서 0 입력
    DivisionByZero,
}

impl EvalError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EvalError::InvalidExpression(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidExpression(_) => ErrorKind::InvalidExpression,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidExpression(msg) => write!(f, "invalid expression: {msg}"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        EvalError::InvalidExpression(value.message)
    }
}

/// 곱셈/나눗셈 기호 `×`, `÷`를 `*`, `/`로 바꾼다.
pub fn normalize(input: &str) -> String {
    input.replace('×', "*").replace('÷', "/")
}

/// 수식 문자열을 평가한다. 결과는 항상 유한한 실수이다.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let normalized = normalize(input);
    let tree = parse(&normalized)?;
    let value = eval(&tree)?;
    debug!("evaluate expr={:?} result={}", input, value);
    Ok(value)
}

/// 중간 결과까지 포함해 NaN/무한대를 모두 거부한다.
fn finite(value: f64, what: &str) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::invalid(format!("{what} is not a finite number")))
    }
}

/// 트리를 평가한다.
pub fn eval(expr: &Expression) -> Result<f64, EvalError> {
    match expr {
        Expression::Number(n) => finite(*n, "literal"),
        Expression::Constant(c) => Ok(c.value()),
        Expression::UnaryOp { op, operand } => {
            let v = eval(operand)?;
            Ok(match op {
                UnaryOperator::Negate => -v,
                UnaryOperator::Plus => v,
            })
        }
        Expression::BinaryOp { left, op, right } => {
            let l = eval(left)?;
            let r = eval(right)?;
            apply_binary(*op, l, r)
        }
        Expression::Call { function, args } => {
            let values = args.iter().map(eval).collect::<Result<Vec<_>, _>>()?;
            apply_function(*function, &values)
        }
    }
}

fn apply_binary(op: BinaryOperator, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOperator::Add => finite(l + r, "sum"),
        BinaryOperator::Subtract => finite(l - r, "difference"),
        BinaryOperator::Multiply => finite(l * r, "product"),
        BinaryOperator::Divide => {
            if r == 0.0 {
                return Err(EvalError::invalid("division by zero"));
            }
            finite(l / r, "quotient")
        }
        BinaryOperator::Power => power(l, r),
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::invalid("zero cannot be raised to a negative power"));
    }
    finite(base.powf(exponent), "power")
}

fn apply_function(function: Function, args: &[f64]) -> Result<f64, EvalError> {
    if args.len() != function.arity() {
        return Err(EvalError::invalid(format!(
            "{}() takes {} argument(s), {} given",
            function.name(),
            function.arity(),
            args.len()
        )));
    }
    let domain_error = || EvalError::invalid(format!("math domain error in {}()", function.name()));
    let x = args[0];
    let value = match function {
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
        Function::Asin | Function::Acos if !(-1.0..=1.0).contains(&x) => {
            return Err(domain_error())
        }
        Function::Asin => x.asin(),
        Function::Acos => x.acos(),
        Function::Atan => x.atan(),
        Function::Ln | Function::Log10 if x <= 0.0 => return Err(domain_error()),
        Function::Ln => x.ln(),
        Function::Log10 => x.log10(),
        Function::Sqrt if x < 0.0 => return Err(domain_error()),
        Function::Sqrt => x.sqrt(),
        Function::Abs => x.abs(),
        Function::Pow => return power(x, args[1]),
    };
    finite(value, function.name())
}
