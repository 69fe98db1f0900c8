//! 문법 밖에서 현재 값에 바로 적용하는 단축 연산 (n!, 1/x).

use super::eval::EvalError;

/// f64로 표현 가능한 가장 큰 계승의 인자. 171!은 무한대가 된다.
pub const MAX_FACTORIAL_INPUT: u32 = 170;

/// 음이 아닌 정수의 계승을 계산한다.
pub fn factorial_of(n: f64) -> Result<f64, EvalError> {
    if !n.is_finite() {
        return Err(EvalError::invalid("factorial needs a finite number"));
    }
    if n < 0.0 {
        return Err(EvalError::invalid("factorial of a negative number"));
    }
    if n.fract() != 0.0 {
        return Err(EvalError::invalid("factorial needs an integer"));
    }
    if n > MAX_FACTORIAL_INPUT as f64 {
        return Err(EvalError::invalid("factorial result is too large"));
    }
    Ok((2..=n as u32).fold(1.0, |acc, k| acc * k as f64))
}

/// 역수를 계산한다. 0은 `DivisionByZero`.
pub fn reciprocal_of(x: f64) -> Result<f64, EvalError> {
    if !x.is_finite() {
        return Err(EvalError::invalid("reciprocal needs a finite number"));
    }
    if x == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(1.0 / x)
}
