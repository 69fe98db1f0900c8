//! 제한된 산술/과학 수식 평가기.
//!
//! 파이프라인: 문자열 --> normalize(×÷) --> Lexer --> Parser --> 트리 --> eval
//!
//! 허용되는 것은 숫자, `+ - * /`, `^`/`**`, 괄호, 단항 부호, 허용 목록의 함수
//! (`sin cos tan asin acos atan log log10 sqrt abs pow`)와 상수 `pi`/`π`, `e`뿐이다.

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod scientific;
pub mod token;

pub use ast::{BinaryOperator, Constant, Expression, Function, UnaryOperator};
pub use eval::{evaluate, normalize, EvalError};
pub use parser::{parse, ParseError};
pub use scientific::{factorial_of, reciprocal_of};
