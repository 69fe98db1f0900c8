/// 엔진(변환기/계산기) 실패의 분류. 표시 계층은 이 값으로 메시지를 고르고
/// 오류 카운터를 올린다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDomain,
    InvalidUnit,
    NonFiniteInput,
    InvalidExpression,
    DivisionByZero,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDomain => "InvalidDomain",
            ErrorKind::InvalidUnit => "InvalidUnit",
            ErrorKind::NonFiniteInput => "NonFiniteInput",
            ErrorKind::InvalidExpression => "InvalidExpression",
            ErrorKind::DivisionByZero => "DivisionByZero",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
