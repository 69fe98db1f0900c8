//! 계산기 버튼 표. 표시 계층은 라벨을 보여주고, 눌린 버튼의 동작을
//! [`crate::session::Session::apply`]에 넘긴다.

/// 버튼 하나가 수행하는 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// 입력 버퍼 뒤에 문자열을 붙인다.
    Insert(&'static str),
    Evaluate,
    Clear,
    Backspace,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    Factorial,
    Reciprocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub action: KeyAction,
}

const fn key(label: &'static str, action: KeyAction) -> Key {
    Key { label, action }
}

const fn insert(label: &'static str) -> Key {
    Key {
        label,
        action: KeyAction::Insert(label),
    }
}

/// 기본 계산기 배치 (4행 5열).
pub static BASIC_PAD: [[Key; 5]; 4] = [
    [
        insert("7"),
        insert("8"),
        insert("9"),
        insert("/"),
        key("C", KeyAction::Clear),
    ],
    [
        insert("4"),
        insert("5"),
        insert("6"),
        insert("*"),
        key("←", KeyAction::Backspace),
    ],
    [
        insert("1"),
        insert("2"),
        insert("3"),
        insert("-"),
        key("M+", KeyAction::MemoryStore),
    ],
    [
        insert("0"),
        insert("."),
        key("=", KeyAction::Evaluate),
        insert("+"),
        key("MR", KeyAction::MemoryRecall),
    ],
];

/// 공학 계산기 배치 (4행 5열).
pub static SCIENTIFIC_PAD: [[Key; 5]; 4] = [
    [
        key("sin", KeyAction::Insert("sin(")),
        key("cos", KeyAction::Insert("cos(")),
        key("tan", KeyAction::Insert("tan(")),
        key("π", KeyAction::Insert("pi")),
        key("e", KeyAction::Insert("e")),
    ],
    [
        key("asin", KeyAction::Insert("asin(")),
        key("acos", KeyAction::Insert("acos(")),
        key("atan", KeyAction::Insert("atan(")),
        key("log", KeyAction::Insert("log10(")),
        key("ln", KeyAction::Insert("log(")),
    ],
    [
        key("x²", KeyAction::Insert("**2")),
        key("x³", KeyAction::Insert("**3")),
        key("√", KeyAction::Insert("sqrt(")),
        insert("("),
        insert(")"),
    ],
    [
        key("1/x", KeyAction::Reciprocal),
        key("n!", KeyAction::Factorial),
        key("%", KeyAction::Insert("/100")),
        key("abs", KeyAction::Insert("abs(")),
        key("MC", KeyAction::MemoryClear),
    ],
];

/// 두 배치의 모든 버튼을 행 순서대로 순회한다.
pub fn all_keys() -> impl Iterator<Item = &'static Key> {
    BASIC_PAD
        .iter()
        .chain(SCIENTIFIC_PAD.iter())
        .flat_map(|row| row.iter())
}

/// 라벨로 버튼을 찾는다.
pub fn find_key(label: &str) -> Option<&'static Key> {
    all_keys().find(|k| k.label == label)
}
