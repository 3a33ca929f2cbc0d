// SPDX-License-Identifier: PMPL-1.0-or-later

//! The closed set of Gobstones token names.
//!
//! Every built-in keyword, primitive command, primitive expression and
//! literal of the language has exactly one [`Token`]. Locale definitions map
//! these bare names to spellings; abstract code carries them decorated
//! (`$GBS_COMMAND_DROP$` with the default prefix and suffix).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Token {
    // === Definitions ===
    Program,
    Interactive,
    Procedure,
    Function,
    Type,
    Is,
    Record,
    Variant,
    Case,
    Field,

    // === Statements ===
    Return,
    If,
    ElseIf,
    Else,
    Repeat,
    Foreach,
    In,
    While,
    Switch,
    To,
    Let,
    Not,

    // === Primitive commands ===
    Drop,
    Grab,
    Move,
    GoToEdge,
    EmptyBoard,
    Boom,

    // === Primitive expressions ===
    NumStones,
    HasStones,
    CanMove,
    BoomExpression,

    // === Values ===
    Blue,
    Black,
    Red,
    Green,
    North,
    East,
    South,
    West,
    True,
    False,

    // === Enumeration functions ===
    MinBool,
    MaxBool,
    MinColor,
    MaxColor,
    MinDir,
    MaxDir,
    Next,
    Previous,
    Opposite,

    // === List functions ===
    Head,
    Tail,
    IsEmpty,

    // === Type names ===
    ColorType,
    DirectionType,
    BoolType,
    NumberType,
    ListType,
}

const ALL: &[Token] = &[
    Token::Program,
    Token::Interactive,
    Token::Procedure,
    Token::Function,
    Token::Type,
    Token::Is,
    Token::Record,
    Token::Variant,
    Token::Case,
    Token::Field,
    Token::Return,
    Token::If,
    Token::ElseIf,
    Token::Else,
    Token::Repeat,
    Token::Foreach,
    Token::In,
    Token::While,
    Token::Switch,
    Token::To,
    Token::Let,
    Token::Not,
    Token::Drop,
    Token::Grab,
    Token::Move,
    Token::GoToEdge,
    Token::EmptyBoard,
    Token::Boom,
    Token::NumStones,
    Token::HasStones,
    Token::CanMove,
    Token::BoomExpression,
    Token::Blue,
    Token::Black,
    Token::Red,
    Token::Green,
    Token::North,
    Token::East,
    Token::South,
    Token::West,
    Token::True,
    Token::False,
    Token::MinBool,
    Token::MaxBool,
    Token::MinColor,
    Token::MaxColor,
    Token::MinDir,
    Token::MaxDir,
    Token::Next,
    Token::Previous,
    Token::Opposite,
    Token::Head,
    Token::Tail,
    Token::IsEmpty,
    Token::ColorType,
    Token::DirectionType,
    Token::BoolType,
    Token::NumberType,
    Token::ListType,
];

impl Token {
    /// Bare token name, as used in locale definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Program => "GBS_DEFINITION_PROGRAM",
            Token::Interactive => "GBS_DEFINITION_INTERACTIVE",
            Token::Procedure => "GBS_DEFINITION_PROCEDURE",
            Token::Function => "GBS_DEFINITION_FUNCTION",
            Token::Type => "GBS_DEFINITION_TYPE",
            Token::Is => "GBS_DEFINITION_IS",
            Token::Record => "GBS_DEFINITION_RECORD",
            Token::Variant => "GBS_DEFINITION_VARIANT",
            Token::Case => "GBS_DEFINITION_CASE",
            Token::Field => "GBS_DEFINITION_FIELD",
            Token::Return => "GBS_STATEMENT_RETURN",
            Token::If => "GBS_STATEMENT_IF",
            Token::ElseIf => "GBS_STATEMENT_ELSEIF",
            Token::Else => "GBS_STATEMENT_ELSE",
            Token::Repeat => "GBS_STATEMENT_REPEAT",
            Token::Foreach => "GBS_STATEMENT_FOREACH",
            Token::In => "GBS_STATEMENT_IN",
            Token::While => "GBS_STATEMENT_WHILE",
            Token::Switch => "GBS_STATEMENT_SWITCH",
            Token::To => "GBS_STATEMENT_TO",
            Token::Let => "GBS_STATEMENT_LET",
            Token::Not => "GBS_STATEMENT_NOT",
            Token::Drop => "GBS_COMMAND_DROP",
            Token::Grab => "GBS_COMMAND_GRAB",
            Token::Move => "GBS_COMMAND_MOVE",
            Token::GoToEdge => "GBS_COMMAND_GO_TO_EDGE",
            Token::EmptyBoard => "GBS_COMMAND_EMPTY_BOARD",
            Token::Boom => "GBS_COMMAND_BOOM",
            Token::NumStones => "GBS_EXPRESSION_NUM_STONES",
            Token::HasStones => "GBS_EXPRESSION_HAS_STONES",
            Token::CanMove => "GBS_EXPRESSION_CAN_MOVE",
            Token::BoomExpression => "GBS_EXPRESSION_BOOM",
            Token::Blue => "GBS_COLOR_BLUE",
            Token::Black => "GBS_COLOR_BLACK",
            Token::Red => "GBS_COLOR_RED",
            Token::Green => "GBS_COLOR_GREEN",
            Token::North => "GBS_DIRECTION_NORTH",
            Token::East => "GBS_DIRECTION_EAST",
            Token::South => "GBS_DIRECTION_SOUTH",
            Token::West => "GBS_DIRECTION_WEST",
            Token::True => "GBS_BOOLEAN_TRUE",
            Token::False => "GBS_BOOLEAN_FALSE",
            Token::MinBool => "GBS_FUNCTION_MIN_BOOL",
            Token::MaxBool => "GBS_FUNCTION_MAX_BOOL",
            Token::MinColor => "GBS_FUNCTION_MIN_COLOR",
            Token::MaxColor => "GBS_FUNCTION_MAX_COLOR",
            Token::MinDir => "GBS_FUNCTION_MIN_DIR",
            Token::MaxDir => "GBS_FUNCTION_MAX_DIR",
            Token::Next => "GBS_FUNCTION_NEXT",
            Token::Previous => "GBS_FUNCTION_PREVIOUS",
            Token::Opposite => "GBS_FUNCTION_OPPOSITE",
            Token::Head => "GBS_FUNCTION_HEAD",
            Token::Tail => "GBS_FUNCTION_TAIL",
            Token::IsEmpty => "GBS_FUNCTION_IS_EMPTY",
            Token::ColorType => "GBS_TYPE_COLOR",
            Token::DirectionType => "GBS_TYPE_DIRECTION",
            Token::BoolType => "GBS_TYPE_BOOL",
            Token::NumberType => "GBS_TYPE_NUMBER",
            Token::ListType => "GBS_TYPE_LIST",
        }
    }

    /// Parse a bare token name. Case-sensitive.
    pub fn parse(name: &str) -> Option<Token> {
        ALL.iter().copied().find(|token| token.as_str() == name)
    }

    /// Every token, in declaration order.
    pub fn all() -> &'static [Token] {
        ALL
    }

    /// Wrap the bare name in `prefix` and `suffix`, e.g. `$GBS_COMMAND_DROP$`.
    pub fn decorate(&self, prefix: &str, suffix: &str) -> String {
        decorate(self.as_str(), prefix, suffix)
    }
}

/// Decorate an arbitrary bare name.
pub fn decorate(name: &str, prefix: &str, suffix: &str) -> String {
    let mut decorated = String::with_capacity(prefix.len() + name.len() + suffix.len());
    decorated.push_str(prefix);
    decorated.push_str(name);
    decorated.push_str(suffix);
    decorated
}

/// Strip `prefix` and `suffix` from a decorated token, recovering the bare
/// name. Returns `None` when either affix is missing.
pub fn undecorate<'a>(decorated: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    decorated.strip_prefix(prefix)?.strip_suffix(suffix)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Token> for &'static str {
    fn from(token: Token) -> Self {
        token.as_str()
    }
}

impl TryFrom<String> for Token {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::parse(&value).ok_or_else(|| format!("unknown token name `{}`", value))
    }
}
