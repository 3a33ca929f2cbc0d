// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in Gobstones vocabularies.
//!
//! Embedded as static tables, registered before any user-supplied locale
//! and in the order [`definitions`] lists them. Spanish Gobstones keeps the
//! English keywords and localizes primitives, values and library
//! functions; Portuguese localizes everything.
//!
//! ## Adding a built-in locale
//!
//! 1. Create a `const XX: &[(Token, &str)]` table below covering every
//!    [`Token`] (or a short override table for an extension)
//! 2. Add it to [`definitions`], after the locale it extends

use super::LocaleDefinition;
use crate::token::Token;

/// `(name, definition)` pairs in registration order.
pub fn definitions() -> Vec<(String, LocaleDefinition)> {
    vec![
        ("es".to_string(), LocaleDefinition::from_table(ES)),
        ("en".to_string(), LocaleDefinition::from_table(EN)),
        ("pt".to_string(), LocaleDefinition::from_table(PT)),
        (
            "pt-PT".to_string(),
            LocaleDefinition::extending("pt", PT_PT.iter().copied()),
        ),
    ]
}

/// Names of the built-in locales, in registration order.
pub fn names() -> &'static [&'static str] {
    &["es", "en", "pt", "pt-PT"]
}

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(Token, &str)] = &[
    (Token::Program, "program"),
    (Token::Interactive, "interactive"),
    (Token::Procedure, "procedure"),
    (Token::Function, "function"),
    (Token::Type, "type"),
    (Token::Is, "is"),
    (Token::Record, "record"),
    (Token::Variant, "variant"),
    (Token::Case, "case"),
    (Token::Field, "field"),
    (Token::Return, "return"),
    (Token::If, "if"),
    (Token::ElseIf, "elseif"),
    (Token::Else, "else"),
    (Token::Repeat, "repeat"),
    (Token::Foreach, "foreach"),
    (Token::In, "in"),
    (Token::While, "while"),
    (Token::Switch, "switch"),
    (Token::To, "to"),
    (Token::Let, "let"),
    (Token::Not, "not"),
    (Token::Drop, "Poner"),
    (Token::Grab, "Sacar"),
    (Token::Move, "Mover"),
    (Token::GoToEdge, "IrAlBorde"),
    (Token::EmptyBoard, "VaciarTablero"),
    (Token::Boom, "BOOM"),
    (Token::NumStones, "nroBolitas"),
    (Token::HasStones, "hayBolitas"),
    (Token::CanMove, "puedeMover"),
    (Token::BoomExpression, "boom"),
    (Token::Blue, "Azul"),
    (Token::Black, "Negro"),
    (Token::Red, "Rojo"),
    (Token::Green, "Verde"),
    (Token::North, "Norte"),
    (Token::East, "Este"),
    (Token::South, "Sur"),
    (Token::West, "Oeste"),
    (Token::True, "True"),
    (Token::False, "False"),
    (Token::MinBool, "minBool"),
    (Token::MaxBool, "maxBool"),
    (Token::MinColor, "minColor"),
    (Token::MaxColor, "maxColor"),
    (Token::MinDir, "minDir"),
    (Token::MaxDir, "maxDir"),
    (Token::Next, "siguiente"),
    (Token::Previous, "previo"),
    (Token::Opposite, "opuesto"),
    (Token::Head, "primero"),
    (Token::Tail, "sinElPrimero"),
    (Token::IsEmpty, "esVacía"),
    (Token::ColorType, "Color"),
    (Token::DirectionType, "Dirección"),
    (Token::BoolType, "Booleano"),
    (Token::NumberType, "Número"),
    (Token::ListType, "Lista"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(Token, &str)] = &[
    (Token::Program, "program"),
    (Token::Interactive, "interactive"),
    (Token::Procedure, "procedure"),
    (Token::Function, "function"),
    (Token::Type, "type"),
    (Token::Is, "is"),
    (Token::Record, "record"),
    (Token::Variant, "variant"),
    (Token::Case, "case"),
    (Token::Field, "field"),
    (Token::Return, "return"),
    (Token::If, "if"),
    (Token::ElseIf, "elseif"),
    (Token::Else, "else"),
    (Token::Repeat, "repeat"),
    (Token::Foreach, "foreach"),
    (Token::In, "in"),
    (Token::While, "while"),
    (Token::Switch, "switch"),
    (Token::To, "to"),
    (Token::Let, "let"),
    (Token::Not, "not"),
    (Token::Drop, "Drop"),
    (Token::Grab, "Grab"),
    (Token::Move, "Move"),
    (Token::GoToEdge, "GoToEdge"),
    (Token::EmptyBoard, "EmptyBoardContents"),
    (Token::Boom, "BOOM"),
    (Token::NumStones, "numStones"),
    (Token::HasStones, "hasStones"),
    (Token::CanMove, "canMove"),
    (Token::BoomExpression, "boom"),
    (Token::Blue, "Blue"),
    (Token::Black, "Black"),
    (Token::Red, "Red"),
    (Token::Green, "Green"),
    (Token::North, "North"),
    (Token::East, "East"),
    (Token::South, "South"),
    (Token::West, "West"),
    (Token::True, "True"),
    (Token::False, "False"),
    (Token::MinBool, "minBool"),
    (Token::MaxBool, "maxBool"),
    (Token::MinColor, "minColor"),
    (Token::MaxColor, "maxColor"),
    (Token::MinDir, "minDir"),
    (Token::MaxDir, "maxDir"),
    (Token::Next, "next"),
    (Token::Previous, "previous"),
    (Token::Opposite, "opposite"),
    (Token::Head, "head"),
    (Token::Tail, "tail"),
    (Token::IsEmpty, "isEmpty"),
    (Token::ColorType, "Color"),
    (Token::DirectionType, "Direction"),
    (Token::BoolType, "Bool"),
    (Token::NumberType, "Number"),
    (Token::ListType, "List"),
];

// ─── Portuguese ─────────────────────────────────────────────────────

const PT: &[(Token, &str)] = &[
    (Token::Program, "programa"),
    (Token::Interactive, "interativo"),
    (Token::Procedure, "procedimento"),
    (Token::Function, "função"),
    (Token::Type, "tipo"),
    (Token::Is, "é"),
    (Token::Record, "registro"),
    (Token::Variant, "variante"),
    (Token::Case, "caso"),
    (Token::Field, "campo"),
    (Token::Return, "retornar"),
    (Token::If, "se"),
    (Token::ElseIf, "senãoSe"),
    (Token::Else, "senão"),
    (Token::Repeat, "repetir"),
    (Token::Foreach, "paraCada"),
    (Token::In, "em"),
    (Token::While, "enquanto"),
    (Token::Switch, "escolha"),
    (Token::To, "para"),
    (Token::Let, "seja"),
    (Token::Not, "não"),
    (Token::Drop, "Colocar"),
    (Token::Grab, "Retirar"),
    (Token::Move, "Mover"),
    (Token::GoToEdge, "IrParaABorda"),
    (Token::EmptyBoard, "EsvaziarTabuleiro"),
    (Token::Boom, "BOOM"),
    (Token::NumStones, "nroPedras"),
    (Token::HasStones, "háPedras"),
    (Token::CanMove, "podeMover"),
    (Token::BoomExpression, "boom"),
    (Token::Blue, "Azul"),
    (Token::Black, "Preto"),
    (Token::Red, "Vermelho"),
    (Token::Green, "Verde"),
    (Token::North, "Norte"),
    (Token::East, "Leste"),
    (Token::South, "Sul"),
    (Token::West, "Oeste"),
    (Token::True, "Verdadeiro"),
    (Token::False, "Falso"),
    (Token::MinBool, "minBool"),
    (Token::MaxBool, "maxBool"),
    (Token::MinColor, "minCor"),
    (Token::MaxColor, "maxCor"),
    (Token::MinDir, "minDir"),
    (Token::MaxDir, "maxDir"),
    (Token::Next, "seguinte"),
    (Token::Previous, "anterior"),
    (Token::Opposite, "oposto"),
    (Token::Head, "primeiro"),
    (Token::Tail, "semOPrimeiro"),
    (Token::IsEmpty, "éVazia"),
    (Token::ColorType, "Cor"),
    (Token::DirectionType, "Direção"),
    (Token::BoolType, "Booleano"),
    (Token::NumberType, "Número"),
    (Token::ListType, "Lista"),
];

// ─── European Portuguese (extends pt) ───────────────────────────────

const PT_PT: &[(Token, &str)] = &[
    (Token::Record, "registo"),
    (Token::Drop, "Pôr"),
    (Token::EmptyBoard, "LimparTabuleiro"),
];
