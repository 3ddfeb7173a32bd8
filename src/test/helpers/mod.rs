//! Helper functions for building metadata nodes in tests

use crate::metadata::{CustomAttribute, MemberDef, MemberKind, Token, TypeDef};

// Helper function to create a type registered under `external_name`
pub fn bound_type(row: u32, external_name: &str) -> TypeDef {
    let simple = external_name.rsplit('/').next().unwrap_or(external_name);
    TypeDef::new(Token::from_parts(Token::TYPE_DEF, row), "Bindings", simple)
        .with_attribute(CustomAttribute::register(external_name, None))
}

// Helper function to create a type without any registration
pub fn plain_type(row: u32, name: &str) -> TypeDef {
    TypeDef::new(Token::from_parts(Token::TYPE_DEF, row), "App", name)
}

// Helper function to create a registered member of any kind
pub fn member(kind: MemberKind, row: u32, name: &str, signature: Option<&str>) -> MemberDef {
    MemberDef::new(Token::from_parts(kind.table(), row), name)
        .with_attribute(CustomAttribute::register(name, signature))
}

// Helper function to create a registered method
pub fn method(row: u32, name: &str, signature: &str) -> MemberDef {
    member(MemberKind::Method, row, name, Some(signature))
}
