// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The six runtime types a value can have. The names are the ones used in
/// type annotations (`var x: Numero`) and returned by `tipo_de`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, IntoStaticStr)]
pub enum ValueType {
    #[strum(serialize = "Nulo")]
    Null,
    #[strum(serialize = "Booleano")]
    Boolean,
    #[strum(serialize = "Numero")]
    Number,
    #[strum(serialize = "Texto")]
    Text,
    #[strum(serialize = "Objeto")]
    Object,
    #[strum(serialize = "Funcion")]
    Function,
}

impl ValueType {
    pub fn parse(name: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == name)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Nulo", Some(ValueType::Null))]
    #[case("Booleano", Some(ValueType::Boolean))]
    #[case("Numero", Some(ValueType::Number))]
    #[case("Texto", Some(ValueType::Text))]
    #[case("Objeto", Some(ValueType::Object))]
    #[case("Funcion", Some(ValueType::Function))]
    #[case("numero", None)]
    #[case("Número", None)]
    #[case("Lista", None)]
    fn parse(#[case] input: &str, #[case] expected: Option<ValueType>) {
        assert_eq!(ValueType::parse(input), expected);
    }

    #[rstest]
    #[case(ValueType::Null, "Nulo")]
    #[case(ValueType::Number, "Numero")]
    #[case(ValueType::Function, "Funcion")]
    fn name(#[case] ty: ValueType, #[case] expected: &str) {
        assert_eq!(ty.name(), expected);
        assert_eq!(ty.to_string(), expected);
    }

    #[test]
    fn every_name_parses_back() {
        for ty in ValueType::iter() {
            assert_eq!(ValueType::parse(ty.name()), Some(ty));
        }
    }
}
