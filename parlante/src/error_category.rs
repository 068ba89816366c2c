// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::AsRefStr;

/// The kind of failure a diagnostic reports. Every error the lexer, parser
/// or interpreter produces falls in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum ErrorCategory {
    SyntaxError,
    ReferenceError,
    TypeError,

    /// Something the interpreter itself should have prevented.
    InternalError,
}

impl ErrorCategory {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SyntaxError => "Error de sintaxis",
            Self::ReferenceError => "Error de referencia",
            Self::TypeError => "Error de tipo",
            Self::InternalError => "Error interno",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
