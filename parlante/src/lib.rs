// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod error_category;
mod lexer;
mod parser;
mod types;
mod util;

pub use self::{
    ast::*,
    error_category::ErrorCategory,
    lexer::*,
    parser::{ParseError, ParseResult, Parser},
    types::ValueType,
    util::*,
};
