// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io::Write};

use colored::{Color, ColoredString, Colorize};
use parlante::{ErrorCategory, FileRange, LexerError, ParseError, SourceCode, ValueType};
use strum::AsRefStr;

/// Any failure that stops a program: the first lexer, parser or runtime
/// error encountered.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Lexer(..) => ErrorCategory::SyntaxError,
            Self::Parse(..) => ErrorCategory::SyntaxError,
            Self::Runtime(error) => error.kind.category(),
        }
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::Lexer(error) => error.location.as_zero_range(),
            Self::Parse(error) => error.range(),
            Self::Runtime(error) => error.range,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Parse(ParseError::ExpectedSemicolonAfterStatement { .. }) => {
                Some("termina la declaración con `;`".into())
            }

            Self::Parse(ParseError::MissingTypeAnnotation { name }) => {
                Some(format!("escribe el tipo, por ejemplo `var {}: Numero;`", name.value()))
            }

            Self::Runtime(RuntimeError { kind: RuntimeErrorKind::Undeclared { name }, .. }) => {
                Some(format!("declara `{name}` con `var` o `const` antes de usarla"))
            }

            Self::Runtime(RuntimeError { kind: RuntimeErrorKind::AssignToConstant { .. }, .. }) => {
                Some("usa `var` en lugar de `const` si el valor debe cambiar".into())
            }

            _ => None,
        }
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn printer(&self, source_code: &SourceCode) -> ErrorPrinter {
        ErrorPrinter::new(source_code, self.range(), self)
            .category(self.category())
            .hint(self.hint())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub range: FileRange,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    #[must_use]
    pub const fn new(range: FileRange, kind: RuntimeErrorKind) -> Self {
        Self { range, kind }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error, AsRefStr)]
pub enum RuntimeErrorKind {
    #[error("La variable `{name}` ya ha sido declarada")]
    AlreadyDeclared { name: String },

    #[error("No se puede declarar `{name}` sin un tipo ni un valor")]
    MissingType { name: String },

    #[error("No se puede declarar la constante `{name}` sin un valor")]
    ConstantWithoutValue { name: String },

    #[error("No se puede resolver la variable `{name}`")]
    Undeclared { name: String },

    #[error("No se puede acceder a la variable `{name}` porque no ha sido inicializada")]
    Uninitialized { name: String },

    #[error("No se puede reasignar la constante `{name}`")]
    AssignToConstant { name: String },

    #[error("No se puede asignar un valor de diferente tipo. La variable `{name}` tiene el tipo {expected} pero se intenta asignar un valor de tipo {found}")]
    TypeMismatch { name: String, expected: ValueType, found: ValueType },

    #[error("Tipo desconocido `{name}`; los tipos válidos son Nulo, Booleano, Numero, Texto, Objeto y Funcion")]
    UnknownType { name: String },

    #[error("La función `{name}` espera {expected} argumento(s), pero recibió {found}")]
    ArityMismatch { name: String, expected: usize, found: usize },

    #[error("El parámetro `{parameter}` es de tipo {expected}, pero recibió un valor de tipo {found}")]
    ArgumentTypeMismatch { parameter: String, expected: ValueType, found: ValueType },

    #[error("Un valor de tipo {found} no se puede llamar como función")]
    NotCallable { found: ValueType },

    #[error("Se esperaba un Objeto, pero se encontró un valor de tipo {found}")]
    NotAnObject { found: ValueType },

    #[error("La clave de una propiedad debe ser Texto, pero es de tipo {found}")]
    InvalidPropertyKey { found: ValueType },

    #[error("El objeto no tiene la propiedad `{key}`")]
    MissingProperty { key: String },

    #[error("El operador `{operator}` no admite operandos de tipo {lhs} y {rhs}")]
    InvalidOperands { operator: &'static str, lhs: ValueType, rhs: ValueType },

    #[error("La condición debe ser de tipo Booleano, pero es de tipo {found}")]
    ConditionNotBoolean { found: ValueType },

    #[error("No se puede usar `devolver` fuera de una función")]
    ReturnOutsideFunction,

    #[error("No se puede usar `{keyword}` fuera de un bucle `mientras`")]
    LoopControlOutsideLoop { keyword: &'static str },

    #[error("No se puede convertir {value} a Numero")]
    InvalidNumberConversion { value: String },

    #[error("No se puede convertir un valor de tipo {found} a {target}")]
    InvalidConversion { found: ValueType, target: ValueType },

    #[error("Se superó la profundidad máxima de llamadas ({limit})")]
    CallDepthExceeded { limit: usize },

    #[error("No se puede asignar a esta expresión")]
    InvalidAssignmentTarget,

    #[error("No se pudo escribir la salida: {message}")]
    OutputFailed { message: String },
}

impl RuntimeErrorKind {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Undeclared { .. } => ErrorCategory::ReferenceError,
            Self::Uninitialized { .. } => ErrorCategory::ReferenceError,
            Self::MissingProperty { .. } => ErrorCategory::ReferenceError,

            Self::CallDepthExceeded { .. } => ErrorCategory::InternalError,
            Self::InvalidAssignmentTarget => ErrorCategory::InternalError,
            Self::OutputFailed { .. } => ErrorCategory::InternalError,

            _ => ErrorCategory::TypeError,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn at(self, range: FileRange) -> RuntimeError {
        RuntimeError::new(range, self)
    }
}

impl From<std::io::Error> for RuntimeErrorKind {
    fn from(value: std::io::Error) -> Self {
        Self::OutputFailed { message: value.to_string() }
    }
}

/// Renders a diagnostic with the offending source lines, for example:
///
/// ```text
/// Error de tipo: No se puede reasignar la constante `x`
///
/// 1 | const x = 1;
/// 2 | x = 2;
///   | ^
///
/// En prueba.par:2:1
/// ```
pub struct ErrorPrinter {
    category: ErrorCategory,
    source_code: SourceCode,
    range: FileRange,
    message: String,
    hint: Option<String>,
    use_color: bool,
}

impl ErrorPrinter {
    const MAX_LINE_WIDTH: usize = 100;

    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            category: ErrorCategory::InternalError,
            message: message.to_string(),
            hint: None,
            use_color: true,
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    #[must_use]
    pub fn category(self, category: ErrorCategory) -> Self {
        Self {
            category,
            ..self
        }
    }

    #[must_use]
    pub fn color(self, use_color: bool) -> Self {
        Self {
            use_color,
            ..self
        }
    }

    pub fn print(self) {
        let mut stderr = std::io::stderr().lock();
        _ = self.print_to(&mut stderr);
    }

    pub fn print_to(&self, w: &mut dyn Write) -> std::io::Result<()> {
        self.print_prelude(w)?;
        self.print_lines(w)?;
        self.print_postlude(w)
    }

    fn paint(&self, s: ColoredString) -> ColoredString {
        if self.use_color {
            s
        } else {
            s.clear()
        }
    }

    fn print_prelude(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let category = self.paint(self.category.description().color(Color::Red).bold());
        let message = self.paint(self.message.as_str().bold());

        writeln!(w, "{category}: {message}")?;
        writeln!(w)
    }

    fn print_lines(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let line = self.range.start().line();
        let first = line.saturating_sub(1).max(1);

        let lines: Vec<(usize, &str)> = self.source_code.lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .skip(first - 1)
            .take(line + 2 - first)
            .collect();

        let number_width = lines.last().map(|(number, _)| number.to_string().len()).unwrap_or(1);
        let window_start = self.window_start();

        for (number, text) in &lines {
            if *number < line && text.trim().is_empty() {
                continue;
            }

            self.print_line_prefix(w, Some(*number), number_width)?;
            writeln!(w, "{}", self.truncate(text, window_start))?;

            if *number == line {
                self.print_error_indicator(w, number_width, window_start)?;
            }
        }

        if lines.iter().all(|(number, _)| *number != line) {
            // The error is at the very end of the input, past the last line.
            self.print_error_indicator(w, number_width, window_start)?;
        }

        Ok(())
    }

    /// Index of the first character shown for lines that are too long to
    /// print in full.
    fn window_start(&self) -> usize {
        let column = self.range.start().column().saturating_sub(1);
        column.saturating_sub(Self::MAX_LINE_WIDTH / 2)
    }

    fn truncate(&self, line: &str, window_start: usize) -> String {
        let char_count = line.chars().count();
        if char_count <= Self::MAX_LINE_WIDTH {
            return line.to_string();
        }

        let mut result = String::new();
        if window_start > 0 {
            result += "...";
        }

        result.extend(line.chars().skip(window_start).take(Self::MAX_LINE_WIDTH));

        if window_start + Self::MAX_LINE_WIDTH < char_count {
            result += "...";
        }

        result
    }

    fn print_error_indicator(&self, w: &mut dyn Write, number_width: usize, window_start: usize) -> std::io::Result<()> {
        let mut offset = self.range.start().column().saturating_sub(1) - window_start;
        if window_start > 0 {
            offset += 3;
        }

        let spaces = " ".repeat(offset);
        let caret = self.paint("^".color(Color::Red).bold());

        let width = if self.range.is_single_line() { self.range.column_width() } else { 1 };
        let tildes = self.paint("~".repeat(width.saturating_sub(1)).color(Color::Red));

        self.print_line_prefix(w, None, number_width)?;

        match &self.hint {
            Some(hint) => {
                let hint = self.paint(format!("pista: {hint}").color(Color::Red).bold());
                writeln!(w, "{spaces}{caret}{tildes} {hint}")
            }
            None => writeln!(w, "{spaces}{caret}{tildes}"),
        }
    }

    fn print_line_prefix(&self, w: &mut dyn Write, number: Option<usize>, width: usize) -> std::io::Result<()> {
        let separator = self.paint(" | ".blue().bold());

        let number = match number {
            Some(number) => format!("{number:>width$}"),
            None => " ".repeat(width),
        };

        write!(w, "{}{separator}", self.paint(number.blue().bold()))
    }

    fn print_postlude(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w)?;

        let path = self.source_code.path().display();
        let location = self.range.start();

        writeln!(w, "En {path}:{}:{}", location.line(), location.column())
    }
}
