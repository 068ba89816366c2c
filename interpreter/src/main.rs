// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use colored::Colorize;
use log::{debug, info};
use parlante::SourceCode;
use parlante_interpreter::{ConfigRoot, Logger, Value, INTERPRETER_STACK_SIZE};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Intérprete del lenguaje Parlante", long_about = None)]
struct Args {
    /// El programa `.par` que se va a ejecutar
    archivo: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    /// Imprime los errores sin colores
    #[arg(long)]
    sin_color: bool,

    /// Imprime el valor final del programa
    #[arg(long)]
    mostrar_valor: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    let result = std::thread::Builder::new()
        .name("parlante".into())
        .stack_size(INTERPRETER_STACK_SIZE)
        .spawn(move || execute(&args))
        .map_err(anyhow::Error::from)
        .and_then(|handle| {
            handle.join().map_err(|_| anyhow::anyhow!("el intérprete terminó de forma inesperada"))?
        });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> anyhow::Result<ExitCode> {
    let config = ConfigRoot::load_for(&args.archivo)?;
    Logger::initialize(args.verbose || config.registro.depurar);
    debug!("Configuración: {config:?}");

    let contents = std::fs::read_to_string(&args.archivo)
        .with_context(|| format!("No se pudo leer {}", args.archivo.display()))?;
    let source_code = SourceCode::new(args.archivo.clone(), contents);

    info!("Ejecutando {}", source_code.path().display());

    let stdout = std::io::stdout().lock();
    match parlante_interpreter::run(&source_code, stdout) {
        Ok(value) => {
            if args.mostrar_valor && value != Value::Null {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{value}")?;
            }

            Ok(ExitCode::SUCCESS)
        }

        Err(error) => {
            error.printer(&source_code)
                .color(config.salida.color && !args.sin_color)
                .print();
            Ok(ExitCode::FAILURE)
        }
    }
}
