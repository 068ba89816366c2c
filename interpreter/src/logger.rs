// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Overrides the level filter, using the `env_logger` syntax, e.g.
    /// `PARLANTE_REGISTRO=parlante_interpreter=trace`.
    pub const FILTER_ENV: &'static str = "PARLANTE_REGISTRO";

    pub fn initialize(verbose: bool) {
        let level = if verbose { LevelFilter::Trace } else { LevelFilter::Warn };

        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_env(env_logger::Env::new().filter(Self::FILTER_ENV))
            .format(|buf, record| {
                writeln!(buf, "[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args())
            })
            .try_init();

        if result.is_ok() {
            log::info!("Registro inicializado con nivel {level}");
        }
    }
}
