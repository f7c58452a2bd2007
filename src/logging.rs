use crate::engine::config::LogConfig;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

/// Routes `log` output to the configured file. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .format_target(false)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
