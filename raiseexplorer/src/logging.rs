use env_logger::{Builder, Env, Target};
use std::path::Path;

/// Sets up `env_logger` at `level`, or whatever `RUST_LOG` says when it is
/// set. Writes to `log_file` (truncated) when it can be opened, stderr
/// otherwise.
pub fn init(level: &str, log_file: Option<&Path>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder.format_timestamp_millis();
    if let Some(path) = log_file {
        if let Ok(file) = std::fs::File::create(path) {
            builder.target(Target::Pipe(Box::new(file)));
        }
    }
    let _ = builder.try_init();
}
