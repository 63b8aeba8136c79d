#![windows_subsystem = "windows"]
use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    use raiseexplorer::{app, directories::Directories, logging, settings, util};

    let dirs = Directories::new();
    let create_dirs = dirs.as_ref().map(|dirs| dirs.create_dirs());
    let loaded = settings::get_settings(dirs.as_ref());
    let log_file = match (&dirs, &create_dirs) {
        (Some(dirs), Some(Ok(()))) => Some(dirs.log_file.as_path()),
        _ => None,
    };
    logging::init(&loaded.settings.log_level, log_file);
    log::info!("RaiseExplorer v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(Err(e)) = &create_dirs {
        log::warn!("could not create configuration directory: {}", e);
    }
    if !loaded.warnings.is_empty() {
        log::warn!("{}", loaded.warnings);
        util::show_warning_message(&loaded.warnings);
    }
    match app::run(&loaded.settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            util::show_error_message(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    eprintln!("raiseexplorer only runs on Windows");
    ExitCode::FAILURE
}
