pub mod directories;
pub mod error;
pub mod logging;
pub mod messages;
pub mod settings;
pub mod util;

#[cfg(windows)]
pub mod app;
#[cfg(windows)]
pub mod com;
#[cfg(windows)]
pub mod hotkey;
#[cfg(windows)]
pub mod tray_menu;
#[cfg(windows)]
pub mod window_control;
#[cfg(windows)]
pub mod windows_api;
