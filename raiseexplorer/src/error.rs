use raiseexplorer_core::restack::RestackError;
#[cfg(windows)]
use raiseexplorer_core::hotkey::Hotkey;

/// Everything that ends the process with an error message box.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(windows)]
    #[error("Couldn't initialise COM: {0}")]
    ComInit(windows::core::Error),
    #[cfg(windows)]
    #[error("Couldn't register hotkey {hotkey}: {source}")]
    RegisterHotkey {
        hotkey: Hotkey,
        source: windows::core::Error,
    },
    #[error(transparent)]
    Raise(#[from] RestackError),
}
