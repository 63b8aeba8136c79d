//! Platform-neutral half of RaiseExplorer.
//!
//! Everything here talks to the operating system only through the traits in
//! [`shell`], [`restack`] and [`event_loop`], so the discovery and restack
//! passes can run against fakes.

pub mod discovery;
pub mod event_loop;
pub mod hotkey;
pub mod restack;
pub mod shell;

/// Opaque identifier of a top-level window.
///
/// The value is borrowed from the OS and may stop referring to a live window
/// at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub fn raw(&self) -> isize {
        self.0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
