//! Capabilities the discovery pass needs from the shell.
//!
//! Each trait is the narrow slice of a COM interface that discovery actually
//! calls. Implementations own whatever they wrap and release it on drop.

use crate::WindowHandle;

/// A shell call that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed with HRESULT {code:#010x}")]
pub struct ShellError {
    pub operation: &'static str,
    pub code: i32,
}

impl ShellError {
    pub fn new(operation: &'static str, code: i32) -> Self {
        Self { operation, code }
    }
}

/// Answers whether a window is on the virtual desktop currently shown.
pub trait DesktopMembership {
    fn is_on_current_desktop(&self, hwnd: WindowHandle) -> Result<bool, ShellError>;
}

/// An item that turned out to be a web/file browser window.
pub trait BrowserApp {
    fn window_handle(&self) -> Result<WindowHandle, ShellError>;
}

/// One entry of the shell window collection, not yet known to be a browser.
pub trait ShellItem {
    type Browser: BrowserApp;

    fn as_browser(&self) -> Result<Self::Browser, ShellError>;
}

/// The indexable collection of shell windows.
pub trait ShellWindowEnumeration {
    type Item: ShellItem;

    /// Returns the item at `index`, or `Ok(None)` once `index` is past the
    /// end. An `Err` only concerns this index; later indices may still
    /// succeed.
    fn item(&self, index: i32) -> Result<Option<Self::Item>, ShellError>;

    /// Index at which iteration stops even if `item` never returns
    /// `Ok(None)`. Without one, iteration stops at `i32::MAX`.
    fn upper_bound(&self) -> Option<i32> {
        None
    }
}

/// Hands out fresh capabilities for a single discovery pass.
pub trait ShellProvider {
    type Desktop: DesktopMembership;
    type Windows: ShellWindowEnumeration;

    fn desktop_membership(&self) -> Result<Self::Desktop, ShellError>;

    fn shell_windows(&self) -> Result<Self::Windows, ShellError>;
}
