//! COM-backed shell capabilities.
//!
//! The `windows` interface wrappers release their reference on drop, so a
//! discovery pass leaves nothing behind however it exits.

use crate::windows_api;
use log::debug;
use raiseexplorer_core::{shell::*, WindowHandle};
use std::marker::PhantomData;
use windows::{
    core::*,
    Win32::{
        Foundation::*,
        System::Com::*,
        UI::Shell::*,
    },
};

fn shell_error(operation: &'static str, e: &Error) -> ShellError {
    ShellError::new(operation, e.code().0)
}

/// COM initialised on the current thread until dropped.
pub struct ComApartment {
    _not_send: PhantomData<*const ()>,
}

impl ComApartment {
    pub fn initialize() -> Result<Self> {
        windows_api::co_initialize_ex(None, COINIT_MULTITHREADED).ok()?;
        return Ok(Self {
            _not_send: PhantomData,
        });
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        windows_api::co_uninitialize();
    }
}

pub struct VirtualDesktops(IVirtualDesktopManager);

impl DesktopMembership for VirtualDesktops {
    fn is_on_current_desktop(&self, hwnd: WindowHandle) -> std::result::Result<bool, ShellError> {
        match windows_api::is_window_on_current_virtual_desktop(&self.0, windows_api::hwnd(hwnd)) {
            Ok(on_desktop) => Ok(on_desktop.as_bool()),
            Err(e) => Err(shell_error("IsWindowOnCurrentVirtualDesktop", &e)),
        }
    }
}

pub struct WebBrowser(IWebBrowserApp);

impl BrowserApp for WebBrowser {
    fn window_handle(&self) -> std::result::Result<WindowHandle, ShellError> {
        match windows_api::web_browser_app_hwnd(&self.0) {
            Ok(raw) => Ok(WindowHandle(raw)),
            Err(e) => Err(shell_error("IWebBrowserApp::HWND", &e)),
        }
    }
}

pub struct ShellWindow(IDispatch);

impl ShellItem for ShellWindow {
    type Browser = WebBrowser;

    fn as_browser(&self) -> std::result::Result<WebBrowser, ShellError> {
        match self.0.cast::<IWebBrowserApp>() {
            Ok(app) => Ok(WebBrowser(app)),
            Err(e) => Err(shell_error("QueryInterface(IWebBrowserApp)", &e)),
        }
    }
}

pub struct ShellWindowList {
    shell_windows: IShellWindows,
    count: i32,
}

/// Codes that mean `index` is no longer in range. `IShellWindows::Item`
/// answers `S_FALSE` with a null item for such an index. The binding turns
/// the null item into an error with no code (`S_OK`) or `E_POINTER`,
/// depending on the `windows` version, so all of them count.
fn is_out_of_range(code: HRESULT) -> bool {
    code == S_OK
        || code == S_FALSE
        || code == E_POINTER
        || code == E_INVALIDARG
        || code == DISP_E_BADINDEX
}

impl ShellWindowEnumeration for ShellWindowList {
    type Item = ShellWindow;

    fn item(&self, index: i32) -> std::result::Result<Option<ShellWindow>, ShellError> {
        if index >= self.count {
            return Ok(None);
        }
        match windows_api::shell_windows_item(&self.shell_windows, index) {
            Ok(dispatch) => Ok(Some(ShellWindow(dispatch))),
            Err(e) if is_out_of_range(e.code()) => {
                debug!("shell window list shrank to {} item(s)", index);
                Ok(None)
            }
            Err(e) => Err(shell_error("IShellWindows::Item", &e)),
        }
    }

    fn upper_bound(&self) -> Option<i32> {
        Some(self.count)
    }
}

/// Creates fresh COM objects for every discovery pass.
pub struct ComShell;

impl ShellProvider for ComShell {
    type Desktop = VirtualDesktops;
    type Windows = ShellWindowList;

    fn desktop_membership(&self) -> std::result::Result<VirtualDesktops, ShellError> {
        match windows_api::co_create_instance(&VirtualDesktopManager, None, CLSCTX_ALL) {
            Ok(manager) => Ok(VirtualDesktops(manager)),
            Err(e) => Err(shell_error("CoCreateInstance(VirtualDesktopManager)", &e)),
        }
    }

    fn shell_windows(&self) -> std::result::Result<ShellWindowList, ShellError> {
        let shell_windows: IShellWindows =
            windows_api::co_create_instance(&ShellWindows, None, CLSCTX_ALL)
                .map_err(|e| shell_error("CoCreateInstance(ShellWindows)", &e))?;
        let count = windows_api::shell_windows_count(&shell_windows)
            .map_err(|e| shell_error("IShellWindows::Count", &e))?;
        return Ok(ShellWindowList {
            shell_windows,
            count,
        });
    }
}
