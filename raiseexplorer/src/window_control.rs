use crate::windows_api;
use raiseexplorer_core::{restack::WindowControl, WindowHandle};
use windows::Win32::UI::WindowsAndMessaging::SW_RESTORE;

pub struct Win32Windows;

impl WindowControl for Win32Windows {
    fn is_window(&self, hwnd: WindowHandle) -> bool {
        windows_api::is_window(Some(windows_api::hwnd(hwnd))).as_bool()
    }

    fn is_minimized(&self, hwnd: WindowHandle) -> bool {
        windows_api::is_iconic(windows_api::hwnd(hwnd)).as_bool()
    }

    fn restore(&self, hwnd: WindowHandle) {
        let _was_visible = windows_api::show_window(windows_api::hwnd(hwnd), SW_RESTORE);
    }

    fn set_foreground(&self, hwnd: WindowHandle) -> bool {
        windows_api::set_foreground_window(windows_api::hwnd(hwnd)).as_bool()
    }
}
