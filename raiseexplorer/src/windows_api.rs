use raiseexplorer_core::WindowHandle;
use windows::{
    core::*,
    Win32::{
        Foundation::*,
        System::Com::*,
        UI::{Input::KeyboardAndMouse::*, Shell::*, WindowsAndMessaging::*},
    },
};

pub fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut core::ffi::c_void)
}

pub fn co_initialize_ex(pvreserved: Option<*const core::ffi::c_void>, dwcoinit: COINIT) -> HRESULT {
    unsafe {
        return CoInitializeEx(pvreserved, dwcoinit);
    }
}

pub fn co_uninitialize() {
    unsafe {
        return CoUninitialize();
    }
}

pub fn co_create_instance<P1, T>(
    rclsid: *const GUID,
    punkouter: P1,
    dwclscontext: CLSCTX,
) -> Result<T>
where
    P1: Param<IUnknown>,
    T: Interface,
{
    unsafe {
        return CoCreateInstance(rclsid, punkouter, dwclscontext);
    }
}

pub fn is_window_on_current_virtual_desktop(
    i_virtual_desktop_manager: &IVirtualDesktopManager,
    toplevelwindow: HWND,
) -> Result<BOOL> {
    unsafe {
        return i_virtual_desktop_manager.IsWindowOnCurrentVirtualDesktop(toplevelwindow);
    }
}

pub fn shell_windows_count(i_shell_windows: &IShellWindows) -> Result<i32> {
    unsafe {
        return i_shell_windows.Count();
    }
}

pub fn shell_windows_item(i_shell_windows: &IShellWindows, index: i32) -> Result<IDispatch> {
    unsafe {
        return i_shell_windows.Item(&VARIANT::from(index));
    }
}

pub fn web_browser_app_hwnd(i_web_browser_app: &IWebBrowserApp) -> Result<isize> {
    unsafe {
        return i_web_browser_app.HWND().map(|handle| handle.0);
    }
}

pub fn register_hot_key(
    hwnd: Option<HWND>,
    id: i32,
    fsmodifiers: HOT_KEY_MODIFIERS,
    vk: u32,
) -> Result<()> {
    unsafe {
        return RegisterHotKey(hwnd, id, fsmodifiers, vk);
    }
}

pub fn unregister_hot_key(hwnd: Option<HWND>, id: i32) -> Result<()> {
    unsafe {
        return UnregisterHotKey(hwnd, id);
    }
}

pub fn get_message(
    lpmsg: *mut MSG,
    hwnd: Option<HWND>,
    wmsgfiltermin: u32,
    wmsgfiltermax: u32,
) -> BOOL {
    unsafe {
        return GetMessageW(lpmsg, hwnd, wmsgfiltermin, wmsgfiltermax);
    }
}

pub fn translate_message(lpmsg: *const MSG) -> BOOL {
    unsafe {
        return TranslateMessage(lpmsg);
    }
}

pub fn dispatch_message(lpmsg: *const MSG) -> LRESULT {
    unsafe {
        return DispatchMessageW(lpmsg);
    }
}

pub fn post_quit_message(nexitcode: i32) {
    unsafe {
        return PostQuitMessage(nexitcode);
    }
}

pub fn get_last_error() -> WIN32_ERROR {
    unsafe {
        return GetLastError();
    }
}

pub fn is_window(hwnd: Option<HWND>) -> BOOL {
    unsafe {
        return IsWindow(hwnd);
    }
}

pub fn is_iconic(hwnd: HWND) -> BOOL {
    unsafe {
        return IsIconic(hwnd);
    }
}

pub fn show_window(hwnd: HWND, ncmdshow: SHOW_WINDOW_CMD) -> BOOL {
    unsafe {
        return ShowWindow(hwnd, ncmdshow);
    }
}

pub fn set_foreground_window(hwnd: HWND) -> BOOL {
    unsafe {
        return SetForegroundWindow(hwnd);
    }
}

pub fn message_box(text: &str, caption: &str, utype: MESSAGEBOX_STYLE) -> MESSAGEBOX_RESULT {
    let text = HSTRING::from(text);
    let caption = HSTRING::from(caption);
    unsafe {
        return MessageBoxW(None, PCWSTR(text.as_ptr()), PCWSTR(caption.as_ptr()), utype);
    }
}
