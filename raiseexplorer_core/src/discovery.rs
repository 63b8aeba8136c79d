use crate::{shell::*, WindowHandle};
use log::{debug, warn};

/// Collects every Explorer window on the current virtual desktop, in the
/// order the shell enumerates them.
///
/// Never fails. Anything that goes wrong only shrinks the result. With
/// `filter_by_desktop` off, or when the desktop query cannot be created,
/// windows on every desktop are returned.
pub fn find_explorer_windows<P: ShellProvider>(
    provider: &P,
    filter_by_desktop: bool,
) -> Vec<WindowHandle> {
    let desktop = if filter_by_desktop {
        match provider.desktop_membership() {
            Ok(val) => Some(val),
            Err(e) => {
                warn!("virtual desktop query unavailable, not filtering by desktop: {}", e);
                None
            }
        }
    } else {
        None
    };
    let shell_windows = match provider.shell_windows() {
        Ok(val) => val,
        Err(e) => {
            warn!("shell window enumeration unavailable: {}", e);
            return Vec::new();
        }
    };
    return collect_windows(&shell_windows, desktop.as_ref());
}

pub fn collect_windows<E, D>(shell_windows: &E, desktop: Option<&D>) -> Vec<WindowHandle>
where
    E: ShellWindowEnumeration,
    D: DesktopMembership,
{
    let mut ret = Vec::new();
    let end = shell_windows.upper_bound().unwrap_or(i32::MAX);
    for index in 0..end {
        let item = match shell_windows.item(index) {
            Ok(Some(val)) => val,
            Ok(None) => break,
            Err(e) => {
                debug!("skipping shell window {}: {}", index, e);
                continue;
            }
        };
        let browser = match item.as_browser() {
            Ok(val) => val,
            Err(_) => continue,
        };
        let hwnd = match browser.window_handle() {
            Ok(val) => val,
            Err(e) => {
                debug!("skipping browser window without a handle: {}", e);
                continue;
            }
        };
        if is_on_current_desktop(desktop, hwnd) {
            ret.push(hwnd);
        }
    }
    return ret;
}

fn is_on_current_desktop<D: DesktopMembership>(desktop: Option<&D>, hwnd: WindowHandle) -> bool {
    let desktop = match desktop {
        Some(val) => val,
        None => return true,
    };
    match desktop.is_on_current_desktop(hwnd) {
        Ok(on_desktop) => on_desktop,
        Err(e) => {
            debug!("excluding window {}: {}", hwnd, e);
            false
        }
    }
}
