pub const APP_TITLE: &str = "RaiseExplorer";

/// Appends `s` to `message`, leaving a blank line between entries.
pub fn add_to_message(message: &mut String, s: &str) {
    if !message.is_empty() {
        message.push_str("\n\n");
    }
    message.push_str(s);
}

#[cfg(windows)]
pub fn show_error_message(message: &str) {
    use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK};
    let _result = crate::windows_api::message_box(message, APP_TITLE, MB_ICONERROR | MB_OK);
}

#[cfg(windows)]
pub fn show_warning_message(message: &str) {
    use windows::Win32::UI::WindowsAndMessaging::{MB_ICONWARNING, MB_OK};
    let _result = crate::windows_api::message_box(message, APP_TITLE, MB_ICONWARNING | MB_OK);
}
