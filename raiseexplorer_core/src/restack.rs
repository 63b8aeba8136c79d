use crate::WindowHandle;
use log::{debug, warn};
use std::time::Duration;

/// How long to wait after each raise. Without the pause only the last
/// foreground request takes effect.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(10);

/// What to do when the OS refuses a foreground request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the pass and hand the error back to the caller.
    Exit,
    /// Log it and carry on with the next window.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestackOptions {
    pub settle_delay: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for RestackOptions {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            failure_policy: FailurePolicy::Exit,
        }
    }
}

/// The window operations a restack pass performs.
pub trait WindowControl {
    /// Whether `hwnd` still refers to an existing window.
    fn is_window(&self, hwnd: WindowHandle) -> bool;

    fn is_minimized(&self, hwnd: WindowHandle) -> bool;

    fn restore(&self, hwnd: WindowHandle);

    /// Returns `false` if the OS refused the request.
    fn set_foreground(&self, hwnd: WindowHandle) -> bool;

    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestackReport {
    pub raised: usize,
    pub stale: usize,
    pub failed: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Failed to bring window {hwnd} to front (window {position} of {total}).")]
pub struct RestackError {
    pub hwnd: WindowHandle,
    /// 1-based position of the failing window in the pass.
    pub position: usize,
    pub total: usize,
    /// Windows raised before the failure.
    pub raised: usize,
}

enum Outcome {
    Raised,
    Stale,
    Refused,
}

/// Raises `windows` in order, restoring minimized ones first.
pub fn raise_windows<C: WindowControl>(
    control: &C,
    windows: &[WindowHandle],
    options: &RestackOptions,
) -> Result<RestackReport, RestackError> {
    let mut report = RestackReport::default();
    for (i, hwnd) in windows.iter().enumerate() {
        match bring_to_front(control, *hwnd) {
            Outcome::Raised => report.raised += 1,
            Outcome::Stale => {
                debug!("window {} closed before it could be raised", hwnd);
                report.stale += 1;
                continue;
            }
            Outcome::Refused => match options.failure_policy {
                FailurePolicy::Exit => {
                    return Err(RestackError {
                        hwnd: *hwnd,
                        position: i + 1,
                        total: windows.len(),
                        raised: report.raised,
                    });
                }
                FailurePolicy::Continue => {
                    warn!("failed to bring window {} to front, continuing", hwnd);
                    report.failed += 1;
                }
            },
        }
        control.pause(options.settle_delay);
    }
    return Ok(report);
}

fn bring_to_front<C: WindowControl>(control: &C, hwnd: WindowHandle) -> Outcome {
    if !control.is_window(hwnd) {
        return Outcome::Stale;
    }
    if control.is_minimized(hwnd) {
        control.restore(hwnd);
    }
    if control.set_foreground(hwnd) {
        return Outcome::Raised;
    } else {
        return Outcome::Refused;
    }
}
