//! The wait / discover / restack loop.

use crate::{discovery, restack::*, shell::ShellProvider};
use log::{debug, info};

/// What the thread message queue handed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// A hotkey fired; carries the id it was registered under.
    Hotkey(i32),
    Other,
}

pub trait MessageSource {
    /// Blocks for the next message. `None` means the queue is shutting down.
    fn next_message(&mut self) -> Option<Message>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    Triggered,
    Shutdown,
}

/// Blocks until the hotkey registered as `hotkey_id` fires, dropping every
/// other message on the way.
pub fn wait_for_hotkey<S: MessageSource>(source: &mut S, hotkey_id: i32) -> WaitOutcome {
    while let Some(message) = source.next_message() {
        match message {
            Message::Hotkey(id) if id == hotkey_id => return WaitOutcome::Triggered,
            Message::Hotkey(id) => debug!("ignoring hotkey {}", id),
            Message::Other => (),
        }
    }
    return WaitOutcome::Shutdown;
}

/// One discovery pass followed by one restack pass, per hotkey press.
pub struct Raiser<P, C> {
    provider: P,
    control: C,
    filter_by_desktop: bool,
    options: RestackOptions,
}

impl<P: ShellProvider, C: WindowControl> Raiser<P, C> {
    pub fn new(provider: P, control: C, filter_by_desktop: bool, options: RestackOptions) -> Self {
        Self {
            provider,
            control,
            filter_by_desktop,
            options,
        }
    }

    pub fn get_control(&self) -> &C {
        &self.control
    }

    pub fn raise_all(&self) -> Result<RestackReport, RestackError> {
        let windows = discovery::find_explorer_windows(&self.provider, self.filter_by_desktop);
        debug!("found {} explorer window(s)", windows.len());
        let report = raise_windows(&self.control, &windows, &self.options)?;
        info!(
            "raised {} window(s), {} closed, {} refused",
            report.raised, report.stale, report.failed
        );
        return Ok(report);
    }

    /// Runs until `source` shuts down or a raise fails under
    /// [`FailurePolicy::Exit`]. Returns the number of completed passes.
    pub fn run<S: MessageSource>(
        &self,
        source: &mut S,
        hotkey_id: i32,
    ) -> Result<usize, RestackError> {
        let mut passes = 0;
        loop {
            match wait_for_hotkey(source, hotkey_id) {
                WaitOutcome::Triggered => {
                    let _report = self.raise_all()?;
                    passes += 1;
                }
                WaitOutcome::Shutdown => {
                    info!("message queue closed after {} pass(es)", passes);
                    return Ok(passes);
                }
            }
        }
    }
}
