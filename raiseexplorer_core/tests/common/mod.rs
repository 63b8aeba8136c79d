#![allow(dead_code)]

use raiseexplorer_core::{event_loop::*, restack::*, shell::*, WindowHandle};
use std::{
    cell::{Cell, RefCell},
    collections::{HashSet, VecDeque},
    rc::Rc,
    time::Duration,
};

pub const E_NOINTERFACE: i32 = 0x80004002u32 as i32;
pub const E_FAIL: i32 = 0x80004005u32 as i32;

#[derive(Clone, Debug)]
pub enum Entry {
    Browser(isize),
    BrowserWithoutHandle,
    NotABrowser,
    Broken,
}

/// Counts live capability objects so tests can check nothing outlives a pass.
#[derive(Clone, Default)]
pub struct Tracker(Rc<Cell<i32>>);

impl Tracker {
    fn acquire(&self) -> Tracked {
        self.0.set(self.0.get() + 1);
        Tracked(self.0.clone())
    }

    pub fn live(&self) -> i32 {
        self.0.get()
    }
}

pub struct Tracked(Rc<Cell<i32>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

pub struct FakeItem {
    entry: Entry,
    _tracked: Tracked,
    tracker: Tracker,
}

pub struct FakeBrowser {
    entry: Entry,
    _tracked: Tracked,
}

impl BrowserApp for FakeBrowser {
    fn window_handle(&self) -> Result<WindowHandle, ShellError> {
        match self.entry {
            Entry::Browser(h) => Ok(WindowHandle(h)),
            _ => Err(ShellError::new("IWebBrowserApp::HWND", E_FAIL)),
        }
    }
}

impl ShellItem for FakeItem {
    type Browser = FakeBrowser;

    fn as_browser(&self) -> Result<FakeBrowser, ShellError> {
        match self.entry {
            Entry::Browser(_) | Entry::BrowserWithoutHandle => Ok(FakeBrowser {
                entry: self.entry.clone(),
                _tracked: self.tracker.acquire(),
            }),
            _ => Err(ShellError::new("QueryInterface", E_NOINTERFACE)),
        }
    }
}

pub struct FakeWindows {
    entries: Vec<Entry>,
    _tracked: Tracked,
    tracker: Tracker,
}

impl ShellWindowEnumeration for FakeWindows {
    type Item = FakeItem;

    fn item(&self, index: i32) -> Result<Option<FakeItem>, ShellError> {
        match self.entries.get(index as usize) {
            None => Ok(None),
            Some(Entry::Broken) => Err(ShellError::new("IShellWindows::Item", E_FAIL)),
            Some(entry) => Ok(Some(FakeItem {
                entry: entry.clone(),
                _tracked: self.tracker.acquire(),
                tracker: self.tracker.clone(),
            })),
        }
    }
}

pub struct FakeDesktop {
    current: HashSet<isize>,
    failing: HashSet<isize>,
    _tracked: Tracked,
}

impl DesktopMembership for FakeDesktop {
    fn is_on_current_desktop(&self, hwnd: WindowHandle) -> Result<bool, ShellError> {
        if self.failing.contains(&hwnd.0) {
            return Err(ShellError::new("IsWindowOnCurrentVirtualDesktop", E_FAIL));
        }
        Ok(self.current.contains(&hwnd.0))
    }
}

#[derive(Default)]
pub struct FakeShell {
    pub entries: Vec<Entry>,
    /// `None` makes the desktop query unavailable.
    pub current_desktop: Option<HashSet<isize>>,
    pub failing_queries: HashSet<isize>,
    pub windows_unavailable: bool,
    pub tracker: Tracker,
    pub desktop_requests: Cell<usize>,
}

impl FakeShell {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn on_current_desktop(mut self, handles: &[isize]) -> Self {
        self.current_desktop = Some(handles.iter().copied().collect());
        self
    }
}

impl ShellProvider for FakeShell {
    type Desktop = FakeDesktop;
    type Windows = FakeWindows;

    fn desktop_membership(&self) -> Result<FakeDesktop, ShellError> {
        self.desktop_requests.set(self.desktop_requests.get() + 1);
        match &self.current_desktop {
            Some(current) => Ok(FakeDesktop {
                current: current.clone(),
                failing: self.failing_queries.clone(),
                _tracked: self.tracker.acquire(),
            }),
            None => Err(ShellError::new("CoCreateInstance(VirtualDesktopManager)", E_FAIL)),
        }
    }

    fn shell_windows(&self) -> Result<FakeWindows, ShellError> {
        if self.windows_unavailable {
            return Err(ShellError::new("CoCreateInstance(ShellWindows)", E_FAIL));
        }
        Ok(FakeWindows {
            entries: self.entries.clone(),
            _tracked: self.tracker.acquire(),
            tracker: self.tracker.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Restore(isize),
    Foreground(isize),
    Pause(Duration),
}

#[derive(Default)]
pub struct FakeControl {
    pub minimized: RefCell<HashSet<isize>>,
    pub refused: HashSet<isize>,
    pub closed: HashSet<isize>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeControl {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn foregrounded(&self) -> Vec<isize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Foreground(h) => Some(*h),
                _ => None,
            })
            .collect()
    }
}

impl WindowControl for FakeControl {
    fn is_window(&self, hwnd: WindowHandle) -> bool {
        !self.closed.contains(&hwnd.0)
    }

    fn is_minimized(&self, hwnd: WindowHandle) -> bool {
        self.minimized.borrow().contains(&hwnd.0)
    }

    fn restore(&self, hwnd: WindowHandle) {
        self.minimized.borrow_mut().remove(&hwnd.0);
        self.calls.borrow_mut().push(Call::Restore(hwnd.0));
    }

    fn set_foreground(&self, hwnd: WindowHandle) -> bool {
        self.calls.borrow_mut().push(Call::Foreground(hwnd.0));
        !self.refused.contains(&hwnd.0)
    }

    fn pause(&self, duration: Duration) {
        self.calls.borrow_mut().push(Call::Pause(duration));
    }
}

/// Replays a fixed script of messages, then reports shutdown.
pub struct ScriptedMessages {
    pub remaining: VecDeque<Message>,
    pub delivered: usize,
}

impl ScriptedMessages {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            remaining: messages.into(),
            delivered: 0,
        }
    }
}

impl MessageSource for ScriptedMessages {
    fn next_message(&mut self) -> Option<Message> {
        let message = self.remaining.pop_front()?;
        self.delivered += 1;
        Some(message)
    }
}

pub fn handles(raw: &[isize]) -> Vec<WindowHandle> {
    raw.iter().map(|h| WindowHandle(*h)).collect()
}
