use crate::windows_api;
use log::{error, info, warn};
use raiseexplorer_core::{
    event_loop::{Message, MessageSource},
    hotkey::{Hotkey, Modifiers},
};
use windows::{
    core::Result,
    Win32::UI::{Input::KeyboardAndMouse::*, WindowsAndMessaging::*},
};

fn to_hot_key_modifiers(modifiers: &Modifiers) -> HOT_KEY_MODIFIERS {
    let mut ret = MOD_NOREPEAT;
    if modifiers.ctrl {
        ret = ret | MOD_CONTROL;
    }
    if modifiers.shift {
        ret = ret | MOD_SHIFT;
    }
    if modifiers.alt {
        ret = ret | MOD_ALT;
    }
    if modifiers.win {
        ret = ret | MOD_WIN;
    }
    return ret;
}

/// A thread-wide hotkey, unregistered on drop.
pub struct HotkeyRegistration {
    id: i32,
    hotkey: Hotkey,
}

impl HotkeyRegistration {
    pub fn register(id: i32, hotkey: Hotkey) -> Result<Self> {
        windows_api::register_hot_key(
            None,
            id,
            to_hot_key_modifiers(&hotkey.modifiers),
            hotkey.key.virtual_key(),
        )?;
        info!("registered hotkey {}", hotkey);
        return Ok(Self { id, hotkey });
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Drop for HotkeyRegistration {
    fn drop(&mut self) {
        match windows_api::unregister_hot_key(None, self.id) {
            Ok(()) => info!("unregistered hotkey {}", self.hotkey),
            Err(e) => warn!("failed to unregister hotkey {}: {}", self.hotkey, e),
        }
    }
}

/// The calling thread's message queue.
///
/// Anything that is not a hotkey is dispatched before being reported, so
/// windows owned by this thread (the tray icon) keep working.
pub struct ThreadMessages;

impl MessageSource for ThreadMessages {
    fn next_message(&mut self) -> Option<Message> {
        let mut msg = MSG::default();
        match windows_api::get_message(&mut msg, None, 0, 0).0 {
            0 => return None,
            -1 => {
                error!("GetMessage failed: {:?}", windows_api::get_last_error());
                return None;
            }
            _ => (),
        }
        if msg.message == WM_HOTKEY {
            return Some(Message::Hotkey(msg.wParam.0 as i32));
        }
        let _translate_message = windows_api::translate_message(&msg);
        windows_api::dispatch_message(&msg);
        return Some(Message::Other);
    }
}
