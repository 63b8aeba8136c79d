use crate::{
    com::{ComApartment, ComShell},
    error::Error,
    hotkey::{HotkeyRegistration, ThreadMessages},
    messages::hotkey_identifiers,
    settings::Settings,
    tray_menu,
    window_control::Win32Windows,
};
use log::{info, warn};
use raiseexplorer_core::event_loop::Raiser;

/// Registers the hotkey and serves it until the message queue closes.
///
/// Resources are released in reverse order of acquisition on every return
/// path: tray icon, hotkey, then COM.
pub fn run(settings: &Settings) -> Result<(), Error> {
    let _com = ComApartment::initialize().map_err(Error::ComInit)?;
    let registration =
        HotkeyRegistration::register(hotkey_identifiers::RAISE_EXPLORER, settings.hotkey)
            .map_err(|source| Error::RegisterHotkey {
                hotkey: settings.hotkey,
                source,
            })?;
    let _tray_icon = if settings.show_tray_icon {
        match tray_menu::create(&settings.hotkey) {
            Ok(tray_icon) => {
                tray_menu::set_menu_event_handler();
                Some(tray_icon)
            }
            Err(e) => {
                warn!("continuing without tray icon: {}", e);
                None
            }
        }
    } else {
        None
    };
    let raiser = Raiser::new(
        ComShell,
        Win32Windows,
        settings.filter_by_virtual_desktop,
        settings.restack_options.clone(),
    );
    let passes = raiser.run(&mut ThreadMessages, registration.id())?;
    info!("shutting down after {} pass(es)", passes);
    return Ok(());
}
