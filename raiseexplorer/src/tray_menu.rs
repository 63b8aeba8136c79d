use crate::{messages, util, windows_api};
use raiseexplorer_core::hotkey::Hotkey;
use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItemBuilder},
    TrayIcon, TrayIconBuilder,
};

#[derive(Debug, thiserror::Error)]
pub enum TrayError {
    #[error("could not build tray menu: {0}")]
    Menu(#[from] tray_icon::menu::Error),
    #[error("could not create tray icon: {0}")]
    Icon(#[from] tray_icon::Error),
}

pub fn create(hotkey: &Hotkey) -> Result<TrayIcon, TrayError> {
    let menu = Menu::new();
    let quit_item = MenuItemBuilder::new()
        .id(MenuId::new(messages::tray_menu_ids::QUIT))
        .text("Quit")
        .enabled(true)
        .build();
    menu.append(&quit_item)?;
    let tooltip = format!(
        "{} v{} ({})",
        util::APP_TITLE,
        env!("CARGO_PKG_VERSION"),
        hotkey
    );
    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(tooltip)
        .build()?;
    return Ok(tray_icon);
}

/// "Quit" posts `WM_QUIT`, which ends the hotkey wait on this thread.
pub fn set_menu_event_handler() {
    MenuEvent::set_event_handler(Some(|event: MenuEvent| match event.id().as_ref() {
        messages::tray_menu_ids::QUIT => {
            log::info!("quit requested from tray menu");
            windows_api::post_quit_message(0);
        }
        _ => return,
    }));
}
