pub mod hotkey_identifiers {
    pub const RAISE_EXPLORER: i32 = 1;
}

pub mod tray_menu_ids {
    pub const QUIT: &str = "quit";
}
