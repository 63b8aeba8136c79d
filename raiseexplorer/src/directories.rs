use directories::BaseDirs;
use std::path::PathBuf;

pub struct Directories {
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
}

impl Directories {
    /// `None` when the OS reports no home directory.
    pub fn new() -> Option<Self> {
        let base_dirs = BaseDirs::new()?;
        return Some(Self::in_dir(base_dirs.config_dir().join("raiseexplorer")));
    }

    pub fn in_dir(config_dir: PathBuf) -> Self {
        let settings_file = config_dir.join("settings.json");
        let log_file = config_dir.join("raiseexplorer.log");
        return Self {
            config_dir,
            settings_file,
            log_file,
        };
    }

    pub fn create_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)
    }
}
