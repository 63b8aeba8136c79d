use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub win: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.shift || self.alt || self.win)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Stored upper case.
    Letter(char),
    Digit(char),
    /// `F1` to `F24`.
    Function(u8),
}

impl Key {
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphabetic() {
                return Some(Self::Letter(c.to_ascii_uppercase()));
            }
            if c.is_ascii_digit() {
                return Some(Self::Digit(c));
            }
            return None;
        }
        let n = token
            .strip_prefix(&['f', 'F'][..])
            .and_then(|rest| rest.parse::<u8>().ok())?;
        if (1..=24).contains(&n) {
            return Some(Self::Function(n));
        } else {
            return None;
        }
    }

    /// The Win32 virtual-key code.
    pub fn virtual_key(&self) -> u32 {
        match self {
            Self::Letter(c) | Self::Digit(c) => *c as u32,
            Self::Function(n) => 0x70 + n.saturating_sub(1) as u32,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) | Self::Digit(c) => write!(f, "{}", c),
            Self::Function(n) => write!(f, "F{}", n),
        }
    }
}

/// A global keyboard chord: at least one modifier plus one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Default for Hotkey {
    fn default() -> Self {
        Self {
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
                alt: false,
                win: false,
            },
            key: Key::Letter('E'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyParseError {
    #[error("hotkey is empty")]
    Empty,
    #[error("unknown key or modifier \"{0}\"")]
    UnknownToken(String),
    #[error("hotkey has no key, only modifiers")]
    MissingKey,
    #[error("hotkey has more than one key")]
    MultipleKeys,
    #[error("hotkey needs at least one of ctrl, shift, alt or win")]
    NoModifier,
    #[error("modifier \"{0}\" appears twice")]
    DuplicateModifier(String),
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(HotkeyParseError::Empty);
        }
        let mut modifiers = Modifiers::default();
        let mut key = None;
        for token in trimmed.split('+').map(str::trim) {
            let lowercase = token.to_ascii_lowercase();
            let flag = match lowercase.as_str() {
                "ctrl" | "control" => &mut modifiers.ctrl,
                "shift" => &mut modifiers.shift,
                "alt" => &mut modifiers.alt,
                "win" | "super" | "meta" => &mut modifiers.win,
                _ => {
                    let parsed = Key::parse(token)
                        .ok_or_else(|| HotkeyParseError::UnknownToken(token.to_owned()))?;
                    if key.replace(parsed).is_some() {
                        return Err(HotkeyParseError::MultipleKeys);
                    }
                    continue;
                }
            };
            if *flag {
                return Err(HotkeyParseError::DuplicateModifier(lowercase));
            }
            *flag = true;
        }
        let key = key.ok_or(HotkeyParseError::MissingKey)?;
        if modifiers.is_empty() {
            return Err(HotkeyParseError::NoModifier);
        }
        return Ok(Self { modifiers, key });
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.modifiers.ctrl, "Ctrl"),
            (self.modifiers.shift, "Shift"),
            (self.modifiers.alt, "Alt"),
            (self.modifiers.win, "Win"),
        ];
        for (_, name) in names.iter().filter(|(set, _)| *set) {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.key)
    }
}
