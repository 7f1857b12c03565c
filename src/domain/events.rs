#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press normalised to a name: single characters as-is, plus
/// `enter` and `esc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    /// True for the given key pressed without Ctrl.
    pub fn is(&self, key: &str) -> bool {
        !self.ctrl && self.key == key
    }
}

#[cfg(test)]
mod tests {
    use super::KeyInput;

    #[test]
    fn is_ignores_ctrl_chords() {
        assert!(KeyInput::plain("d").is("d"));
        assert!(!KeyInput::new("d", true).is("d"));
        assert!(!KeyInput::plain("a").is("d"));
    }
}
