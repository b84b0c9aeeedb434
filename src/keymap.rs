//! Key bindings and the control-layer gate.
//!
//! Every action is a [`Binding`]: a set of keys, help text, and an enabled
//! flag. Disabled bindings never match, which is what keeps out-of-range
//! transitions unreachable from the keyboard: [`KeyMap::sync`] re-applies the
//! disable rules after every update.

use crate::counter::Status;
use crate::key::KeyMsg;

/// Help information for a key binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "+/↑").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A key binding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Returns the help information.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it is not explicitly disabled and has at
    /// least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the key matches this binding. Disabled bindings never
    /// match.
    #[must_use]
    pub fn matches(&self, key: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        let key = key.to_string();
        self.keys.iter().any(|k| *k == key)
    }
}

/// The tally widget's bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Step the tally up.
    pub increment: Binding,
    /// Step the tally down.
    pub decrement: Binding,
    /// Return the tally to zero.
    pub reset: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: Binding::new()
                .keys(&["+", "=", "up", "k"])
                .help("+/↑", "add one"),
            decrement: Binding::new()
                .keys(&["-", "_", "down", "j"])
                .help("-/↓", "take one"),
            reset: Binding::new().keys(&["r"]).help("r", "reset"),
            quit: Binding::new().keys(&["q", "esc"]).help("q", "quit"),
        }
    }
}

impl KeyMap {
    /// Re-applies the gate for the given counter state.
    ///
    /// Increment is unavailable at the ceiling, decrement at the floor, and
    /// reset while the tally already rests at zero.
    pub fn sync(&mut self, status: Status, at_rest: bool) {
        self.increment.enable(status != Status::AtMax);
        self.decrement.enable(status != Status::AtMin);
        self.reset.enable(!at_rest);
    }

    /// Returns help entries for the currently enabled bindings, in display
    /// order.
    #[must_use]
    pub fn help_entries(&self) -> Vec<&Help> {
        [&self.decrement, &self.reset, &self.increment, &self.quit]
            .into_iter()
            .filter(|binding| binding.enabled())
            .map(Binding::get_help)
            .collect()
    }
}
