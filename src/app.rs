//! The composed tally application model.
//!
//! [`TallyApp`] wires the counter state machine, the reset confirmation, the
//! key-binding gate, and the styles into a single model for the program
//! loop. All state mutation goes through [`Model::update`]; the view is a
//! pure function of the model.

use tracing::{debug, warn};

use crate::command::Cmd;
use crate::confirm::{self, Confirmation, TimeoutMsg};
use crate::counter::{Counter, Status};
use crate::key::KeyMsg;
use crate::keymap::KeyMap;
use crate::program::Model;
use crate::style::Styles;

/// Messages driving the tally application.
#[derive(Debug, Clone)]
pub enum Msg {
    /// A key was pressed.
    Key(KeyMsg),
    /// A reset confirmation window elapsed.
    ConfirmationElapsed(TimeoutMsg),
}

impl From<KeyMsg> for Msg {
    fn from(key: KeyMsg) -> Self {
        Self::Key(key)
    }
}

/// The tally counter application.
pub struct TallyApp {
    counter: Counter,
    confirmation: Confirmation,
    keys: KeyMap,
    styles: Styles,
}

impl Default for TallyApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyApp {
    /// Creates an app with a counter at zero and the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_counter(Counter::new())
    }

    /// Creates an app around an already-configured counter.
    #[must_use]
    pub fn with_counter(counter: Counter) -> Self {
        let mut keys = KeyMap::default();
        keys.sync(counter.status(), counter.at_rest());
        Self {
            counter,
            confirmation: Confirmation::new(),
            keys,
            styles: Styles::default(),
        }
    }

    /// Replaces the confirmation model, e.g. to shorten the window in tests.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Returns the counter.
    #[must_use]
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Returns the confirmation state.
    #[must_use]
    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    /// Returns the key bindings.
    #[must_use]
    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd<Msg>> {
        if self.keys.quit.matches(key) {
            return Some(Cmd::Quit);
        }

        if self.keys.increment.matches(key) {
            match self.counter.increment() {
                Ok(value) => debug!(value, "tally incremented"),
                Err(err) => warn!(%err, "increment rejected"),
            }
            return None;
        }

        if self.keys.decrement.matches(key) {
            match self.counter.decrement() {
                Ok(value) => debug!(value, "tally decremented"),
                Err(err) => warn!(%err, "decrement rejected"),
            }
            return None;
        }

        if self.keys.reset.matches(key) {
            self.counter.reset();
            debug!("tally reset");
            return Some(self.confirmation.arm(Msg::ConfirmationElapsed));
        }

        None
    }

    fn controls(&self) -> String {
        let subtract = if self.keys.decrement.enabled() {
            self.styles.button_subtract.render("[ - ]")
        } else {
            self.styles.button_disabled.render("[ - ]")
        };
        let reset = if self.keys.reset.enabled() {
            self.styles.button_reset.render("[ Reset ]")
        } else {
            self.styles.button_disabled.render("[ Reset ]")
        };
        let add = if self.keys.increment.enabled() {
            self.styles.button_add.render("[ + ]")
        } else {
            self.styles.button_disabled.render("[ + ]")
        };
        format!("{subtract}  {reset}  {add}")
    }

    fn short_help(&self) -> String {
        let line = self
            .keys
            .help_entries()
            .iter()
            .map(|help| format!("{} {}", help.key, help.desc))
            .collect::<Vec<_>>()
            .join(" • ");
        self.styles.help.render(&line)
    }
}

impl Model for TallyApp {
    type Msg = Msg;

    fn init(&self) -> Option<Cmd<Msg>> {
        None
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd<Msg>> {
        let cmd = match msg {
            Msg::Key(key) => self.handle_key(&key),
            Msg::ConfirmationElapsed(timeout) => {
                self.confirmation.update(timeout);
                None
            }
        };
        self.keys
            .sync(self.counter.status(), self.counter.at_rest());
        cmd
    }

    fn view(&self) -> String {
        let title = self.styles.title.render("Tally Count");
        let status = self
            .styles
            .status
            .render(&format!("State: {}", self.counter.status()));

        let banner = if self.confirmation.visible() {
            self.styles
                .banner
                .render(&format!(" {} ", confirm::BANNER_TEXT))
        } else {
            String::new()
        };

        let value_style = match self.counter.status() {
            Status::AtMax => &self.styles.value_at_max,
            Status::AtMin => &self.styles.value_at_min,
            Status::Idle => &self.styles.value,
        };
        let value = value_style.render(&self.counter.value().to_string());

        format!(
            "\n  {title}\n  {status}\n\n  {banner}\n  {value}\n\n  {controls}\n\n  {help}\n",
            controls = self.controls(),
            help = self.short_help(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyType;

    fn key_char(ch: char) -> Msg {
        Msg::Key(KeyMsg::from_char(ch))
    }

    fn key_type(kt: KeyType) -> Msg {
        Msg::Key(KeyMsg::from_type(kt))
    }

    #[test]
    fn test_initial_state() {
        let app = TallyApp::new();
        assert_eq!(app.counter().value(), 0);
        assert_eq!(app.counter().status(), Status::Idle);
        assert!(!app.confirmation().visible());
        // Nothing to reset yet.
        assert!(!app.keys().reset.enabled());
    }

    #[test]
    fn test_increment_keys() {
        let mut app = TallyApp::new();
        app.update(key_char('+'));
        app.update(key_char('='));
        app.update(key_char('k'));
        app.update(key_type(KeyType::Up));
        assert_eq!(app.counter().value(), 4);
    }

    #[test]
    fn test_decrement_keys() {
        let mut app = TallyApp::new();
        app.update(key_char('-'));
        app.update(key_char('_'));
        app.update(key_char('j'));
        app.update(key_type(KeyType::Down));
        assert_eq!(app.counter().value(), -4);
    }

    #[test]
    fn test_increment_gated_at_ceiling() {
        let counter = Counter::with_config(3, -3, 3).unwrap();
        let mut app = TallyApp::with_counter(counter);
        assert!(!app.keys().increment.enabled());

        app.update(key_char('+'));
        assert_eq!(app.counter().value(), 3, "gated key must be a no-op");
        assert_eq!(app.counter().status(), Status::AtMax);
    }

    #[test]
    fn test_reset_arms_confirmation() {
        let counter = Counter::with_config(5, -30, 30).unwrap();
        let mut app = TallyApp::with_counter(counter);

        let cmd = app.update(key_char('r'));
        assert!(cmd.is_some());
        assert_eq!(app.counter().value(), 0);
        assert_eq!(app.counter().status(), Status::Idle);
        assert!(app.confirmation().visible());
    }

    #[test]
    fn test_reset_gated_at_rest() {
        let mut app = TallyApp::new();
        let cmd = app.update(key_char('r'));
        assert!(cmd.is_none());
        assert!(!app.confirmation().visible());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = TallyApp::new();
        let cmd = app.update(key_char('q'));
        assert!(matches!(cmd, Some(Cmd::Quit)));

        let mut app = TallyApp::new();
        let cmd = app.update(key_type(KeyType::Esc));
        assert!(matches!(cmd, Some(Cmd::Quit)));
    }

    #[test]
    fn test_view_contains_value_and_status() {
        let counter = Counter::with_config(12, -30, 30).unwrap();
        let app = TallyApp::with_counter(counter);
        let view = app.view();
        assert!(view.contains("Tally Count"));
        assert!(view.contains("12"));
        assert!(view.contains("State: Idle"));
    }

    #[test]
    fn test_view_shows_banner_while_visible() {
        let counter = Counter::with_config(5, -30, 30).unwrap();
        let mut app = TallyApp::with_counter(counter);
        assert!(!app.view().contains(confirm::BANNER_TEXT));

        app.update(key_char('r'));
        assert!(app.view().contains(confirm::BANNER_TEXT));
    }

    #[test]
    fn test_view_labels_boundary_states() {
        let counter = Counter::with_config(30, -30, 30).unwrap();
        let app = TallyApp::with_counter(counter);
        assert!(app.view().contains("State: Max reached"));

        let counter = Counter::with_config(-30, -30, 30).unwrap();
        let app = TallyApp::with_counter(counter);
        assert!(app.view().contains("State: Min reached"));
    }
}
