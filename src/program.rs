//! Program lifecycle and event loop.
//!
//! [`Program`] owns the terminal for the lifetime of a run: it enables raw
//! mode (optionally the alternate screen), polls crossterm for key events at
//! a frame-limited rate, feeds messages through the model's `update`, runs
//! returned commands on worker threads, and re-renders whenever a message
//! changed the model.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::command::Cmd;
use crate::key::{KeyMsg, KeyType, from_crossterm};

/// Errors that can occur while running a program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreen {
        /// Whether we were trying to enter or exit.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(#[source] io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(#[source] io::Error),
}

/// A specialized [`Result`] for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The model trait for this runtime.
///
/// `Msg` is the model's own message type; the event loop wraps key events
/// into it via `From<KeyMsg>`, and commands produce further values of it.
///
/// # Example
///
/// ```rust
/// use tally::command::Cmd;
/// use tally::key::KeyMsg;
/// use tally::program::Model;
///
/// struct Clicks {
///     count: u32,
/// }
///
/// impl Model for Clicks {
///     type Msg = KeyMsg;
///
///     fn init(&self) -> Option<Cmd<KeyMsg>> {
///         None
///     }
///
///     fn update(&mut self, _msg: KeyMsg) -> Option<Cmd<KeyMsg>> {
///         self.count += 1;
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("{} keys pressed", self.count)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// The message type driving this model.
    type Msg: From<KeyMsg> + Send + 'static;

    /// Initializes the model, returning an optional startup command.
    fn init(&self) -> Option<Cmd<Self::Msg>>;

    /// Processes a message and optionally returns a follow-up command.
    fn update(&mut self, msg: Self::Msg) -> Option<Cmd<Self::Msg>>;

    /// Renders the model as a string. Must be pure.
    fn view(&self) -> String;
}

/// Internal channel payload: either a model message or a stop request.
enum Signal<M> {
    Message(M),
    Quit,
}

/// The program runner.
///
/// # Example
///
/// ```rust,ignore
/// let final_model = Program::new(TallyApp::new()).with_alt_screen().run()?;
/// println!("Final tally: {}", final_model.counter().value());
/// ```
pub struct Program<M: Model> {
    model: M,
    alt_screen: bool,
    fps: u32,
}

impl<M: Model> Program<M> {
    /// Creates a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            alt_screen: false,
            fps: 60,
        }
    }

    /// Use the alternate screen buffer (full-screen mode).
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.alt_screen = true;
        self
    }

    /// Sets the target frames per second. Valid range is 1-120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.clamp(1, 120);
        self
    }

    /// Runs the program on stdout and returns the final model state.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when terminal setup, event polling, or rendering
    /// fails.
    pub fn run(self) -> Result<M> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Runs the program with a custom writer.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when terminal setup, event polling, or rendering
    /// fails.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let alt_screen = self.alt_screen;

        enable_raw_mode().map_err(|source| Error::RawMode {
            action: "enable",
            source,
        })?;

        if alt_screen
            && let Err(source) = execute!(writer, EnterAlternateScreen)
        {
            let _ = disable_raw_mode();
            return Err(Error::AltScreen {
                action: "enter",
                source,
            });
        }

        let setup = execute!(writer, Hide).map_err(Error::Io);
        let result = match setup {
            Ok(()) => self.event_loop(&mut writer),
            Err(err) => Err(err),
        };

        // Restore the terminal even when the loop failed.
        let _ = execute!(writer, Show);
        if alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Signal<M::Msg>>, Receiver<Signal<M::Msg>>) = mpsc::channel();

        if let Some(cmd) = self.model.init() {
            Self::dispatch(cmd, &tx);
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.fps));

        loop {
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        if let Some(key_msg) = from_crossterm(key_event.code, key_event.modifiers)
                        {
                            // Ctrl+C always exits, regardless of the model.
                            if key_msg.key_type == KeyType::CtrlC {
                                let _ = tx.send(Signal::Quit);
                            } else {
                                let _ = tx.send(Signal::Message(M::Msg::from(key_msg)));
                            }
                        }
                    }
                    Event::Resize(_, _) => {
                        // Force a full redraw at the new size.
                        last_view.clear();
                        self.render(writer, &mut last_view)?;
                    }
                    _ => {}
                }
            }

            let mut needs_render = false;
            while let Ok(signal) = rx.try_recv() {
                match signal {
                    Signal::Quit => return Ok(self.model),
                    Signal::Message(msg) => {
                        match self.model.update(msg) {
                            Some(Cmd::Quit) => return Ok(self.model),
                            Some(cmd) => Self::dispatch(cmd, &tx),
                            None => {}
                        }
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn dispatch(cmd: Cmd<M::Msg>, tx: &Sender<Signal<M::Msg>>) {
        match cmd {
            Cmd::Quit => {
                let _ = tx.send(Signal::Quit);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    Self::dispatch(cmd, tx);
                }
            }
            Cmd::Task(task) => {
                let tx = tx.clone();
                thread::spawn(move || {
                    let _ = tx.send(Signal::Message(task()));
                });
            }
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if the view hasn't changed.
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode needs explicit carriage returns.
        write!(writer, "{}", view.replace('\n', "\r\n")).map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}
