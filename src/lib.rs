#![forbid(unsafe_code)]

//! # Tally
//!
//! A bounded tally counter for the terminal, built as a small
//! model / update / view application:
//!
//! - **counter** - the bounded integer state machine with derived status
//! - **confirm** - the transient reset confirmation banner
//! - **keymap** - key bindings and the gate that disables unavailable actions
//! - **style** - styles used by the view
//! - **app** - the composed application model
//! - **command**, **key**, **program** - the runtime: lazy commands,
//!   keyboard messages, and the terminal event loop
//!
//! ## Example
//!
//! ```rust,ignore
//! use tally::{Program, TallyApp};
//!
//! let final_model = Program::new(TallyApp::new()).with_alt_screen().run()?;
//! println!("Final tally: {}", final_model.counter().value());
//! ```

pub mod app;
pub mod command;
pub mod confirm;
pub mod counter;
pub mod key;
pub mod keymap;
pub mod program;
pub mod style;

pub use app::{Msg, TallyApp};
pub use command::{Cmd, batch, tick};
pub use confirm::Confirmation;
pub use counter::{Counter, CounterError, Status};
pub use key::{KeyMsg, KeyType};
pub use keymap::{Binding, KeyMap};
pub use program::{Error, Model, Program};
