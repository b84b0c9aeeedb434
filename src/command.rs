//! Commands for side effects.
//!
//! Commands are the only way to perform side effects in the update cycle.
//! They are lazy: an update function returns a [`Cmd`] describing the work,
//! and the program executes it on a worker thread, feeding any produced
//! message back into the update loop.

use std::time::{Duration, Instant};

/// A lazy side effect that may produce a message of type `M`.
pub enum Cmd<M> {
    /// Run a closure on a worker thread and feed its message back.
    Task(Box<dyn FnOnce() -> M + Send + 'static>),
    /// Run several commands concurrently, with no ordering guarantees.
    Batch(Vec<Cmd<M>>),
    /// Stop the program and hand the final model back to the caller.
    Quit,
}

impl<M> Cmd<M> {
    /// Creates a command from a closure.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(Box::new(f))
    }

    /// Executes the command synchronously and collects every message it
    /// produces. Blocks for the full duration of delayed tasks; intended for
    /// tests and other out-of-loop callers.
    pub fn execute(self) -> Vec<M> {
        match self {
            Self::Task(task) => vec![task()],
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::execute).collect(),
            Self::Quit => Vec::new(),
        }
    }

    /// Returns whether this command asks the program to stop.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl<M> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(_) => f.write_str("Cmd::Task"),
            Self::Batch(cmds) => write!(f, "Cmd::Batch({})", cmds.len()),
            Self::Quit => f.write_str("Cmd::Quit"),
        }
    }
}

/// Batches multiple optional commands into one.
///
/// `None` entries are dropped; zero remaining commands yield `None` and a
/// single remaining command is returned as-is.
pub fn batch<M>(cmds: Vec<Option<Cmd<M>>>) -> Option<Cmd<M>> {
    let mut valid: Vec<Cmd<M>> = cmds.into_iter().flatten().collect();
    match valid.len() {
        0 => None,
        1 => valid.pop(),
        _ => Some(Cmd::Batch(valid)),
    }
}

/// A command that produces a message after a delay.
///
/// The closure receives the instant at which the delay elapsed. The delay
/// runs for the full duration from when the command is executed; it is not
/// cancelable, so staleness has to be resolved by the receiving model.
pub fn tick<M, F>(duration: Duration, f: F) -> Cmd<M>
where
    F: FnOnce(Instant) -> M + Send + 'static,
{
    Cmd::task(move || {
        std::thread::sleep(duration);
        f(Instant::now())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_produces_message() {
        let cmd = Cmd::task(|| 42i32);
        assert_eq!(cmd.execute(), vec![42]);
    }

    #[test]
    fn test_quit_produces_nothing() {
        let cmd: Cmd<i32> = Cmd::Quit;
        assert!(cmd.is_quit());
        assert!(cmd.execute().is_empty());
    }

    #[test]
    fn test_batch_empty() {
        assert!(batch::<i32>(vec![]).is_none());
        assert!(batch::<i32>(vec![None, None]).is_none());
    }

    #[test]
    fn test_batch_single_passthrough() {
        let cmd = batch(vec![Some(Cmd::task(|| 1i32))]).unwrap();
        assert!(matches!(cmd, Cmd::Task(_)));
    }

    #[test]
    fn test_batch_collects_all_messages() {
        let cmd = batch(vec![
            Some(Cmd::task(|| 1i32)),
            None,
            Some(Cmd::task(|| 2i32)),
        ])
        .unwrap();
        let mut msgs = cmd.execute();
        msgs.sort_unstable();
        assert_eq!(msgs, vec![1, 2]);
    }

    #[test]
    fn test_tick_delivers_after_delay() {
        let start = Instant::now();
        let cmd = tick(Duration::from_millis(5), |fired| fired);
        let msgs = cmd.execute();
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].duration_since(start) >= Duration::from_millis(5));
    }
}
