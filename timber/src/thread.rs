use std::thread::{self, ThreadId};

use crate::error::TreeFellerError;

/// The thread the server dispatches block events on. Everything that touches the world
/// has to run there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerThread(ThreadId);

impl ServerThread {
    /// Captures the calling thread as the server thread.
    #[must_use]
    pub fn current() -> Self {
        Self(thread::current().id())
    }

    pub fn ensure_current(&self) -> Result<(), TreeFellerError> {
        let actual = thread::current().id();
        if actual == self.0 {
            Ok(())
        } else {
            Err(TreeFellerError::WrongThread {
                expected: self.0,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServerThread;
    use crate::error::TreeFellerError;
    use std::thread;

    #[test]
    fn same_thread_passes() {
        let server_thread = ServerThread::current();
        assert_eq!(server_thread.ensure_current(), Ok(()));
    }

    #[test]
    fn other_thread_fails() {
        let server_thread = ServerThread::current();
        let expected = thread::current().id();
        let result = thread::spawn(move || server_thread.ensure_current())
            .join()
            .unwrap();
        assert!(matches!(
            result,
            Err(TreeFellerError::WrongThread { expected: e, actual }) if e == expected && actual != expected
        ));
    }
}
