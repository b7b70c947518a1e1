//! # Answer Input Module
//!
//! Reads stdin on a dedicated thread and forwards each line over a crossbeam
//! channel, so the drill loop can wait for an answer with a deadline.

use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::io::BufRead;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// What happened while waiting for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    /// The answer window closed first.
    TimedOut,
    /// Stdin reached end of file or failed.
    Closed,
}

/// Stdin reader thread management structure.
#[derive(Debug)]
pub struct InputWorker {
    lines: Receiver<String>,
    // The reader blocks on stdin and cannot be interrupted; it is detached on exit.
    _thread_handle: JoinHandle<()>,
}

impl InputWorker {
    /// Spawns the reader thread.
    pub fn spawn() -> std::io::Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let thread_handle = thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                log::debug!("stdin reader started");
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            log::warn!("error reading stdin: {e}");
                            break;
                        }
                    }
                }
                log::debug!("stdin reader finished");
            })?;
        Ok(Self {
            lines: rx,
            _thread_handle: thread_handle,
        })
    }

    /// Waits for the next line until `deadline`.
    pub fn next_line(&self, deadline: Instant) -> LineEvent {
        wait_for_line(&self.lines, deadline)
    }

    /// Drops lines typed after an answer window closed, so they are not
    /// graded against the next question.
    pub fn discard_pending(&self) {
        let dropped = drain_pending(&self.lines);
        if dropped > 0 {
            log::debug!("discarded {dropped} late input lines");
        }
    }
}

fn wait_for_line(lines: &Receiver<String>, deadline: Instant) -> LineEvent {
    let remaining = deadline.saturating_duration_since(Instant::now());
    match lines.recv_timeout(remaining) {
        Ok(line) => LineEvent::Line(line),
        Err(RecvTimeoutError::Timeout) => LineEvent::TimedOut,
        Err(RecvTimeoutError::Disconnected) => LineEvent::Closed,
    }
}

fn drain_pending(lines: &Receiver<String>) -> usize {
    lines.try_iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn buffered_line_is_returned() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send("#C bD".to_string()).unwrap();
        let deadline = Instant::now() + Duration::from_millis(50);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::Line("#C bD".into()));
    }

    #[test]
    fn deadline_times_out() {
        let (_tx, rx) = crossbeam_channel::unbounded::<String>();
        let deadline = Instant::now() + Duration::from_millis(10);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::TimedOut);
    }

    #[test]
    fn dropped_sender_is_closed() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        drop(tx);
        let deadline = Instant::now() + Duration::from_secs(1);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::Closed);
    }

    #[test]
    fn late_lines_are_not_read_by_the_next_wait() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let deadline = Instant::now() + Duration::from_millis(10);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::TimedOut);

        // Typed after the window closed.
        tx.send("bD".to_string()).unwrap();
        tx.send("bbE".to_string()).unwrap();
        assert_eq!(drain_pending(&rx), 2);

        tx.send("#C bD".to_string()).unwrap();
        let deadline = Instant::now() + Duration::from_millis(50);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::Line("#C bD".into()));
    }

    #[test]
    fn draining_an_empty_channel_keeps_it_open() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        assert_eq!(drain_pending(&rx), 0);
        tx.send("D XC".to_string()).unwrap();
        let deadline = Instant::now() + Duration::from_millis(50);
        assert_eq!(wait_for_line(&rx, deadline), LineEvent::Line("D XC".into()));
    }
}
