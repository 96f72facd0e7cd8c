use std::time::{Duration, Instant};

use crate::session::drill::Feedback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: Feedback,
    /// Identifies the submission that armed this flash.
    pub ticket: u64,
    pub clear_at: Instant,
}

/// Deferred, cancelable clear of the success/error highlight.
///
/// At most one flash is pending. Arming a new one replaces the old one, so
/// rapid submissions never leave stale clears behind.
#[derive(Clone, Debug)]
pub struct FlashTimer {
    success: Duration,
    error: Duration,
    next_ticket: u64,
    pending: Option<Flash>,
}

impl FlashTimer {
    pub fn new(success: Duration, error: Duration) -> Self {
        Self {
            success,
            error,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn arm(&mut self, kind: Feedback, now: Instant) -> u64 {
        let delay = match kind {
            Feedback::Correct => self.success,
            Feedback::Incorrect => self.error,
        };
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(Flash {
            kind,
            ticket,
            clear_at: now + delay,
        });
        ticket
    }

    pub fn active(&self) -> Option<Feedback> {
        self.pending.map(|f| f.kind)
    }

    /// Clear the flash if its delay has run out. Returns the ticket that expired.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some(flash) if now >= flash.clear_at => {
                self.pending = None;
                Some(flash.ticket)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for FlashTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(400))
    }
}
