// Waiting Room - bounded FIFO shared by arrivals and barbers

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// Outcome of offering an item to the waiting room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// Every seat is taken; the item is dropped
    Full,
    /// The room stopped admitting; the item is dropped
    Closed,
}

impl Admission {
    pub fn is_accepted(self) -> bool {
        matches!(self, Admission::Accepted)
    }
}

struct RoomState<T> {
    seats: VecDeque<T>,
    closed: bool,
}

/// Fixed-capacity FIFO queue.
///
/// Capacity check, ordering and the closed flag all live behind one lock, so
/// `try_enqueue`, `dequeue` and `close` are atomic with respect to each other.
/// Enqueueing never waits for space. Dequeueing waits until an item shows up
/// or the room is closed and drained.
pub struct WaitingRoom<T> {
    capacity: usize,
    state: Mutex<RoomState<T>>,
    changed: Notify,
}

impl<T> WaitingRoom<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(RoomState {
                seats: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            changed: Notify::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Offer an item without blocking
    pub fn try_enqueue(&self, item: T) -> Admission {
        {
            let mut state = self.lock();
            if state.closed {
                return Admission::Closed;
            }
            if state.seats.len() >= self.capacity {
                return Admission::Full;
            }
            state.seats.push_back(item);
        }
        self.changed.notify_one();
        Admission::Accepted
    }

    /// Take the oldest item, waiting while the room is open and empty.
    ///
    /// Returns `None` once the room is closed and drained; from then on every
    /// call returns `None` immediately.
    pub async fn dequeue(&self) -> Option<T> {
        loop {
            // Register before inspecting state so a notify between the check
            // and the await is not lost.
            let notified = self.changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.lock();
                if let Some(item) = state.seats.pop_front() {
                    return Some(item);
                }
                if state.closed {
                    return None;
                }
            }

            notified.await;
        }
    }

    /// Stop admitting items. Returns false if the room was already closed.
    pub fn close(&self) -> bool {
        let was_open = {
            let mut state = self.lock();
            !std::mem::replace(&mut state.closed, true)
        };
        self.changed.notify_waiters();
        was_open
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Snapshot only; may be stale by the time the caller acts on it
    pub fn len(&self) -> usize {
        self.lock().seats.len()
    }

    /// Snapshot only; may be stale by the time the caller acts on it
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, RoomState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
