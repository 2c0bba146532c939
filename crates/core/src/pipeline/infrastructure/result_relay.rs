use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Why a blocking receive returned without a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayRecvError {
    Timeout,
    Disconnected,
}

struct Shared<T> {
    slot: Mutex<Option<T>>,
    available: Condvar,
    replaced: AtomicU64,
    disconnected: AtomicBool,
}

/// Producer half of a single-slot coalescing mailbox.
///
/// One producer, one consumer. Publishing replaces any unconsumed
/// value, so the consumer only ever observes the newest result and
/// delivery order can never invert. The mailbox owns all
/// synchronization; neither side sees a lock.
pub struct RelaySender<T> {
    shared: Arc<Shared<T>>,
}

/// Consumer half of the mailbox.
pub struct RelayReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Creates a connected sender/receiver pair.
pub fn result_relay<T: Send>() -> (RelaySender<T>, RelayReceiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(None),
        available: Condvar::new(),
        replaced: AtomicU64::new(0),
        disconnected: AtomicBool::new(false),
    });
    (
        RelaySender {
            shared: shared.clone(),
        },
        RelayReceiver { shared },
    )
}

impl<T> RelaySender<T> {
    /// Hands off a value and returns immediately; the producer never
    /// waits for consumption. An unconsumed previous value is
    /// replaced, which is the backpressure policy: coalesce, don't
    /// queue.
    pub fn publish(&self, value: T) {
        let mut slot = self.shared.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.replace(value).is_some() {
            self.shared.replaced.fetch_add(1, Ordering::Relaxed);
        }
        drop(slot);
        self.shared.available.notify_one();
    }

    /// Number of values that were overwritten before consumption.
    pub fn replaced(&self) -> u64 {
        self.shared.replaced.load(Ordering::Relaxed)
    }
}

impl<T> Drop for RelaySender<T> {
    fn drop(&mut self) {
        self.shared.disconnected.store(true, Ordering::Release);
        self.shared.available.notify_one();
    }
}

impl<T> RelayReceiver<T> {
    /// Non-blocking: the newest unconsumed value, if any.
    pub fn take(&self) -> Option<T> {
        self.shared
            .slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    /// Blocks until a value arrives, the sender goes away, or the
    /// timeout elapses. A value already in the slot is returned at
    /// once, even after disconnect.
    ///
    /// The wait tracks a deadline, so spurious wakeups shorten the
    /// remaining wait instead of restarting it.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, RelayRecvError> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.shared.slot.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(value) = slot.take() {
                return Ok(value);
            }
            if self.shared.disconnected.load(Ordering::Acquire) {
                return Err(RelayRecvError::Disconnected);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(RelayRecvError::Timeout);
            }
            let (guard, _wait) = self
                .shared
                .available
                .wait_timeout(slot, remaining)
                .unwrap_or_else(|e| e.into_inner());
            slot = guard;
        }
    }

    /// Number of values overwritten before consumption, readable
    /// from the consuming side after the sender has moved elsewhere.
    pub fn replaced(&self) -> u64 {
        self.shared.replaced.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_take_on_empty_is_none() {
        let (_tx, rx) = result_relay::<u32>();
        assert_eq!(rx.take(), None);
    }

    #[test]
    fn test_delivers_published_value() {
        let (tx, rx) = result_relay();
        tx.publish(7u32);
        assert_eq!(rx.take(), Some(7));
        assert_eq!(rx.take(), None);
    }

    #[test]
    fn test_coalesces_to_newest() {
        // R1 then R2 before any consumption: exactly one value is
        // observed and it is R2.
        let (tx, rx) = result_relay();
        tx.publish(1u32);
        tx.publish(2u32);
        assert_eq!(rx.take(), Some(2));
        assert_eq!(rx.take(), None);
        assert_eq!(tx.replaced(), 1);
    }

    #[test]
    fn test_recv_timeout_returns_timeout_when_idle() {
        let (_tx, rx) = result_relay::<u32>();
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(10)),
            Err(RelayRecvError::Timeout)
        );
    }

    #[test]
    fn test_recv_zero_timeout_does_not_block() {
        let (_tx, rx) = result_relay::<u32>();
        let start = std::time::Instant::now();
        assert_eq!(
            rx.recv_timeout(Duration::ZERO),
            Err(RelayRecvError::Timeout)
        );
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_recv_timeout_is_a_deadline_not_a_per_wait_budget() {
        let (_tx, rx) = result_relay::<u32>();
        let start = std::time::Instant::now();
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(50)),
            Err(RelayRecvError::Timeout)
        );
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_secs(2), "blocked {elapsed:?}");
    }

    #[test]
    fn test_receiver_reads_replaced_count() {
        let (tx, rx) = result_relay();
        tx.publish(1u32);
        tx.publish(2u32);
        tx.publish(3u32);
        drop(tx);
        assert_eq!(rx.take(), Some(3));
        assert_eq!(rx.replaced(), 2);
    }

    #[test]
    fn test_recv_observes_cross_thread_publish() {
        let (tx, rx) = result_relay();
        let handle = thread::spawn(move || {
            tx.publish(42u32);
        });
        let got = rx.recv_timeout(Duration::from_secs(5));
        handle.join().unwrap();
        assert_eq!(got, Ok(42));
    }

    #[test]
    fn test_disconnect_wakes_receiver() {
        let (tx, rx) = result_relay::<u32>();
        let handle = thread::spawn(move || {
            drop(tx);
        });
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(RelayRecvError::Disconnected)
        );
        handle.join().unwrap();
    }

    #[test]
    fn test_final_value_survives_disconnect() {
        let (tx, rx) = result_relay();
        tx.publish(9u32);
        drop(tx);
        assert_eq!(rx.recv_timeout(Duration::from_millis(10)), Ok(9));
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(10)),
            Err(RelayRecvError::Disconnected)
        );
    }

    #[test]
    fn test_sequence_is_non_decreasing_under_load() {
        let (tx, rx) = result_relay();
        let producer = thread::spawn(move || {
            for i in 0u64..10_000 {
                tx.publish(i);
            }
        });

        let mut last = 0u64;
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(v) => {
                    assert!(v >= last, "observed {v} after {last}");
                    last = v;
                }
                Err(RelayRecvError::Disconnected) => break,
                Err(RelayRecvError::Timeout) => {}
            }
        }
        producer.join().unwrap();
        assert_eq!(last, 9_999);
    }
}
