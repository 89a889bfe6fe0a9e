//! Cancellable timer queue.
//!
//! Every deferred action in the engine (flip completion, decay ramp steps,
//! touch hold detection, mouse suppression expiry) is an entry in one of
//! these queues. Entries only fire when the owner drains them from `tick`,
//! so clearing the queue is enough to guarantee nothing fires late.

use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

/// Opaque handle for a scheduled entry. Unique within its queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// `now - earlier`, or zero when the clock reads earlier than `earlier`.
#[inline]
pub fn elapsed_between(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

#[derive(Clone, Debug)]
struct Pending<K> {
    handle: TimerHandle,
    deadline: Instant,
    kind: K,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    // small: a card never has more than a flip plus one decay ramp in flight
    pending: SmallVec<[Pending<K>; 12]>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            pending: SmallVec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, deadline: Instant, kind: K) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        // keep sorted by deadline; ties stay in scheduling order
        let at = self
            .pending
            .iter()
            .position(|p| p.deadline > deadline)
            .unwrap_or(self.pending.len());
        self.pending.insert(
            at,
            Pending {
                handle,
                deadline,
                kind,
            },
        );
        handle
    }

    /// Returns `false` for handles that already fired or were cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    /// Cancel every entry whose kind matches. Returns how many were removed.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !predicate(&p.kind));
        before - self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Remove and return every entry due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TimerHandle, K)> {
        let due = self
            .pending
            .iter()
            .position(|p| p.deadline > now)
            .unwrap_or(self.pending.len());
        self.pending
            .drain(..due)
            .map(|p| (p.handle, p.kind))
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|p| p.deadline)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_deadline_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0 + Duration::from_millis(30), "c");
        q.schedule(t0 + Duration::from_millis(10), "a");
        q.schedule(t0 + Duration::from_millis(20), "b");
        let fired: Vec<_> = q
            .drain_due(t0 + Duration::from_millis(25))
            .into_iter()
            .map(|(_, k)| k)
            .collect();
        assert_eq!(fired, vec!["a", "b"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(t0 + Duration::from_millis(30)));
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0, 1);
        q.schedule(t0, 2);
        q.schedule(t0, 3);
        let fired: Vec<_> = q.drain_due(t0).into_iter().map(|(_, k)| k).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn cancel_is_single_shot() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        let h = q.schedule(t0, ());
        assert!(q.is_pending(h));
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert!(q.drain_due(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn cancel_where_filters_by_kind() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        for i in 0..5 {
            q.schedule(t0 + Duration::from_millis(i), i % 2 == 0);
        }
        assert_eq!(q.cancel_where(|even| *even), 3);
        assert_eq!(q.len(), 2);
    }
}
