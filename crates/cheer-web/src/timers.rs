//! Bookkeeping for delayed preset bursts.
//!
//! Each entry owns its callback until the timer fires or is cancelled, so a
//! cancelled `setTimeout` releases its closure instead of leaking it. Fired
//! entries are pruned lazily on the next call that touches the set.

use std::cell::Cell;
use std::rc::Rc;

struct Entry<C> {
    id: i32,
    fired: Rc<Cell<bool>>,
    callback: C,
}

/// Pending timers keyed by host timer id.
pub struct PendingTimers<C> {
    entries: Vec<Entry<C>>,
}

impl<C> Default for PendingTimers<C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<C> PendingTimers<C> {
    /// Flag the callback must set when it runs.
    pub fn fired_flag() -> Rc<Cell<bool>> {
        Rc::new(Cell::new(false))
    }

    /// Track a scheduled timer. `fired` is the flag its callback sets.
    pub fn push(&mut self, id: i32, fired: Rc<Cell<bool>>, callback: C) {
        self.entries.push(Entry { id, fired, callback });
    }

    /// Drop every entry whose timer already ran.
    pub fn prune_fired(&mut self) {
        self.entries.retain(|entry| !entry.fired.get());
    }

    /// Remove everything and return the ids still waiting to fire.
    /// All callbacks are dropped before this returns.
    pub fn take_unfired(&mut self) -> Vec<i32> {
        self.entries
            .drain(..)
            .filter(|entry| !entry.fired.get())
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn callback(&self, id: i32) -> Option<&C> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts drops, standing in for a JS closure.
    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn fired_entries_are_pruned() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();
        let first = PendingTimers::<Tracked>::fired_flag();
        let second = PendingTimers::<Tracked>::fired_flag();
        timers.push(1, first.clone(), Tracked(dropped.clone()));
        timers.push(2, second.clone(), Tracked(dropped.clone()));

        first.set(true);
        timers.prune_fired();
        assert_eq!(timers.len(), 1);
        assert_eq!(dropped.get(), 1);
        assert!(timers.callback(1).is_none());
        assert!(timers.callback(2).is_some());
    }

    #[test]
    fn cancelling_frees_every_callback() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();
        let fired = PendingTimers::<Tracked>::fired_flag();
        timers.push(10, fired.clone(), Tracked(dropped.clone()));
        timers.push(11, PendingTimers::<Tracked>::fired_flag(), Tracked(dropped.clone()));
        timers.push(12, PendingTimers::<Tracked>::fired_flag(), Tracked(dropped.clone()));
        fired.set(true);

        assert_eq!(timers.take_unfired(), vec![11, 12]);
        assert!(timers.is_empty());
        assert_eq!(dropped.get(), 3);
    }

    #[test]
    fn repeated_presets_do_not_accumulate() {
        let mut timers = PendingTimers::default();
        for round in 0..50 {
            timers.prune_fired();
            let fired = PendingTimers::<()>::fired_flag();
            timers.push(round, fired.clone(), ());
            fired.set(true);
        }
        timers.prune_fired();
        assert!(timers.is_empty());
    }
}
