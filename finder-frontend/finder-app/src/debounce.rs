/// Identifies one arming of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// A single pending slot. Arming replaces whatever was waiting, so only the value from the
/// most recent `arm` can ever be settled.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    slot: Option<(DebounceTicket, T)>,
    armed: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            slot: None,
            armed: 0,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, value: T) -> DebounceTicket {
        self.armed += 1;
        let ticket = DebounceTicket(self.armed);
        self.slot = Some((ticket, value));
        ticket
    }

    /// Called when the timer for `ticket` elapses. Returns the pending value only if nothing
    /// re-armed or cancelled the slot in the meantime.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        match self.slot.take() {
            Some((pending, value)) if pending == ticket => Some(value),
            other => {
                self.slot = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.slot.take().map(|(_, value)| value)
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_settles() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.arm("mac");
        let second = debouncer.arm("mach");
        let third = debouncer.arm("machine");

        // timers fire in arming order; the superseded ones find nothing
        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), None);
        assert!(debouncer.is_armed());
        assert_eq!(debouncer.settle(third), Some("machine"));
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn settling_twice_yields_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.arm(1);
        assert_eq!(debouncer.settle(ticket), Some(1));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn cancel_empties_the_slot() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.arm("robotics");
        assert_eq!(debouncer.cancel(), Some("robotics"));
        assert_eq!(debouncer.settle(ticket), None);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn tickets_stay_unique_after_cancel() {
        let mut debouncer = Debouncer::new();
        let old = debouncer.arm("old");
        debouncer.cancel();
        let new = debouncer.arm("new");
        assert_ne!(old, new);
        assert_eq!(debouncer.settle(old), None);
        assert_eq!(debouncer.settle(new), Some("new"));
    }
}
