//! Deadline queue for deferred events
//!
//! Holds events until their due time. The queue does not judge staleness;
//! consumers re-validate each event when it comes due.

/// Events ordered by due time, earliest first on pop
pub struct TimerQueue<T> {
    entries: Vec<(f64, T)>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn schedule(&mut self, due_ms: f64, event: T) {
        self.entries.push((due_ms, event));
    }

    /// Remove and return the earliest event due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: f64) -> Option<T> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= now_ms)
            .min_by(|a, b| a.1 .0.total_cmp(&b.1 .0))
            .map(|(i, _)| i)?;
        Some(self.entries.remove(index).1)
    }

    /// Earliest scheduled deadline, if any
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(due, _)| *due)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Drop events the predicate rejects
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|(_, event)| keep(event));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300.0, "c");
        queue.schedule(100.0, "a");
        queue.schedule(200.0, "b");

        assert_eq!(queue.next_deadline(), Some(100.0));
        assert_eq!(queue.pop_due(250.0), Some("a"));
        assert_eq!(queue.pop_due(250.0), Some("b"));
        assert_eq!(queue.pop_due(250.0), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(300.0), Some("c"));
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_retain_drops_rejected() {
        let mut queue = TimerQueue::new();
        queue.schedule(10.0, 1u64);
        queue.schedule(20.0, 2u64);
        queue.retain(|epoch| *epoch == 2);
        assert_eq!(queue.pop_due(100.0), Some(2));
        assert!(queue.is_empty());
    }
}
