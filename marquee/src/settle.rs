/// Cancel-and-reschedule quiet-period detector.
///
/// Every [`schedule`](Self::schedule) replaces the pending check. Once `quiet_ms` have passed
/// without a new schedule, [`poll`](Self::poll) samples the watched value again and reports the
/// scheduled value only if it is unchanged.
///
/// Time is adapter-driven: callers pass `now_ms` from whatever clock they tick with.
#[derive(Clone, Debug)]
pub struct SettleDetector<T> {
    quiet_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T: PartialEq> SettleDetector<T> {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.quiet_ms)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending check becomes due.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn pending_value(&self) -> Option<&T> {
        self.pending.as_ref().map(|(v, _)| v)
    }

    /// Runs the pending check if it is due.
    ///
    /// `sample` is only called when the deadline has passed. A due check is consumed whether or
    /// not the value held still.
    pub fn poll(&mut self, now_ms: u64, sample: impl FnOnce() -> T) -> Option<T> {
        let due = self.deadline()?;
        if now_ms < due {
            return None;
        }
        let (value, _) = self.pending.take()?;
        if sample() == value { Some(value) } else { None }
    }
}
