use std::time::{Duration, Instant};

/// Default delay between the last event and a recompute.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Trailing debounce timer.
///
/// Each [`run`](Self::run) pushes the deadline out to `now + delay`, so a burst
/// of calls becomes due once, `delay` after the last call.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	deadline: Option<Instant>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	/// Creates an idle debouncer.
	pub const fn new(delay: Duration) -> Self {
		Self { delay, deadline: None }
	}

	/// Returns the configured delay.
	pub const fn delay(&self) -> Duration {
		self.delay
	}

	/// Schedules (or reschedules) the trailing run.
	pub fn run(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	/// Returns when the pending run becomes due.
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Returns true if the pending run is due at `now`.
	pub fn is_due(&self, now: Instant) -> bool {
		self.deadline.is_some_and(|deadline| now >= deadline)
	}

	/// Consumes the pending run if it is due.
	pub fn take_due(&mut self, now: Instant) -> bool {
		let due = self.is_due(now);
		if due {
			self.deadline = None;
		}
		due
	}

	/// Drops the pending run. Returns true if one was scheduled.
	pub fn cancel(&mut self) -> bool {
		self.deadline.take().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(50);

	#[test]
	fn test_idle_is_never_due() {
		let mut debouncer = Debouncer::new(DELAY);
		let now = Instant::now();
		assert_eq!(debouncer.deadline(), None);
		assert!(!debouncer.take_due(now + Duration::from_secs(10)));
	}

	#[test]
	fn test_due_after_delay() {
		let mut debouncer = Debouncer::new(DELAY);
		let start = Instant::now();
		debouncer.run(start);

		assert!(!debouncer.is_due(start + Duration::from_millis(49)));
		assert!(debouncer.take_due(start + DELAY));
		assert_eq!(debouncer.deadline(), None);
	}

	#[test]
	fn test_rerun_pushes_deadline() {
		let mut debouncer = Debouncer::new(DELAY);
		let start = Instant::now();

		for offset in [0, 20, 40, 60, 80] {
			debouncer.run(start + Duration::from_millis(offset));
		}

		assert!(!debouncer.is_due(start + Duration::from_millis(129)));
		assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(130)));
		assert!(debouncer.take_due(start + Duration::from_millis(130)));
		assert!(!debouncer.take_due(start + Duration::from_millis(500)));
	}

	#[test]
	fn test_cancel_drops_pending_run() {
		let mut debouncer = Debouncer::default();
		let start = Instant::now();
		debouncer.run(start);

		assert!(debouncer.cancel());
		assert!(!debouncer.cancel());
		assert!(!debouncer.is_due(start + Duration::from_secs(1)));
		assert_eq!(debouncer.delay(), DEFAULT_DEBOUNCE);
	}

	#[test]
	fn test_zero_delay_is_due_immediately() {
		let mut debouncer = Debouncer::new(Duration::ZERO);
		let now = Instant::now();
		debouncer.run(now);
		assert!(debouncer.take_due(now));
	}
}
