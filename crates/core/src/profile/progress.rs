//! Progress accounting for lookups
//!
//! Progress is an additive counter in `[0, 100]`, threaded through the
//! lookup explicitly instead of living as mutable state on the fetcher.
//! Each completed step reports the new position together with where the
//! in-flight step will land, so a view can animate towards it.

use hubcard_domain::constants::PROGRESS_DONE;
use hubcard_domain::ProfileRecord;

/// Callback receiving `(record, progress, next_progress)` tuples.
///
/// Invoked one or more times per lookup; the terminal invocation always
/// carries progress exactly 100 and no next value.
pub type ProgressFn<'a> = dyn Fn(&ProfileRecord, u8, Option<u8>) + Send + Sync + 'a;

/// Tracks the additive counter and emits progress tuples.
pub(crate) struct ProgressReporter<'a> {
    callback: &'a ProgressFn<'a>,
    position: u8,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(callback: &'a ProgressFn<'a>) -> Self {
        Self { callback, position: 0 }
    }

    /// Record a completed step of `completed_weight` and report.
    ///
    /// `in_flight_weight` is the weight of the step that just started; the
    /// reported next value is `position + in_flight_weight - 1`, clamped.
    pub(crate) fn step(
        &mut self,
        record: &ProfileRecord,
        completed_weight: u8,
        in_flight_weight: Option<u8>,
    ) {
        self.position = self.position.saturating_add(completed_weight).min(PROGRESS_DONE);
        let next = in_flight_weight
            .map(|weight| self.position.saturating_add(weight.saturating_sub(1)).min(PROGRESS_DONE));
        (self.callback)(record, self.position, next);
    }

    /// Force the counter to 100 and emit the terminal tuple.
    pub(crate) fn finish(&mut self, record: &ProfileRecord) {
        self.position = PROGRESS_DONE;
        (self.callback)(record, PROGRESS_DONE, None);
    }
}
