use std::time;

/// Taken at the start of every backend `build`.
#[must_use]
pub fn now() -> time::Instant {
	time::Instant::now()
}

/// Build and demo timings, logged by `tracing` as `{:.3}s`.
#[must_use]
pub fn elapsed_secs(t0: &time::Instant) -> f32 {
	t0.elapsed().as_secs_f32()
}
