use std::time::Duration;

/// Running timings for a series of lookups
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupStats {
    lookups: u32,
    total: Duration,
    last: Duration,
}

impl LookupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.lookups += 1;
        self.total += elapsed;
        self.last = elapsed;
    }

    pub fn lookups(&self) -> u32 {
        self.lookups
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn last(&self) -> Duration {
        self.last
    }

    /// `None` until something has been recorded
    pub fn average(&self) -> Option<Duration> {
        match self.lookups {
            0 => None,
            n => Some(self.total / n),
        }
    }
}

/// How many times faster the last `candidate` lookup was compared to the last `baseline` lookup
pub fn speedup(baseline: &LookupStats, candidate: &LookupStats) -> Option<f64> {
    if baseline.lookups == 0 || candidate.lookups == 0 || candidate.last.is_zero() {
        return None;
    }

    Some(baseline.last.as_secs_f64() / candidate.last.as_secs_f64())
}
