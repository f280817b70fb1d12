use std::collections::VecDeque;

/// One memory observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Seconds since monitoring started.
    pub elapsed_secs: f64,
    /// Memory footprint in megabytes.
    pub value_mb: f64,
}

impl Sample {
    pub fn new(elapsed_secs: f64, value_mb: f64) -> Self {
        Self { elapsed_secs, value_mb }
    }
}

/// Append-only, time-ordered sequence of samples.
///
/// Unbounded by default. With a capacity the oldest sample is evicted once
/// the history is full.
#[derive(Debug, Clone)]
pub struct History {
    samples:  VecDeque<Sample>,
    capacity: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl History {
    pub fn unbounded() -> Self {
        Self {
            samples:  VecDeque::new(),
            capacity: None,
        }
    }

    /// A history keeping at most `capacity` samples. A capacity of zero
    /// means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::unbounded();
        }
        Self {
            samples:  VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Append a sample. Returns `false` (and keeps the history unchanged)
    /// when the timestamp does not advance past the newest sample or either
    /// field is negative or non-finite.
    pub fn push(&mut self, sample: Sample) -> bool {
        let valid = sample.elapsed_secs.is_finite()
            && sample.value_mb.is_finite()
            && sample.elapsed_secs >= 0.0
            && sample.value_mb >= 0.0;
        let advances = self
            .samples
            .back()
            .map_or(true, |last| sample.elapsed_secs > last.elapsed_secs);

        if !valid || !advances {
            tracing::debug!(?sample, "rejected out-of-order or invalid sample");
            return false;
        }

        if self.capacity == Some(self.samples.len()) {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        true
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Memory values in time order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value_mb)
    }
}

impl FromIterator<Sample> for History {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut history = Self::unbounded();
        for sample in iter {
            history.push(sample);
        }
        history
    }
}
