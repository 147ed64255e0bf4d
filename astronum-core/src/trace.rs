use crate::Report;

/// Largest number of samples [`Trace::with_capacity`] reserves up front.
pub const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Dependent values that can be laid out as table columns.
pub trait Columns {
    /// Returns the values in column order.
    fn columns(&self) -> &[f64];
}

impl Columns for f64 {
    fn columns(&self) -> &[f64] {
        std::slice::from_ref(self)
    }
}

impl<const N: usize> Columns for [f64; N] {
    fn columns(&self) -> &[f64] {
        self
    }
}

impl Columns for Vec<f64> {
    fn columns(&self) -> &[f64] {
        self
    }
}

/// One recorded state: the independent variable and the dependent value(s).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<Y> {
    /// The independent variable.
    pub x: f64,

    /// The dependent value(s) at `x`.
    pub y: Y,
}

/// An append-only record of the states visited during a solve.
///
/// Samples are never modified once pushed. A solver replaces or clears its
/// trace when a new solve starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<Y> {
    samples: Vec<Sample<Y>>,
}

impl<Y> Default for Trace<Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y> Trace<Y> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Creates an empty trace with room for `capacity` samples.
    ///
    /// The reservation is capped at [`MAX_RESERVED_SAMPLES`]; longer traces
    /// grow as samples are pushed.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity.min(MAX_RESERVED_SAMPLES)),
        }
    }

    /// Appends a sample.
    pub fn push(&mut self, x: f64, y: Y) {
        self.samples.push(Sample { x, y });
    }

    /// Returns the recorded samples in order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<Y>] {
        &self.samples
    }

    /// Returns the most recent sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<Y>> {
        self.samples.last()
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<Y>> {
        self.samples.iter()
    }
}

impl<Y: Columns> Trace<Y> {
    /// Formats the trace as a fixed-width table, one sample per line.
    ///
    /// Each line holds `x` followed by the dependent values, printed with
    /// `precision` decimals. `labels` becomes a header line unless empty.
    /// Returns `None` for an empty trace.
    #[must_use]
    pub fn report(&self, labels: &[&str], precision: usize) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }

        let mut report = Report::new(precision);
        if !labels.is_empty() {
            report = report.header(labels);
        }

        let mut row = Vec::new();
        for sample in &self.samples {
            row.clear();
            row.push(sample.x);
            row.extend_from_slice(sample.y.columns());
            report.row(&row);
        }

        Some(report.finish())
    }
}

impl<'a, Y> IntoIterator for &'a Trace<Y> {
    type Item = &'a Sample<Y>;
    type IntoIter = std::slice::Iter<'a, Sample<Y>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
