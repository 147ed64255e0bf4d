use std::fmt::Write;

/// Minimum width of a report column, in characters.
const COLUMN_WIDTH: usize = 14;

/// Builds a fixed-width, left-aligned text table.
///
/// Every cell is padded to the same width and numeric cells are printed with
/// a fixed number of decimals, so columns line up for any row count.
///
/// ```
/// use astronum_core::Report;
///
/// let mut report = Report::new(2).header(&["x", "y"]);
/// report.row(&[0.0, 1.0]);
/// report.row(&[0.5, 0.25]);
///
/// assert_eq!(
///     report.finish(),
///     "x              y\n0.00           1.00\n0.50           0.25\n",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    text: String,
    precision: usize,
    width: usize,
}

impl Report {
    /// Creates an empty report printing `precision` decimals per value.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            text: String::new(),
            precision,
            width: COLUMN_WIDTH.max(precision + 6),
        }
    }

    /// Appends a header line with one label per column.
    #[must_use]
    pub fn header(mut self, labels: &[&str]) -> Self {
        let cells = labels.iter().map(|label| label.to_string());
        self.push_line(cells);
        self
    }

    /// Appends a row of numeric cells.
    pub fn row(&mut self, values: &[f64]) {
        let cells = values.iter().map(|value| self.number(*value));
        let cells: Vec<String> = cells.collect();
        self.push_line(cells);
    }

    /// Appends a row whose first cell is `label`, followed by numeric cells.
    pub fn labeled_row(&mut self, label: &str, values: &[f64]) {
        let cells: Vec<String> = std::iter::once(label.to_string())
            .chain(values.iter().map(|value| self.number(*value)))
            .collect();
        self.push_line(cells);
    }

    /// Returns the finished table text.
    #[must_use]
    pub fn finish(self) -> String {
        self.text
    }

    fn number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    fn push_line(&mut self, cells: impl IntoIterator<Item = String>) {
        let mut line = String::new();
        for cell in cells {
            let _ = write!(line, "{cell:<width$} ", width = self.width);
        }
        self.text.push_str(line.trim_end());
        self.text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_widen_for_high_precision() {
        let mut report = Report::new(10);
        report.row(&[-123.5, 1.0]);

        let text = report.finish();
        let first = text.split_whitespace().next().expect("one cell");

        assert_eq!(first, "-123.5000000000");
        assert!(text.starts_with("-123.5000000000  "));
    }

    #[test]
    fn labeled_rows_keep_label_verbatim() {
        let mut report = Report::new(4).header(&["Iteration", "x"]);
        report.labeled_row("01", &[1.5]);

        assert_eq!(report.finish(), "Iteration      x\n01             1.5000\n");
    }
}
