//! Character-cell surface for the mock terminal painted on the doors.
//!
//! Purely cosmetic. The door animator owns one lazily; the renderer reads
//! the cells and re-uploads its texture whenever the revision changes.

use web_time::Instant;

const CURSOR: char = '_';

/// Fixed-size grid of characters with a blinking cursor.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
    revision: u64,
    created_at: Instant,
    blink_hz: f32,
}

impl TerminalSurface {
    /// Blank surface. Dimensions are at least one cell.
    #[must_use]
    pub fn new(columns: usize, rows: usize, blink_hz: f32, now: Instant) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            cells: vec![' '; columns * rows],
            revision: 0,
            created_at: now,
            blink_hz,
        }
    }

    /// Width in cells.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Height in cells.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Bumped every time the cell contents change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Row-major cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// One row with trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .chunks(self.columns)
            .nth(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_owned())
            .unwrap_or_default()
    }

    /// Every row joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the cursor is lit at `now`.
    #[must_use]
    pub fn cursor_visible(&self, now: Instant) -> bool {
        if self.blink_hz <= 0.0 || !self.blink_hz.is_finite() {
            return true;
        }
        let cycles =
            now.saturating_duration_since(self.created_at).as_secs_f32()
                * self.blink_hz;
        cycles.fract() < 0.5
    }

    /// Repaint with the tail of `lines` and the cursor state at `now`.
    ///
    /// Shows the last lines that fit, each truncated to the column width.
    /// Returns whether any cell changed.
    pub fn update(&mut self, lines: &[String], now: Instant) -> bool {
        let mut next = vec![' '; self.columns * self.rows];
        let visible = &lines[lines.len().saturating_sub(self.rows)..];

        let mut cursor = (0, 0);
        for (row, line) in visible.iter().enumerate() {
            let start = row * self.columns;
            let mut len = 0;
            for (cell, ch) in next[start..start + self.columns]
                .iter_mut()
                .zip(line.chars())
            {
                *cell = ch;
                len += 1;
            }
            cursor = (row, len.min(self.columns - 1));
        }
        if self.cursor_visible(now) {
            next[cursor.0 * self.columns + cursor.1] = CURSOR;
        }

        if next == self.cells {
            return false;
        }
        self.cells = next;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_renders_lines_verbatim_with_cursor() {
        let now = Instant::now();
        let mut surface = TerminalSurface::new(20, 3, 0.0, now);
        assert!(surface.update(&lines(&["$ docker build .", "Step 1/4"]), now));
        assert_eq!(surface.row_text(0), "$ docker build .");
        assert_eq!(surface.row_text(1), "Step 1/4_");
        assert_eq!(surface.row_text(2), "");
        assert_eq!(surface.revision(), 1);
    }

    #[test]
    fn test_keeps_only_the_tail() {
        let now = Instant::now();
        let mut surface = TerminalSurface::new(10, 2, 0.0, now);
        let _ = surface.update(&lines(&["one", "two", "three"]), now);
        assert_eq!(surface.text(), "two\nthree_");
    }

    #[test]
    fn test_truncates_long_lines() {
        let now = Instant::now();
        let mut surface = TerminalSurface::new(5, 1, 0.0, now);
        let _ = surface.update(&lines(&["abcdefgh"]), now);
        // cursor overwrites the last column when the line is full
        assert_eq!(surface.row_text(0), "abcd_");
    }

    #[test]
    fn test_empty_input_shows_cursor_home() {
        let now = Instant::now();
        let mut surface = TerminalSurface::new(4, 2, 0.0, now);
        let _ = surface.update(&[], now);
        assert_eq!(surface.row_text(0), "_");
    }

    #[test]
    fn test_cursor_blinks_and_revision_tracks_changes() {
        let now = Instant::now();
        let mut surface = TerminalSurface::new(8, 1, 2.0, now);
        let text = lines(&["ok"]);

        assert!(surface.update(&text, now));
        assert!(!surface.update(&text, now + Duration::from_millis(100)));
        assert_eq!(surface.revision(), 1);

        // 2 Hz: lit for the first 250 ms of each 500 ms cycle
        let dark = now + Duration::from_millis(300);
        assert!(!surface.cursor_visible(dark));
        assert!(surface.update(&text, dark));
        assert_eq!(surface.row_text(0), "ok");
        assert_eq!(surface.revision(), 2);
    }

    #[test]
    fn test_zero_dimensions_clamp_to_one_cell() {
        let surface = TerminalSurface::new(0, 0, 2.0, Instant::now());
        assert_eq!((surface.columns(), surface.rows()), (1, 1));
    }
}
