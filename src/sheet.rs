//! Draggable projects sheet: drag tracking, clamping, three-way snap.
//!
//! Offsets are terminal rows from the top of the viewport. The sheet rests at
//! one of three canonical offsets (Closed, Half, Open); during a drag it may
//! sit anywhere in the clamped range.

/// Rows of the sheet left peeking above the bottom edge when closed.
pub const HANDLE_ROWS: u16 = 3;
/// Rows left clear above the sheet when fully open.
pub const OPEN_MARGIN: u16 = 3;
/// A drag released within this many rows of the closed offset settles closed;
/// the backdrop is only drawn below this boundary.
pub const SNAP_MARGIN: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapState {
    Closed,
    Half,
    Open,
}

#[derive(Clone, Debug)]
pub struct SheetState {
    /// Top row of the sheet.
    offset: u16,
    viewport_rows: u16,
    dragging: bool,
    origin_row: u16,
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new(24)
    }
}

impl SheetState {
    pub fn new(viewport_rows: u16) -> Self {
        let mut sheet = Self {
            offset: 0,
            viewport_rows,
            dragging: false,
            origin_row: 0,
        };
        sheet.offset = sheet.closed_offset();
        sheet
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn closed_offset(&self) -> u16 {
        self.viewport_rows.saturating_sub(HANDLE_ROWS)
    }

    pub fn half_offset(&self) -> u16 {
        (self.viewport_rows / 2).clamp(self.open_offset(), self.closed_offset())
    }

    pub fn open_offset(&self) -> u16 {
        OPEN_MARGIN.min(self.closed_offset())
    }

    fn canonical(&self, snap: SnapState) -> u16 {
        match snap {
            SnapState::Closed => self.closed_offset(),
            SnapState::Half => self.half_offset(),
            SnapState::Open => self.open_offset(),
        }
    }

    /// Nearest snap state for the current offset. Closed wins within
    /// SNAP_MARGIN of the closed offset, then Half at or below the midpoint,
    /// then Open — one unconditional three-way comparison, so a zero-delta
    /// drag settles where it started.
    pub fn snap(&self) -> SnapState {
        if self.offset > self.closed_offset().saturating_sub(SNAP_MARGIN) {
            SnapState::Closed
        } else if self.offset >= self.half_offset() {
            SnapState::Half
        } else {
            SnapState::Open
        }
    }

    /// Start a gesture at `row`. A second mouse-down while a gesture is
    /// active is ignored: gesture state is a single flag.
    pub fn begin_drag(&mut self, row: u16) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        self.origin_row = row;
    }

    /// Track the pointer incrementally: apply the delta since the last event
    /// and re-anchor the origin, so the sheet never jumps to the pointer.
    /// No-op without an active gesture.
    pub fn update_drag(&mut self, row: u16) {
        if !self.dragging {
            return;
        }
        let delta = i32::from(row) - i32::from(self.origin_row);
        let next = i32::from(self.offset) + delta;
        self.offset = next.clamp(i32::from(self.open_offset()), i32::from(self.closed_offset())) as u16;
        self.origin_row = row;
    }

    /// End the gesture and settle on the nearest snap offset. No-op without
    /// an active gesture.
    pub fn end_drag(&mut self) -> Option<SnapState> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let snap = self.snap();
        self.offset = self.canonical(snap);
        Some(snap)
    }

    /// Jump straight to the open position.
    pub fn open(&mut self) {
        self.dragging = false;
        self.offset = self.open_offset();
    }

    /// Back to closed with no active gesture. Called when the sheet leaves
    /// the layout, so a mid-drag unmount cannot leave a dangling gesture.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.offset = self.closed_offset();
    }

    /// Recompute canonical offsets for a new viewport height. A resting sheet
    /// keeps its snap state; a mid-drag offset is just re-clamped.
    pub fn set_viewport(&mut self, rows: u16) {
        if self.viewport_rows == rows {
            return;
        }
        let snap = self.snap();
        self.viewport_rows = rows;
        if self.dragging {
            self.offset = self
                .offset
                .clamp(self.open_offset(), self.closed_offset());
        } else {
            self.offset = self.canonical(snap);
        }
    }

    /// Backdrop opacity, linear from 0 at closed to 1 at the top. None while
    /// the sheet is within SNAP_MARGIN of closed (no backdrop).
    pub fn backdrop_opacity(&self) -> Option<f32> {
        let closed = self.closed_offset();
        if closed == 0 || self.offset >= closed.saturating_sub(SNAP_MARGIN) {
            return None;
        }
        Some(1.0 - f32::from(self.offset) / f32::from(closed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: u16 = 40;

    fn sheet() -> SheetState {
        SheetState::new(ROWS)
    }

    #[test]
    fn starts_closed() {
        let s = sheet();
        assert_eq!(s.offset(), ROWS - HANDLE_ROWS);
        assert_eq!(s.snap(), SnapState::Closed);
        assert!(!s.is_dragging());
    }

    #[test]
    fn offset_never_leaves_the_clamped_range() {
        let mut s = sheet();
        s.begin_drag(20);
        for row in [0, 200, 5, 90, 1, 250, 10] {
            s.update_drag(row);
            assert!(s.offset() >= s.open_offset());
            assert!(s.offset() <= s.closed_offset());
        }
    }

    #[test]
    fn tracking_is_incremental_not_absolute() {
        let mut s = sheet();
        s.begin_drag(30);
        s.update_drag(25);
        assert_eq!(s.offset(), ROWS - HANDLE_ROWS - 5);
        // Same pointer row again: zero delta, no movement.
        s.update_drag(25);
        assert_eq!(s.offset(), ROWS - HANDLE_ROWS - 5);
    }

    /// Drag the sheet to an exact offset through the public API.
    fn drag_to(start: u16) -> SheetState {
        let mut s = sheet();
        s.begin_drag(100);
        let row = 100 - (i32::from(s.offset()) - i32::from(start));
        s.update_drag(row as u16);
        assert_eq!(s.offset(), start);
        s
    }

    #[test]
    fn snap_is_deterministic_at_the_boundaries() {
        let reference = sheet();
        let closed = reference.closed_offset();
        let half = reference.half_offset();
        let open = reference.open_offset();

        for (start, want) in [
            (closed, SnapState::Closed),
            (closed - SNAP_MARGIN + 1, SnapState::Closed),
            (closed - SNAP_MARGIN, SnapState::Half),
            (half + 1, SnapState::Half),
            (half, SnapState::Half),
            (half - 1, SnapState::Open),
            (open, SnapState::Open),
        ] {
            let mut s = drag_to(start);
            assert_eq!(s.end_drag(), Some(want), "start offset {start}");
            assert_eq!(s.offset(), reference.canonical(want));
        }
    }

    #[test]
    fn zero_delta_drag_settles_where_it_started() {
        let target = sheet().half_offset();
        let mut s = drag_to(target);
        assert_eq!(s.end_drag(), Some(SnapState::Half));

        // A fresh gesture released without movement stays at Half.
        s.begin_drag(50);
        assert_eq!(s.end_drag(), Some(SnapState::Half));
        assert_eq!(s.offset(), target);
    }

    #[test]
    fn stray_events_without_a_gesture_are_noops() {
        let mut s = sheet();
        let before = s.offset();
        s.update_drag(10);
        assert_eq!(s.offset(), before);
        assert_eq!(s.end_drag(), None);
        assert_eq!(s.offset(), before);
    }

    #[test]
    fn reentrant_begin_keeps_the_first_origin() {
        let mut s = sheet();
        s.begin_drag(30);
        s.begin_drag(5);
        // Delta is measured from the first origin, not the re-entrant one.
        s.update_drag(28);
        assert_eq!(s.offset(), ROWS - HANDLE_ROWS - 2);
    }

    #[test]
    fn reset_clears_a_dangling_gesture() {
        let mut s = sheet();
        s.begin_drag(30);
        s.update_drag(10);
        s.reset();
        assert!(!s.is_dragging());
        assert_eq!(s.snap(), SnapState::Closed);
    }

    #[test]
    fn resize_keeps_the_resting_snap_state() {
        let mut s = sheet();
        s.open();
        s.set_viewport(60);
        assert_eq!(s.snap(), SnapState::Open);
        assert_eq!(s.offset(), s.open_offset());

        let mut c = sheet();
        c.set_viewport(60);
        assert_eq!(c.offset(), 60 - HANDLE_ROWS);
    }

    #[test]
    fn backdrop_is_hidden_near_closed_and_linear_when_open() {
        let mut s = sheet();
        assert_eq!(s.backdrop_opacity(), None);

        s.open();
        let opacity = s.backdrop_opacity().unwrap();
        let expect = 1.0 - f32::from(s.open_offset()) / f32::from(s.closed_offset());
        assert!((opacity - expect).abs() < f32::EPSILON);

        let h = drag_to(sheet().half_offset());
        let mid = h.backdrop_opacity().unwrap();
        assert!(mid > 0.0 && mid < opacity);
    }
}
