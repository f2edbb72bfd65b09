//! Keyboard focus: which region receives arrow keys, and a cursor type
//! for moving through a region's activatable targets.

/// Screen regions that can hold keyboard focus, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRegion {
    Header,
    Sidebar,
    Feed,
    Stories,
    Groups,
}

impl FocusRegion {
    const ORDER: [FocusRegion; 5] = [
        FocusRegion::Header,
        FocusRegion::Sidebar,
        FocusRegion::Feed,
        FocusRegion::Stories,
        FocusRegion::Groups,
    ];

    /// Regions inside the right panel.
    pub fn in_right_panel(self) -> bool {
        matches!(self, FocusRegion::Stories | FocusRegion::Groups)
    }

    /// Next region in Tab order, skipping the right panel when hidden.
    pub fn next(self, right_panel_visible: bool) -> Self {
        self.step(1, right_panel_visible)
    }

    pub fn prev(self, right_panel_visible: bool) -> Self {
        self.step(Self::ORDER.len() - 1, right_panel_visible)
    }

    fn step(self, by: usize, right_panel_visible: bool) -> Self {
        let len = Self::ORDER.len();
        let mut idx = Self::ORDER.iter().position(|r| *r == self).unwrap_or(0);
        loop {
            idx = (idx + by) % len;
            let candidate = Self::ORDER[idx];
            if right_panel_visible || !candidate.in_right_panel() {
                return candidate;
            }
        }
    }
}

/// Index into a list of targets that may shrink between uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub index: usize,
}

impl ListCursor {
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1).min(len - 1);
        }
    }

    /// Keep the cursor inside `0..len` after the list changed.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// The current index, if the list has one.
    pub fn get(&self, len: usize) -> Option<usize> {
        (self.index < len).then_some(self.index)
    }
}
