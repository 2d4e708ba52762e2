use crate::{
    book::sheet::{Sheet, map_sheet, total_sheets},
    config::DesktopConfig,
    content::model::Page,
};

/// Render-only placement of one sheet around the spine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SheetVisual {
    pub is_flipped: bool,
    /// Stacking rank; higher draws on top.
    pub z_order: usize,
    /// Rotation about the spine in degrees (`-180` once turned to the left stack).
    pub rotation_deg: f64,
    /// Physical depth offset in px.
    pub z_offset: f64,
}

/// Desktop book: a single current-sheet index moved one step at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipController {
    current: usize,
    total: usize,
    thickness: f64,
}

impl FlipController {
    pub fn new(page_count: usize, cfg: &DesktopConfig) -> Self {
        Self {
            current: 0,
            total: total_sheets(page_count),
            thickness: cfg.sheet_thickness_px,
        }
    }

    pub fn current_sheet(&self) -> usize {
        self.current
    }

    pub fn total_sheets(&self) -> usize {
        self.total
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.total
    }

    pub fn can_previous(&self) -> bool {
        self.current > 0
    }

    /// Flip the next sheet over. Returns `false` (and does nothing) at the back cover.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current += 1;
        tracing::trace!(sheet = self.current, "desktop flip forward");
        true
    }

    /// Flip the last turned sheet back. Returns `false` (and does nothing) at the front cover.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.current -= 1;
        tracing::trace!(sheet = self.current, "desktop flip back");
        true
    }

    /// A click on any visible face moves one step: turned sheets go back, the rest go forward.
    pub fn click_sheet(&mut self, index: usize) -> bool {
        if self.is_flipped(index) {
            self.previous()
        } else {
            self.next()
        }
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        index < self.current
    }

    pub fn visual_state_of(&self, index: usize) -> SheetVisual {
        let is_flipped = self.is_flipped(index);
        // Left stack ascends toward the spine, right stack descends away from it.
        let rank = if is_flipped {
            index
        } else {
            self.total.saturating_sub(index)
        };
        SheetVisual {
            is_flipped,
            z_order: rank,
            rotation_deg: if is_flipped { -180.0 } else { 0.0 },
            z_offset: rank as f64 * self.thickness,
        }
    }

    /// Every sheet with its faces and current placement, front cover first.
    pub fn sheets<'a>(
        &'a self,
        pages: &'a [Page],
    ) -> impl Iterator<Item = (Sheet<'a>, SheetVisual)> + 'a {
        (0..self.total).map(move |i| (map_sheet(i, pages), self.visual_state_of(i)))
    }

    /// Footer text between the prev/next buttons.
    pub fn page_label(&self) -> String {
        format!("PAGE {} OF {}", self.current, self.total - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/desktop.rs"]
mod tests;
