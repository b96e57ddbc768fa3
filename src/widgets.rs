//! Clickable list: rendered lines paired with their click actions.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::Block;

use crate::input::ClickState;

/// Lines for a `Paragraph`, some bound to action IDs.
///
/// Targets follow their line: inserting a line above a clickable one moves the
/// target down with it. Call [`register_targets`](ClickableList::register_targets)
/// (or the `_with_block` variant) once per frame, before consuming the list.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for every clickable line.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders.
    /// * `scroll`: visual rows scrolled out at the top.
    /// * `inner_width`: wrap width, or `0` when the paragraph doesn't wrap.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let h = wrapped_rows(line.width(), inner_width);
            starts.push(cumulative);
            heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            let (Some(&start), Some(&height)) = (starts.get(li), heights.get(li)) else {
                continue;
            };
            for r in 0..height {
                let vr = start + r;
                if vr < scroll {
                    continue;
                }
                let row = content_y + (vr - scroll);
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }

    /// Same as [`register_targets`](Self::register_targets), with offsets and
    /// wrap width taken from the block's inner area.
    pub fn register_targets_with_block(
        &self,
        area: Rect,
        block: &Block,
        cs: &mut ClickState,
        scroll: u16,
        wrap: bool,
    ) {
        let inner = block.inner(area);
        let top = inner.y.saturating_sub(area.y);
        let bottom = (area.y + area.height).saturating_sub(inner.y + inner.height);
        let width = if wrap { inner.width } else { 0 };
        self.register_targets(area, cs, top, bottom, scroll, width);
    }
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn wrapped_rows(line_width: usize, width: u16) -> u16 {
    let w = width as usize;
    if w == 0 || line_width <= w {
        1
    } else {
        line_width.div_ceil(w) as u16
    }
}
