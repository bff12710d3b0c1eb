use ratatui::layout::{Position, Rect};

use crate::ui::layout::centered_rect;

use super::props::DialogSize;

/// Width of the `[x]` close control.
pub const CLOSE_CONTROL_WIDTH: u16 = 3;

/// Screen regions of a drawn dialog, kept for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRegions {
    /// Whole surface, backdrop included.
    pub surface: Rect,
    /// Bordered content box. Anything outside it counts as the backdrop.
    pub content: Rect,
    pub header: Option<Rect>,
    pub close_control: Option<Rect>,
    pub body: Rect,
}

impl DialogRegions {
    pub fn compute(area: Rect, size: DialogSize, has_header: bool, has_close_control: bool) -> Self {
        let content = centered_rect(size.width_percent, size.height_percent, area);
        let inner = inset(content);

        let header = (has_header && inner.height > 0).then(|| Rect {
            height: 1,
            ..inner
        });
        let close_control = header
            .filter(|header| has_close_control && header.width >= CLOSE_CONTROL_WIDTH)
            .map(|header| Rect {
                x: header.right() - CLOSE_CONTROL_WIDTH,
                y: header.y,
                width: CLOSE_CONTROL_WIDTH,
                height: 1,
            });
        let header_rows = if header.is_some() { 2 } else { 0 };
        let body = Rect {
            x: inner.x,
            y: inner.y + header_rows.min(inner.height),
            width: inner.width,
            height: inner.height.saturating_sub(header_rows),
        };

        Self {
            surface: area,
            content,
            header,
            close_control,
            body,
        }
    }

    /// Whether `position` lies inside the content box, border included.
    pub fn contains(&self, position: Position) -> bool {
        self.content.contains(position)
    }

    pub fn hits_close_control(&self, position: Position) -> bool {
        self.close_control
            .is_some_and(|control| control.contains(position))
    }
}

/// Area inside a one-cell border.
fn inset(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}
