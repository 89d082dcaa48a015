use ratatui::layout::Rect;

/// Screen regions of the home screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub universes: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let universes_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height)
            .saturating_sub(universes_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let universes = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: universes_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + universes_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + universes_height + footer_height),
    };
    Regions {
        header,
        universes,
        body,
        footer,
    }
}

/// Horizontal scroll offset that keeps the item at `cursor` fully visible.
///
/// `widths` are the rendered widths of the items, gaps included.
pub fn horizontal_offset(widths: &[u16], cursor: usize, available: u16) -> u16 {
    if widths.is_empty() || available == 0 {
        return 0;
    }
    let cursor = cursor.min(widths.len() - 1);
    let start: u16 = widths[..cursor].iter().copied().fold(0u16, u16::saturating_add);
    let end = start.saturating_add(widths[cursor]);
    end.saturating_sub(available).min(start)
}
