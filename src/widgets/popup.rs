use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, like a dropdown hanging off an input field.
///
/// The height is cut to what fits between the anchor and `bounds`' bottom.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let space_below = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(space_below),
    }
}

/// Area in the top-right corner of `bounds`, inset by `margin`
pub fn top_right(bounds: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(bounds.width.saturating_sub(margin * 2));
    let height = height.min(bounds.height.saturating_sub(margin));

    Rect {
        x: bounds.right().saturating_sub(width + margin),
        y: bounds.y + margin,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
