use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(anchor.y),
    }
}

/// Below the anchor when it fits, otherwise whichever side has more room
pub fn popup_near_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let below = popup_below_anchor(anchor, bounds, width, height);
    if below.height >= height {
        return below;
    }
    let above = popup_above_anchor(anchor, width, height);
    if above.height > below.height { above } else { below }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
