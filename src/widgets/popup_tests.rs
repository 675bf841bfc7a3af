use super::*;

#[test]
fn test_dropdown_sits_below_anchor() {
    let bounds = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(0, 0, 80, 3);

    let area = popup_below_anchor(anchor, bounds, 40, 10, 1);
    assert_eq!(area, Rect::new(1, 3, 40, 10));
}

#[test]
fn test_dropdown_width_limited_by_anchor() {
    let bounds = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(0, 0, 30, 3);

    let area = popup_below_anchor(anchor, bounds, 100, 5, 2);
    assert_eq!(area.width, 26);
}

#[test]
fn test_dropdown_height_limited_by_bounds() {
    let bounds = Rect::new(0, 0, 80, 8);
    let anchor = Rect::new(0, 0, 80, 3);

    let area = popup_below_anchor(anchor, bounds, 40, 10, 0);
    assert_eq!(area.height, 5);
}

#[test]
fn test_dropdown_without_space_is_empty() {
    let bounds = Rect::new(0, 0, 80, 3);
    let anchor = Rect::new(0, 0, 80, 3);

    let area = popup_below_anchor(anchor, bounds, 40, 10, 0);
    assert_eq!(area.height, 0);
}

#[test]
fn test_top_right_corner() {
    let bounds = Rect::new(0, 0, 80, 24);

    let area = top_right(bounds, 30, 3, 1);
    assert_eq!(area, Rect::new(49, 1, 30, 3));
}

#[test]
fn test_top_right_clamped_to_small_terminal() {
    let bounds = Rect::new(0, 0, 10, 2);

    let area = top_right(bounds, 30, 3, 1);
    assert_eq!(area.width, 8);
    assert_eq!(area.height, 1);
    assert_eq!(area.x, 1);
}
