// Event Resize Handles
//
// Hit zones and drawing for the top/bottom edge handles of an event block.
// The resize itself runs through `DayPlanner::begin_resize`.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::services::event::ResizeEdge;

/// Height of the hit zone, centred on the event edge
pub const HANDLE_ZONE_HEIGHT: f32 = 16.0;
/// Half-width of the chevron glyph
const CHEVRON_HALF_WIDTH: f32 = 5.0;
const CHEVRON_HEIGHT: f32 = 3.0;

impl ResizeEdge {
    /// Returns the cursor icon for this handle
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        egui::CursorIcon::ResizeVertical
    }
}

/// Hit zones for the two edges of an event block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleRects {
    pub fn for_event(event_rect: Rect) -> Self {
        let size = Vec2::new(event_rect.width(), HANDLE_ZONE_HEIGHT);
        Self {
            top: Rect::from_center_size(
                Pos2::new(event_rect.center().x, event_rect.top()),
                size,
            ),
            bottom: Rect::from_center_size(
                Pos2::new(event_rect.center().x, event_rect.bottom()),
                size,
            ),
        }
    }

    pub fn get(&self, edge: ResizeEdge) -> Rect {
        match edge {
            ResizeEdge::Top => self.top,
            ResizeEdge::Bottom => self.bottom,
        }
    }
}

/// Draw the chevrons for both handles. The hovered one is drawn brighter.
pub fn draw_handles(
    painter: &egui::Painter,
    handles: &HandleRects,
    hovered: Option<ResizeEdge>,
    color: Color32,
) {
    for edge in [ResizeEdge::Top, ResizeEdge::Bottom] {
        let rect = handles.get(edge);
        let stroke_color = if hovered == Some(edge) {
            Color32::WHITE
        } else {
            color.gamma_multiply(0.5)
        };

        let center = rect.center();
        // Top points up, bottom points down
        let tip_offset = match edge {
            ResizeEdge::Top => -CHEVRON_HEIGHT,
            ResizeEdge::Bottom => CHEVRON_HEIGHT,
        };
        let points = vec![
            Pos2::new(center.x - CHEVRON_HALF_WIDTH, center.y - tip_offset / 2.0),
            Pos2::new(center.x, center.y + tip_offset / 2.0),
            Pos2::new(center.x + CHEVRON_HALF_WIDTH, center.y - tip_offset / 2.0),
        ];
        painter.add(egui::Shape::line(points, Stroke::new(1.5, stroke_color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_rects_straddle_edges() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 64.0));
        let handles = HandleRects::for_event(rect);

        assert_eq!(handles.top.top(), 92.0);
        assert_eq!(handles.top.bottom(), 108.0);
        assert_eq!(handles.bottom.center().y, 164.0);
        assert_eq!(handles.top.width(), 200.0);
    }

    #[test]
    fn test_get_returns_zone_for_edge() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 64.0));
        let handles = HandleRects::for_event(rect);

        assert!(handles.get(ResizeEdge::Top).contains(Pos2::new(200.0, 97.0)));
        assert!(handles.get(ResizeEdge::Bottom).contains(Pos2::new(200.0, 166.0)));
        assert!(!handles.get(ResizeEdge::Top).contains(Pos2::new(200.0, 132.0)));
    }

    #[test]
    fn test_handles_on_short_event_do_not_overlap() {
        // Half-hour event is 32px tall
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 32.0));
        let handles = HandleRects::for_event(rect);
        assert!(!handles.top.intersects(handles.bottom));
    }
}
