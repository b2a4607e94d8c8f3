/// Creation map
/// Four category markers over a hand-drawn landscape
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Point, Rectangle, Size};

use crate::screen::MapMarker;
use crate::state::data::Category;
use crate::state::navigator::Navigation;
use crate::ui::room::label;
use crate::ui::style::faded;
use crate::Message;

/// Click radius around a marker, in pixels
const MARKER_RADIUS: f32 = 24.0;

/// Canvas program for the map view
#[derive(Debug, Clone)]
pub struct CreationMap {
    pub markers: &'static [MapMarker],
}

impl CreationMap {
    fn marker_center(marker: &MapMarker, size: Size) -> Point {
        Point::new(marker.x * size.width, marker.y * size.height)
    }

    /// Category whose marker is under `point` (map-local coordinates)
    pub fn marker_at(&self, point: Point, size: Size) -> Option<Category> {
        self.markers
            .iter()
            .find(|marker| Self::marker_center(marker, size).distance(point) <= MARKER_RADIUS)
            .map(|marker| marker.category)
    }
}

impl canvas::Program<Message> for CreationMap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let size = bounds.size();
        let mut frame = canvas::Frame::new(renderer, size);
        let palette = theme.palette();
        let ink = palette.text;

        frame.fill_rectangle(Point::ORIGIN, size, faded(palette.success, 0.08));
        frame.stroke(
            &Path::rectangle(Point::ORIGIN, size),
            Stroke::default().with_color(ink).with_width(4.0),
        );

        // A winding path connecting the four rooms, in marker order
        let mut trail = canvas::path::Builder::new();
        for (i, marker) in self.markers.iter().enumerate() {
            let center = Self::marker_center(marker, size);
            if i == 0 {
                trail.move_to(center);
            } else {
                trail.line_to(center);
            }
        }
        frame.stroke(
            &trail.build(),
            Stroke::default()
                .with_color(faded(ink, 0.3))
                .with_width(6.0),
        );

        let hovered = cursor
            .position_in(bounds)
            .and_then(|point| self.marker_at(point, size));

        for marker in self.markers {
            let center = Self::marker_center(marker, size);
            let fill = if hovered == Some(marker.category) {
                palette.primary
            } else {
                palette.background
            };

            frame.fill(&Path::circle(center, MARKER_RADIUS * 0.6), fill);
            frame.stroke(
                &Path::circle(center, MARKER_RADIUS * 0.6),
                Stroke::default().with_color(ink).with_width(3.0),
            );
            frame.fill_text(label(
                marker.category.short_label().to_string(),
                Point::new(center.x, center.y + MARKER_RADIUS + 8.0),
                faded(ink, 0.7),
                15.0,
            ));
        }

        // Tooltip with the full room name
        if let Some(category) = hovered {
            if let Some(marker) = self.markers.iter().find(|m| m.category == category) {
                let center = Self::marker_center(marker, size);
                let tip_size = Size::new(category.label().len() as f32 * 9.0, 34.0);
                let tip_origin = Point::new(
                    (center.x - tip_size.width / 2.0).max(4.0),
                    (center.y - MARKER_RADIUS - tip_size.height - 8.0).max(4.0),
                );

                frame.fill_rectangle(tip_origin, tip_size, palette.background);
                frame.stroke(
                    &Path::rectangle(tip_origin, tip_size),
                    Stroke::default().with_color(ink).with_width(3.0),
                );
                frame.fill_text(label(
                    category.label().to_string(),
                    Point::new(
                        tip_origin.x + tip_size.width / 2.0,
                        tip_origin.y + tip_size.height / 2.0,
                    ),
                    ink,
                    17.0,
                ));
            }
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(category) = cursor
                .position_in(bounds)
                .and_then(|point| self.marker_at(point, bounds.size()))
            {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::Navigate(Navigation::GoProjects(Some(category)))),
                );
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        let over_marker = cursor
            .position_in(bounds)
            .and_then(|point| self.marker_at(point, bounds.size()))
            .is_some();

        if over_marker {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
