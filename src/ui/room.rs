use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Frame, Path, Program, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::state::data::ProjectRecord;
use crate::state::navigator::Navigation;
use crate::ui::style::faded;
use crate::Message;

/// Rectangle in fractions of the room size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Area {
    const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }

    /// Scale to absolute coordinates inside a frame of `size`
    fn scaled(&self, size: Size) -> (Point, Size) {
        (
            Point::new(self.left * size.width, self.top * size.height),
            Size::new(
                (self.right - self.left) * size.width,
                (self.bottom - self.top) * size.height,
            ),
        )
    }

    fn center(&self, size: Size) -> Point {
        Point::new(
            (self.left + self.right) / 2.0 * size.width,
            (self.top + self.bottom) / 2.0 * size.height,
        )
    }
}

/// Clickable objects in the room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotspot {
    /// The window showing the carousel; leads to the map
    Window,
    /// Name badge under the character
    AboutBadge,
    /// Pile of books on the floor
    Books,
    Bell,
}

impl Hotspot {
    pub const ALL: [Hotspot; 4] = [
        Hotspot::Window,
        Hotspot::AboutBadge,
        Hotspot::Books,
        Hotspot::Bell,
    ];

    pub fn area(self) -> Area {
        match self {
            Hotspot::Window => Area::new(0.05, 0.03, 0.95, 0.43),
            Hotspot::AboutBadge => Area::new(0.18, 0.80, 0.34, 0.88),
            Hotspot::Books => Area::new(0.63, 0.70, 0.75, 0.84),
            Hotspot::Bell => Area::new(0.45, 0.86, 0.55, 0.97),
        }
    }

    pub fn target(self) -> Navigation {
        match self {
            Hotspot::Window => Navigation::GoMap,
            Hotspot::AboutBadge => Navigation::GoAbout,
            Hotspot::Books => Navigation::GoResearchList,
            Hotspot::Bell => Navigation::GoContact,
        }
    }

    /// Hover hint
    pub fn hint(self) -> &'static str {
        match self {
            Hotspot::Window => "Enter Map",
            Hotspot::AboutBadge => "About",
            Hotspot::Books => "Research",
            Hotspot::Bell => "Contact",
        }
    }
}

/// Hotspot under a point given in room-local coordinates
pub fn hotspot_at(point: Point, size: Size) -> Option<Hotspot> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }
    let (x, y) = (point.x / size.width, point.y / size.height);
    Hotspot::ALL.into_iter().find(|spot| spot.area().contains(x, y))
}

// Decorations that do not react to clicks
const FLOOR_Y: f32 = 0.5;
const CHARACTER: Area = Area::new(0.21, 0.47, 0.31, 0.79);
const PLANT: Area = Area::new(0.80, 0.55, 0.90, 0.69);

/// Canvas program drawing the sketch room.
/// The window shows the project currently featured by the carousel.
pub struct SketchRoom<'a> {
    pub featured: &'a ProjectRecord,
    pub position: usize,
    pub total: usize,
}

impl Program<Message> for SketchRoom<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        let palette = theme.palette();
        let ink = palette.text;
        let pen = |width: f32| Stroke::default().with_color(ink).with_width(width);

        let hovered = cursor
            .position_in(bounds)
            .and_then(|point| hotspot_at(point, size));

        // Walls and floor
        frame.fill_rectangle(Point::ORIGIN, size, faded(ink, 0.05));
        frame.stroke(&Path::rectangle(Point::ORIGIN, size), pen(4.0));
        frame.stroke(
            &Path::line(
                Point::new(0.0, FLOOR_Y * size.height),
                Point::new(size.width, FLOOR_Y * size.height),
            ),
            pen(3.0),
        );

        // Window with the featured project behind the glass
        let window = Hotspot::Window.area();
        let (origin, window_size) = window.scaled(size);
        let glass = if hovered == Some(Hotspot::Window) {
            palette.background
        } else {
            faded(palette.primary, 0.2)
        };
        frame.fill_rectangle(origin, window_size, glass);
        frame.stroke(&Path::rectangle(origin, window_size), pen(4.0));
        let mullion_x = origin.x + window_size.width / 2.0;
        frame.stroke(
            &Path::line(
                Point::new(mullion_x, origin.y),
                Point::new(mullion_x, origin.y + window_size.height),
            ),
            pen(2.0),
        );

        let center = window.center(size);
        frame.fill_text(label(
            self.featured.title.clone(),
            Point::new(center.x, center.y - 12.0),
            ink,
            26.0,
        ));
        frame.fill_text(label(
            format!("{} / {}", self.position + 1, self.total),
            Point::new(center.x, center.y + 20.0),
            faded(ink, 0.6),
            16.0,
        ));

        // Character
        let (body_origin, body_size) = CHARACTER.scaled(size);
        let head_radius = body_size.width * 0.35;
        let head = Point::new(
            body_origin.x + body_size.width / 2.0,
            body_origin.y + head_radius,
        );
        frame.stroke(&Path::circle(head, head_radius), pen(3.0));
        frame.stroke(
            &Path::rectangle(
                Point::new(body_origin.x, body_origin.y + head_radius * 2.2),
                Size::new(body_size.width, body_size.height - head_radius * 2.2),
            ),
            pen(3.0),
        );

        // Plant
        let (plant_origin, plant_size) = PLANT.scaled(size);
        let pot_top = plant_origin.y + plant_size.height * 0.6;
        frame.fill_rectangle(
            Point::new(plant_origin.x + plant_size.width * 0.2, pot_top),
            Size::new(plant_size.width * 0.6, plant_size.height * 0.4),
            faded(palette.primary, 0.5),
        );
        for offset in [-0.25, 0.0, 0.25] {
            frame.stroke(
                &Path::circle(
                    Point::new(
                        plant_origin.x + plant_size.width * (0.5 + offset),
                        plant_origin.y + plant_size.height * 0.3,
                    ),
                    plant_size.width * 0.2,
                ),
                pen(2.0),
            );
        }

        // Clickable props
        for spot in [Hotspot::AboutBadge, Hotspot::Books, Hotspot::Bell] {
            let (origin, spot_size) = spot.area().scaled(size);
            let fill = if hovered == Some(spot) {
                faded(palette.primary, 0.35)
            } else {
                palette.background
            };
            frame.fill_rectangle(origin, spot_size, fill);
            frame.stroke(&Path::rectangle(origin, spot_size), pen(3.0));
            frame.fill_text(label(
                spot.hint().to_string(),
                spot.area().center(size),
                ink,
                18.0,
            ));
        }

        if let Some(Hotspot::Window) = hovered {
            frame.fill_text(label(
                Hotspot::Window.hint().to_string(),
                Point::new(origin.x + window_size.width - 60.0, origin.y + window_size.height - 20.0),
                ink,
                16.0,
            ));
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
            if let Some(spot) = cursor
                .position_in(bounds)
                .and_then(|point| hotspot_at(point, bounds.size()))
            {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::Navigate(spot.target())),
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
        match cursor
            .position_in(bounds)
            .and_then(|point| hotspot_at(point, bounds.size()))
        {
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

/// Centered canvas text
pub fn label(content: String, position: Point, color: Color, size: f32) -> Text {
    Text {
        content,
        position,
        color,
        size: Pixels(size),
        horizontal_alignment: Horizontal::Center,
        vertical_alignment: Vertical::Center,
        ..Text::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: Size = Size { width: 1000.0, height: 800.0 };

    fn center_of(spot: Hotspot) -> Point {
        spot.area().center(ROOM)
    }

    #[test]
    fn test_each_hotspot_is_hit_at_its_center() {
        for spot in Hotspot::ALL {
            assert_eq!(hotspot_at(center_of(spot), ROOM), Some(spot));
        }
    }

    #[test]
    fn test_hotspots_do_not_overlap() {
        for a in Hotspot::ALL {
            for b in Hotspot::ALL {
                if a == b {
                    continue;
                }
                let (a, b) = (a.area(), b.area());
                let disjoint = a.right < b.left
                    || b.right < a.left
                    || a.bottom < b.top
                    || b.bottom < a.top;
                assert!(disjoint, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_decorations_are_not_clickable() {
        assert_eq!(hotspot_at(PLANT.center(ROOM), ROOM), None);
        assert_eq!(hotspot_at(CHARACTER.center(ROOM), ROOM), None);
        assert_eq!(hotspot_at(Point::new(5.0, 790.0), ROOM), None);
    }

    #[test]
    fn test_hotspot_targets() {
        assert_eq!(Hotspot::Window.target(), Navigation::GoMap);
        assert_eq!(Hotspot::AboutBadge.target(), Navigation::GoAbout);
        assert_eq!(Hotspot::Books.target(), Navigation::GoResearchList);
        assert_eq!(Hotspot::Bell.target(), Navigation::GoContact);
    }

    #[test]
    fn test_empty_room_has_no_hotspots() {
        assert_eq!(hotspot_at(Point::ORIGIN, Size::ZERO), None);
    }
}
