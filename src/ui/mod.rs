/// User interface module
///
/// - Page templates for every screen (pages.rs)
/// - Canvas programs for the room and the creation map (room.rs, map.rs)
/// - Stand-ins for media the app never downloads (media.rs)
/// - Sketchbook theme and widget styles (style.rs)

pub mod map;
pub mod media;
pub mod pages;
pub mod room;
pub mod style;
