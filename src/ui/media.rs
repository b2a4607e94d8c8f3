/// Media stand-ins
///
/// Image and video URIs are opaque to the app. These widgets frame them
/// with their alt text so the layout reads the same as it would with the
/// media loaded.
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::screen::video_id;
use crate::ui::style;
use crate::Message;

/// Framed placeholder for a single image
pub fn placeholder<'a>(uri: &'a str, alt: &'a str, height: f32) -> Element<'a, Message> {
    container(
        column![text(alt).size(20), text(uri).size(11)]
            .spacing(6)
            .align_x(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .style(style::placeholder)
    .into()
}

/// Row of numbered frames for images that are described but not catalogued
pub fn gallery<'a>(label: &'a str, count: u8, height: f32) -> Element<'a, Message> {
    let frames: Vec<Element<'a, Message>> = (1..=count)
        .map(|i| {
            container(text(format!("[{label} - Image {i}]")).size(18))
                .padding(12)
                .width(Length::Fixed(300.0))
                .height(Length::Fixed(height))
                .center_x(Length::Fixed(300.0))
                .center_y(Length::Fixed(height))
                .style(style::placeholder)
                .into()
        })
        .collect();

    Wrap::with_elements(frames)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// Video frame showing which clip would play
pub fn video(url: &str) -> Element<'_, Message> {
    container(
        column![
            text(format!("▶  {}", video_id(url))).size(28),
            text(url).size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(320.0))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(320.0))
    .style(style::screen_frame)
    .into()
}

/// Small caption crediting a background image
pub fn credit(uri: &str) -> Element<'_, Message> {
    text(uri).size(11).into()
}
