/// Hand-drawn look: ink borders, paper backgrounds, two highlight colours
use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::state::data::Tone;
use crate::state::settings::ThemeChoice;

pub const PAPER: Color = Color { r: 0.992, g: 0.984, b: 0.969, a: 1.0 };
pub const INK: Color = Color { r: 0.176, g: 0.176, b: 0.176, a: 1.0 };
pub const PRIMARY: Color = Color { r: 1.0, g: 0.302, b: 0.302, a: 1.0 };
pub const ACCENT: Color = Color { r: 0.176, g: 0.365, b: 0.631, a: 1.0 };

/// Build the iced theme for the configured colour scheme
pub fn theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Sketchbook => Theme::custom(
            "Sketchbook".to_string(),
            Palette {
                background: PAPER,
                text: INK,
                primary: PRIMARY,
                success: ACCENT,
                danger: PRIMARY,
            },
        ),
        ThemeChoice::Dark => Theme::Dark,
    }
}

/// Same colour at a different opacity
pub fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

fn ink_border(theme: &Theme, width: f32) -> Border {
    Border {
        color: theme.palette().text,
        width,
        radius: 3.0.into(),
    }
}

fn offset_shadow(theme: &Theme) -> Shadow {
    Shadow {
        color: theme.palette().text,
        offset: Vector::new(4.0, 4.0),
        blur_radius: 0.0,
    }
}

/// The main page sheet
pub fn sheet(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: ink_border(theme, 4.0),
        shadow: offset_shadow(theme),
        ..Default::default()
    }
}

/// Section box tinted by tone
pub fn section(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.palette();
        let tint = match tone {
            Tone::Plain => palette.background,
            Tone::Primary => faded(palette.primary, 0.10),
            Tone::Accent => faded(palette.success, 0.10),
        };
        container::Style {
            background: Some(Background::Color(tint)),
            border: ink_border(theme, 3.0),
            shadow: offset_shadow(theme),
            ..Default::default()
        }
    }
}

/// Stand-in frame for media the app does not load
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        text_color: Some(faded(palette.text, 0.5)),
        background: Some(Background::Color(faded(palette.text, 0.06))),
        border: Border {
            color: faded(palette.text, 0.4),
            width: 2.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Dark frame used for video embeds
pub fn screen_frame(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(PAPER),
        background: Some(Background::Color(INK)),
        border: ink_border(theme, 4.0),
        shadow: offset_shadow(theme),
        ..Default::default()
    }
}

/// Dashed-note box (quotes, captions)
pub fn note(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(Background::Color(faded(palette.primary, 0.10))),
        border: Border {
            color: palette.text,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Small coloured dot in the contact list
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: theme.palette().text,
            width: 3.0,
            radius: 20.0.into(),
        },
        ..Default::default()
    }
}

/// Button colour variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Neutral,
    Accent,
}

/// Sketchy button with a hard offset shadow that collapses when pressed
pub fn sketchy(variant: Variant) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.palette();
        let fill = match variant {
            Variant::Primary => palette.primary,
            Variant::Neutral => palette.background,
            Variant::Accent => palette.success,
        };
        let text_color = match variant {
            Variant::Neutral => palette.text,
            _ => PAPER,
        };

        let (fill, shadow) = match status {
            button::Status::Hovered => (faded(fill, 0.85), offset_shadow(theme)),
            button::Status::Pressed => (fill, Shadow::default()),
            button::Status::Disabled => (faded(fill, 0.5), Shadow::default()),
            button::Status::Active => (fill, offset_shadow(theme)),
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: ink_border(theme, 3.0),
            shadow,
        }
    }
}

/// Project card in the works grid
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let shadow = match status {
        button::Status::Hovered => Shadow {
            color: palette.text,
            offset: Vector::new(6.0, 8.0),
            blur_radius: 0.0,
        },
        _ => offset_shadow(theme),
    };

    button::Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: ink_border(theme, 4.0),
        shadow,
    }
}

/// Journal entry row in the research list
pub fn entry_row(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => faded(palette.primary, 0.2),
        _ => faded(palette.background, 0.6),
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette.text,
        border: ink_border(theme, 4.0),
        shadow: offset_shadow(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sketchbook_palette_uses_paper_and_ink() {
        let palette = theme(ThemeChoice::Sketchbook).palette();
        assert_eq!(palette.background, PAPER);
        assert_eq!(palette.text, INK);
    }

    #[test]
    fn test_pressed_button_drops_shadow() {
        let style = sketchy(Variant::Accent)(&Theme::Light, button::Status::Pressed);
        assert_eq!(style.shadow, Shadow::default());
        assert_eq!(style.text_color, PAPER);
    }
}
