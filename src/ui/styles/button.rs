// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn is_light(theme: &Theme) -> bool {
    !theme.extended_palette().is_dark
}

/// Primary action (reset filters, modal transport).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => {
            return disabled(theme, status);
        }
        _ => (palette::PRIMARY_500, palette::PRIMARY_600),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Grayed out, non-interactive (Previous on page 1, Next on the last page).
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let (background, text_color) = if is_light(theme) {
        (palette::GRAY_100, palette::GRAY_400)
    } else {
        (palette::GRAY_800, palette::GRAY_700)
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color {
                a: opacity::DISABLED,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Page number button; the current page is filled with the brand color.
pub fn page(is_current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if is_current {
            return primary(theme, button::Status::Active);
        }

        let (background, text_color) = if is_light(theme) {
            (palette::WHITE, palette::GRAY_900)
        } else {
            (palette::GRAY_800, WHITE)
        };
        let border_color = match status {
            button::Status::Hovered => palette::PRIMARY_500,
            _ => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Text-only link ("EN", "AR").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = if is_light(theme) {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => base,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Transparent full-card button over video covers.
pub fn play_overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::PLAY_OVERLAY_HOVER,
        _ => opacity::PLAY_OVERLAY,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round play glyph holder centered on video covers.
pub fn play_badge(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        snap: true,
    }
}

/// Close button in the modal corner.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::TITLE_BAND,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
