// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card frame around a cover.
pub fn card(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Neutral fill shown when an item has no cover (or it failed to load).
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark band carrying the title at the bottom of a card.
pub fn title_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TITLE_BAND,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius::MD,
                bottom_left: radius::MD,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Scrim covering the gallery while the video modal is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Video modal surface.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MODAL,
        ..Default::default()
    }
}

/// Error message inside the modal.
pub fn error_notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLAY_OVERLAY,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
