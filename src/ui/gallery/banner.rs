// SPDX-License-Identifier: MPL-2.0
//! Static banner above the filter bar, with the localized heading on top.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{svg, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

const BANNER_SVG: &[u8] = include_bytes!("../../../assets/branding/banner.svg");

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let artwork = svg(svg::Handle::from_memory(BANNER_SVG))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BANNER_HEIGHT));

    // Right-to-left locales read the heading from the right edge.
    let side = if i18n.is_rtl() {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    let heading = Column::new()
        .spacing(spacing::XXS)
        .align_x(side)
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .push(
            Text::new(i18n.tr("gallery-subtitle"))
                .size(typography::BODY)
                .color(palette::WHITE),
        );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BANNER_HEIGHT))
        .push(artwork)
        .push(
            Container::new(heading)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([spacing::LG, spacing::XL * 4.0])
                .align_x(side)
                .align_y(alignment::Vertical::Center),
        )
        .into()
}
