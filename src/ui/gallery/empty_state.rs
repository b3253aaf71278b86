// SPDX-License-Identifier: MPL-2.0
//! Placeholders shown instead of the grid.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// No item passes the current filter (or nothing was loaded).
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(i18n.tr("gallery-empty"))
}

/// Fetch still in flight.
pub fn loading<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(i18n.tr("gallery-loading"))
}

fn centered<'a>(message: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(message)
                .size(typography::TITLE_SM)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
