// SPDX-License-Identifier: MPL-2.0
//! A single gallery card: cover, title band, play overlay and language links.

use super::component::Message;
use crate::domain::content::{language_links, ContentItem, ContentType};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, text, Column, Container, Row, Stack};
use iced::{alignment, ContentFit, Element, Length};

/// Card proportions. Videos are wide, everything else is a portrait page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAspect {
    /// 3:4
    Portrait,
    /// 16:9
    Wide,
}

impl CardAspect {
    #[must_use]
    pub fn for_type(content_type: ContentType) -> Self {
        if content_type.is_video() {
            CardAspect::Wide
        } else {
            CardAspect::Portrait
        }
    }

    /// Height divided by width.
    #[must_use]
    pub fn ratio(self) -> f32 {
        match self {
            CardAspect::Portrait => 4.0 / 3.0,
            CardAspect::Wide => 9.0 / 16.0,
        }
    }

    #[must_use]
    pub fn height_for(self, width: f32) -> f32 {
        width * self.ratio()
    }
}

/// Renders one card. `cover` is the decoded thumbnail, if any.
pub fn view<'a>(
    item: &'a ContentItem,
    cover: Option<&image::Handle>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let width = sizing::CARD_WIDTH;
    let height = CardAspect::for_type(item.content_type).height_for(width);

    let backdrop: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(text(i18n.tr("card-no-image")).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    let mut surface = Stack::new()
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .push(backdrop);

    if let Some(url) = item.playable_video() {
        surface = surface.push(play_overlay(url, i18n));
    }

    let title_band = container(
        text(item.title.as_str())
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .padding([spacing::XS, spacing::SM])
    .width(Length::Fill)
    .style(styles::container::title_band);

    surface = surface.push(
        Container::new(title_band)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom),
    );

    let framed = Container::new(surface)
        .width(Length::Fixed(width))
        .style(styles::container::card);

    let mut column = Column::new().spacing(spacing::XXS).push(framed);
    if let Some(links) = links_row(item) {
        column = column.push(links);
    }
    column.into()
}

/// Whole-card play button with a centered badge.
fn play_overlay<'a>(url: &str, i18n: &I18n) -> Element<'a, Message> {
    let badge = button(
        text("\u{25B6}").size(typography::TITLE_SM).center(),
    )
    .width(Length::Fixed(sizing::PLAY_BUTTON))
    .height(Length::Fixed(sizing::PLAY_BUTTON))
    .style(styles::button::play_badge)
    .on_press(Message::PlayRequested(url.to_string()));

    let hint = text(i18n.tr("card-play")).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(badge)
        .push(hint);

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(0)
    .style(styles::button::play_overlay)
    .on_press(Message::PlayRequested(url.to_string()))
    .into()
}

/// "EN | AR" row under documents and flipbooks.
fn links_row<'a>(item: &ContentItem) -> Option<Element<'a, Message>> {
    let links = language_links(item)?;
    if links.is_empty() {
        return None;
    }

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);
    for (index, (language, url)) in links.iter().enumerate() {
        if index > 0 && links.needs_separator() {
            row = row.push(text("|").size(typography::CAPTION).color(palette::GRAY_400));
        }
        row = row.push(
            button(text(language.code()).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(styles::button::link)
                .on_press(Message::LinkPressed(url.to_string())),
        );
    }
    Some(row.into())
}
