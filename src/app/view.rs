// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery scrolls underneath; the video modal, when open, is stacked
//! on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use crate::ui::video_modal::VideoModal;
use iced::widget::{button, text, Column, Container, Row, Scrollable, Space, Stack};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub modal: &'a VideoModal,
    /// Lexicon key of a startup warning.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new().width(Length::Fill);
    if let Some(key) = ctx.warning {
        page = page.push(warning_notice(key, ctx.i18n));
    }
    page = page.push(ctx.gallery.view(ctx.i18n).map(Message::Gallery));

    let base = Scrollable::new(page)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.modal.view(ctx.i18n) {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay.map(Message::Modal))
            .into(),
        None => base.into(),
    }
}

fn warning_notice<'a>(key: &str, i18n: &I18n) -> Element<'a, Message> {
    let dismiss = button(text("\u{2715}").size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::close)
        .on_press(Message::DismissWarning);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::error_notice)
        .into()
}
