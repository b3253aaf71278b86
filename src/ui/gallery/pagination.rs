// SPDX-License-Identifier: MPL-2.0
//! Previous / page numbers / Next.

use super::component::Message;
use crate::application::query::{PageLink, Pagination};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{alignment::Vertical, Element, Length};

/// Renders the control, or nothing when everything fits on one page.
pub fn view<'a>(pagination: &Pagination, i18n: &I18n) -> Option<Element<'a, Message>> {
    if !pagination.is_needed() {
        return None;
    }

    let previous = step_button(
        i18n.tr("pagination-previous"),
        pagination.previous(),
    );
    let next = step_button(i18n.tr("pagination-next"), pagination.next());

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(previous);

    for link in &pagination.links {
        row = row.push(match *link {
            PageLink::Page(page) => page_button(page, page == pagination.current),
            PageLink::Ellipsis => text("\u{2026}")
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        });
    }

    Some(row.push(next).into())
}

fn step_button<'a>(label: String, target: Option<usize>) -> Element<'a, Message> {
    let style = if target.is_some() {
        styles::button::primary
    } else {
        styles::button::disabled
    };
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press_maybe(target.map(Message::PageSelected))
        .into()
}

fn page_button<'a>(page: usize, is_current: bool) -> Element<'a, Message> {
    button(text(page.to_string()).size(typography::BODY).center())
        .width(Length::Fixed(sizing::PAGE_BUTTON))
        .height(Length::Fixed(sizing::PAGE_BUTTON))
        .style(styles::button::page(is_current))
        .on_press(Message::PageSelected(page))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(view(&Pagination::new(1, 1), &i18n()).is_none());
        assert!(view(&Pagination::new(1, 0), &i18n()).is_none());
    }

    #[test]
    fn multiple_pages_render_a_control() {
        assert!(view(&Pagination::new(1, 2), &i18n()).is_some());
    }
}
