// SPDX-License-Identifier: MPL-2.0
//! Filter bar: content type, sort order and reset.

use super::component::Message;
use crate::application::query::GalleryQuery;
use crate::domain::content::{ContentTypeFilter, SortOrder};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text, Row};
use iced::{alignment::Vertical, Element, Length};

/// Content type option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterOption {
    filter: ContentTypeFilter,
    label: String,
}

impl std::fmt::Display for FilterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Sort order option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortOption {
    sort: SortOrder,
    label: String,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn filter_options(i18n: &I18n) -> Vec<FilterOption> {
    ContentTypeFilter::OPTIONS
        .iter()
        .map(|filter| FilterOption {
            filter: *filter,
            label: i18n.tr(filter.i18n_key()),
        })
        .collect()
}

fn sort_options(i18n: &I18n) -> Vec<SortOption> {
    SortOrder::OPTIONS
        .iter()
        .map(|sort| SortOption {
            sort: *sort,
            label: i18n.tr(sort.i18n_key()),
        })
        .collect()
}

pub fn view<'a>(query: &GalleryQuery, i18n: &I18n) -> Element<'a, Message> {
    let filters = filter_options(i18n);
    let selected_filter = filters.iter().find(|o| o.filter == query.filter).cloned();
    let filter_picker = pick_list(filters, selected_filter, |opt| {
        Message::FilterSelected(opt.filter)
    })
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    let sorts = sort_options(i18n);
    let selected_sort = sorts.iter().find(|o| o.sort == query.sort).cloned();
    let sort_picker = pick_list(sorts, selected_sort, |opt| Message::SortSelected(opt.sort))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    let reset = button(text(i18n.tr("filter-reset")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ResetFilters);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("filter-label")).size(typography::BODY))
        .push(filter_picker)
        .push(text(i18n.tr("sort-label")).size(typography::BODY))
        .push(sort_picker)
        .push(reset)
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
    fn filter_options_use_lexicon_labels() {
        let labels: Vec<String> = filter_options(&i18n()).into_iter().map(|o| o.label).collect();
        assert_eq!(labels.len(), ContentTypeFilter::OPTIONS.len());
        assert!(labels.iter().all(|label| !label.starts_with("MISSING")));
    }

    #[test]
    fn sort_options_follow_declared_order() {
        let options = sort_options(&i18n());
        assert_eq!(options[0].sort, SortOrder::Latest);
        assert_eq!(options[1].sort, SortOrder::Oldest);
    }
}
