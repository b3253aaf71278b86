// SPDX-License-Identifier: MPL-2.0
//! Per-language link resolution for documents and flipbooks.
//!
//! For each language the document reference wins; the flipbook reference is
//! the fallback. Videos never carry language links.

use super::ContentItem;

/// Languages a record can be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    /// Short label rendered under a card.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Arabic => "AR",
        }
    }
}

/// Resolved links for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageLinks<'a> {
    pub english: Option<&'a str>,
    pub arabic: Option<&'a str>,
}

impl<'a> LanguageLinks<'a> {
    /// A separator is drawn only between two links.
    #[must_use]
    pub fn needs_separator(&self) -> bool {
        self.english.is_some() && self.arabic.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.english.is_none() && self.arabic.is_none()
    }

    /// Present links in display order (English first).
    pub fn iter(&self) -> impl Iterator<Item = (Language, &'a str)> {
        [
            (Language::English, self.english),
            (Language::Arabic, self.arabic),
        ]
        .into_iter()
        .filter_map(|(language, url)| url.map(|url| (language, url)))
    }
}

/// Resolves the effective link per language, or `None` for videos.
#[must_use]
pub fn language_links(item: &ContentItem) -> Option<LanguageLinks<'_>> {
    if item.content_type.is_video() {
        return None;
    }

    Some(LanguageLinks {
        english: item
            .document_url_en
            .as_deref()
            .or(item.flipbook_url_en.as_deref()),
        arabic: item
            .document_url_ar
            .as_deref()
            .or(item.flipbook_url_ar.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    #[test]
    fn english_document_only_has_no_separator() {
        let mut item = ContentItem::new("1", "t", 2020, ContentType::Document);
        item.document_url_en = Some("en.pdf".into());

        let links = language_links(&item).expect("documents have links");
        assert_eq!(links.english, Some("en.pdf"));
        assert_eq!(links.arabic, None);
        assert!(!links.needs_separator());
        assert_eq!(links.iter().count(), 1);
    }

    #[test]
    fn document_reference_wins_over_flipbook() {
        let mut item = ContentItem::new("1", "t", 2020, ContentType::Flipbook);
        item.document_url_en = Some("en.pdf".into());
        item.flipbook_url_en = Some("en-flip".into());
        item.flipbook_url_ar = Some("ar-flip".into());

        let links = language_links(&item).expect("flipbooks have links");
        assert_eq!(links.english, Some("en.pdf"));
        assert_eq!(links.arabic, Some("ar-flip"));
        assert!(links.needs_separator());

        let order: Vec<_> = links.iter().map(|(lang, _)| lang.code()).collect();
        assert_eq!(order, vec!["EN", "AR"]);
    }

    #[test]
    fn videos_have_no_language_links() {
        let mut item = ContentItem::new("1", "t", 2020, ContentType::Video);
        item.document_url_en = Some("en.pdf".into());
        assert!(language_links(&item).is_none());
    }

    #[test]
    fn no_references_yields_empty_links() {
        let item = ContentItem::new("1", "t", 2020, ContentType::Document);
        let links = language_links(&item).expect("documents have links");
        assert!(links.is_empty());
        assert!(!links.needs_separator());
    }
}
