/// Category filtering and pagination over the article list
use super::articles::{Article, Category};

/// Articles shown per page
pub const ITEMS_PER_PAGE: usize = 6;

/// Category tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in display order
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, article: &Article) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => article.category == category,
        }
    }
}

/// Which slice of the article list is visible.
///
/// Pages are 1-based, like the page buttons the user sees.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    articles: &'static [Article],
    filter: CategoryFilter,
    page: usize,
}

impl NewsFeed {
    pub fn new(articles: &'static [Article]) -> Self {
        Self {
            articles,
            filter: CategoryFilter::All,
            page: 1,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Switch category tab; always goes back to the first page
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Articles in the selected category, in declaration order
    pub fn filtered(&self) -> impl Iterator<Item = &'static Article> + '_ {
        let filter = self.filter;
        self.articles.iter().filter(move |article| filter.matches(article))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// Never less than 1, so an empty category still has a (blank) page
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(ITEMS_PER_PAGE).max(1)
    }

    /// Articles on the current page
    pub fn page_items(&self) -> Vec<&'static Article> {
        self.filtered()
            .skip((self.page - 1) * ITEMS_PER_PAGE)
            .take(ITEMS_PER_PAGE)
            .collect()
    }

    /// Jump to a page, clamped to the valid range
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::articles::ARTICLES;

    fn article(id: &'static str, category: Category) -> Article {
        Article {
            id,
            title: id,
            date: "May 2024",
            category,
            excerpt: "",
            content: "",
            image: None,
            slug: id,
            featured: true,
            external_link: None,
            video_id: None,
        }
    }

    /// 14 articles: 8 "Our News", 6 "In The Media"
    fn many() -> &'static [Article] {
        let mut list = Vec::new();
        for i in 0..14 {
            let id: &'static str = Box::leak(format!("a{i}").into_boxed_str());
            let category = if i % 7 < 4 {
                Category::OurNews
            } else {
                Category::InTheMedia
            };
            list.push(article(id, category));
        }
        Box::leak(list.into_boxed_slice())
    }

    #[test]
    fn test_all_keeps_declaration_order() {
        let feed = NewsFeed::new(&ARTICLES);
        let ids: Vec<_> = feed.filtered().map(|a| a.id).collect();
        assert_eq!(ids, vec!["6", "7", "8", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_category_filter() {
        let mut feed = NewsFeed::new(&ARTICLES);
        feed.select_category(CategoryFilter::Only(Category::OurNews));

        let ids: Vec<_> = feed.filtered().map(|a| a.id).collect();
        assert_eq!(ids, vec!["2", "3", "5"]);
        assert!(feed.filtered().all(|a| a.category == Category::OurNews));
    }

    #[test]
    fn test_site_articles_paginate() {
        let mut feed = NewsFeed::new(&ARTICLES);
        assert_eq!(feed.total_pages(), 2);
        assert_eq!(feed.page_items().len(), 6);

        feed.next_page();
        assert_eq!(feed.page(), 2);
        let ids: Vec<_> = feed.page_items().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["4", "5"]);
        assert!(!feed.has_next());
    }

    #[test]
    fn test_page_clamped() {
        let mut feed = NewsFeed::new(many());
        assert_eq!(feed.total_pages(), 3);

        feed.go_to_page(99);
        assert_eq!(feed.page(), 3);
        assert_eq!(feed.page_items().len(), 2);

        feed.go_to_page(0);
        assert_eq!(feed.page(), 1);

        feed.previous_page();
        assert_eq!(feed.page(), 1);
        assert!(!feed.has_previous());
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut feed = NewsFeed::new(many());
        feed.go_to_page(3);

        feed.select_category(CategoryFilter::Only(Category::InTheMedia));
        assert_eq!(feed.page(), 1);
        assert_eq!(feed.filtered_count(), 6);
        assert_eq!(feed.total_pages(), 1);
    }

    #[test]
    fn test_empty_category_has_one_page() {
        let mut feed = NewsFeed::new(many());
        feed.select_category(CategoryFilter::Only(Category::ClientStories));

        assert_eq!(feed.total_pages(), 1);
        assert!(feed.page_items().is_empty());
        feed.next_page();
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn test_tabs() {
        let labels: Vec<_> = CategoryFilter::tabs().map(CategoryFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All", "Featured", "Client Stories", "In The Media", "Our News"]
        );
    }
}
