/// News & Events: social links, category tabs, paginated articles,
/// newsletter signup
use iced::widget::{button, column, container, horizontal_space, image, row, text, text_input};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashSet;
use std::path::Path;

use super::link_button;
use crate::config::SiteConfig;
use crate::content::articles::{Article, ARTICLES};
use crate::content::feed::{CategoryFilter, NewsFeed};
use crate::forms::newsletter::NewsletterForm;
use crate::links::{FACEBOOK_URL, INSTAGRAM_URL};
use crate::Message;

/// Everything on the News page that changes while the app runs
#[derive(Debug, Clone)]
pub struct NewsPage {
    pub feed: NewsFeed,
    /// Articles showing their full text instead of the excerpt
    pub expanded: HashSet<&'static str>,
    pub newsletter: NewsletterForm,
    pub newsletter_error: Option<&'static str>,
    /// A signup request is in flight
    pub subscribing: bool,
}

impl Default for NewsPage {
    fn default() -> Self {
        Self {
            feed: NewsFeed::new(&ARTICLES),
            expanded: HashSet::new(),
            newsletter: NewsletterForm::default(),
            newsletter_error: None,
            subscribing: false,
        }
    }
}

impl NewsPage {
    pub fn toggle_article(&mut self, id: &'static str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id);
        }
    }

    pub fn view<'a>(&'a self, config: &'a SiteConfig) -> Element<'a, Message> {
        let header = column![
            text("News & Events").size(40),
            text("Stay updated on Project Mend announcements, events, and community happenings")
                .size(18)
                .style(text::secondary),
            row![
                link_button("Join us on Facebook", FACEBOOK_URL),
                link_button("Join us on Instagram", INSTAGRAM_URL),
            ]
            .spacing(16),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let articles = self
            .feed
            .page_items()
            .into_iter()
            .map(|article| self.article_card(article, config));

        let listing: Element<'a, Message> = if self.feed.filtered_count() == 0 {
            text("No articles in this category yet.")
                .style(text::secondary)
                .into()
        } else {
            column(articles).spacing(24).into()
        };

        column![
            container(header).center_x(Length::Fill).padding(32),
            self.category_tabs(),
            listing,
            self.pagination(),
            self.newsletter_section(),
        ]
        .spacing(24)
        .padding([0, 40])
        .into()
    }

    fn category_tabs(&self) -> Element<'_, Message> {
        let selected = self.feed.filter();
        let tabs: Vec<Element<'_, Message>> = CategoryFilter::tabs()
            .map(|filter| {
                let style = if filter == selected {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(filter.label()).size(14))
                    .on_press(Message::CategorySelected(filter))
                    .padding([6, 12])
                    .style(style)
                    .into()
            })
            .collect();

        Wrap::with_elements(tabs).spacing(8.0).line_spacing(8.0).into()
    }

    fn article_card<'a>(
        &'a self,
        article: &'static Article,
        config: &SiteConfig,
    ) -> Element<'a, Message> {
        let art: Element<'a, Message> = if let Some(url) = article.video_url() {
            container(
                button(text("▶ Watch the video").size(16))
                    .on_press(Message::OpenLink(url))
                    .padding([12, 20])
                    .style(button::secondary),
            )
            .center(Length::Fill)
            .height(Length::Fixed(220.0))
            .style(container::rounded_box)
            .into()
        } else if let Some(file) = article.image {
            let path = config.asset(&Path::new("news").join(file));
            image(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fixed(260.0))
                .content_fit(ContentFit::Contain)
                .into()
        } else {
            container(text("No image available").style(text::secondary))
                .center(Length::Fill)
                .height(Length::Fixed(220.0))
                .style(container::rounded_box)
                .into()
        };

        let expanded = self.expanded.contains(article.id);
        let body = if expanded { article.content } else { article.excerpt };

        let mut details = column![
            text(format!("📅 {}", article.date)).size(14).style(text::secondary),
            text(article.title).size(24),
            text(article.category.label()).size(12).style(text::primary),
            text(body).size(16),
        ]
        .spacing(10);

        let toggle = if expanded { "Show less" } else { "Show more" };
        let mut actions = row![button(text(toggle).size(14))
            .on_press(Message::ToggleArticle(article.id))
            .style(button::text)]
        .spacing(12);
        if let Some(link) = article.external_link {
            actions = actions.push(
                button(text("Click here to read more ↗").size(14))
                    .on_press(Message::OpenLink(link.to_string()))
                    .style(button::text),
            );
        }
        details = details.push(actions);

        let card = row![
            container(art).width(Length::FillPortion(1)),
            details.width(Length::FillPortion(1)),
        ]
        .spacing(32);

        container(card)
            .padding(16)
            .width(Length::Fill)
            .style(container::bordered_box)
            .into()
    }

    fn pagination(&self) -> Element<'_, Message> {
        let total = self.feed.total_pages();
        if total <= 1 {
            return column![].into();
        }

        let mut pages = row![].spacing(6).align_y(Alignment::Center);

        let previous = button(text("‹ Previous").size(14)).style(button::text);
        pages = pages.push(if self.feed.has_previous() {
            previous.on_press(Message::PreviousPage)
        } else {
            previous
        });

        for page in 1..=total {
            let style = if page == self.feed.page() {
                button::primary
            } else {
                button::secondary
            };
            pages = pages.push(
                button(text(page.to_string()).size(14))
                    .on_press(Message::PageSelected(page))
                    .style(style),
            );
        }

        let next = button(text("Next ›").size(14)).style(button::text);
        pages = pages.push(if self.feed.has_next() {
            next.on_press(Message::NextPage)
        } else {
            next
        });

        row![horizontal_space(), pages, horizontal_space()].into()
    }

    fn newsletter_section(&self) -> Element<'_, Message> {
        let mut name = text_input("Your name", &self.newsletter.name).padding(10);
        let mut email = text_input("your.email@example.com", &self.newsletter.email).padding(10);
        let mut subscribe = button(text("Subscribe to Newsletter").size(16))
            .padding([10, 20])
            .style(button::primary);

        if !self.subscribing {
            name = name.on_input(Message::NewsletterName);
            email = email.on_input(Message::NewsletterEmail).on_submit(Message::Subscribe);
            subscribe = subscribe.on_press(Message::Subscribe);
        }

        let mut form = column![
            text("Stay Connected").size(30),
            text("Subscribe to our mailing list to receive the latest news, events, and updates from Project Mend.")
                .style(text::secondary),
            row![
                column![text("Name").size(14), name].spacing(6),
                column![text("Email").size(14), email].spacing(6),
            ]
            .spacing(16),
            subscribe,
        ]
        .spacing(16)
        .max_width(720.0)
        .align_x(Alignment::Center);

        if let Some(error) = self.newsletter_error {
            form = form.push(text(error).size(14).style(text::danger));
        }

        container(form)
            .padding(32)
            .center_x(Length::Fill)
            .style(container::rounded_box)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_article() {
        let mut page = NewsPage::default();
        page.toggle_article("1");
        assert!(page.expanded.contains("1"));
        page.toggle_article("1");
        assert!(page.expanded.is_empty());
    }

    #[test]
    fn test_starts_on_first_page_of_everything() {
        let page = NewsPage::default();
        assert_eq!(page.feed.filter(), CategoryFilter::All);
        assert_eq!(page.feed.page(), 1);
        assert!(!page.subscribing);
    }
}
