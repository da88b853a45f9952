use iced::widget::{column, scrollable, text_editor};
use iced::{Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;

mod config;
mod content;
mod error;
mod forms;
mod links;
mod slideshow;
mod ui;

use config::SiteConfig;
use content::feed::CategoryFilter;
use forms::application::{self, ApplicationField};
use forms::client::{SignupOutcome, SubmissionClient};
use forms::{newsletter, YesNo};
use slideshow::Slideshow;
use ui::join::JoinPage;
use ui::news::NewsPage;
use ui::{Notice, Page};

/// Main application state
struct MendSite {
    config: SiteConfig,
    /// None if the HTTP client could not be built; forms then report an error
    client: Option<SubmissionClient>,
    /// Page currently on screen
    page: Page,
    /// Home page slideshow (mounted only while Home is shown)
    slideshow: Slideshow,
    news: NewsPage,
    join: JoinPage,
    /// Banner with the outcome of the last form action
    notice: Option<Notice>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Nav bar or a call-to-action button
    Navigate(Page),
    /// Open a URL in the system browser
    OpenLink(String),
    DismissNotice,
    Slideshow(slideshow::Message),

    // News page
    CategorySelected(CategoryFilter),
    PageSelected(usize),
    NextPage,
    PreviousPage,
    ToggleArticle(&'static str),
    NewsletterName(String),
    NewsletterEmail(String),
    Subscribe,
    Subscribed(Result<SignupOutcome, String>),

    // Join page
    ApplicationInput(ApplicationField, String),
    ApplicationChoice(ApplicationField, YesNo),
    InterestEdited(text_editor::Action),
    SampleWritingEdited(text_editor::Action),
    AttachFiles,
    RemoveAttachment(usize),
    SubmitApplication,
    /// Err carries the message to show the applicant
    ApplicationSubmitted(Result<(), String>),
}

impl MendSite {
    /// Create a new instance of the application
    fn new(config: SiteConfig, startup_notice: Option<Notice>) -> (Self, Task<Message>) {
        let client = match SubmissionClient::new(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("❌ Could not build HTTP client: {}", e);
                None
            }
        };

        let slides = content::slides::home_slides(&config);
        let mut slideshow = Slideshow::new(slides, config.slide_interval());
        slideshow.mount();

        log::info!(
            "🌱 Project Mend started with {} slides, posting applications to {}",
            slideshow.len(),
            config.application_endpoint
        );

        (
            MendSite {
                config,
                client,
                page: Page::Home,
                slideshow,
                news: NewsPage::default(),
                join: JoinPage::default(),
                notice: startup_notice,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.navigate(page);
                Task::none()
            }
            Message::OpenLink(url) => {
                if let Err(e) = links::open(&url) {
                    log::error!("❌ {}", e);
                    self.notice = Some(Notice::error(format!("Could not open {url}")));
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::Slideshow(message) => {
                self.slideshow.update(message);
                Task::none()
            }

            Message::CategorySelected(filter) => {
                self.news.feed.select_category(filter);
                Task::none()
            }
            Message::PageSelected(page) => {
                self.news.feed.go_to_page(page);
                Task::none()
            }
            Message::NextPage => {
                self.news.feed.next_page();
                Task::none()
            }
            Message::PreviousPage => {
                self.news.feed.previous_page();
                Task::none()
            }
            Message::ToggleArticle(id) => {
                self.news.toggle_article(id);
                Task::none()
            }
            Message::NewsletterName(name) => {
                self.news.newsletter.name = name;
                Task::none()
            }
            Message::NewsletterEmail(email) => {
                self.news.newsletter.email = email;
                Task::none()
            }
            Message::Subscribe => self.subscribe(),
            Message::Subscribed(result) => {
                self.news.subscribing = false;
                match result {
                    Ok(outcome) => {
                        log::info!("📬 Newsletter signup done ({:?})", outcome);
                        self.news.newsletter.reset();
                        self.notice = Some(Notice::success(newsletter::SUCCESS_NOTICE));
                    }
                    Err(_) => {
                        self.notice = Some(Notice::error(newsletter::FAILURE_NOTICE));
                    }
                }
                Task::none()
            }

            Message::ApplicationInput(field, value) => {
                self.join.set_field(field, value);
                Task::none()
            }
            Message::ApplicationChoice(field, answer) => {
                match field {
                    ApplicationField::Impacted => self.join.form.impacted = Some(answer),
                    ApplicationField::Over18 => self.join.form.over18 = Some(answer),
                    _ => {}
                }
                Task::none()
            }
            Message::InterestEdited(action) => {
                self.join.edit_interest(action);
                Task::none()
            }
            Message::SampleWritingEdited(action) => {
                self.join.edit_sample_writing(action);
                Task::none()
            }
            Message::AttachFiles => {
                // Show the native file picker
                let picked = FileDialog::new()
                    .set_title("Select files to upload")
                    .pick_files();

                if let Some(paths) = picked {
                    for path in paths {
                        if !self.join.form.files.contains(&path) {
                            self.join.form.files.push(path);
                        }
                    }
                }
                Task::none()
            }
            Message::RemoveAttachment(index) => {
                if index < self.join.form.files.len() {
                    self.join.form.files.remove(index);
                }
                Task::none()
            }
            Message::SubmitApplication => self.submit_application(),
            Message::ApplicationSubmitted(result) => {
                self.join.submitting = false;
                match result {
                    Ok(()) => {
                        self.join.reset();
                        self.notice = Some(Notice::success(application::SUCCESS_NOTICE));
                    }
                    Err(notice) => {
                        self.notice = Some(Notice::error(notice));
                    }
                }
                Task::none()
            }
        }
    }

    /// Switch pages, starting or stopping the slideshow with the home page
    fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }

        if self.page == Page::Home {
            self.slideshow.unmount();
        }
        if page == Page::Home {
            self.slideshow.mount();
        }

        log::debug!("➡️  {:?} -> {:?}", self.page, page);
        self.page = page;
    }

    fn subscribe(&mut self) -> Task<Message> {
        let payload = match self.news.newsletter.validate() {
            Ok(payload) => payload,
            Err(error) => {
                self.news.newsletter_error = Some(error);
                return Task::none();
            }
        };
        self.news.newsletter_error = None;

        let Some(client) = self.client.clone() else {
            self.notice = Some(Notice::error(newsletter::FAILURE_NOTICE));
            return Task::none();
        };

        self.news.subscribing = true;
        Task::perform(
            async move {
                client.subscribe(payload).await.map_err(|e| {
                    log::error!("❌ Newsletter signup failed: {}", e);
                    e.to_string()
                })
            },
            Message::Subscribed,
        )
    }

    fn submit_application(&mut self) -> Task<Message> {
        let payload = match self.join.form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("📝 Application has {} invalid field(s)", errors.len());
                self.join.errors = errors;
                return Task::none();
            }
        };
        self.join.errors.clear();

        let Some(client) = self.client.clone() else {
            self.notice = Some(Notice::error(
                "Something went wrong submitting your application.",
            ));
            return Task::none();
        };

        self.join.submitting = true;
        let attachments = self.join.form.files.clone();

        // Launch async submission task
        Task::perform(
            async move {
                client
                    .submit_application(payload, attachments)
                    .await
                    .map_err(|e| {
                        log::error!("❌ Application submission failed: {}", e);
                        application::failure_notice(&e).to_string()
                    })
            },
            Message::ApplicationSubmitted,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = match self.page {
            Page::Home => ui::home::view(&self.slideshow),
            Page::News => self.news.view(&self.config),
            Page::Join => self.join.view(),
        };

        let mut layout = column![ui::nav_bar(self.page)];
        if let Some(notice) = &self.notice {
            layout = layout.push(ui::notice_banner(notice));
        }

        layout
            .push(scrollable(column![page, ui::footer()]).height(Length::Fill))
            .into()
    }

    /// Slideshow timer, live only while the home page is mounted
    fn subscription(&self) -> Subscription<Message> {
        self.slideshow.subscription().map(Message::Slideshow)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, startup_notice) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            log::error!("❌ {}", e);
            (
                SiteConfig::default(),
                Some(Notice::error(format!("Using default settings: {e}"))),
            )
        }
    };

    iced::application("Project Mend", MendSite::update, MendSite::view)
        .subscription(MendSite::subscription)
        .theme(MendSite::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || MendSite::new(config, startup_notice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> MendSite {
        MendSite::new(SiteConfig::default(), None).0
    }

    #[test]
    fn test_starts_on_home_with_timer() {
        let site = site();
        assert_eq!(site.page, Page::Home);
        assert!(site.slideshow.is_mounted());
        assert!(site.slideshow.timer().is_some());
    }

    #[test]
    fn test_leaving_home_stops_slideshow() {
        let mut site = site();
        let _ = site.update(Message::Slideshow(slideshow::Message::Tick));
        assert_eq!(site.slideshow.current_index(), 1);

        let _ = site.update(Message::Navigate(Page::News));
        assert!(site.slideshow.timer().is_none());

        // A tick already queued before the page switch
        let _ = site.update(Message::Slideshow(slideshow::Message::Tick));
        assert_eq!(site.slideshow.current_index(), 1);

        let _ = site.update(Message::Navigate(Page::Home));
        assert_eq!(site.slideshow.current_index(), 0);
        assert!(site.slideshow.timer().is_some());
    }

    #[test]
    fn test_invalid_application_stays_local() {
        let mut site = site();
        let _ = site.update(Message::Navigate(Page::Join));
        let _ = site.update(Message::ApplicationInput(
            ApplicationField::FirstName,
            "Tony".to_string(),
        ));
        let _ = site.update(Message::SubmitApplication);

        assert!(!site.join.submitting);
        assert!(site.join.errors.get(ApplicationField::FirstName).is_none());
        assert!(site.join.errors.get(ApplicationField::LastName).is_some());
    }

    #[test]
    fn test_application_outcomes() {
        let mut site = site();
        let _ = site.update(Message::ApplicationChoice(ApplicationField::Impacted, YesNo::Yes));
        assert_eq!(site.join.form.impacted, Some(YesNo::Yes));

        site.join.submitting = true;
        let _ = site.update(Message::ApplicationSubmitted(Err(
            "Error submitting application.".to_string(),
        )));
        assert!(!site.join.submitting);
        assert_eq!(
            site.notice,
            Some(Notice::error("Error submitting application."))
        );
        // A failed submission keeps what the applicant typed
        assert_eq!(site.join.form.impacted, Some(YesNo::Yes));

        let _ = site.update(Message::ApplicationSubmitted(Ok(())));
        assert_eq!(site.join.form.impacted, None);
        assert_eq!(
            site.notice,
            Some(Notice::success("Application submitted successfully!"))
        );
    }

    #[test]
    fn test_newsletter_validation_message() {
        let mut site = site();
        let _ = site.update(Message::NewsletterName("Jackie".to_string()));
        let _ = site.update(Message::Subscribe);

        assert_eq!(site.news.newsletter_error, Some("Please fill in all fields"));
        assert!(!site.news.subscribing);
    }

    #[test]
    fn test_category_then_page() {
        let mut site = site();
        let _ = site.update(Message::NextPage);
        assert_eq!(site.news.feed.page(), 2);

        let _ = site.update(Message::CategorySelected(CategoryFilter::All));
        assert_eq!(site.news.feed.page(), 1);
    }
}
