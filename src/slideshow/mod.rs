/// Rotating image slideshow
///
/// Shows exactly one slide at a time out of a fixed, ordered set. The
/// visible slide moves forward on a fixed interval while the slideshow is
/// mounted, and the user can step forward or back at any time.
///
/// The auto-advance timer is an iced subscription: `subscription()` only
/// returns it while the slideshow is mounted and has slides, so the runtime
/// starts it when the home page comes up and drops it when the page goes
/// away. Ticks that were already queued when the page went away are
/// ignored by `tick()`.
pub mod slide;

pub use slide::Slide;

use iced::widget::{button, column, container, horizontal_space, image, row, text, tooltip};
use iced::{Alignment, ContentFit, Element, Length, Subscription};
use std::time::Duration;

/// Events the slideshow reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// "›" button
    Next,
    /// "‹" button
    Previous,
    /// Auto-advance timer fired
    Tick,
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<Slide>,
    /// Always < slides.len() when slides is non-empty, 0 otherwise
    current: usize,
    interval: Duration,
    mounted: bool,
}

impl Slideshow {
    /// Build a slideshow over a fixed set of slides.
    ///
    /// Slides without alt text are dropped. An empty set is allowed: the
    /// slideshow then renders nothing and never registers a timer.
    pub fn new(slides: Vec<Slide>, interval: Duration) -> Self {
        let total = slides.len();
        let slides: Vec<Slide> = slides.into_iter().filter(Slide::has_alt_text).collect();

        if slides.len() < total {
            log::warn!(
                "⚠️  Dropped {} slide(s) without alt text",
                total - slides.len()
            );
        }
        if slides.is_empty() {
            log::warn!("⚠️  Slideshow has no slides, it will not be shown");
        }

        Self {
            slides,
            current: 0,
            interval,
            mounted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The visible slide, or None when there are no slides
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Show the next slide, wrapping to the first after the last
    pub fn advance(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.current = (self.current + 1) % count;
    }

    /// Show the previous slide, wrapping to the last before the first
    pub fn retreat(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.current = (self.current + count - 1) % count;
    }

    /// The slideshow became visible: start from the first slide
    pub fn mount(&mut self) {
        self.current = 0;
        self.mounted = true;
        log::debug!("🖼️  Slideshow mounted with {} slides", self.slides.len());
    }

    /// The slideshow went away: its timer must stop
    pub fn unmount(&mut self) {
        self.mounted = false;
        log::debug!("🖼️  Slideshow unmounted");
    }

    /// Auto-advance; does nothing once unmounted
    pub fn tick(&mut self) {
        if self.mounted {
            self.advance();
        }
    }

    /// Period of the auto-advance timer, if one should be running
    pub fn timer(&self) -> Option<Duration> {
        (self.is_mounted() && !self.is_empty()).then_some(self.interval)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Next => self.advance(),
            Message::Previous => self.retreat(),
            Message::Tick => self.tick(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.timer() {
            Some(interval) => iced::time::every(interval).map(|_| Message::Tick),
            None => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let Some(slide) = self.current() else {
            return column![].into();
        };

        let picture = tooltip(
            image(image::Handle::from_path(&slide.image))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
            container(text(&slide.alt_text).size(14))
                .padding(8)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        );

        let controls = row![
            button(text("‹").size(24))
                .on_press(Message::Previous)
                .padding([4, 14])
                .style(button::secondary),
            horizontal_space(),
            text(format!("{} / {}", self.current_index() + 1, self.len())).size(14),
            horizontal_space(),
            button(text("›").size(24))
                .on_press(Message::Next)
                .padding([4, 14])
                .style(button::secondary),
        ]
        .align_y(Alignment::Center);

        column![
            picture,
            text(&slide.caption).size(14).style(text::secondary),
            controls,
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
