/// Page views and the pieces shared between them
///
/// Each page lives in its own module (home.rs, news.rs, join.rs). State
/// changes all go through `Message` in main.rs; the modules here only
/// build widgets.

pub mod home;
pub mod join;
pub mod news;

use chrono::Datelike;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    News,
    Join,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::News, Page::Join];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::News => "News & Events",
            Page::Join => "Join the Team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown at the top of the window after a form action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub fn nav_bar(current: Page) -> Element<'static, Message> {
    let links = Page::ALL.into_iter().map(|page| {
        let style = if page == current {
            button::primary
        } else {
            button::text
        };
        button(text(page.label()).size(16))
            .on_press(Message::Navigate(page))
            .padding([6, 12])
            .style(style)
            .into()
    });

    container(
        row![
            text("Project Mend").size(24),
            horizontal_space(),
            row(links).spacing(8),
        ]
        .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

pub fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    let message = match notice.kind {
        NoticeKind::Success => text(&notice.text).style(text::success),
        NoticeKind::Error => text(&notice.text).style(text::danger),
    };

    container(
        row![
            message.size(16),
            horizontal_space(),
            button(text("Dismiss").size(14))
                .on_press(Message::DismissNotice)
                .style(button::text),
        ]
        .align_y(Alignment::Center),
    )
    .padding([8, 24])
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

pub fn footer() -> Element<'static, Message> {
    let year = chrono::Local::now().year();

    container(
        column![
            text(format!("© {year} Project Mend")).size(14),
            text("Syracuse University · Center for Community Alternatives")
                .size(12)
                .style(text::secondary),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .center_x(Length::Fill)
    .into()
}

/// Red message under a form field, or nothing
pub fn field_error(error: Option<&'static str>) -> Element<'static, Message> {
    match error {
        Some(message) => text(message).size(13).style(text::danger).into(),
        None => column![].into(),
    }
}

/// Button that opens a page in the system browser
pub fn link_button(label: &str, url: &'static str) -> Element<'static, Message> {
    button(text(label.to_string()).size(16))
        .on_press(Message::OpenLink(url.to_string()))
        .padding([8, 16])
        .style(button::secondary)
        .into()
}
