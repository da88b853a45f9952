/// Landing hero: mission statement, two calls to action, slideshow
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::{link_button, Page};
use crate::links::JOURNAL_URL;
use crate::slideshow::Slideshow;
use crate::Message;

const MISSION: &str = "Project Mend is a multimodal, grassroots-level, open-access national archive centered on the work of incarcerated and formerly incarcerated individuals and their communities.";

pub fn view(slideshow: &Slideshow) -> Element<'_, Message> {
    let intro = column![
        text(MISSION).size(20),
        row![
            link_button("Read the Journal", JOURNAL_URL),
            button(text("News & Events").size(16))
                .on_press(Message::Navigate(Page::News))
                .padding([8, 16])
                .style(button::primary),
        ]
        .spacing(16),
    ]
    .spacing(32)
    .max_width(560.0)
    .align_x(Alignment::Center);

    let mut hero = row![container(intro)
        .center_x(Length::FillPortion(1))
        .center_y(Length::Fill)]
    .spacing(24)
    .padding(40)
    .height(Length::Fixed(520.0));

    // No slides means no right-hand column at all
    if !slideshow.is_empty() {
        hero = hero.push(
            container(slideshow.view().map(Message::Slideshow))
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        );
    }

    hero.into()
}
