/// Join the Editorial Team: position description and application form
use iced::widget::{button, column, container, radio, row, text, text_editor, text_input};
use iced::{Alignment, Element, Length};

use super::field_error;
use crate::forms::application::{ApplicationField, ApplicationForm};
use crate::forms::client::file_name;
use crate::forms::{FieldErrors, YesNo};
use crate::Message;

const ABOUT: [&str; 3] = [
    "Do you want to produce and publish your own stories? Do you want to participate in the production and manufacturing of Mend, an anthology of work by incarcerated and formerly incarcerated individuals and their families? Do you want to participate in workshops on multimedia storytelling?",
    "The Project Mend apprentice position is open to residents of Central New York who have been impacted by mass incarceration. You will have the opportunity to work collaboratively to plan, design, and edit the journal Mend and to learn how to create your own digital stories.",
    "You'll also get a chance to meet with guest speakers, participate in humanities events, and learn the skills needed to publish your own work.",
];

const REQUIREMENTS: [&str; 2] = [
    "Attend weekly meetings at Syracuse University.",
    "You just need an interest in writing. No technical skills required.",
];

/// Application form state: the plain form plus the multi-line editors
#[derive(Default)]
pub struct JoinPage {
    pub form: ApplicationForm,
    /// Backs `form.interest`
    pub interest: text_editor::Content,
    /// Backs `form.sample_writing`
    pub sample_writing: text_editor::Content,
    pub errors: FieldErrors<ApplicationField>,
    /// An application is being sent
    pub submitting: bool,
}

impl JoinPage {
    pub fn set_field(&mut self, field: ApplicationField, value: String) {
        let slot = match field {
            ApplicationField::FirstName => &mut self.form.first_name,
            ApplicationField::LastName => &mut self.form.last_name,
            ApplicationField::Email => &mut self.form.email,
            ApplicationField::Phone => &mut self.form.phone,
            ApplicationField::Address => &mut self.form.address,
            // Radios and editors have their own messages
            ApplicationField::Impacted | ApplicationField::Over18 | ApplicationField::Interest => {
                return
            }
        };
        *slot = value;
    }

    pub fn edit_interest(&mut self, action: text_editor::Action) {
        self.interest.perform(action);
        self.form.interest = self.interest.text();
    }

    pub fn edit_sample_writing(&mut self, action: text_editor::Action) {
        self.sample_writing.perform(action);
        self.form.sample_writing = self.sample_writing.text();
    }

    /// Back to a blank form after a successful submission
    pub fn reset(&mut self) {
        self.form.reset();
        self.interest = text_editor::Content::new();
        self.sample_writing = text_editor::Content::new();
        self.errors.clear();
    }

    pub fn view(&self) -> Element<'_, Message> {
        let about = column(ABOUT.iter().map(|paragraph| text(*paragraph).size(16).into()))
            .push(text("Participants will receive a stipend for attending.").size(16))
            .push(text("Requirements").size(22))
            .extend(
                REQUIREMENTS
                    .iter()
                    .map(|line| text(format!("•  {line}")).size(16).into()),
            )
            .spacing(14);

        column![
            container(text("Join the Editorial Team").size(40)).center_x(Length::Fill),
            container(about)
                .padding(28)
                .width(Length::Fill)
                .style(container::bordered_box),
            container(self.form_view())
                .padding(28)
                .width(Length::Fill)
                .style(container::bordered_box),
        ]
        .spacing(32)
        .padding([32, 40])
        .max_width(960.0)
        .into()
    }

    fn form_view(&self) -> Element<'_, Message> {
        let form = &self.form;

        let mut attachments = column![].spacing(6);
        for (index, path) in form.files.iter().enumerate() {
            attachments = attachments.push(
                row![
                    text(file_name(path)).size(14),
                    button(text("Remove").size(12))
                        .on_press(Message::RemoveAttachment(index))
                        .style(button::text),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
        }

        let mut submit = button(text(if self.submitting {
            "Submitting..."
        } else {
            "Submit Application"
        }))
        .padding([10, 24])
        .style(button::primary);
        if !self.submitting {
            submit = submit.on_press(Message::SubmitApplication);
        }

        column![
            text("Apply to Join Our Team").size(28),
            self.yes_no(
                "Have you been impacted by the criminal justice system? *",
                ApplicationField::Impacted,
                form.impacted,
            ),
            self.input(
                "First name *",
                "Enter your first name",
                ApplicationField::FirstName,
                &form.first_name,
            ),
            self.input(
                "Last name *",
                "Enter your last name",
                ApplicationField::LastName,
                &form.last_name,
            ),
            self.input(
                "Email address *",
                "your.email@example.com",
                ApplicationField::Email,
                &form.email,
            ),
            self.input(
                "Phone number *",
                "(315) 555-0100",
                ApplicationField::Phone,
                &form.phone,
            ),
            self.input(
                "Address *",
                "Street, city, state, ZIP",
                ApplicationField::Address,
                &form.address,
            ),
            self.yes_no("Are you 18 or older? *", ApplicationField::Over18, form.over18),
            column![
                text("Why are you interested in joining the editorial team? *").size(15),
                text_editor(&self.interest)
                    .placeholder("Tell us about your interest in writing and publishing")
                    .on_action(Message::InterestEdited)
                    .height(120.0),
                field_error(self.errors.get(ApplicationField::Interest)),
            ]
            .spacing(6),
            column![
                text("Sample writing (optional)").size(15),
                text_editor(&self.sample_writing)
                    .placeholder("Paste a short piece of your writing")
                    .on_action(Message::SampleWritingEdited)
                    .height(160.0),
            ]
            .spacing(6),
            column![
                text("Upload files (optional)").size(15),
                button(text("Choose files...").size(14))
                    .on_press(Message::AttachFiles)
                    .style(button::secondary),
                attachments,
            ]
            .spacing(6),
            submit,
        ]
        .spacing(20)
        .into()
    }

    fn input<'a>(
        &'a self,
        label: &'a str,
        placeholder: &'a str,
        field: ApplicationField,
        value: &'a str,
    ) -> Element<'a, Message> {
        column![
            text(label).size(15),
            text_input(placeholder, value)
                .on_input(move |value| Message::ApplicationInput(field, value))
                .padding(10),
            field_error(self.errors.get(field)),
        ]
        .spacing(6)
        .into()
    }

    fn yes_no<'a>(
        &'a self,
        label: &'a str,
        field: ApplicationField,
        selected: Option<YesNo>,
    ) -> Element<'a, Message> {
        let choice = move |answer| Message::ApplicationChoice(field, answer);

        column![
            text(label).size(15),
            row![
                radio("Yes", YesNo::Yes, selected, choice),
                radio("No", YesNo::No, selected, choice),
            ]
            .spacing(24),
            field_error(self.errors.get(field)),
        ]
        .spacing(6)
        .into()
    }
}
