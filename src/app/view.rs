//! Application view rendering

use iced::widget::{Column, Space, button, column, container, row, scrollable, text, toggler};
use iced::{Alignment, Element, Fill, Font};

use star_rating::i18n::Key;
use star_rating::ui::theme::{self, BOLD_WEIGHT};
use star_rating::ui::widgets::star_rating as star_widget;
use star_rating::ui::widgets::{StarRatingStyle, section_header};

use super::App;
use super::message::Message;
use super::state::LoadedRatings;

impl App {
    /// Build the demo page
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let style = StarRatingStyle::default();

        // Hover preview is an animation, so power saving mode drops it
        let editable_hover = if self.core.settings.display.power_saving_mode {
            None
        } else {
            Some(&self.ui.editable_hover)
        };

        let basic = self.section(
            Key::SectionBasic,
            "rating=4 read-only",
            star_widget::view(&self.ui.basic, None, style, locale, Message::Star),
        );

        let detailed = self.section(
            Key::SectionDetails,
            "rating=4.7 votes=51 details read-only",
            star_widget::view(&self.ui.detailed, None, style, locale, Message::Star),
        );

        let custom_color = self.section(
            Key::SectionCustomColor,
            "rating=4.7 votes=51 details read-only star-color",
            star_widget::view(
                &self.ui.custom_color,
                None,
                style.with_palette(self.ui.custom_palette),
                locale,
                Message::Star,
            ),
        );

        let last_change = match self.ui.last_change.get() {
            Some(change) => format!(
                "{}: {} → {}",
                locale.get(Key::LastChange),
                change.previous,
                change.current
            ),
            None => locale.get(Key::NoChangeYet).to_string(),
        };
        let editable = self.section(
            Key::SectionEditable,
            "rating=2.5",
            column![
                star_widget::view(&self.ui.editable, editable_hover, style, locale, Message::Star),
                text(last_change).size(13).style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            ]
            .spacing(8)
            .into(),
        );

        let template_loading =
            self.section(Key::SectionTemplateLoading, "stars.json", self.view_loaded(style));

        let content = column![
            self.view_header(),
            basic,
            detailed,
            custom_color,
            editable,
            template_loading,
        ]
        .spacing(16)
        .padding(24)
        .max_width(720);

        container(scrollable(container(content).center_x(Fill)))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    /// Page title with theme and language switches
    fn view_header(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let title = text(locale.get(Key::AppName)).size(24).font(Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

        let dark_mode = toggler(self.core.settings.display.dark_mode)
            .label(locale.get(Key::DarkMode))
            .on_toggle(Message::ToggleDarkMode);

        let language = button(text(locale.language.toggled().display_name()).size(14))
            .style(theme::text_button)
            .on_press(Message::ToggleLanguage);

        row![title, Space::new().width(Fill), dark_mode, language]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }

    /// Body of the template loading section
    fn view_loaded(&self, style: StarRatingStyle) -> Element<'_, Message> {
        let locale = self.core.locale;

        let reload = button(text(locale.get(Key::Reload)).size(13))
            .style(theme::text_button)
            .on_press(Message::ReloadRatings);

        let body: Element<'_, Message> = match &self.ui.loaded {
            LoadedRatings::Loading => text(locale.get(Key::Loading)).size(13).into(),
            LoadedRatings::Failed(e) => text(format!("{}: {}", locale.get(Key::LoadFailed), e))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                })
                .into(),
            LoadedRatings::Loaded(widgets) if widgets.is_empty() => {
                text(locale.get(Key::EmptyList)).size(13).into()
            }
            LoadedRatings::Loaded(widgets) => Column::with_children(
                widgets
                    .iter()
                    .map(|widget| star_widget::view(widget, None, style, locale, Message::Star)),
            )
            .spacing(4)
            .into(),
        };

        column![body, reload].spacing(8).into()
    }

    /// Card with a section header above `body`
    fn section<'a>(
        &self,
        title: Key,
        snippet: &'a str,
        body: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let header = section_header::view(self.core.locale.get(title), snippet);

        container(column![header, body].spacing(12))
            .padding(16)
            .width(Fill)
            .style(theme::section_card)
            .into()
    }
}
