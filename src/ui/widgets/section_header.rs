//! Section header widget
//!
//! Displays a demo section title with the configuration snippet it shows.

use iced::widget::{column, text};
use iced::{Element, Font};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `snippet` - Widget configuration shown under the title, e.g. `rating=4 read-only`
pub fn view<'a, Message: 'a>(title: &'a str, snippet: &'a str) -> Element<'a, Message> {
    let title_text = text(title)
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let snippet_text = text(snippet)
        .size(12)
        .font(Font::MONOSPACE)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    column![title_text, snippet_text].spacing(4).into()
}
