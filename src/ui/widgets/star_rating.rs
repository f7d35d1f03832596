//! Star rating widget
//!
//! Renders a `RatingWidget` as five star icons followed by the optional
//! details caption. Read-only widgets draw plain icons; editable widgets
//! wrap every icon in a circular button that reports clicks and hovering.
//!
//! # Design
//!
//! Stars are pushed in index order, so each position always maps to the
//! same child widget and only its icon changes between frames.

use iced::widget::{Space, Svg, button, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Color, Element};

use crate::i18n::Locale;
use crate::rating::{RatingWidget, StarKind};
use crate::ui::animation::HoverPreview;
use crate::ui::icons;
use crate::ui::theme::{self, StarPalette};

/// Interaction reported by an editable star widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarEvent {
    /// Star at this position was clicked
    Clicked(usize),
    /// Pointer moved onto a star, or left the widget with `None`
    Hovered(Option<usize>),
}

/// Sizes and colors for one star widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRatingStyle {
    pub palette: StarPalette,
    /// Icon edge length in pixels
    pub icon_size: f32,
    /// Edge length of the click target around each icon (editable only)
    pub button_size: f32,
    /// Caption text size
    pub caption_size: f32,
}

impl Default for StarRatingStyle {
    fn default() -> Self {
        Self {
            palette: StarPalette::default(),
            icon_size: 19.0,
            button_size: 31.0,
            caption_size: 15.0,
        }
    }
}

impl StarRatingStyle {
    pub fn with_palette(self, palette: StarPalette) -> Self {
        Self { palette, ..self }
    }
}

/// Build the star rating element
///
/// # Arguments
/// * `widget` - Rating state to draw
/// * `hover` - Hover preview state, only used by editable widgets
/// * `style` - Sizes and palette
/// * `locale` - Language of the details caption
/// * `on_event` - Maps star interactions to the caller's message type;
///   never called for read-only widgets
pub fn view<'a, Message, F>(
    widget: &RatingWidget,
    hover: Option<&HoverPreview>,
    style: StarRatingStyle,
    locale: Locale,
    on_event: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(StarEvent) -> Message,
{
    let palette = style.palette;
    let editable = !widget.is_read_only();

    let hovered = if editable {
        hover.and_then(HoverPreview::hovered)
    } else {
        None
    };
    let stars = widget.preview(hovered);
    let star_color = match (hovered, hover) {
        (Some(_), Some(hover)) => palette.preview_star(hover.progress()),
        _ => palette.star,
    };

    let mut stars_row = row![].align_y(Alignment::Center);
    for (index, kind) in stars.iter().copied().enumerate() {
        let icon = star_icon(kind, style.icon_size, star_color, palette.empty);

        if editable {
            let star_button = button(container(icon).center(style.button_size))
                .padding(0)
                .style(theme::star_button)
                .on_press(on_event(StarEvent::Clicked(index)));
            stars_row = stars_row
                .push(mouse_area(star_button).on_enter(on_event(StarEvent::Hovered(Some(index)))));
        } else {
            stars_row = stars_row.push(icon);
        }
    }

    let stars_element: Element<'a, Message> = if editable {
        mouse_area(stars_row)
            .on_exit(on_event(StarEvent::Hovered(None)))
            .into()
    } else {
        stars_row.into()
    };

    let mut content = row![stars_element].align_y(Alignment::Center);
    if let Some(caption) = widget.details_caption(locale) {
        content = content
            .push(Space::new().width(style.caption_size * 0.4))
            .push(text(caption).size(style.caption_size).color(palette.detail));
    }

    content.into()
}

/// Single star icon; a half star is its left half drawn over a blank star
fn star_icon<'a, Message: 'a>(
    kind: StarKind,
    size: f32,
    star_color: Color,
    empty_color: Color,
) -> Element<'a, Message> {
    match kind {
        StarKind::Full => glyph(icons::icon_for(kind), size, star_color).into(),
        StarKind::Blank => glyph(icons::icon_for(kind), size, empty_color).into(),
        StarKind::Half => stack![
            glyph(icons::BLANK_STAR, size, empty_color),
            glyph(icons::icon_for(kind), size, star_color),
        ]
        .into(),
    }
}

fn glyph<'a>(source: &'static str, size: f32, color: Color) -> Svg<'a> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
