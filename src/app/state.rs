//! Application state definitions

use std::cell::Cell;
use std::rc::Rc;

use star_rating::features::Settings;
use star_rating::i18n::Locale;
use star_rating::rating::{RatingChange, RatingWidget};
use star_rating::ui::animation::HoverPreview;
use star_rating::ui::theme::{StarPalette, parse_hex_color};

/// Main application state
pub struct App {
    /// Settings and locale
    pub core: CoreState,
    /// Demo widgets and their interaction state
    pub ui: UiState,
}

/// Core state
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

/// Result of loading the ratings list
#[derive(Debug)]
pub enum LoadedRatings {
    Loading,
    Loaded(Vec<RatingWidget>),
    Failed(String),
}

/// Demo widgets
pub struct UiState {
    /// `rating=4 read-only`
    pub basic: RatingWidget,
    /// `rating=4.7 votes=51 details read-only`
    pub detailed: RatingWidget,
    /// Same as `detailed`, drawn with `custom_palette`
    pub custom_color: RatingWidget,
    pub custom_palette: StarPalette,
    /// `rating=2.5`, editable
    pub editable: RatingWidget,
    pub editable_hover: HoverPreview,
    /// Most recent change of the editable widget, written by its listener
    pub last_change: Rc<Cell<Option<RatingChange>>>,
    /// Widgets of the template loading section
    pub loaded: LoadedRatings,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let detailed = || {
            RatingWidget::new()
                .with_rating(4.7)
                .votes(51)
                .details(true)
                .read_only(true)
        };

        let custom_color = settings.demo.custom_star_color();
        let custom_palette = match parse_hex_color(custom_color) {
            Some(color) => StarPalette::default().with_star(color),
            None => {
                tracing::warn!("Invalid star color {:?}, using default", custom_color);
                StarPalette::default()
            }
        };

        let last_change = Rc::new(Cell::new(None));
        let mut editable = RatingWidget::new().with_rating(2.5);
        let sink = Rc::clone(&last_change);
        editable.subscribe(move |change: &RatingChange| {
            tracing::info!("Editable rating: {} -> {}", change.previous, change.current);
            sink.set(Some(*change));
        });

        Self {
            basic: RatingWidget::new().with_rating(4.0).read_only(true),
            detailed: detailed(),
            custom_color: detailed(),
            custom_palette,
            editable,
            editable_hover: HoverPreview::new(),
            last_change,
            loaded: LoadedRatings::Loading,
        }
    }
}
