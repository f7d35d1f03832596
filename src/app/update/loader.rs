//! Template loading handlers

use iced::Task;
use star_rating::features::ratings_source;

use crate::app::load_ratings_task;
use crate::app::message::Message;
use crate::app::state::{App, LoadedRatings};

impl App {
    /// Handle ratings list loading results and reload requests
    pub(super) fn handle_loader(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RatingsLoaded(Ok(ratings)) => {
                tracing::info!("Loaded {} ratings", ratings.len());
                self.ui.loaded = LoadedRatings::Loaded(ratings_source::build_widgets(ratings));
                Some(Task::none())
            }
            Message::RatingsLoaded(Err(e)) => {
                tracing::warn!("Failed to load ratings: {}", e);
                self.ui.loaded = LoadedRatings::Failed(e.clone());
                Some(Task::none())
            }
            Message::ReloadRatings => {
                self.ui.loaded = LoadedRatings::Loading;
                Some(load_ratings_task(self.core.settings.demo.ratings_path()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use star_rating::features::Settings;

    use super::*;

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    #[test]
    fn starts_loading() {
        assert!(matches!(app().ui.loaded, LoadedRatings::Loading));
    }

    #[test]
    fn loaded_ratings_become_read_only_widgets() {
        let mut app = app();
        let _ = app.update(Message::RatingsLoaded(Ok(vec![4.5, 2.0, 0.0])));

        match &app.ui.loaded {
            LoadedRatings::Loaded(widgets) => {
                assert_eq!(widgets.len(), 3);
                assert!(widgets.iter().all(|w| w.is_read_only()));
                assert_eq!(widgets[1].rating(), 2.0);
            }
            other => panic!("expected loaded ratings, got {:?}", other),
        }
    }

    #[test]
    fn load_failure_is_kept_for_display() {
        let mut app = app();
        let _ = app.update(Message::RatingsLoaded(Err("reading stars.json".to_string())));
        assert!(matches!(
            &app.ui.loaded,
            LoadedRatings::Failed(e) if e == "reading stars.json"
        ));

        let _ = app.update(Message::ReloadRatings);
        assert!(matches!(app.ui.loaded, LoadedRatings::Loading));
    }
}
