//! Editable star widget handlers

use std::time::Instant;

use iced::Task;
use star_rating::ui::widgets::StarEvent;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle star clicks, hovering and hover animation frames
    pub(super) fn handle_rating(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Star(StarEvent::Clicked(index)) => {
                if let Err(e) = self.ui.editable.handle_star_click(*index) {
                    tracing::warn!("Ignoring star click: {}", e);
                }
                Some(Task::none())
            }
            Message::Star(StarEvent::Hovered(index)) => {
                self.ui.editable_hover.set_hovered(*index);
                Some(Task::none())
            }
            Message::AnimationTick => {
                self.ui.editable_hover.tick(Instant::now());
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use star_rating::StarKind;
    use star_rating::features::Settings;

    use super::*;

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    #[test]
    fn click_sets_rating_and_records_change() {
        let mut app = app();
        assert_eq!(app.ui.editable.rating(), 2.5);

        let _ = app.update(Message::Star(StarEvent::Clicked(3)));

        assert_eq!(app.ui.editable.rating(), 4.0);
        assert_eq!(
            app.ui.editable.stars(),
            &[
                StarKind::Full,
                StarKind::Full,
                StarKind::Full,
                StarKind::Full,
                StarKind::Blank
            ]
        );
        let change = app.ui.last_change.get().unwrap();
        assert_eq!(change.previous, 2.5);
        assert_eq!(change.current, 4.0);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Star(StarEvent::Clicked(7)));
        assert_eq!(app.ui.editable.rating(), 2.5);
        assert!(app.ui.last_change.get().is_none());
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut app = app();
        let _ = app.update(Message::Star(StarEvent::Hovered(Some(1))));
        assert_eq!(app.ui.editable_hover.hovered(), Some(1));

        // Hovering previews without touching the rating
        assert_eq!(app.ui.editable.rating(), 2.5);
    }
}
