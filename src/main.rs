//! star-rating demo - shows the star rating widget in its typical setups
//! Built with iced, one scrollable page of examples

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(640.0, 820.0))
        .antialiasing(true)
        .run()
}
