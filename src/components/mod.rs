pub mod app;
pub mod settings_modal;
pub mod viewport;
pub mod zoom_display;

pub use app::App;
pub use viewport::ResponsiveViewport;
