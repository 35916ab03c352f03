pub mod canvas;
mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;

pub use error::{AppError, AppResult};

/// Entrypoint used by embedding frontends: initializes logging, loads the
/// optional config file, and returns a session for the toolkit to wire its
/// pointer, keyboard, and toolbar callbacks into.
pub fn run() -> AppResult<editor::PaintSession> {
    logging::init();
    tracing::info!("starting sketchpad");

    let config = config::load_app_config();
    let mut session = editor::PaintSession::new(config.canvas_width(), config.canvas_height());
    session.set_brush_width(config.brush_width());

    tracing::info!(
        width = session.canvas().width(),
        height = session.canvas().height(),
        "canvas ready"
    );
    Ok(session)
}
