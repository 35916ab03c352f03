use crate::canvas::CanvasError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Embedding-facing error surface. `PaintSession` operations stay total
/// and recover internally; frontends driving the `Canvas` API directly
/// get their failures wrapped here via `?`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
