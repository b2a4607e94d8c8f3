use thiserror::Error;

use crate::state::catalog::CatalogError;

/// Fatal errors that stop the application from starting or running
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid portfolio content: {0}")]
    Catalog(#[from] CatalogError),
    #[error("window error: {0}")]
    Window(#[from] iced::Error),
}
