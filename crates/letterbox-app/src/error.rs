use std::io;

use letterbox_core::DictionaryError;
use letterbox_game::SessionError;
use letterbox_generator::GenerateError;

/// Errors that end a command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("{_0}")]
    Dictionary(#[from] DictionaryError),
    #[display("{_0}")]
    Generate(#[from] GenerateError),
    #[display("{_0}")]
    Session(#[from] SessionError),
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
    #[display("failed to encode JSON: {_0}")]
    Json(#[from] serde_json::Error),
}
