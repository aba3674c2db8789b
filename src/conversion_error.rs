use crate::ansible::RenderError;

#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("Error loading Terraform output: {0}")]
    InputLoad(#[source] InputLoadError),

    #[error("Unexpected Terraform output structure: {0}")]
    UnexpectedStructure(#[source] serde_json::Error),

    #[error("Error writing inventory: {0}")]
    OutputWrite(#[source] OutputWriteError),
}

#[derive(thiserror::Error, Debug)]
pub enum InputLoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum OutputWriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    RenderError(#[from] RenderError),
}

impl From<InputLoadError> for ConversionError {
    fn from(error: InputLoadError) -> Self {
        ConversionError::InputLoad(error)
    }
}

impl From<OutputWriteError> for ConversionError {
    fn from(error: OutputWriteError) -> Self {
        ConversionError::OutputWrite(error)
    }
}
