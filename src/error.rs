use smol_str::SmolStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Colour Out of Range: {0:#x} exceeds 24 bits")]
    ColourOutOfRange(u32),

    #[error("Invalid Colour: {0:?}")]
    InvalidColour(SmolStr),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}
