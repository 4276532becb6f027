/// Reasons a version string was rejected. Each kind has a fixed message.
#[derive(thiserror::Error, Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    #[error("Argument `input` is null.")]
    InputNull,
    #[error("Argument `input` is blank.")]
    InputBlank,
    #[error("Encountered invalid character.")]
    InvalidCharacter(char),
    #[error(
        "The version tag indicator character `-` was discovered before major, minor, and patch versions."
    )]
    MisplacedTag,
    #[error("Version component does not fit into u32.")]
    ComponentTooLarge,
}

impl ParseError {
    /// The character that stopped the scan, only set for [ParseError::InvalidCharacter].
    pub fn invalid_character(&self) -> Option<char> {
        match self {
            ParseError::InvalidCharacter(ch) => Some(*ch),
            _ => None,
        }
    }
}
