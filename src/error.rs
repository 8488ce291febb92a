use thiserror::Error;

/// Failures of [`CinemaRentalSystem::rent_movie`](crate::abstract_factory::CinemaRentalSystem::rent_movie).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("Movie with id '{0}' not found")]
    UnknownMovie(String),

    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrototypeError {
    #[error("No prototype registered under '{0}'")]
    Unregistered(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("Invalid floor number {floor}: must be between 1 and {max}")]
    FloorOutOfRange { floor: u32, max: u32 },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }
}
