#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("Age must be positive")]
    NonPositiveAge,
    #[error("Height must be a positive number ({0} cm)")]
    NonPositiveHeight(f64),
    #[error("Weight must be a positive number ({0} kg)")]
    NonPositiveWeight(f64),
    #[error("Available days per week must be in the range 1 to 7 ({0})")]
    DaysPerWeekOutOfRange(u8),
    #[error("Session duration must be positive")]
    NonPositiveSessionDuration,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("Program duration must be 7, 14 or 30 days ({0})")]
    UnsupportedDuration(u32),
    #[error("Program starting on {0} ends after the last representable date")]
    StartDateOutOfRange(chrono::NaiveDate),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate exercise id \"{0}\"")]
    DuplicateId(&'static str),
    #[error("progression of \"{id}\" references unknown exercise \"{target}\"")]
    DanglingProgression {
        id: &'static str,
        target: &'static str,
    },
    #[error("progression of \"{0}\" references itself")]
    SelfReference(&'static str),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ComplianceError {
    #[error("no exercise named \"{0}\" on this day")]
    UnknownExercise(String),
    #[error("{completed} completed sets exceed the {prescribed} prescribed sets")]
    TooManySets { completed: u32, prescribed: u32 },
    #[error("cannot record compliance for a rest day")]
    RestDay,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RpeError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}
