use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Abbreviation of a main lift (e.g. `SQ`). Variants refer to their main lift by this value.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortName(String);

impl ShortName {
    pub fn new(short_name: &str) -> Result<Self, ShortNameError> {
        let trimmed_short_name = short_name.trim();

        if trimmed_short_name.is_empty() {
            return Err(ShortNameError::Empty);
        }

        if trimmed_short_name.contains(char::is_whitespace) {
            return Err(ShortNameError::Whitespace);
        }

        let len = trimmed_short_name.chars().count();

        if len > 8 {
            return Err(ShortNameError::TooLong(len));
        }

        Ok(ShortName(trimmed_short_name.to_string()))
    }
}

impl TryFrom<&str> for ShortName {
    type Error = ShortNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ShortName::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ShortNameError {
    #[error("Short name must not be empty")]
    Empty,
    #[error("Short name must not contain whitespace")]
    Whitespace,
    #[error("Short name must be 8 characters or fewer ({0} > 8)")]
    TooLong(usize),
}
