use std::{boxed::Box, error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
enum Kind {
    Network(reqwest::Error),
    Rejected,
    Malformed(Option<serde_json::Error>),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Rejected => {
                write!(f, "API request rejected")?;
                self.write_description(f)
            }
            Kind::Malformed(Some(err)) => write!(f, "Malformed API response: {}", err),
            Kind::Malformed(None) => {
                write!(f, "Malformed API response")?;
                self.write_description(f)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Network(err) => Some(err),
            Kind::Malformed(Some(err)) => Some(err),
            Kind::Rejected | Kind::Malformed(None) => None,
        }
    }
}
impl Error {
    fn new(kind: Kind, description: Option<String>) -> Self {
        Self(Box::new(Inner { kind, description }))
    }
    pub(crate) fn rejected(comment: Option<String>) -> Self {
        Self::new(Kind::Rejected, comment)
    }
    pub(crate) fn malformed<T: Into<String>>(description: T) -> Self {
        Self::new(Kind::Malformed(None), Some(description.into()))
    }
    /// The upstream API answered with a failed status (bad handle etc.).
    pub fn is_rejected(&self) -> bool {
        matches!(self.0.kind, Kind::Rejected)
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::new(Kind::Network(err), None)
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(Kind::Malformed(Some(err)), None)
    }
}
