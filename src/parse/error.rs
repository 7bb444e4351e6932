use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    /// Markup that is present but structurally unusable (bad href, etc.).
    HtmlParse(String),
    /// A required field (restaurant name, link, city name) was not found.
    /// Recoverable: the caller skips the record instead of failing the page.
    MissingField(String),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub fn missing_field(msg: &str) -> Self {
        Self::MissingField(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::MissingField(msg) => write!(f, "Missing Field: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
