use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    HttpStatus(u16, String),
    HtmlParse(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::HttpStatus(code, url) => write!(f, "HTTP {code} from {url}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
