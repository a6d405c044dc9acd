//! # Landing Error Types
//!
//! Typed failures for the collaborators the landing page talks to. None of
//! these reach the user directly: every failure inside one action collapses
//! to a single alert message, the typed error only goes to the log.

use thiserror::Error;

/// Result type alias for backend and rate-service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of an outbound HTTP request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Transport-level reason
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// The body could not be decoded into the expected payload
    #[error("Unexpected response body from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Decoder message
        message: String,
    },

    /// A configured URL could not be parsed or joined
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        message: String,
    },
}

impl ApiError {
    /// Create a new transport error
    pub fn transport<T: Into<String>, U: Into<String>>(url: T, message: U) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status<T: Into<String>>(url: T, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a new decode error
    pub fn decode<T: Into<String>, U: Into<String>>(url: T, message: U) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid URL error
    pub fn invalid_url<T: Into<String>, U: Into<String>>(url: T, message: U) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure reported by the identity provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The `init` check could not complete (network or configuration)
    #[error("Identity provider initialization failed: {message}")]
    Init {
        /// Reason reported by the provider
        message: String,
    },

    /// The login or logout redirect could not be started
    #[error("Identity provider redirect failed: {message}")]
    Redirect {
        /// Reason reported by the provider
        message: String,
    },

    /// An authenticated reaction fired without readable session facts
    #[error("No session is available")]
    MissingSession,
}

impl SessionError {
    /// Create a new init error
    pub fn init<T: Into<String>>(message: T) -> Self {
        Self::Init {
            message: message.into(),
        }
    }

    /// Create a new redirect error
    pub fn redirect<T: Into<String>>(message: T) -> Self {
        Self::Redirect {
            message: message.into(),
        }
    }
}

/// Failure of a page-level operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// An image never finished loading
    #[error("Image failed to load: {src}")]
    ImageLoad {
        /// Image source URL
        src: String,
    },

    /// An element the page expects is not in the document
    #[error("Element not found: {id}")]
    MissingElement {
        /// Element id
        id: String,
    },
}

impl UiError {
    /// Create a new image load error
    pub fn image_load<T: Into<String>>(src: T) -> Self {
        Self::ImageLoad { src: src.into() }
    }

    /// Create a new missing element error
    pub fn missing_element<T: Into<String>>(id: T) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
