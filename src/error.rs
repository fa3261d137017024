// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    /// Buffer and declared length disagree
    InvalidInput(String),
    /// No usable raw table could be obtained
    TableLoad(String),
    /// The raw table was obtained but nothing could be read from it
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            Self::TableLoad(message) => write!(f, "Failed to load SMBIOS table: {}", message),
            Self::Parse(message) => write!(f, "Failed to parse SMBIOS table: {}", message),
        }
    }
}

impl Error {
    /// Message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) | Self::TableLoad(message) | Self::Parse(message) => {
                message
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Self::TableLoad(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceErrorKind {
    AccessDenied,
    NotFound,
    Unsupported,
    Other,
}

/// Failure reported by a [`RawTableSource`](crate::RawTableSource)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Hint worth showing to the user next to the message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            SourceErrorKind::AccessDenied => Some("run as root or administrator"),
            SourceErrorKind::NotFound => Some("the kernel exposes no DMI table"),
            SourceErrorKind::Unsupported | SourceErrorKind::Other => None,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.hint() {
            Some(hint) => write!(f, "{} ({})", self.message, hint),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => SourceErrorKind::AccessDenied,
            io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            io::ErrorKind::Unsupported => SourceErrorKind::Unsupported,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

/// One structure that could not be decoded
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DecodeWarning {
    pub kind: u8,
    pub handle: u16,
    pub length: u8,
    pub reason: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "type {} handle {:#06x} length {}: {}",
            self.kind, self.handle, self.length, self.reason
        )
    }
}
