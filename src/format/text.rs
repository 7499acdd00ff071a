// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Address-safe transform for free text (descriptions, names).
//!
//! Text is percent-escaped as a URI component, then base64 encoded with the standard alphabet.
//! The standard alphabet never produces `#` or `_`, so encoded text survives the fragment codec
//! as a single scalar.

use std::fmt;
use std::string::FromUtf8Error;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextDecodeError {
    Base64(base64::DecodeError),
    Utf8(FromUtf8Error),
    Escape(FromUtf8Error),
}

impl fmt::Display for TextDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "invalid base64 text: {err}"),
            Self::Utf8(err) => write!(f, "decoded text is not utf-8: {err}"),
            Self::Escape(err) => write!(f, "invalid percent escape in text: {err}"),
        }
    }
}

impl std::error::Error for TextDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(err) => Some(err),
            Self::Utf8(err) | Self::Escape(err) => Some(err),
        }
    }
}

pub fn encode_text(text: &str) -> String {
    let escaped = urlencoding::encode(text);
    STANDARD.encode(escaped.as_bytes())
}

pub fn decode_text(encoded: &str) -> Result<String, TextDecodeError> {
    let bytes = STANDARD.decode(encoded.as_bytes()).map_err(TextDecodeError::Base64)?;
    let escaped = String::from_utf8(bytes).map_err(TextDecodeError::Utf8)?;
    let text = urlencoding::decode(&escaped).map_err(TextDecodeError::Escape)?;
    Ok(text.into_owned())
}
