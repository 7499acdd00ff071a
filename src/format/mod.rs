// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Address formats.
//!
//! The fragment codec, the free-text transform and the scheme matcher that classifies a decoded
//! fragment.

pub mod hash;
pub mod scheme;
pub mod text;

pub use hash::{
    decode, decode_fragment, encode, encode_fragment, HashList, HashQuery, HashSource, HashValue,
    ENTRY_DELIMITER, LIST_JOINER,
};
pub use scheme::{current_scheme, is_valid_encoding, match_query, Scheme};
pub use text::{decode_text, encode_text, TextDecodeError};
