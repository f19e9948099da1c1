// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Veilstr Project

/*!
 * ==================================================================================
 *  Repository:   VEILSTR
 *  File:         veilstr_core lib
 *
 *  Description:
 *  VEILSTR is a compile-time string obfuscation framework for Rust. String
 *  literals are rewritten at build time into keyed byte storage and
 *  reconstructed on use. The core codec is deliberately non-cryptographic:
 *  a Fisher-Yates permutation plus an XOR keystream, both driven by
 *  SplitMix64 from a single 64-bit key. It resists casual static inspection
 *  (`strings`, hex editors), nothing more.
 *
 *  License:      GNU Affero General Public License v3.0 (AGPL-3.0)
 *
 *  Full License: https://www.gnu.org/licenses/agpl-3.0.html
 * ==================================================================================
 */

pub const LICENSE: &str = "AGPL-3.0 © 2026 Veilstr Project | VEILSTR";

pub mod codec;
pub mod rng;

mod error;

pub use error::CodecError;

use core::fmt;
use core::ops::Deref;

use zeroize::Zeroize;

/// Decoded plaintext wrapper, wiped from memory on drop.
///
/// Obfuscated literals are decoded on use; holding the result in a
/// `SecretStr` keeps the plaintext lifetime as short as the binding that
/// owns it.
pub struct SecretStr(pub String);

impl Drop for SecretStr {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Deref for SecretStr {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SecretStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for SecretStr {
    // Keep decoded payloads out of debug logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretStr(..)")
    }
}

impl PartialEq<str> for SecretStr {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SecretStr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
