// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Veilstr Project

/*!
 * ==================================================================================
 *  Repository:   VEILSTR
 *  File:         veilstr lib (facade)
 *
 *  Description:
 *  VEILSTR is a compile-time string obfuscation framework for Rust. Wrap a
 *  literal in `veil!` and the plaintext is replaced at build time by keyed
 *  byte storage plus a reconstruction call; nothing greppable survives in
 *  the binary.
 *
 *  This crate re-exports the codec runtime (`veilstr_core`) alongside the
 *  macros (`veilstr_macros`). Macro expansions reference `::veilstr::` paths,
 *  so downstream crates depend on this facade only.
 *
 *  # Example
 *  ```rust
 *  use veilstr::{veil, veilex};
 *
 *  let secret = veil!("not in the binary");
 *  assert_eq!(secret, "not in the binary");
 *
 *  let [a, b] = veilex!("alpha", "beta");
 *  assert_eq!(a, "alpha");
 *  assert_eq!(b, "beta");
 *  ```
 *
 *  License:      GNU Affero General Public License v3.0 (AGPL-3.0)
 *
 *  Full License: https://www.gnu.org/licenses/agpl-3.0.html
 * ==================================================================================
 */

pub use veilstr_core::{codec, rng, CodecError, SecretStr, LICENSE};

pub use veilstr_macros::{veil, veil_env, veilex};
