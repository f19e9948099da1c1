// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Veilstr Project

/*!
 * ==================================================================================
 *  Repository:   VEILSTR
 *  File:         veilstr_macros lib
 *
 *  Description:
 *  Proc-macros that rewrite string literals into obfuscated byte storage at
 *  compile time. Each expansion embeds `(key, ciphertext)` constants and a
 *  call into the runtime decoder; the plaintext never reaches the binary.
 *
 *  veil!       one literal, its own random key
 *  veilex!     several literals sharing one base key (key_i = base ^ i)
 *  veil_env!   value of an environment variable, read at expansion time
 *
 *  Keys come from OS entropy per expansion. Set VEILSTR_KEY to a hex u64 to
 *  pin every key, e.g. for reproducible builds.
 *
 *  License:      GNU Affero General Public License v3.0 (AGPL-3.0)
 *
 *  Full License: https://www.gnu.org/licenses/agpl-3.0.html
 * ==================================================================================
 */

extern crate proc_macro;

use std::env;

use proc_macro::{TokenStream, TokenTree};
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use rand::{rngs::OsRng, RngCore};
use regex::Regex;

use veilstr_core::codec::encode;

const KEY_ENV_VAR: &str = "VEILSTR_KEY";

/// Collect the string literals of a macro invocation, unquoted and with
/// escapes interpreted. Non-literal tokens (commas) are skipped.
fn parse_literals(input: TokenStream) -> Vec<String> {
    input
        .into_iter()
        .filter_map(|tk| {
            if let TokenTree::Literal(lit) = tk {
                Some(unquote(&lit.to_string()))
            } else {
                None
            }
        })
        .collect()
}

/// Strip the surrounding quotes of a string-literal token. Raw strings are
/// taken verbatim; cooked strings get their escape sequences interpreted.
fn unquote(token: &str) -> String {
    if let Some(stripped) = token.strip_prefix("r#\"") {
        stripped.trim_end_matches("\"#").to_string()
    } else if let Some(stripped) = token.strip_prefix("r\"") {
        stripped.trim_end_matches('"').to_string()
    } else {
        let inner = &token[1..token.len() - 1];
        interpret_escapes(inner)
    }
}

fn interpret_escapes(input: &str) -> String {
    let re = Regex::new(r#"\\([ntr0\\'"])"#).expect("escape regex");
    re.replace_all(input, |caps: &regex::Captures| match &caps[1] {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "0" => "\0".to_string(),
        "\\" => "\\".to_string(),
        "'" => "'".to_string(),
        "\"" => "\"".to_string(),
        _ => caps[0].to_string(),
    })
    .to_string()
}

/// One fresh key per expansion, unless VEILSTR_KEY pins it.
fn expansion_key() -> u64 {
    match env::var(KEY_ENV_VAR) {
        Ok(hex) => {
            let digits = hex.trim().trim_start_matches("0x");
            u64::from_str_radix(digits, 16)
                .unwrap_or_else(|_| panic!("{} must be a hex u64, got {:?}", KEY_ENV_VAR, hex))
        }
        Err(_) => OsRng.next_u64(),
    }
}

/// Emit the `(ciphertext, key) -> decode` block for one plaintext.
fn embed(plain: &str, key: u64) -> TokenStream2 {
    let ct = encode(plain.as_bytes(), key);
    let ct_bytes = ct.iter().map(|b| Literal::u8_unsuffixed(*b));
    let key_lit = Literal::u64_suffixed(key);

    quote! {{
        let __ct: &[u8] = &[#(#ct_bytes),*];
        match ::veilstr::codec::decode(__ct, #key_lit) {
            ::core::result::Result::Ok(__s) => __s,
            ::core::result::Result::Err(_) => ::veilstr::codec::corrupt_payload(),
        }
    }}
}

/// Build the `veil!("…")` form: one literal, one key.
fn exsingle(input: TokenStream) -> TokenStream {
    let plain = parse_literals(input).pop().unwrap_or_default();
    embed(&plain, expansion_key()).into()
}

/// Build the `veilex!("…", "…")` form: an array of literals sharing one base
/// key, item `i` keyed by `base ^ i`.
fn exmulti(input: TokenStream) -> TokenStream {
    let items = parse_literals(input);
    let base_key = expansion_key();

    let calls = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| embed(&item, base_key ^ i as u64));

    quote!([#(#calls),*]).into()
}

/// Obfuscates a single string literal under its own random key.
///
/// Expands to an expression of type `::veilstr::SecretStr`.
#[proc_macro]
pub fn veil(input: TokenStream) -> TokenStream {
    exsingle(input)
}

/// Obfuscates several string literals that share one base key; expands to an
/// array of `::veilstr::SecretStr`, one element per literal.
#[proc_macro]
pub fn veilex(input: TokenStream) -> TokenStream {
    exmulti(input)
}

/// Obfuscates the value of an environment variable read at expansion time.
/// An unset variable expands to the obfuscation of `"unknown"`.
#[proc_macro]
pub fn veil_env(input: TokenStream) -> TokenStream {
    let var_name = parse_literals(input).pop().unwrap_or_default();
    let value = env::var(var_name).unwrap_or_else(|_| String::from("unknown"));
    embed(&value, expansion_key()).into()
}
