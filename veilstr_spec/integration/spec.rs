// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Veilstr Project

/*!
 * ==================================================================================
 *  Repository:   VEILSTR
 *  File:         veilstr_spec main/spec
 *
 *  Description:
 *  End-to-end exercise of the VEILSTR macros: literals are obfuscated while
 *  this crate compiles and reconstructed below at run time. Doubles as a
 *  diagnostic runner (`cargo run --bin diagnostic`) and a `cargo test`
 *  suite.
 *
 *  License:      GNU Affero General Public License v3.0 (AGPL-3.0)
 *
 *  Full License: https://www.gnu.org/licenses/agpl-3.0.html
 * ==================================================================================
 */

use veilstr::{veil, veil_env, veilex};

// Diagnostic CLI runner (cargo run --bin diagnostic)
fn main() {
    println!("==============================");
    println!("RUNNING VEILSTR DIAGNOSTIC\n");

    diag_single();
    diag_multi();
    diag_env();

    println!("\nALL DIAGNOSTIC CHECKS COMPLETED");
    println!("==============================");
}

fn diag_single() {
    let secret = veil!("VEILSTR dmVpbA==");

    println!("[[ veil! ]]");
    println!("> single:           {}", secret);
}

fn diag_multi() {
    let [a, b, c] = veilex!("odium", "andromeda", "deep-fusion");

    println!("[[ veilex! ]]");
    println!("> veilex[0]:        {}", a);
    println!("> veilex[1]:        {}", b);
    println!("> veilex[2]:        {}", c);
}

fn diag_env() {
    let pkg = veil_env!("CARGO_PKG_NAME");

    println!("[[ veil_env! ]]");
    println!("> CARGO_PKG_NAME:   {}", pkg);
}
