// SPDX-License-Identifier: Apache-2.0

//! GitHub authentication status command.

use roulette_core::validate_token;

use super::types::AuthStatusResult;
use crate::provider::resolve_token;

/// Reports where the token comes from and whether it would be accepted.
///
/// Makes no network calls.
pub fn run_status() -> AuthStatusResult {
    match resolve_token() {
        Some((token, source)) => {
            let authenticated = validate_token(Some(token)).is_ok();
            AuthStatusResult {
                authenticated,
                method: Some(source),
                placeholder: !authenticated,
            }
        }
        None => AuthStatusResult {
            authenticated: false,
            method: None,
            placeholder: false,
        },
    }
}
