//! Credential resolution
//!
//! Both strategies operate on an explicit configuration map snapshot rather
//! than ambient process state, so they stay pure and unit-testable.

use std::collections::BTreeMap;

use crate::domain::{campaign::errors::CredentialError, comms::mailer::Credential};

/// A snapshot of key/value configuration, usually taken from the process
/// environment once at startup
pub type ConfigMap = BTreeMap<String, String>;

const USER_KEY_PREFIX: &str = "SMTP_USER_";
const PASS_KEY_PREFIX: &str = "SMTP_PASS_";

/// Derive the configuration key for a sender identity: the local part of the
/// address, with internal dots stripped, upper-cased.
///
/// `john.doe@example.com` becomes `JOHNDOE`.
pub fn normalize_sender_key(sender: &str) -> String {
    sender
        .split('@')
        .next()
        .unwrap_or_default()
        .replace('.', "")
        .to_uppercase()
}

/// Resolve the credential bound to one sender identity.
///
/// Looks up `SMTP_USER_<KEY>` and `SMTP_PASS_<KEY>` where `<KEY>` is the
/// normalized sender key; fails naming both expected keys when either half
/// is absent or blank.
pub fn resolve_bound(vars: &ConfigMap, sender: &str) -> Result<Credential, CredentialError> {
    let key = normalize_sender_key(sender);
    let user_key = format!("{USER_KEY_PREFIX}{key}");
    let pass_key = format!("{PASS_KEY_PREFIX}{key}");

    match (non_blank(vars, &user_key), non_blank(vars, &pass_key)) {
        (Some(identity), Some(secret)) => Ok(Credential::discovered(key, identity, secret)),
        _ => Err(CredentialError::MissingCredentials {
            sender: sender.to_string(),
            user_key,
            pass_key,
        }),
    }
}

/// Discover every configured account: all distinct `<KEY>`s with both an
/// identity and a secret defined, in lexicographic key order.
///
/// Fails the whole run when no complete pair exists.
pub fn discover_accounts(vars: &ConfigMap) -> Result<Vec<Credential>, CredentialError> {
    let accounts: Vec<Credential> = vars
        .iter()
        .filter_map(|(name, identity)| {
            let key = name.strip_prefix(USER_KEY_PREFIX)?;
            if identity.trim().is_empty() {
                return None;
            }
            let secret = non_blank(vars, &format!("{PASS_KEY_PREFIX}{key}"))?;
            Some(Credential::discovered(key, identity.clone(), secret))
        })
        .collect();

    if accounts.is_empty() {
        return Err(CredentialError::NoAccountsConfigured);
    }

    Ok(accounts)
}

fn non_blank(vars: &ConfigMap, key: &str) -> Option<String> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
}
