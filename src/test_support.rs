//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use tempfile::TempDir;

use crate::core::config::VaultConfig;
use crate::core::vault::Vault;

/// Creates a vault inside a fresh temporary directory.
///
/// Keep the `TempDir` alive for as long as the vault is used.
pub fn temp_vault() -> (TempDir, Vault) {
    let dir = tempfile::tempdir().expect("temp dir");
    let vault = Vault::open(VaultConfig::new(dir.path())).expect("vault opens");
    (dir, vault)
}
