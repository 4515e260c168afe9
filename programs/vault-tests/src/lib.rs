//! LiteSVM scenarios for the transfer hook and vault programs.
//!
//! Both programs are loaded from `target/deploy`, so run `anchor build` first
//! and then `cargo test -p vault-tests -- --include-ignored`.

#[cfg(test)]
mod tests;
