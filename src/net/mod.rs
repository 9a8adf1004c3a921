//! Outbound email plumbing.
//!
//! `email` holds the provider-agnostic submission flow (traits, payload,
//! errors, bounded readiness wait); `emailjs` binds it to the script-injected
//! EmailJS browser SDK and only exists in the WASM build.

pub mod email;

#[cfg(feature = "csr")]
pub mod emailjs;
