//! URL modeling for profile pages.
//!
//! Canonicalizes user-supplied profile URLs (full URLs, bare `@handle`s,
//! host-relative paths) into the stable form used as record identity and
//! dedupe key, and derives the scheme-less form shown to humans.

mod display;
mod normalize;

pub use display::displayed_url;
pub use normalize::normalize_profile_url;

/// Host assumed when the input carries none.
pub const CANONICAL_HOST: &str = "medium.com";
