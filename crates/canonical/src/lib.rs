//! Identity-preserving text normalization.
//!
//! This crate turns arbitrary Unicode input into a canonical, mostly-ASCII
//! form so that superficially different spellings of one identity (case,
//! accents, punctuation, symbol choice) hash to the same identifier.
//!
//! ## What we do
//!
//! - Unicode NFC composition (precomposed and decomposed forms agree)
//! - Per-code-point substitution through a [`CharMap`] (`"$"` → `"dollar"`)
//! - Removal of a fixed set of structural characters (`@ # : _ ~ . $ ^ ( ) ! * + ' " \ -`)
//! - Whitespace trimming, then collapsing of whitespace runs to one separator
//! - Locale-free Unicode lowercasing
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. [`normalize`] and
//! [`Normalizer::normalize`] never fail; only the entry points that reach for
//! the process-wide default map ([`normalize_default`], [`normalize_with`])
//! can return an error, when that map cannot be loaded.
//!
//! ## Invariants worth knowing
//!
//! - Lookup is per code point, never per byte, so multi-byte symbols map as a unit
//! - A substitution equal to the separator becomes a word boundary; with the
//!   default `"-"` separator that includes literal hyphens in the input
//! - Output is idempotent under the bundled map: `normalize(normalize(x)) == normalize(x)`

mod config;
mod error;
mod pipeline;
mod strip;
mod whitespace;

pub use charmap::CharMap;

pub use crate::config::{NormalizerConfig, DEFAULT_SEPARATOR};
pub use crate::error::CanonicalError;
pub use crate::pipeline::{normalize, normalize_default, normalize_with, Normalizer};
pub use crate::strip::{is_disallowed, remove_disallowed, DISALLOWED_CHARS};
pub use crate::whitespace::{collapse_whitespace, is_collapsible_whitespace};
