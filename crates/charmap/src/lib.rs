//! Character maps for the hashid normalizer.
//!
//! A character map turns symbols and accented letters into plain words before
//! hashing, so `"1000円"` and `"1000yen"` end up with the same identifier.
//!
//! ## What lives here
//!
//! - [`CharMap`]: the symbol → replacement table, loadable from JSON
//! - [`CharMapRegistry`]: the lazily built, overridable default table
//! - [`global`]: the process-wide registry used by the default entry points
//! - [`BUNDLED_CHARMAP`]: the JSON table compiled into the crate
//!
//! ## Example
//!
//! ```
//! use charmap::{CharMap, CharMapRegistry};
//!
//! let registry = CharMapRegistry::bundled();
//! let mut map = registry.get().unwrap();
//! assert_eq!(map.get("$"), Some("dollar"));
//!
//! // Mutating the copy leaves the registry untouched.
//! map.insert("$", "buck");
//! assert_eq!(registry.get().unwrap().get("$"), Some("dollar"));
//!
//! registry.set(CharMap::from_json(r#"{"@": "at"}"#).unwrap());
//! assert_eq!(registry.get().unwrap().get("@"), Some("at"));
//! ```

mod error;
mod map;
mod registry;

pub use crate::error::CharMapError;
pub use crate::map::{CharMap, BUNDLED_CHARMAP};
pub use crate::registry::{global, CharMapLoader, CharMapRegistry};
