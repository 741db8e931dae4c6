//! Article body extraction.
//!
//! The extraction runs in three tiers, each trusted less than the one
//! before it:
//!
//! - `sanitize` + `container` + `collect`: the DOM heuristic that finds
//!   the densest content container and walks its blocks in document order
//! - `fallback::readability`: `dom_smoothie` over the raw document
//! - `fallback::minimal`: paragraph scraping, meta description, title
//!
//! `pipeline` chains the tiers and is the single entry point used by the
//! crate-level `extract` functions.

pub mod collect;
pub mod container;
pub mod fallback;
pub(crate) mod pipeline;
pub mod sanitize;

pub use collect::SeenSet;
pub use container::select_best;
