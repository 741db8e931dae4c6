//! Sanitizing DOM loader.
//!
//! Parses raw HTML and prunes subtrees that can never hold article text,
//! before any scoring or collection runs. The tree is mutated once here and
//! treated as read-only by every later stage.

use crate::dom::{self, Document};
use crate::patterns::{LIGHT_NOISE_TAGS, STRUCTURAL_NOISE_TAGS, UI_NOISE_SELECTORS};

/// Parse HTML and remove structurally irrelevant and known-noise subtrees:
/// scripts, styles, page chrome (header/footer/nav/aside), forms, frames,
/// and the class/id-based toolbars, share widgets, ad boxes, sidebars, and
/// teaser blocks from [`UI_NOISE_SELECTORS`].
///
/// Removal is best-effort per selector; a selector matching nothing, or an
/// element already detached by an earlier removal, is skipped silently.
#[must_use]
pub fn load(html: &str) -> Document {
    let doc = dom::parse(html);
    dom::remove_all(&doc, &STRUCTURAL_NOISE_TAGS.join(", "));
    for css in UI_NOISE_SELECTORS {
        dom::remove_all(&doc, css);
    }
    doc
}

/// Light variant for the minimal fallback tier: strip only the tags that
/// are always noise, keep everything class-based. Loose on purpose — this
/// runs when the stricter pass found nothing.
#[must_use]
pub fn load_light(html: &str) -> Document {
    let doc = dom::parse(html);
    dom::remove_all(&doc, &LIGHT_NOISE_TAGS.join(", "));
    doc
}
