//! Domain models for the site.
//!
//! # Content API entities
//!
//! - [`Post`]: a published piece of writing, keyed by its slug.
//! - [`Episode`]: a podcast episode.
//! - [`Bookmark`]: a saved external link.
//!
//! # Hacker News entities
//!
//! - [`HnPost`]: a ranked story from a listing, with its comment tree.
//! - [`HnComment`]: a recursive comment node; children are owned by their parent.
//!
//! # Static data
//!
//! - [`ChecklistResource`]: one item of the security checklist.
//!
//! Everything here is an externally sourced snapshot. Page assembly projects these
//! values into props and never mutates them.

mod bookmark;
mod checklist;
mod episode;
mod hn;
mod post;

pub use bookmark::*;
pub use checklist::*;
pub use episode::*;
pub use hn::*;
pub use post::*;
