//! Admin form drafts
//!
//! In-memory drafts for the offer and product creation drawers. Numeric
//! inputs are held as raw strings the way the form delivers them, so
//! "missing", "non-numeric" and "out of range" each surface their own
//! field-level error. Validation produces the wire payload; nothing touches
//! the network until a draft validates.

pub mod offer;
pub mod product;

pub use offer::{ConfigDraft, OfferDraft};
pub use product::ProductDraft;
