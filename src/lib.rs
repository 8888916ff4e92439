//! Builder and wire model for rich chat-message embeds.
//!
//! An [`Embed`] accumulates display fields (title, description, colour,
//! author, footer, media, fields, timestamp) through chainable setters, then
//! converts to/from the JSON-object shape the chat API expects. Empty or
//! unset attributes are omitted from the wire form entirely rather than
//! emitted as nulls.
//!
//! Sending the serialized mapping anywhere is the caller's job; this crate
//! does no I/O and enforces no platform-side limits.

#[macro_use]
extern crate serde;

pub use smol_str::SmolStr;
pub use timestamp::Timestamp;

#[cfg(feature = "thin-vec")]
pub use thin_vec::ThinVec as FieldList;

#[cfg(not(feature = "thin-vec"))]
pub type FieldList<T> = Vec<T>;

mod colour;
mod error;

pub mod embed;

pub use colour::Colour;
pub use embed::*;
pub use error::Error;

fn is_none_or_empty(value: &Option<SmolStr>) -> bool {
    match value {
        Some(ref value) => value.is_empty(),
        None => true,
    }
}
