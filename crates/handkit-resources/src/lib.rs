//! Resource bundles for handkit
//!
//! A bundle is a single big-endian binary stream of named records: images,
//! fonts, themes, opaque data and localization tables. [`decode`] reads a
//! whole stream into a [`ResourceTable`]; any malformed byte aborts the load
//! and no partial table escapes. Themes may name images and fonts that appear
//! later in the stream, so they are stored with [`Ref::Pending`] entries and
//! resolved by [`ResourceTable::theme`].

mod border;
mod decoder;
mod error;
mod font;
mod format;
mod image;
mod l10n;
mod reader;
mod table;
mod theme;
mod writer;

pub use border::*;
pub use decoder::*;
pub use error::*;
pub use font::*;
pub use format::FormatVersion;
pub use image::*;
pub use l10n::*;
pub use reader::ByteReader;
pub use table::*;
pub use theme::*;
pub use writer::*;

pub mod prelude {
    pub use crate::decoder::{decode, decode_bytes, DecodeOptions};
    pub use crate::error::{ResourceError, Result};
    pub use crate::format::FormatVersion;
    pub use crate::table::{Resource, ResourceKind, ResourceTable};
    pub use crate::theme::{Ref, Theme, ThemeValue};
    pub use crate::writer::ResourceWriter;
}
