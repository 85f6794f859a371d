//! Flat JSON form of the book.
//!
//! ```text
//! {"timestamp": 1700000000000, "bids": [[70, 500], [60, 300]], "asks": [[80, 10]]}
//! ```
//!
//! Written through `serde_json` with [`SpacedFormatter`], which puts
//! `", "` between elements and `": "` between keys and values. Levels are
//! streamed straight from the book's lists without an intermediate copy.

use std::io;

use serde::ser::{Serialize, Serializer};
use serde_json::ser::Formatter;

use crate::orderbook::book::Levels;

/// Compact JSON with a space after every `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Borrowed view of the book in serialization order.
#[derive(serde::Serialize)]
pub(crate) struct Snapshot<'a> {
    pub timestamp: i64,
    pub bids: LevelSeq<'a>,
    pub asks: LevelSeq<'a>,
}

/// Serializes a level iterator as a JSON array.
pub(crate) struct LevelSeq<'a>(pub Levels<'a>);

impl Serialize for LevelSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.clone())
    }
}

/// Write `snapshot` to `writer` in the flat form.
pub(crate) fn write_snapshot<W: io::Write>(writer: W, snapshot: &Snapshot<'_>) -> serde_json::Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    snapshot.serialize(&mut serializer)
}
