//! Apache Arrow IPC file container.
//!
//! Deliberately does not build on `arrow`'s high-level `FileReader`/`RecordBatch`
//! API: that API copies buffer bytes out into owned `Buffer`s, which would
//! defeat the whole point of searching directly against the memory map. This
//! module uses only the low-level flatbuffer schema types the `arrow` crate
//! re-exports (`arrow::ipc::{Footer, Block, Message, RecordBatch, ...}`) to
//! resolve *absolute byte offsets* into the original mapping, and never reads
//! a column's bytes itself.

use std::path::Path;

use arrow::ipc::{root_as_footer, root_as_message, MessageHeader};

use crate::config::{ARROW_CONTINUATION_MARKER, ARROW_MAGIC};
use crate::error::MapError;

use super::{resolve_width, ContainerKind, Layout};

fn bad(path: &Path, reason: &'static str) -> MapError {
    MapError::BadContainer {
        path: path.to_path_buf(),
        reason,
    }
}

pub(super) fn parse(data: &[u8], ctbytes: &[u8], path: &Path) -> Result<Layout, MapError> {
    let magic_len = ARROW_MAGIC.len();
    if data.len() < magic_len * 2 + 4 {
        return Err(bad(path, "arrow file too short to contain a footer"));
    }

    // Trailing 10 bytes: footer_len:i32 LE, then the magic again.
    let footer_len_bytes = &data[data.len() - 4 - magic_len..data.len() - magic_len];
    let footer_len = i32::from_le_bytes(footer_len_bytes.try_into().unwrap());
    if footer_len <= 0 {
        return Err(bad(path, "arrow footer length is non-positive"));
    }
    let footer_len = footer_len as usize;
    let footer_start = data
        .len()
        .checked_sub(4 + magic_len + footer_len)
        .ok_or_else(|| bad(path, "arrow footer length larger than file"))?;
    let footer_bytes = &data[footer_start..footer_start + footer_len];

    let footer =
        root_as_footer(footer_bytes).map_err(|_| bad(path, "arrow footer is not valid flatbuffer data"))?;
    let blocks = footer
        .recordBatches()
        .ok_or_else(|| bad(path, "arrow footer has no record batches"))?;
    if blocks.is_empty() {
        return Err(bad(path, "arrow file has zero record batches"));
    }
    // Multiple record batches would need to be concatenated to form one
    // sorted column; this parser targets files written as a single batch,
    // the shape the rest of this library's container family assumes.
    let block = blocks.get(0);

    let msg_offset = block.offset() as usize;
    let meta_len = block.metaDataLength() as usize;
    if msg_offset + meta_len > data.len() {
        return Err(bad(path, "arrow record batch message extends past end of file"));
    }
    let msg_region = &data[msg_offset..msg_offset + meta_len];

    // The encapsulated message is prefixed either by a 4-byte continuation
    // marker followed by a 4-byte little-endian metadata size, or (legacy,
    // pre 0.15 writers) by the 4-byte size alone.
    let prefix_is_continuation = msg_region.len() >= 4
        && u32::from_le_bytes(msg_region[0..4].try_into().unwrap()) == ARROW_CONTINUATION_MARKER;
    let (meta_size_off, header_off) = if prefix_is_continuation { (4, 8) } else { (0, 4) };
    if msg_region.len() < meta_size_off + 4 {
        return Err(bad(path, "arrow message prefix truncated"));
    }
    let meta_size =
        i32::from_le_bytes(msg_region[meta_size_off..meta_size_off + 4].try_into().unwrap());
    if meta_size < 0 || header_off + meta_size as usize > msg_region.len() {
        return Err(bad(path, "arrow message metadata size out of range"));
    }
    let message_bytes = &msg_region[header_off..header_off + meta_size as usize];

    let message = root_as_message(message_bytes)
        .map_err(|_| bad(path, "arrow message is not valid flatbuffer data"))?;
    if message.header_type() != MessageHeader::RecordBatch {
        return Err(bad(path, "arrow record batch block does not hold a RecordBatch message"));
    }
    let record_batch = message
        .header_as_record_batch()
        .ok_or_else(|| bad(path, "failed to read RecordBatch header"))?;

    let n_rows = record_batch.length() as usize;
    let buffers = record_batch
        .buffers()
        .ok_or_else(|| bad(path, "arrow record batch has no buffers"))?;

    // Body starts immediately after the encapsulated message's metadata,
    // both measured from the start of this record batch's block.
    let body_start = msg_offset + meta_len;

    // arrow-rs's IPC writer emits exactly one validity buffer and one values
    // buffer per primitive column; this parser targets that common layout
    // (the non-null, fixed-width integer columns the rest of this library
    // searches over) rather than the full generality of nested/variable
    // Arrow types.
    if buffers.len() % 2 != 0 {
        return Err(bad(
            path,
            "arrow buffer count is not a multiple of two (validity, values) per column",
        ));
    }
    let n_cols = buffers.len() / 2;
    if !ctbytes.is_empty() && ctbytes.len() != n_cols {
        return Err(MapError::WidthMismatch {
            path: path.to_path_buf(),
            expected_cols: ctbytes.len(),
            found_cols: n_cols,
        });
    }

    let mut col_bytes = Vec::with_capacity(n_cols);
    let mut col_offset = Vec::with_capacity(n_cols);
    let mut min_offset = usize::MAX;
    let mut max_end = 0usize;
    for i in 0..n_cols {
        let values_buf = buffers.get(i * 2 + 1);
        let abs_offset = body_start + values_buf.offset() as usize;
        let len = values_buf.length() as usize;
        let expected = ctbytes.get(i).copied();
        let width = resolve_width(len, n_rows, expected, path)?;
        if abs_offset + n_rows * width as usize > data.len() {
            return Err(bad(path, "arrow column buffer extends past end of file"));
        }
        min_offset = min_offset.min(abs_offset);
        max_end = max_end.max(abs_offset + len);
        col_bytes.push(width);
        col_offset.push(abs_offset);
    }

    Ok(Layout {
        kind: ContainerKind::ArrowIpc,
        data_offset: min_offset,
        data_length: max_end - min_offset,
        n_rows,
        n_cols,
        col_bytes,
        col_offset,
    })
}
