//! Minimal read-only FlatBuffers table cursor.
//!
//! The Feather v1 container's metadata footer is FlatBuffers-encoded, but no
//! maintained crate generates bindings for its (retired) schema the way
//! `arrow-ipc` does for the modern Arrow IPC schema. This is just enough of
//! the FlatBuffers wire format — root table, vtable field lookup, strings,
//! vectors-of-tables — to walk that one schema directly against the mapping,
//! in the same byte-offset idiom as the rest of the container parsers.

/// A FlatBuffers table: an absolute byte position into a buffer, plus the
/// buffer itself to resolve indirections against.
#[derive(Clone, Copy)]
pub(crate) struct Table<'a> {
    buf: &'a [u8],
    pos: usize,
}

fn read_u16(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(buf[off..off + 2].try_into().unwrap())
}

fn read_i32(buf: &[u8], off: usize) -> i32 {
    i32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

fn read_u32(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

/// Resolves a FlatBuffers indirection: the stored `uoffset_t` is added to its
/// own position modulo 2^32 (the wire format's arithmetic), not widened
/// first, so it decodes correctly regardless of which direction the
/// reference points.
fn resolve_indirection(field_pos: usize, uoffset: u32) -> usize {
    (field_pos as u32).wrapping_add(uoffset) as usize
}

impl<'a> Table<'a> {
    /// Reads the root table of a FlatBuffers message starting at `root_pos`
    /// in `buf` (normally 0: the first four bytes of the message are the
    /// root's uoffset).
    pub(crate) fn root(buf: &'a [u8], root_pos: usize) -> Option<Table<'a>> {
        if buf.len() < root_pos + 4 {
            return None;
        }
        let pos = resolve_indirection(root_pos, read_u32(buf, root_pos));
        if pos >= buf.len() {
            return None;
        }
        Some(Table { buf, pos })
    }

    fn vtable_pos(&self) -> Option<usize> {
        if self.buf.len() < self.pos + 4 {
            return None;
        }
        let soffset = read_i32(self.buf, self.pos) as i64;
        let vtable_pos = self.pos as i64 - soffset;
        if vtable_pos < 0 || vtable_pos as usize >= self.buf.len() {
            return None;
        }
        Some(vtable_pos as usize)
    }

    /// Absolute position of field `slot`'s inline data, or `None` if the
    /// field is absent (the table was built without it; use the schema
    /// default).
    fn field_pos(&self, slot: usize) -> Option<usize> {
        let vtable_pos = self.vtable_pos()?;
        let vtable_size = read_u16(self.buf, vtable_pos) as usize;
        let entry = 4 + slot * 2;
        if entry + 2 > vtable_size {
            return None;
        }
        let voffset = read_u16(self.buf, vtable_pos + entry) as usize;
        if voffset == 0 {
            return None;
        }
        Some(self.pos + voffset)
    }

    pub(crate) fn get_i64(&self, slot: usize, default: i64) -> i64 {
        match self.field_pos(slot) {
            Some(p) => i64::from_le_bytes(self.buf[p..p + 8].try_into().unwrap()),
            None => default,
        }
    }

    /// A `table`-typed field: resolves the field's indirection (relative to
    /// the field's own position) to the referenced table.
    pub(crate) fn get_table(&self, slot: usize) -> Option<Table<'a>> {
        let field_pos = self.field_pos(slot)?;
        let obj_pos = resolve_indirection(field_pos, read_u32(self.buf, field_pos));
        if obj_pos >= self.buf.len() {
            return None;
        }
        Some(Table {
            buf: self.buf,
            pos: obj_pos,
        })
    }

    /// A `[table]`-typed (vector-of-tables) field.
    pub(crate) fn get_table_vector(&self, slot: usize) -> Option<TableVector<'a>> {
        let field_pos = self.field_pos(slot)?;
        let vec_pos = resolve_indirection(field_pos, read_u32(self.buf, field_pos));
        if vec_pos + 4 > self.buf.len() {
            return None;
        }
        let len = read_u32(self.buf, vec_pos) as usize;
        Some(TableVector {
            buf: self.buf,
            elems_start: vec_pos + 4,
            len,
        })
    }
}

/// A vector of table-typed elements: each element is a uoffset relative to
/// its own slot in the vector.
pub(crate) struct TableVector<'a> {
    buf: &'a [u8],
    elems_start: usize,
    len: usize,
}

impl<'a> TableVector<'a> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, i: usize) -> Option<Table<'a>> {
        if i >= self.len {
            return None;
        }
        let slot_pos = self.elems_start + i * 4;
        let obj_pos = resolve_indirection(slot_pos, read_u32(self.buf, slot_pos));
        if obj_pos >= self.buf.len() {
            return None;
        }
        Some(Table {
            buf: self.buf,
            pos: obj_pos,
        })
    }
}
