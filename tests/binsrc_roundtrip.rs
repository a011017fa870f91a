//! Builds a native "binsrc" file by hand (there is no producer in scope —
//! the core only consumes this format) and exercises `open`/search/`close`
//! end to end.

use std::io::Write;

use binsrc::{find_first, find_last, has_next, has_prev, ByteOrder};

const BINSRC_MAGIC: u64 = 0x6373_6e69_6252_4448;
const HEADER_LEN: u32 = 20;

fn write_binsrc_file(n_rows: u32, col_bytes: &[u8], columns: &[Vec<u64>]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(&BINSRC_MAGIC.to_le_bytes()).unwrap();
    f.write_all(&HEADER_LEN.to_le_bytes()).unwrap();
    f.write_all(&n_rows.to_le_bytes()).unwrap();
    f.write_all(&[col_bytes.len() as u8]).unwrap();
    f.write_all(&[0u8; 3]).unwrap();
    for (col, &w) in columns.iter().zip(col_bytes) {
        for &v in col {
            let be = v.to_be_bytes();
            f.write_all(&be[8 - w as usize..]).unwrap();
        }
    }
    f.flush().unwrap();
    f
}

#[test]
fn row_strided_search_over_two_column_binsrc_file() {
    // 20 rows, two columns: an 8-byte key (ascending) and a 4-byte payload.
    let n = 20u32;
    let keys: Vec<u64> = (0..n as u64).map(|i| i * 10).collect();
    let payload: Vec<u64> = (0..n as u64).collect();
    let file = write_binsrc_file(n, &[8, 4], &[keys.clone(), payload]);

    let mapping = binsrc::open(file.path(), &[8, 4]).unwrap();
    assert_eq!(mapping.n_rows(), 20);
    assert_eq!(mapping.n_cols(), 2);

    let data = mapping.bytes();
    let key_col = mapping.col_offset(0);
    let blklen = 8; // column-contiguous key column, stride == width
    let (mut f, mut l) = (0usize, mapping.n_rows() - 1);
    let pos = find_first::<u64>(data, blklen, key_col, ByteOrder::Big, &mut f, &mut l, 70);
    assert_eq!(pos, 7);

    let (mut f, mut l) = (0usize, mapping.n_rows() - 1);
    let pos = find_last::<u64>(data, blklen, key_col, ByteOrder::Big, &mut f, &mut l, 70);
    assert_eq!(pos, 7);

    mapping.close().unwrap();
}

#[test]
fn has_next_and_has_prev_enumerate_a_duplicate_run() {
    let n = 10u32;
    // Ascending throughout: rows 0..=3 below 100, rows 4..=6 hold the
    // duplicate run, rows 7..=9 above it.
    let keys: Vec<u64> = (0..n as u64)
        .map(|i| match i {
            0..=3 => i,
            4..=6 => 100,
            _ => 100 + (i - 6),
        })
        .collect();
    let file = write_binsrc_file(n, &[8], &[keys]);

    let mapping = binsrc::open(file.path(), &[8]).unwrap();
    let data = mapping.bytes();
    let key_col = mapping.col_offset(0);

    let (mut f, mut l) = (0usize, mapping.n_rows() - 1);
    let mut pos = find_first::<u64>(data, 8, key_col, ByteOrder::Big, &mut f, &mut l, 100);
    assert_eq!(pos, 4);
    assert!(has_next::<u64>(data, 8, key_col, ByteOrder::Big, &mut pos, 9, 100));
    assert_eq!(pos, 5);
    assert!(has_next::<u64>(data, 8, key_col, ByteOrder::Big, &mut pos, 9, 100));
    assert_eq!(pos, 6);
    assert!(!has_next::<u64>(data, 8, key_col, ByteOrder::Big, &mut pos, 9, 100));

    let (mut f, mut l) = (0usize, mapping.n_rows() - 1);
    let mut pos = find_last::<u64>(data, 8, key_col, ByteOrder::Big, &mut f, &mut l, 100);
    assert_eq!(pos, 6);
    assert!(has_prev::<u64>(data, 8, key_col, ByteOrder::Big, 0, &mut pos, 100));
    assert_eq!(pos, 5);
    assert!(has_prev::<u64>(data, 8, key_col, ByteOrder::Big, 0, &mut pos, 100));
    assert_eq!(pos, 4);
    assert!(!has_prev::<u64>(data, 8, key_col, ByteOrder::Big, 0, &mut pos, 100));

    mapping.close().unwrap();
}

#[test]
fn width_mismatch_is_rejected() {
    let file = write_binsrc_file(5, &[8], &[(0..5).collect()]);
    let err = binsrc::open(file.path(), &[8, 4]).unwrap_err();
    assert!(matches!(err, binsrc::MapError::WidthMismatch { .. }));
}
