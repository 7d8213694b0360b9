#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bit_count: u16, compression: u32, pixels: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 54];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&((54 + pixels.len()) as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bit_count.to_le_bytes());
    out[30..34].copy_from_slice(&compression.to_le_bytes());
    out[34..38].copy_from_slice(&(pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1, one padding byte
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 24, 0, &[0xff, 0x00, 0x00, 0x00])).unwrap();

    // 2x2 top-down
    let rows = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0, 0, 0x70, 0x80, 0x90, 0xa0, 0xb0, 0xc0, 0, 0];
    fs::write(format!("{dir}/bmp_2x2_topdown.bmp"), bmp(2, -2, 24, 0, &rows)).unwrap();

    // 3x2 bottom-up, no padding needed beyond 12-byte rows
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, 24, 0, &[0x55; 24])).unwrap();

    // Rejected variants for edge coverage
    fs::write(format!("{dir}/bmp_8bit.bmp"), bmp(1, 1, 8, 0, &[0; 4])).unwrap();
    fs::write(format!("{dir}/bmp_rle8.bmp"), bmp(1, 1, 24, 1, &[0; 4])).unwrap();
    fs::write(format!("{dir}/bmp_short_pixels.bmp"), bmp(4, 4, 24, 0, &[0; 7])).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
