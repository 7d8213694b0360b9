#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp24::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the dimensions, the rest fills the raster.
    let [w, h, rest @ ..] = data else {
        return;
    };
    let (w, h) = (u32::from(*w % 64) + 1, u32::from(*h % 64) + 1);
    let len = (w * h * 3) as usize;
    let pixels: Vec<u8> = rest.iter().copied().cycle().take(len).collect();
    if pixels.len() != len {
        return;
    }

    let raster = Raster::new(w, h, pixels).expect("valid raster");
    let encoded = encode_bmp(&raster).expect("encode");
    assert_eq!(encoded.len(), encoded_size(w, h).unwrap());
    let decoded = decode_bmp(&encoded).expect("re-encoded data failed to decode");
    assert_eq!(decoded, raster, "roundtrip pixel mismatch");
});
