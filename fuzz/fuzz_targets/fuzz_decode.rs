#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and probe must agree with decode on the shape.
    let probed = zenbmp24::ImageInfo::from_bytes(data);
    let limits = zenbmp24::Limits::default().with_max_memory_bytes(64 << 20);
    let decoded = zenbmp24::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    if let Ok(raster) = decoded {
        let info = probed.expect("probe failed on decodable input");
        assert_eq!((info.width, info.height), (raster.width, raster.height));
        assert_eq!(raster.pixels().len(), raster.width as usize * raster.height as usize * 3);
    }
});
