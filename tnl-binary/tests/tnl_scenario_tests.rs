//! TNL Scenario Tests
//!
//! End-to-end checks of container framing, fitting and raw texture decoding
//! using the real `image` codec.

use image::{ImageFormat, Rgba, RgbaImage};
use proptest::prelude::*;
use tnl_binary::texture::{TextureExporter, rgb565_to_rgba};
use tnl_binary::{
    ImageJpegCodec, JpegCodec, JpegFitter, TileRegion, crc32, decode_container,
    decode_raw_texture, encode_container, fit_to_profile, is_broken, verify_checksum,
};
use tnl_core::{
    FitOptions, ImageProfile, Orientation, RAW_TEXTURE_SIZE, TNL_JPEG_MAX_SIZE, TNL_SIZE,
    TnlError,
};

/// Deterministic noise that compresses badly
fn noise_image(width: u32, height: u32) -> RgbaImage {
    let mut state: u32 = 0x1234_5678;
    RgbaImage::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = state.to_be_bytes();
        Rgba([r, g, b, 255])
    })
}

#[test]
fn test_scenario_matching_jpeg_is_framed_unchanged() {
    let jpeg: Vec<u8> = (0..40000u32).map(|i| (i % 251) as u8).collect();
    let tnl = encode_container(&jpeg).unwrap();

    assert_eq!(tnl.len(), TNL_SIZE);
    assert_eq!(hex::encode(&tnl[4..8]), "00009c40");
    assert_eq!(&tnl[8..8 + 40000], jpeg.as_slice());
    assert!(tnl[8 + 40000..].iter().all(|&b| b == 0));
    assert!(verify_checksum(&tnl));
    assert_eq!(decode_container(&tnl).unwrap(), jpeg);
}

#[test]
fn test_scenario_oversized_length_field() {
    let mut data = vec![0u8; TNL_SIZE];
    data[4..8].copy_from_slice(&60000u32.to_be_bytes());
    assert!(matches!(decode_container(&data), Err(TnlError::Format(_))));
}

#[test]
fn test_scenario_wide_source_reencoded_until_it_fits() {
    let source = TextureExporter::encode_with_format(&noise_image(1280, 720), ImageFormat::Png)
        .unwrap();
    let fitted = fit_to_profile(&source, &FitOptions::new(Orientation::Auto), ImageJpegCodec)
        .unwrap();

    assert_eq!(fitted.profile, ImageProfile::Normal);
    assert!(fitted.jpeg.len() <= TNL_JPEG_MAX_SIZE);
    let quality = fitted.quality.expect("source had to be re-encoded");
    assert!(quality <= 95 && quality % 5 == 0);

    let decoded = ImageJpegCodec.decode(&fitted.jpeg).unwrap();
    assert_eq!(decoded.dimensions(), (320, 240));

    let tnl = encode_container(&fitted.jpeg).unwrap();
    assert!(verify_checksum(&tnl));
}

#[test]
fn test_matching_jpeg_passes_through() {
    let image = RgbaImage::from_pixel(720, 81, Rgba([30, 60, 90, 255]));
    let jpeg = TextureExporter::encode_jpeg(&image, 90).unwrap();
    let fitted = JpegFitter::new(FitOptions::new(Orientation::Wide))
        .fit_bytes(&jpeg)
        .unwrap();
    assert!(fitted.is_passthrough());
    assert_eq!(fitted.jpeg, jpeg);
}

#[test]
fn test_clip_covers_wide_profile() {
    let source = noise_image(400, 100);
    let fitter = JpegFitter::new(FitOptions::new(Orientation::Wide).with_clip(true));
    let fitted = fitter.fit_image(&source).unwrap();
    let decoded = ImageJpegCodec.decode(&fitted.jpeg).unwrap();
    assert_eq!(decoded.dimensions(), ImageProfile::Wide.dimensions());
}

#[test]
fn test_scenario_raw_texture_decode() {
    let mut data = vec![0u8; RAW_TEXTURE_SIZE];
    for (i, chunk) in data.chunks_exact_mut(2).enumerate() {
        chunk.copy_from_slice(&(i as u16).to_le_bytes());
    }
    let (tall, strip) = decode_raw_texture(&data).unwrap();
    assert_eq!(tall.dimensions(), (168, 216));
    assert_eq!(strip.dimensions(), (32, 240));

    for (region, image) in [(TileRegion::TALL, &tall), (TileRegion::STRIP, &strip)] {
        for y in 0..region.height {
            for x in 0..region.width {
                let offset = region.offset(x, y);
                let sample = u16::from_le_bytes([data[offset], data[offset + 1]]);
                assert_eq!(*image.get_pixel(x, y), rgb565_to_rgba(sample));
            }
        }
    }
}

#[test]
fn test_detector_on_real_jpeg() {
    let jpeg = TextureExporter::encode_jpeg(&noise_image(64, 64), 90).unwrap();
    assert!(!is_broken(&jpeg));
}

proptest! {
    #[test]
    fn prop_container_is_fixed_size_and_checksummed(
        payload in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let tnl = encode_container(&payload).unwrap();
        prop_assert_eq!(tnl.len(), TNL_SIZE);
        let stored = u32::from_be_bytes([tnl[0], tnl[1], tnl[2], tnl[3]]);
        prop_assert_eq!(stored, crc32(&tnl[4..]));
        prop_assert_eq!(decode_container(&tnl).unwrap(), payload);
    }

    #[test]
    fn prop_decode_never_reads_past_buffer(
        length in any::<u32>(),
        extra in 0usize..64
    ) {
        let mut data = vec![0u8; 8 + extra];
        data[4..8].copy_from_slice(&length.to_be_bytes());
        match decode_container(&data) {
            Ok(jpeg) => prop_assert_eq!(jpeg.len(), length as usize),
            Err(TnlError::Format(_)) => prop_assert!(length as usize > extra),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
