use super::*;
use crate::render::RasterImage;

fn tiny_raster() -> RasterImage {
    RasterImage::new(2, 2, vec![200; 16]).unwrap()
}

fn payload(references: usize) -> GenerationPayload {
    let context = EncodedImage::jpeg_from_raster(&tiny_raster(), JPEG_QUALITY_CONTEXT).unwrap();
    GenerationPayload {
        prompt: "do the thing".to_string(),
        clean: context.clone(),
        marked: context.clone(),
        references: vec![context; references],
        model_id: "gemini-3-pro-image-preview".to_string(),
        aspect_ratio: AspectRatio::WideCinematic,
        resolution: ResolutionTier::TwoK,
    }
}

#[test]
fn jpeg_encoding_produces_a_jpeg_stream() {
    let encoded = EncodedImage::jpeg_from_raster(&tiny_raster(), 90).unwrap();
    assert_eq!(encoded.mime_type, "image/jpeg");
    // SOI marker.
    assert_eq!(&encoded.data[..2], &[0xFF, 0xD8]);
}

#[test]
fn base64_roundtrips() {
    let encoded = EncodedImage::from_encoded("image/png", vec![1, 2, 3, 4]);
    assert_eq!(encoded.to_base64(), "AQIDBA==");
}

#[test]
fn image_count_is_two_plus_references() {
    assert_eq!(payload(0).image_count(), 2);
    assert_eq!(payload(3).image_count(), 5);
}

#[test]
fn request_body_lists_prompt_then_images_in_role_order() {
    let body = payload(2).to_request_body();
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0]["text"], "do the thing");
    for part in &parts[1..] {
        assert_eq!(part["inline_data"]["mime_type"], "image/jpeg");
        assert!(part["inline_data"]["data"].as_str().unwrap().len() > 0);
    }
}

#[test]
fn request_body_carries_image_output_config() {
    let body = payload(0).to_request_body();
    let config = &body["generationConfig"];
    assert_eq!(config["responseModalities"][0], "IMAGE");
    assert_eq!(config["imageConfig"]["aspect_ratio"], "16:9");
    assert_eq!(config["imageConfig"]["image_size"], "2K");
}

#[test]
fn request_body_downgrades_resolution_for_flash_models() {
    let mut p = payload(0);
    p.model_id = "gemini-2.5-flash-image".to_string();
    p.resolution = ResolutionTier::FourK;
    let body = p.to_request_body();
    assert_eq!(body["generationConfig"]["imageConfig"]["image_size"], "2K");
}
