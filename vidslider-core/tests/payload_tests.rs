// vidslider-core/tests/payload_tests.rs

use serde_json::json;
use std::path::PathBuf;
use vidslider_core::payload::{Slot, TransferPayload, VideoPair, VideoRef, decode, encode, encode_value};
use vidslider_core::CoreError;

fn resolved(path: &str) -> VideoRef {
    VideoRef::Path(std::path::absolute(path).expect("absolute path"))
}

#[test]
fn test_round_trip_two_local_paths() -> Result<(), Box<dyn std::error::Error>> {
    let pair = VideoPair::new(
        Some(VideoRef::Path(PathBuf::from("a.mp4"))),
        Some(VideoRef::Path(PathBuf::from("b.mp4"))),
    );

    let payload = encode(Some(&pair))?;
    let decoded = decode(payload.as_ref())?;

    assert_eq!(
        decoded,
        Some(VideoPair::new(Some(resolved("a.mp4")), Some(resolved("b.mp4"))))
    );
    Ok(())
}

#[test]
fn test_round_trip_url_and_missing_side() -> Result<(), Box<dyn std::error::Error>> {
    let pair = VideoPair::new(Some(VideoRef::Url("https://x/a.mp4".to_string())), None);

    let payload = encode(Some(&pair))?;
    let decoded = decode(payload.as_ref())?;

    assert_eq!(decoded, Some(pair));
    Ok(())
}

#[test]
fn test_round_trip_through_json() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let local = tmp.path().join("green.mp4");
    let pair = VideoPair::new(
        Some(VideoRef::Path(local.clone())),
        Some(VideoRef::Url("http://cdn.example/red.mp4".to_string())),
    );

    let json = TransferPayload::to_json(encode(Some(&pair))?.as_ref())?;
    let decoded = decode(TransferPayload::parse(&json)?.as_ref())?;

    assert_eq!(decoded, Some(pair));
    Ok(())
}

#[test]
fn test_absent_pair_and_payload() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(None)?, None);
    assert_eq!(decode(None)?, None);
    assert_eq!(TransferPayload::parse("null")?, None);
    Ok(())
}

#[test]
fn test_one_side_is_never_copied_to_the_other() -> Result<(), Box<dyn std::error::Error>> {
    let pair = VideoPair::new(Some(VideoRef::Url("https://x/only.mp4".to_string())), None);
    let decoded = decode(encode(Some(&pair))?.as_ref())?.expect("pair");
    assert!(decoded.right.is_none());
    Ok(())
}

#[test]
fn test_encode_rejects_non_path_non_url_value() {
    let result = encode_value(&json!([42, null]));
    assert!(matches!(result, Err(CoreError::UnsupportedVideoValue(ref v)) if v == "42"));
}

#[test]
fn test_encode_value_accepts_strings_and_nulls() -> Result<(), Box<dyn std::error::Error>> {
    let payload = encode_value(&json!(["https://x/a.mp4", null]))?.expect("payload");
    let (left, right) = payload.root.expect("slots");
    assert!(matches!(left, Some(Slot::Record(ref r)) if r.path == "https://x/a.mp4"));
    assert!(right.is_none());
    Ok(())
}

#[test]
fn test_null_root_is_malformed() {
    let payload = TransferPayload { root: None };
    assert!(matches!(
        decode(Some(&payload)),
        Err(CoreError::MalformedPayload(_))
    ));
}

#[test]
fn test_host_payload_with_uploaded_files() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"[
        {"path": "/tmp/gradio/abc/green.mp4", "url": "http://127.0.0.1:7860/file=/tmp/gradio/abc/green.mp4",
         "size": 12345, "orig_name": "green.mp4", "mime_type": "video/mp4", "is_stream": false,
         "meta": {"_type": "gradio.FileData"}},
        null
    ]"#;
    let pair = decode(TransferPayload::parse(json)?.as_ref())?.expect("pair");
    assert_eq!(
        pair.left,
        Some(VideoRef::Path(PathBuf::from("/tmp/gradio/abc/green.mp4")))
    );
    assert_eq!(pair.right, None);
    Ok(())
}
