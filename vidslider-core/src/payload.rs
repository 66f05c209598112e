// ============================================================================
// vidslider-core/src/payload.rs
// ============================================================================
//
// COMPARISON PAYLOADS: Video Pairs To and From the Slider UI
//
// The comparison slider exchanges a two-slot payload with its host: each slot
// is either null or a file record. This module converts between that wire
// form and a typed pair of optional video references.
//
// KEY COMPONENTS:
// - VideoRef / VideoPair: typed side of the conversion
// - FileRecord / Slot / TransferPayload: serde wire form
// - decode / encode: the two inverse conversions
// - encode_value: entry point for loosely-typed JSON values from a host
//
// INVARIANTS:
// - The two sides are never implicitly equated; a missing side stays missing.
// - http(s) URLs are passed through verbatim and never touch the filesystem.
// - decode(encode(pair)) reproduces the pair with local paths made absolute.
//
// AI-ASSISTANT-INFO: Typed/wire conversion for the video comparison payload

use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::path::{Path, PathBuf};

/// `meta._type` marker the host framework puts on file records.
pub const FILE_DATA_TYPE: &str = "gradio.FileData";

// ============================================================================
// TYPED FORM
// ============================================================================

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoRef {
    /// A local file. Never moved or deleted by this module.
    Path(PathBuf),
    /// An externally hosted http(s) video.
    Url(String),
}

impl VideoRef {
    /// Treats http(s) strings as URLs and everything else as a path.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        if is_http_url(value) {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

impl From<PathBuf> for VideoRef {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

/// Ordered pair of optional video references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPair {
    pub left: Option<VideoRef>,
    pub right: Option<VideoRef>,
}

impl VideoPair {
    #[must_use]
    pub fn new(left: Option<VideoRef>, right: Option<VideoRef>) -> Self {
        Self { left, right }
    }

    /// Reads a host value: `null` for no pair, or a two-element array of
    /// strings and nulls.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedVideoValue` for any other shape.
    pub fn from_value(value: &Value) -> CoreResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) if items.len() == 2 => Ok(Some(Self {
                left: side_from_value(&items[0])?,
                right: side_from_value(&items[1])?,
            })),
            other => Err(CoreError::UnsupportedVideoValue(other.to_string())),
        }
    }
}

impl fmt::Display for VideoPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |v: &Option<VideoRef>| v.as_ref().map_or_else(|| "None".to_string(), ToString::to_string);
        write!(f, "({}, {})", side(&self.left), side(&self.right))
    }
}

fn side_from_value(value: &Value) -> CoreResult<Option<VideoRef>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if !s.is_empty() => Ok(Some(VideoRef::classify(s))),
        other => Err(CoreError::UnsupportedVideoValue(other.to_string())),
    }
}

// ============================================================================
// WIRE FORM
// ============================================================================

/// File record as exchanged with the host. Only `path` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl FileRecord {
    fn new(path: String, url: Option<String>) -> Self {
        let orig_name = file_name_of(&path, url.is_some());
        let mime_type = orig_name.as_deref().and_then(mime_type_for);
        Self {
            path,
            url,
            size: None,
            orig_name,
            mime_type: mime_type.map(str::to_string),
            is_stream: false,
            meta: Some(json!({ "_type": FILE_DATA_TYPE })),
        }
    }
}

/// A non-null payload slot: a full record, or a bare path/URL string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    Record(FileRecord),
    Plain(String),
}

impl Slot {
    /// The path carried by the slot, echoed verbatim.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Record(record) => &record.path,
            Self::Plain(path) => path,
        }
    }
}

/// Wire form of a [`VideoPair`]: a two-element array on the wire.
///
/// `root` is `None` only for a structurally broken payload; an absent payload
/// is `Option::<TransferPayload>::None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferPayload {
    pub root: Option<(Option<Slot>, Option<Slot>)>,
}

impl TransferPayload {
    /// Parses payload JSON. JSON `null` is an absent payload.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedPayload` if the JSON is not a two-element
    /// array of nulls, strings and file records.
    pub fn parse(json: &str) -> CoreResult<Option<Self>> {
        serde_json::from_str::<Option<Self>>(json)
            .map_err(|e| CoreError::MalformedPayload(e.to_string()))
    }

    /// Serializes the payload, `null` when absent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Json` if serialization fails.
    pub fn to_json(payload: Option<&Self>) -> CoreResult<String> {
        Ok(serde_json::to_string(&payload)?)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Reduces a payload to a pair of references.
///
/// # Errors
///
/// Returns `CoreError::MalformedPayload` for a payload without its two slots.
///
/// # Examples
///
/// ```rust
/// use vidslider_core::payload::{TransferPayload, VideoRef, decode};
///
/// let payload = TransferPayload::parse(r#"[{"path": "/tmp/a.mp4"}, null]"#).unwrap();
/// let pair = decode(payload.as_ref()).unwrap().unwrap();
/// assert_eq!(pair.left, Some(VideoRef::Path("/tmp/a.mp4".into())));
/// assert_eq!(pair.right, None);
/// ```
pub fn decode(payload: Option<&TransferPayload>) -> CoreResult<Option<VideoPair>> {
    let Some(payload) = payload else {
        return Ok(None);
    };
    let Some((left, right)) = &payload.root else {
        return Err(CoreError::MalformedPayload(
            "payload is present but carries no slots".to_string(),
        ));
    };

    let side = |slot: &Option<Slot>| slot.as_ref().map(|s| VideoRef::classify(s.path()));
    Ok(Some(VideoPair {
        left: side(left),
        right: side(right),
    }))
}

/// Expands a pair into its wire form.
///
/// Local paths are made absolute against the current directory; http(s) URLs
/// pass through unchanged.
///
/// # Errors
///
/// Returns `CoreError::UnsupportedVideoValue` for an empty or non-UTF-8 path
/// or a URL whose scheme is not http(s).
pub fn encode(pair: Option<&VideoPair>) -> CoreResult<Option<TransferPayload>> {
    let Some(pair) = pair else {
        return Ok(None);
    };

    let slot = |side: &Option<VideoRef>| -> CoreResult<Option<Slot>> {
        side.as_ref()
            .map(|video| file_record(video).map(Slot::Record))
            .transpose()
    };

    Ok(Some(TransferPayload {
        root: Some((slot(&pair.left)?, slot(&pair.right)?)),
    }))
}

/// [`encode`] for a loosely-typed host value (see [`VideoPair::from_value`]).
///
/// # Errors
///
/// Returns `CoreError::UnsupportedVideoValue` for values that are neither
/// paths nor URLs.
pub fn encode_value(value: &Value) -> CoreResult<Option<TransferPayload>> {
    encode(VideoPair::from_value(value)?.as_ref())
}

fn file_record(video: &VideoRef) -> CoreResult<FileRecord> {
    match video {
        VideoRef::Url(url) => {
            if !is_http_url(url) {
                return Err(CoreError::UnsupportedVideoValue(url.clone()));
            }
            Ok(FileRecord::new(url.clone(), Some(url.clone())))
        }
        VideoRef::Path(path) => {
            let Some(text) = path.to_str() else {
                return Err(CoreError::UnsupportedVideoValue(
                    path.to_string_lossy().into_owned(),
                ));
            };
            if text.is_empty() || has_foreign_scheme(text) {
                return Err(CoreError::UnsupportedVideoValue(text.to_string()));
            }
            if is_http_url(text) {
                return Ok(FileRecord::new(text.to_string(), Some(text.to_string())));
            }

            let absolute = std::path::absolute(path)?;
            let resolved = absolute.to_str().ok_or_else(|| {
                CoreError::UnsupportedVideoValue(absolute.to_string_lossy().into_owned())
            })?;
            Ok(FileRecord::new(resolved.to_string(), None))
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// True for `http://` and `https://` strings, case-insensitively.
#[must_use]
pub fn is_http_url(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// A `scheme://` prefix other than http(s), e.g. `ftp://` or `rtmp://`.
fn has_foreign_scheme(value: &str) -> bool {
    value.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
            && !is_http_url(value)
    })
}

fn file_name_of(path: &str, is_url: bool) -> Option<String> {
    let path = if is_url {
        path.split(['?', '#']).next().unwrap_or(path)
    } else {
        path
    };
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

/// MIME type for common video container extensions.
#[must_use]
pub fn mime_type_for(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "webm" => "video/webm",
        "ogg" | "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_in_null_out() {
        assert_eq!(decode(None).unwrap(), None);
        assert_eq!(encode(None).unwrap(), None);
        assert_eq!(encode_value(&Value::Null).unwrap(), None);
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
    fn test_decode_records_and_plain_strings() {
        let payload = TransferPayload::parse(
            r#"[{"path": "/cache/a.mp4", "url": "http://host/file=/cache/a.mp4", "orig_name": "a.mp4"}, "https://x/b.mp4"]"#,
        )
        .unwrap();
        let pair = decode(payload.as_ref()).unwrap().unwrap();
        assert_eq!(pair.left, Some(VideoRef::Path(PathBuf::from("/cache/a.mp4"))));
        assert_eq!(pair.right, Some(VideoRef::Url("https://x/b.mp4".to_string())));
    }

    #[test]
    fn test_decode_does_not_resolve_relative_paths() {
        let payload = TransferPayload {
            root: Some((Some(Slot::Plain("clips/a.mp4".to_string())), None)),
        };
        let pair = decode(Some(&payload)).unwrap().unwrap();
        assert_eq!(pair.left, Some(VideoRef::Path(PathBuf::from("clips/a.mp4"))));
    }

    #[test]
    fn test_encode_resolves_paths_and_keeps_urls() {
        let pair = VideoPair::new(
            Some(VideoRef::Path(PathBuf::from("a.mp4"))),
            Some(VideoRef::Url("https://x/a.mp4".to_string())),
        );
        let payload = encode(Some(&pair)).unwrap().unwrap();
        let (left, right) = payload.root.unwrap();

        let Some(Slot::Record(left)) = left else {
            panic!("left should be a record");
        };
        assert!(Path::new(&left.path).is_absolute());
        assert!(left.path.ends_with("a.mp4"));
        assert_eq!(left.url, None);
        assert_eq!(left.orig_name.as_deref(), Some("a.mp4"));
        assert_eq!(left.mime_type.as_deref(), Some("video/mp4"));

        let Some(Slot::Record(right)) = right else {
            panic!("right should be a record");
        };
        assert_eq!(right.path, "https://x/a.mp4");
        assert_eq!(right.url.as_deref(), Some("https://x/a.mp4"));
    }

    #[test]
    fn test_encode_keeps_missing_sides_missing() {
        let pair = VideoPair::new(None, Some(VideoRef::Url("http://x/b.webm".to_string())));
        let payload = encode(Some(&pair)).unwrap().unwrap();
        let (left, right) = payload.root.unwrap();
        assert!(left.is_none());
        assert!(right.is_some());
    }

    #[test]
    fn test_encode_rejects_unsupported_values() {
        let cases = [
            VideoRef::Url("ftp://x/a.mp4".to_string()),
            VideoRef::Url("not a url".to_string()),
            VideoRef::Path(PathBuf::new()),
            VideoRef::Path(PathBuf::from("rtmp://live/stream")),
        ];
        for video in cases {
            let pair = VideoPair::new(Some(video.clone()), None);
            assert!(
                matches!(encode(Some(&pair)), Err(CoreError::UnsupportedVideoValue(_))),
                "{video:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_encode_value_rejects_non_strings() {
        for value in [json!([42, null]), json!([true, null]), json!([{"path": "a.mp4"}, null]), json!(["a.mp4"]), json!("a.mp4"), json!(["", null])] {
            assert!(
                matches!(encode_value(&value), Err(CoreError::UnsupportedVideoValue(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_wire_shape() {
        let pair = VideoPair::new(Some(VideoRef::Url("https://x/a.mp4".to_string())), None);
        let payload = encode(Some(&pair)).unwrap();
        let value: Value = serde_json::from_str(&TransferPayload::to_json(payload.as_ref()).unwrap()).unwrap();
        assert_eq!(value[0]["path"], "https://x/a.mp4");
        assert_eq!(value[0]["meta"]["_type"], FILE_DATA_TYPE);
        assert_eq!(value[1], Value::Null);
        assert_eq!(TransferPayload::to_json(None).unwrap(), "null");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert_eq!(TransferPayload::parse("null").unwrap(), None);
        for json in [r#"["a.mp4"]"#, r#"["a", "b", "c"]"#, "42", r#"{"path": "a.mp4"}"#] {
            assert!(
                matches!(TransferPayload::parse(json), Err(CoreError::MalformedPayload(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://x/a.mp4"));
        assert!(is_http_url("HTTP://X/A.MP4"));
        assert!(!is_http_url("httpx.mp4"));
        assert!(!is_http_url("/tmp/http://"));
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("a.MP4"), Some("video/mp4"));
        assert_eq!(mime_type_for("a.mov"), Some("video/quicktime"));
        assert_eq!(mime_type_for("a.txt"), None);
        assert_eq!(mime_type_for("noext"), None);
    }

    #[test]
    fn test_file_name_of_url_ignores_query() {
        assert_eq!(file_name_of("https://x/v/a.mp4?token=1", true).as_deref(), Some("a.mp4"));
    }
}
