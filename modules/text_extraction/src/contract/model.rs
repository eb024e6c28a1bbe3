//! Contract models for text extraction requests
//!
//! These models are transport-agnostic and shared by every construction style.
//! NO serde derives - the declarative DTO lives in `api::declarative`.

use bytes::Bytes;
use indexmap::IndexMap;
use std::fmt;
use std::num::NonZeroU64;

/// Recognized extraction settings, listed in catalog declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    /// Return plain text instead of HTML
    AsPlainText,
    /// Run OCR on image regions
    WithOcr,
    /// Service-side processing timeout in seconds
    Timeout,
    /// Return bounding boxes of recognized text (OCR only)
    WithBoundingBoxes,
    /// Merge recognized text in place (OCR only)
    InlineOcr,
    /// Run OCR on regions that already carry text (OCR only)
    OcrWithText,
    /// Rotate the page before processing
    RotateAngle,
    /// Detect tabular regions (OCR only)
    DetectTables,
}

/// Positive number of seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timeout(NonZeroU64);

impl Timeout {
    pub(crate) fn from_validated(seconds: NonZeroU64) -> Self {
        Self(seconds)
    }

    /// Timeout in whole seconds, always > 0
    pub fn seconds(&self) -> u64 {
        self.0.get()
    }
}

/// Page rotation applied before processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotateAngle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl RotateAngle {
    /// Rotation in degrees
    pub fn degrees(&self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Typed value of a single setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Flag(bool),
    Timeout(Option<Timeout>),
    Rotation(RotateAngle),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Timeout(Some(timeout)) => write!(f, "{}s", timeout.seconds()),
            Self::Timeout(None) => write!(f, "none"),
            Self::Rotation(angle) => write!(f, "{}°", angle.degrees()),
        }
    }
}

/// Extraction preferences for a single request
///
/// Fields hold already-validated values, so any instance is legal input for
/// normalization. Child OCR flags may be set while `with_ocr` is false; they
/// are suppressed during normalization rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractionRequestConfig {
    /// Return plain text (`true`) or HTML (`false`)
    pub as_plain_text: bool,
    /// Enable OCR
    pub with_ocr: bool,
    /// Processing timeout; `None` means no timeout is enforced
    pub timeout: Option<Timeout>,
    /// Return bounding boxes (requires OCR)
    pub with_bounding_boxes: bool,
    /// Inline OCR mode (requires OCR)
    pub inline_ocr: bool,
    /// OCR regions that already contain text (requires OCR)
    pub ocr_with_text: bool,
    /// Rotation applied before processing
    pub rotate_angle: RotateAngle,
    /// Table detection (requires OCR)
    pub detect_tables: bool,
}

impl Default for ExtractionRequestConfig {
    fn default() -> Self {
        Self {
            as_plain_text: true,
            with_ocr: false,
            timeout: None,
            with_bounding_boxes: false,
            inline_ocr: false,
            ocr_with_text: false,
            rotate_angle: RotateAngle::Deg0,
            detect_tables: false,
        }
    }
}

/// OCR sub-features enabled together with OCR itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OcrOptions {
    pub inline: bool,
    pub with_bounding_boxes: bool,
    pub detect_tables: bool,
    pub ocr_with_text: bool,
}

impl OcrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_bounding_boxes(mut self, enabled: bool) -> Self {
        self.with_bounding_boxes = enabled;
        self
    }

    pub fn detect_tables(mut self, enabled: bool) -> Self {
        self.detect_tables = enabled;
        self
    }

    pub fn ocr_with_text(mut self, enabled: bool) -> Self {
        self.ocr_with_text = enabled;
        self
    }
}

/// Minimal form of a configuration: non-default settings in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalSettings {
    entries: Vec<(OptionKey, OptionValue)>,
}

impl CanonicalSettings {
    pub(crate) fn from_entries(entries: Vec<(OptionKey, OptionValue)>) -> Self {
        Self { entries }
    }

    /// Stored (non-default) value for a setting
    pub fn get(&self, key: OptionKey) -> Option<OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, OptionValue)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Header value as produced by the serializer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderValue {
    Text(String),
    Int(u64),
    Bool(bool),
}

impl HeaderValue {
    /// Rendering used on the wire
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Bool(flag) => flag.to_string(),
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for HeaderValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for HeaderValue {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Immutable, ordered header set derived from one configuration
///
/// Only normalization builds one, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaderSet {
    headers: IndexMap<&'static str, HeaderValue>,
}

impl CanonicalHeaderSet {
    pub(crate) fn from_headers(headers: IndexMap<&'static str, HeaderValue>) -> Self {
        Self { headers }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HeaderValue)> + '_ {
        self.headers.iter().map(|(name, value)| (*name, value))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.headers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Header names with their wire renderings
    pub fn to_wire_pairs(&self) -> Vec<(&'static str, String)> {
        self.headers
            .iter()
            .map(|(name, value)| (*name, value.to_wire()))
            .collect()
    }

    /// Build an `http::HeaderMap`; names are lower-cased by `http`
    pub fn to_header_map(&self) -> Result<http::HeaderMap, http::Error> {
        let mut map = http::HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = http::header::HeaderName::from_bytes(name.as_bytes())?;
            let value = http::header::HeaderValue::from_str(&value.to_wire())?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

/// Document bytes forwarded verbatim as the request body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    body: Bytes,
}

impl Document {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    /// Drain a readable source into memory
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> std::io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self::new(buf))
    }

    /// Read a whole file
    pub async fn open(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let body = tokio::fs::read(path).await?;
        Ok(Self::new(body))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }
}

impl From<Vec<u8>> for Document {
    fn from(body: Vec<u8>) -> Self {
        Self::new(body)
    }
}

impl From<&'static [u8]> for Document {
    fn from(body: &'static [u8]) -> Self {
        Self::new(body)
    }
}

impl From<Bytes> for Document {
    fn from(body: Bytes) -> Self {
        Self { body }
    }
}

/// Finalized request handed to a transport
///
/// Consumed by `Transport::send`, so a header set goes out at most once.
/// Built only by normalization (`Service::prepare`, `ExtractionRequestConfig::prepare`).
#[derive(Debug)]
pub struct PreparedRequest {
    headers: CanonicalHeaderSet,
    document: Document,
}

impl PreparedRequest {
    pub(crate) fn new(headers: CanonicalHeaderSet, document: Document) -> Self {
        Self { headers, document }
    }

    pub fn headers(&self) -> &CanonicalHeaderSet {
        &self.headers
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_parts(self) -> (CanonicalHeaderSet, Document) {
        (self.headers, self.document)
    }
}
