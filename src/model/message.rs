//! Message summary and detail types, as served by the capture backend.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n;

/// Separator used when joining the recipient list for display.
pub const RECIPIENT_SEPARATOR: &str = ", ";

/// Lightweight listing entry for one captured message (no body).
///
/// The backend fixes the wire names: the identifier travels as `ID`
/// (lowercase `id` is accepted too) and the sender as `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    #[serde(rename = "ID", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub from: String,

    #[serde(deserialize_with = "de_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Full representation of one captured message, fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetail {
    /// Filled from the request path when the payload does not carry it.
    #[serde(default, rename = "ID", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub from: String,

    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub to: Vec<String>,

    #[serde(deserialize_with = "de_timestamp")]
    pub timestamp: DateTime<Utc>,

    /// The body is trusted markup when set. The viewer never sanitizes it.
    #[serde(default)]
    pub html: bool,

    #[serde(default)]
    pub body: String,
}

/// How a detail body must be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyView<'a> {
    /// Trusted markup, to be interpreted by the renderer.
    Markup(&'a str),
    /// Literal preformatted text, no interpretation at all.
    Preformatted(&'a str),
}

impl MessageSummary {
    /// Subject, or the "no subject" placeholder when absent or empty.
    pub fn title(&self) -> &str {
        display_subject(self.subject.as_deref())
    }
}

impl MessageDetail {
    /// Subject, or the "no subject" placeholder when absent or empty.
    pub fn title(&self) -> &str {
        display_subject(self.subject.as_deref())
    }

    /// Recipients joined with [`RECIPIENT_SEPARATOR`].
    pub fn recipients_line(&self) -> String {
        self.to.join(RECIPIENT_SEPARATOR)
    }

    /// Branch on the `html` capability flag. Content is never sniffed.
    pub fn body_view(&self) -> BodyView<'_> {
        if self.html {
            BodyView::Markup(&self.body)
        } else {
            BodyView::Preformatted(&self.body)
        }
    }
}

fn display_subject(subject: Option<&str>) -> &str {
    match subject {
        Some(s) if !s.is_empty() => s,
        _ => i18n::no_subject(),
    }
}

/// Format a receipt timestamp in the local time zone.
pub fn format_timestamp(ts: &DateTime<Utc>, format: &str) -> String {
    ts.with_timezone(&Local).format(format).to_string()
}

/// Render an HTML body to wrapped terminal text.
///
/// Falls back to the markup itself if the renderer rejects the input.
pub fn render_markup(markup: &str, width: usize) -> String {
    match html2text::from_read(markup.as_bytes(), width.max(20)) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to render HTML body, showing markup");
            markup.to_string()
        }
    }
}

// ── Wire helpers ────────────────────────────────────────────────

/// Timestamps arrive as epoch milliseconds or as RFC 3339 text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::Fractional(ms) => Utc
            .timestamp_millis_opt(ms as i64)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{s}': {e}"))),
    }
}

/// Go encodes a nil slice as `null`.
fn de_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_epoch_millis() {
        let json = r#"{"ID":"a","subject":"Hi","from":"x@y.com","timestamp":1700000000000}"#;
        let s: MessageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "a");
        assert_eq!(s.title(), "Hi");
        assert_eq!(s.from, "x@y.com");
        assert_eq!(s.timestamp.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_summary_from_go_record() {
        // The Go backend lists full records with a lowercase id and RFC 3339 time.
        let json = r#"{
            "id": "3",
            "from": "<dev@example.com>",
            "to": ["<qa@example.com>"],
            "subject": "",
            "body": "ignored",
            "html": false,
            "timestamp": "2024-03-01T10:15:30.123456789+01:00"
        }"#;
        let s: MessageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "3");
        assert_eq!(s.title(), "(No subject)");
        assert_eq!(s.timestamp.to_rfc3339(), "2024-03-01T09:15:30.123456789+00:00");
    }

    #[test]
    fn test_missing_subject_uses_placeholder() {
        let json = r#"{"ID":"b","from":"x@y.com","timestamp":0}"#;
        let s: MessageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.subject, None);
        assert_eq!(s.title(), "(No subject)");

        let json = r#"{"ID":"b","subject":null,"from":"x@y.com","timestamp":0}"#;
        let s: MessageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.title(), "(No subject)");
    }

    #[test]
    fn test_non_empty_subject_is_verbatim() {
        let json = r#"{"ID":"c","subject":"  <b>Build #42</b> ","from":"ci","timestamp":1}"#;
        let s: MessageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.title(), "  <b>Build #42</b> ");
    }

    #[test]
    fn test_detail_plain_text() {
        let json = r#"{"subject":"Hi","from":"x@y.com","to":["z@w.com"],
            "timestamp":1700000000000,"html":false,"body":"hello"}"#;
        let d: MessageDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "");
        assert_eq!(d.recipients_line(), "z@w.com");
        assert_eq!(d.body_view(), BodyView::Preformatted("hello"));
    }

    #[test]
    fn test_detail_html_and_recipients() {
        let json = r#"{"subject":"News","from":"n@y.com","to":["a@b.c","d@e.f"],
            "timestamp":5,"html":true,"body":"<p>hi</p>"}"#;
        let d: MessageDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.recipients_line(), "a@b.c, d@e.f");
        assert_eq!(d.body_view(), BodyView::Markup("<p>hi</p>"));
    }

    #[test]
    fn test_detail_null_recipients() {
        let json = r#"{"from":"x","to":null,"timestamp":0,"html":false,"body":""}"#;
        let d: MessageDetail = serde_json::from_str(json).unwrap();
        assert!(d.to.is_empty());
        assert_eq!(d.recipients_line(), "");
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let json = r#"{"ID":"a","from":"x","timestamp":"yesterday"}"#;
        assert!(serde_json::from_str::<MessageSummary>(json).is_err());
    }

    #[test]
    fn test_render_markup_strips_tags() {
        let text = render_markup("<h1>Welcome</h1><p>Click <b>here</b></p>", 80);
        assert!(text.contains("Welcome"));
        assert!(text.contains("here"));
        assert!(!text.contains("<b>"));
    }
}
