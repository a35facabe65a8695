//! Placeholder markup rendering and data-URI encoding.
//!
//! [`markup`] renders the SVG payload — a filled rectangle at the exact
//! requested size with a centered `W × H` label — and [`inline_uri`]
//! turns any markup text into a self-contained `data:` URI. Both are
//! pure: same input, same bytes, every time. No timestamps, no generated
//! ids.
//!
//! Inputs are assumed pre-validated by the resolver
//! ([`crate::dimensions`] / [`crate::ratio`]); nothing here can fail.

use crate::dimensions::DimensionPair;
use maud::{Markup, html};

/// Scheme header declaring the payload as inline UTF-8 SVG text.
pub const URI_SCHEME: &str = "data:image/svg+xml;utf8,";

const RECT_FILL: &str = "#e5e7eb";
const RECT_STROKE: &str = "#d1d5db";
const LABEL_FILL: &str = "#6b7280";
const FONT_FAMILY: &str = "system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif";
const MIN_FONT_SIZE: f64 = 12.0;

/// Label font size: a tenth of the shorter edge, floored at 12 so the
/// label stays legible on small placeholders.
pub fn label_font_size(pair: DimensionPair) -> f64 {
    (f64::from(pair.width.min(pair.height)) / 10.0).max(MIN_FONT_SIZE)
}

/// Render the placeholder SVG for a validated pair.
///
/// The rectangle is sized exactly `width × height`; the label reads
/// `W × H` with a true multiplication sign. Fill, stroke, and font are
/// fixed — the output is parameterized by the pair alone.
pub fn markup(pair: DimensionPair) -> Markup {
    let DimensionPair { width, height } = pair;
    let font_size = label_font_size(pair);
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(width)
            height=(height)
            viewBox={ "0 0 " (width) " " (height) } {
            rect x="0" y="0" width=(width) height=(height)
                fill=(RECT_FILL) stroke=(RECT_STROKE) stroke-width="1" {}
            text x="50%" y="50%"
                dominant-baseline="middle" text-anchor="middle"
                fill=(LABEL_FILL) font-family=(FONT_FAMILY) font-size=(font_size) {
                (width) " × " (height)
            }
        }
    }
}

/// Encode markup text as an embeddable `data:` URI.
///
/// Escapes exactly four characters — `#`, `<`, `>`, `"` — and collapses
/// every whitespace run (newlines included) to a single space. The
/// escape set is deliberately minimal: these are the characters that
/// break the embedding context, and the fixed set keeps the output
/// bytes stable. Total function of its input; never fails.
pub fn inline_uri(markup_text: &str) -> String {
    let mut out = String::with_capacity(URI_SCHEME.len() + markup_text.len());
    out.push_str(URI_SCHEME);
    let mut in_whitespace = false;
    for ch in markup_text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        match ch {
            '#' => out.push_str("%23"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '"' => out.push_str("%22"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a validated pair straight to its embeddable URI.
///
/// ```
/// use svg_placeholder::dimensions::DimensionPair;
/// use svg_placeholder::svg::data_uri;
///
/// let pair = DimensionPair { width: 400, height: 300 };
/// let uri = data_uri(pair);
/// assert!(uri.starts_with("data:image/svg+xml;utf8,"));
/// assert_eq!(uri, data_uri(pair));
/// ```
pub fn data_uri(pair: DimensionPair) -> String {
    inline_uri(&markup(pair).into_string())
}
