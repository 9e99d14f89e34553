/// Escaping applied on top of the mandatory JSON string escapes.
///
/// The defaults keep output byte-identical to plain `serde_json`: slashes
/// and non-ASCII characters pass through unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit `/` as `\/`.
    pub escape_slashes: bool,
    /// Emit non-ASCII characters as `\uXXXX` (UTF-16 surrogate pairs
    /// beyond the basic multilingual plane).
    pub escape_unicode: bool,
    /// Emit `<`, `>`, `&`, `'` and `"` as `\uXXXX` so the result can be
    /// embedded in an HTML document.
    pub escape_html: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            escape_slashes: false,
            escape_unicode: false,
            escape_html: false,
        }
    }
}

impl EncodeOptions {
    /// The fixed option set used by [`html_encode`](crate::html_encode):
    /// non-ASCII stays raw, HTML-sensitive characters are escaped.
    pub fn html() -> Self {
        Self {
            escape_slashes: false,
            escape_unicode: false,
            escape_html: true,
        }
    }

    /// Escape both slashes and non-ASCII characters, for consumers that
    /// only accept 7-bit-clean output.
    pub fn escape_all() -> Self {
        Self {
            escape_slashes: true,
            escape_unicode: true,
            escape_html: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum container nesting depth accepted before decoding fails.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}
