/// Default line length for cropped one-line summaries
pub const DEFAULT_LINE_LEN: usize = 80;

const CROP_SUFFIX: &str = "...";
const SHORT_CROP_SUFFIX: &str = "_";

/// Truncate `text` to at most `max_len` characters, marking the cut.
///
/// Long texts end with `...`; when the limit is too small for the suffix
/// itself, a single `_` marks the cut instead.
pub fn crop(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        return text.to_string();
    }
    if max_len > CROP_SUFFIX.len() {
        let kept: String = text.chars().take(max_len - CROP_SUFFIX.len()).collect();
        format!("{}{}", kept, CROP_SUFFIX)
    } else if max_len > 1 {
        let kept: String = text.chars().take(max_len - 1).collect();
        format!("{}{}", kept, SHORT_CROP_SUFFIX)
    } else {
        text.chars().take(max_len).collect()
    }
}

/// Collapse every run of three or more consecutive newlines to a single one.
/// Double newlines (blank-line separation) pass through untouched.
pub fn cap_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
        } else {
            flush_newlines(&mut out, run);
            run = 0;
            out.push(c);
        }
    }
    flush_newlines(&mut out, run);
    out
}

fn flush_newlines(out: &mut String, run: usize) {
    match run {
        0 => {}
        1 | 2 => out.push_str(&"\n".repeat(run)),
        _ => out.push('\n'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_short_text_untouched() {
        assert_eq!(crop("hello", 10), "hello");
    }

    #[test]
    fn test_crop_long_text() {
        assert_eq!(crop("abcdefghij", 7), "abcd...");
    }

    #[test]
    fn test_crop_tiny_limit() {
        assert_eq!(crop("abcdef", 3), "ab_");
        assert_eq!(crop("abcdef", 1), "a");
    }

    #[test]
    fn test_cap_newline_runs() {
        assert_eq!(cap_newline_runs("a\nb"), "a\nb");
        assert_eq!(cap_newline_runs("a\n\nb"), "a\n\nb");
        assert_eq!(cap_newline_runs("a\n\n\nb"), "a\nb");
        assert_eq!(cap_newline_runs("a\n\n\n\n\nb\n\n\n"), "a\nb\n");
    }
}
