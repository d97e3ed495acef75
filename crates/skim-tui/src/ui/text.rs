use unicode_width::UnicodeWidthChar;

/// Replace tabs with spaces up to the next tab stop
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(text.len() + tab_width);
    let mut column = 0;

    for c in text.chars() {
        if c == '\t' {
            let pad = tab_width - column % tab_width;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += c.width().unwrap_or(0);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tabs_to_stops() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tx", 4), "ab  x");
        assert_eq!(expand_tabs("abcd\tx", 4), "abcd    x");
        assert_eq!(expand_tabs("no tabs", 4), "no tabs");
    }

    #[test]
    fn test_expand_tabs_wide_chars() {
        // A CJK character occupies two columns
        assert_eq!(expand_tabs("日\tx", 4), "日  x");
    }
}
