use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Replace tabs with spaces up to the next multiple of `tab_width` columns.
pub fn expand_tabs(s: &str, tab_width: usize) -> String {
    if !s.contains('\t') || tab_width == 0 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut col = 0;
    for ch in s.chars() {
        if ch == '\t' {
            let pad = tab_width - col % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += char_width(ch);
        }
    }
    out
}
