//! Display captions

/// Turn a raw caption into its display form.
///
/// Underscores become spaces, the text is lower-cased and trimmed, then each
/// word is title-cased: `"FIRST_NAME"` becomes `"First Name"`.
pub fn display_caption(raw: &str) -> String {
    let lowered = raw.replace('_', " ").to_lowercase();
    let mut caption = String::with_capacity(lowered.len());
    let mut at_word_start = true;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            caption.push(ch);
        } else if at_word_start {
            at_word_start = false;
            caption.extend(ch.to_uppercase());
        } else {
            caption.push(ch);
        }
    }
    caption
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_caption() {
        assert_eq!(display_caption("FIRST_NAME"), "First Name");
        assert_eq!(display_caption("id"), "Id");
        assert_eq!(display_caption("_ORDER_DATE_"), "Order Date");
        assert_eq!(display_caption("unit price"), "Unit Price");
        assert_eq!(display_caption(""), "");
    }

    #[test]
    fn test_inner_spacing_is_kept() {
        assert_eq!(display_caption("A__B"), "A  B");
    }
}
