// Decorative wrapping of translated text
// Author: kelexine (https://github.com/kelexine)

pub const FLAIR_PREFIX: &str = "🌟 ";
pub const FLAIR_SUFFIX: &str = " 💬✨";

/// Wrap `text` in the flair markers. Infallible.
pub fn apply_flair(text: &str) -> String {
    format!("{}{}{}", FLAIR_PREFIX, text, FLAIR_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_flair() {
        assert_eq!(apply_flair("Hello"), "🌟 Hello 💬✨");
    }

    #[test]
    fn test_apply_flair_empty() {
        assert_eq!(apply_flair(""), "🌟  💬✨");
    }
}
