use std::fmt;

use super::Kind;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

const BLANK: &str = "File extensions cannot be blank or null";
const BACKSLASH: &str = "File extensions cannot contain '\\'";
const SLASH: &str = "File extensions cannot contain '/'";
const COLON: &str = "File extensions cannot contain colons.";
const FULL_STOP: &str = "The extension should not contain full stops.";

/// Rules for [`FileExtension`](super::FileExtension).
///
/// Accepts `jpg`, `Jpg` and `*.jpg` alike and stores `JPG`. Path
/// separators, colons and any dot after the optional `*.` prefix are
/// rejected.
#[derive(Debug)]
pub struct Extension;

impl Kind for Extension {
    type Held = String;
    const NAME: &'static str = "file extension";

    fn validate(input: Maybe<String>) -> Outcome<String> {
        Outcome::initialize(input, BLANK)
            .ensure(|ext| !ext.trim().is_empty(), BLANK)
            .ensure(|ext| !ext.contains('\\'), BACKSLASH)
            .ensure(|ext| !ext.contains('/'), SLASH)
            .ensure(|ext| !ext.contains(':'), COLON)
            .on_success(strip_wildcard)
            .ensure(|ext| !ext.trim().is_empty(), BLANK)
            .ensure(|ext| !ext.contains('.'), FULL_STOP)
            .on_success(|ext| ext.to_uppercase())
    }

    fn fmt_held(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(value)
    }
}

/// `*.jpg` -> `jpg`
fn strip_wildcard(ext: String) -> String {
    if ext.starts_with("*.") {
        ext[2..].to_owned()
    } else {
        ext
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::FileExtension;

    #[test]
    fn test_normalises_wildcard_and_case() {
        let ext = FileExtension::create("*.Jpeg");
        assert_eq!(ext.value().as_str(), "JPEG");
        assert_eq!(FileExtension::parse("png").unwrap(), "PNG");
    }

    #[test]
    fn test_rejections() {
        let cases = [
            (Some("a.b"), FULL_STOP),
            (Some("a/b"), SLASH),
            (Some("a\\b"), BACKSLASH),
            (Some("a:b"), COLON),
            (None, BLANK),
            (Some(""), BLANK),
            (Some("   "), BLANK),
            (Some("*."), BLANK),
            (Some("*.tar.gz"), FULL_STOP),
        ];
        for (input, expected) in cases {
            assert_eq!(FileExtension::create(input).error(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_backslash_message_shows_one_backslash() {
        assert_eq!(BACKSLASH, r"File extensions cannot contain '\'");
    }

    #[test]
    fn test_parse_error_text() {
        let err = FileExtension::parse("a.b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input string is not a valid file extension. Error: The extension should not contain full stops."
        );
    }

    #[test]
    fn test_strip_wildcard_only_strips_prefix() {
        assert_eq!(strip_wildcard("*.txt".into()), "txt");
        assert_eq!(strip_wildcard("txt".into()), "txt");
        assert_eq!(strip_wildcard("a*.txt".into()), "a*.txt");
    }
}
