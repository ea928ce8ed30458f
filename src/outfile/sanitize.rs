//! Shell-special-character sanitization for filenames.

/// Characters removed from filenames before they reach the filesystem.
const SPECIAL_CHARS: &[char] = &[
    '\\', '/', '"', '\'', '`', '<', '>', '|', ':', ';', '\t', '\n', '?', '#', '$', '^', '&', '*',
    '=',
];

/// Removes shell special characters from a filename.
///
/// Characters are deleted, not replaced, so the result is idempotent under
/// re-application. This operates on a single filename and not a full path:
/// path separators are stripped like any other special character.
pub fn strip_special_chars(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !SPECIAL_CHARS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_path_separators() {
        assert_eq!(strip_special_chars("a/b\\c.txt"), "abc.txt");
    }

    #[test]
    fn removes_quotes_and_shell_metachars() {
        assert_eq!(
            strip_special_chars("re\"po'rt`|:;?#$^&*=.csv"),
            "report.csv"
        );
    }

    #[test]
    fn removes_whitespace_controls() {
        assert_eq!(strip_special_chars("a\tb\nc"), "abc");
    }

    #[test]
    fn leaves_ordinary_names_alone() {
        assert_eq!(
            strip_special_chars("20200101+1d_lga01_download_throughput-affected.csv"),
            "20200101+1d_lga01_download_throughput-affected.csv"
        );
    }

    #[test]
    fn idempotent() {
        let once = strip_special_chars("a/b:c*d?.csv");
        let twice = strip_special_chars(&once);
        assert_eq!(once, twice);
    }
}
