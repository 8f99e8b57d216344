//! Reading address lists: one address per line, or CSV rows.

use crate::core::error::Result;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Extracts candidate addresses from pasted or uploaded text.
///
/// Lines are trimmed and blank lines or lines without `@` are dropped. For
/// CSV rows the first field containing `@` is taken, with surrounding quotes
/// removed.
pub fn parse_address_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('@'))
        .filter_map(|line| {
            if line.contains(',') {
                line.split(',')
                    .map(|field| field.trim().trim_matches('"').trim())
                    .find(|field| field.contains('@'))
                    .map(str::to_string)
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

/// Reads an address list from `path`, or from stdin when `path` is `None`.
pub fn read_address_list(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(p) => {
            tracing::debug!("Reading addresses from {}", p.display());
            std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read address list {}", p.display()))?
        }
        None => {
            tracing::debug!("Reading addresses from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(parse_address_list(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn keeps_trimmed_lines_with_at_sign() {
        let text = "  a@example.com \n\nnot an address\n\tb@label.io\r\n";
        assert_eq!(parse_address_list(text), vec!["a@example.com", "b@label.io"]);
    }

    #[test]
    fn takes_address_field_from_csv_rows() {
        let text = "name,email,outlet\nJo Bloggs,\"jo@radio.fm\",Radio FM\nAnon,,\n";
        assert_eq!(parse_address_list(text), vec!["jo@radio.fm"]);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = std::env::temp_dir().join("mailvet-no-such-list.txt");
        let err = read_address_list(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Generic(_)));
        assert!(err.to_string().contains("mailvet-no-such-list.txt"));
    }

    #[test]
    fn keeps_malformed_candidates_for_validation() {
        // Anything with '@' is a candidate; syntax is judged later.
        assert_eq!(parse_address_list("@@\nx@"), vec!["@@", "x@"]);
    }
}
