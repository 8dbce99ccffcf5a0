/// Parses a newline-delimited domain list.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Order and
/// duplicates are kept.
pub fn parse_domain_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
