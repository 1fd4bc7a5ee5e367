/// First extracted line containing `query`, compared case-insensitively, in
/// document order. The raw line comes back so the caller sees exactly what
/// the list says, parseable or not.
pub fn find_line<'a>(lines: &'a [String], query: &str) -> Option<&'a str> {
    let needle = query.to_lowercase();
    lines
        .iter()
        .find(|line| line.to_lowercase().contains(&needle))
        .map(String::as_str)
}
