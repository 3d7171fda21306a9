//! Command line parsing: one input line to a command word plus arguments.

/// Split an input line into a lowercase command word and its arguments.
///
/// Arguments keep their original case (names are stored verbatim). Returns
/// `None` for empty or whitespace-only lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
