/// Splits a line into a lower-cased command keyword and its raw arguments.
/// Blank lines yield `None`.
pub(crate) fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some((keyword, tokens.map(str::to_string).collect()))
}
