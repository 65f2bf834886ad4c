/// Normalizes a message body for symbol matching.
///
/// The text is upper cased and every character which is not an ASCII letter
/// or whitespace becomes a space, so punctuation still separates tokens
/// (`"$amc, gme!"` becomes `" AMC  GME "`).
pub fn normalize_body(body: &str) -> String {
    body.to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
