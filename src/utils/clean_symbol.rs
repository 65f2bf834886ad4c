use crate::types::TickerSymbol;

/// Cleans a raw listing symbol down to upper case `A-Z` characters.
///
/// # Example
/// ```
/// use ticker_mentions::clean_symbol;
///
/// assert_eq!(clean_symbol(" 1&$%^# T#S__#L#A#"), "TSLA");
/// assert_eq!(clean_symbol("ab c"), "ABC");
/// ```
pub fn clean_symbol(raw_symbol: &str) -> TickerSymbol {
    raw_symbol
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Whether cleaning the symbol removed anything beyond whitespace and case.
///
/// A listing whose symbol only differs from its cleaned form by whitespace
/// or case is well formed; anything else (e.g. `BRK.B`, `ABC^D`) indicates a
/// malformed or derivative listing row.
pub fn is_clean_symbol(raw_symbol: &str) -> bool {
    let without_whitespace: String = raw_symbol
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    clean_symbol(raw_symbol) == without_whitespace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_symbol() {
        assert_eq!(clean_symbol("123"), "");
        assert_eq!(clean_symbol("ab c"), "ABC");
        assert_eq!(clean_symbol("abC123D"), "ABCD");
        assert_eq!(clean_symbol(" 1&$%^# T#S__#L#A#"), "TSLA");
        assert_eq!(clean_symbol("ABC^D"), "ABCD");
    }

    #[test]
    fn test_clean_symbol_is_idempotent() {
        for raw in ["gme", " Amc ", "BRK.B", "abC123D", "TSLA", ""] {
            let once = clean_symbol(raw);
            assert_eq!(clean_symbol(&once), once);
        }
    }

    #[test]
    fn test_is_clean_symbol() {
        assert!(is_clean_symbol("GME"));
        assert!(is_clean_symbol(" gme "));
        assert!(is_clean_symbol("ab c"));
        assert!(!is_clean_symbol("BRK.B"));
        assert!(!is_clean_symbol("ABC^D"));
        assert!(!is_clean_symbol("ABC1"));
    }
}
