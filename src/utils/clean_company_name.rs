use crate::constants::CORPORATE_SUFFIX_TOKENS;
use crate::types::CompanyName;

/// Shortens a listing's company name to end at the first corporate suffix
/// token (`Inc`, `Company`, `Corp`, `Limited`), keeping the token itself.
///
/// Tokens are matched as substrings, so `Corporation` is cut to `Corp`.
/// Names without any suffix token are only trimmed.
pub fn clean_company_name(raw_name: &str) -> CompanyName {
    let cut_at = CORPORATE_SUFFIX_TOKENS
        .iter()
        .filter_map(|token| raw_name.find(token).map(|idx| (idx, idx + token.len())))
        .min_by_key(|(start, _)| *start)
        .map(|(_, end)| end);

    match cut_at {
        Some(end) => raw_name[..end].trim().to_string(),
        None => raw_name.trim().to_string(),
    }
}
