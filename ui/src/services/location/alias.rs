/// Legacy or colloquial country codes mapped to their ISO 3166-1 alpha-2 form
const COUNTRY_ALIASES: &[(&str, &str)] = &[("UK", "GB")];

/// Trim, uppercase and resolve aliases so `"uk"`, `"UK"` and `"GB"` all look up the same data
pub fn normalize_country_code(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(code)
}

pub fn normalize_state_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uk_alias_resolves_to_gb() {
        assert_eq!(normalize_country_code("UK"), "GB");
        assert_eq!(normalize_country_code(" uk "), "GB");
        assert_eq!(normalize_country_code("GB"), "GB");
    }

    #[test]
    fn test_other_codes_pass_through_uppercased() {
        assert_eq!(normalize_country_code("us"), "US");
        assert_eq!(normalize_country_code(""), "");
        assert_eq!(normalize_state_code(" eng"), "ENG");
    }
}
