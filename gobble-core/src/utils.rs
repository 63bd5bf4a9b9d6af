//! Shared string utilities.

/// Convert a CamelCase identifier to snake_case.
///
/// Acronyms stay together and digit runs are split off as their own word,
/// e.g. "AssignedIDNumber" -> "assigned_id_number", "Hel10Yall" -> "hel_10_yall".
pub fn camel_to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let upper_or_digit: Vec<bool> = chars
        .iter()
        .map(|c| c.is_uppercase() || c.is_numeric())
        .collect();

    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let after_lower = i > 0 && upper_or_digit[i] && chars[i - 1].is_lowercase();
        let ends_acronym = i > 1
            && i + 1 < chars.len()
            && upper_or_digit[i]
            && upper_or_digit[i - 1]
            && !upper_or_digit[i + 1];
        if after_lower || ends_acronym {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}
