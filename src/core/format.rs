//! Display formatters. All format policy lives here; everything is pure and
//! never panics on malformed input.

use regex::Regex;
use std::sync::OnceLock;

pub const ZERO_CURRENCY: &str = "R$ 0,00";
pub const CITY_PLACEHOLDER: &str = "Selecione a cidade...";

/// Maximum length of a masked phone string, `(DD) DDDDD-DDDD`.
pub const PHONE_MAX_LEN: usize = 15;

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats raw keystrokes as a pt-BR currency string. The surviving digits
/// are read as an integer number of cents, so feeding a previously formatted
/// value back in re-derives the same display string.
pub fn format_currency(raw: &str) -> String {
    let digits = digits_of(raw);
    let cents: u128 = digits.parse().unwrap_or(0);
    format!("R$ {},{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

fn area_code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})(\d)").expect("static pattern"))
}

fn last_four_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d)(\d{4})$").expect("static pattern"))
}

/// Applies the `(DD) DDDDD-DDDD` mask. Each insertion needs digits on both
/// sides of the separator, so partial input simply stays unseparated.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_of(raw);
    let with_area = area_code_pattern().replace(&digits, "($1) $2");
    let mut masked = last_four_pattern().replace(&with_area, "$1-$2").into_owned();
    masked.truncate(PHONE_MAX_LEN);
    masked
}

/// Renders an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`. Empty input yields an
/// empty string; anything that does not split into three all-digit components
/// is returned unchanged.
pub fn format_date_display(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = iso.split('-').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return iso.to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// Renders `"<city> - <region>[, <neighborhood>]"`. Without a city there is
/// no partial address, only the selection prompt.
pub fn compose_address(region_short_code: &str, city: &str, neighborhood: &str) -> String {
    if city.is_empty() {
        return CITY_PLACEHOLDER.to_string();
    }
    if neighborhood.is_empty() {
        format!("{} - {}", city, region_short_code)
    } else {
        format!("{} - {}, {}", city, region_short_code, neighborhood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_basic() {
        assert_eq!(format_currency("15000"), "R$ 150,00");
        assert_eq!(format_currency("1"), "R$ 0,01");
        assert_eq!(format_currency("99"), "R$ 0,99");
        assert_eq!(format_currency("100"), "R$ 1,00");
    }

    #[test]
    fn test_currency_empty_and_zero_agree() {
        assert_eq!(format_currency(""), ZERO_CURRENCY);
        assert_eq!(format_currency("0"), ZERO_CURRENCY);
        assert_eq!(format_currency("000"), ZERO_CURRENCY);
        assert_eq!(format_currency("abc"), ZERO_CURRENCY);
    }

    #[test]
    fn test_currency_thousands_grouping() {
        assert_eq!(format_currency("123456789"), "R$ 1.234.567,89");
        assert_eq!(format_currency("100000000"), "R$ 1.000.000,00");
        assert_eq!(format_currency("123456"), "R$ 1.234,56");
    }

    #[test]
    fn test_currency_strips_non_digits() {
        assert_eq!(format_currency("R$ 150,00"), "R$ 150,00");
        assert_eq!(format_currency("1a5b0c0d0"), "R$ 150,00");
    }

    #[test]
    fn test_currency_reformat_is_stable() {
        let once = format_currency("987654321");
        assert_eq!(format_currency(&once), once);
    }

    #[test]
    fn test_phone_full_mobile_number() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn test_phone_landline_number() {
        assert_eq!(format_phone("1187654321"), "(11) 8765-4321");
    }

    #[test]
    fn test_phone_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("11987"), "(11) 987");
    }

    #[test]
    fn test_phone_never_exceeds_max_len() {
        for digits in ["11987654321", "119876543210", "11987654321098765432"] {
            assert!(format_phone(digits).len() <= PHONE_MAX_LEN);
        }
        assert_eq!(format_phone("119876543210").len(), PHONE_MAX_LEN);
    }

    #[test]
    fn test_date_display() {
        assert_eq!(format_date_display("2025-03-07"), "07/03/2025");
        assert_eq!(format_date_display("2025-01-10"), "10/01/2025");
    }

    #[test]
    fn test_date_display_fallbacks() {
        assert_eq!(format_date_display(""), "");
        assert_eq!(format_date_display("not-a-date"), "not-a-date");
        assert_eq!(format_date_display("2025-03"), "2025-03");
        assert_eq!(format_date_display("2025--07"), "2025--07");
    }

    #[test]
    fn test_compose_address() {
        assert_eq!(compose_address("SP", "", "Centro"), CITY_PLACEHOLDER);
        assert_eq!(compose_address("SP", "Campinas", ""), "Campinas - SP");
        assert_eq!(
            compose_address("SP", "Campinas", "Centro"),
            "Campinas - SP, Centro"
        );
    }
}
