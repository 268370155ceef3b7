//! Portuguese (pt-PT) amount-in-words formatting
//!
//! Converts monthly fees into the prose form written next to the figure in
//! the contract body, e.g. `175` → `"cento e setenta e cinco euros"`.
//! Only whole amounts from 0 to 999 are supported.

use crate::errors::ContractError;

/// Currency suffix appended to every rendering
pub const CURRENCY_SUFFIX: &str = "euros";

/// Largest amount that can be written out
pub const MAX_AMOUNT: i64 = 999;

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezasseis",
    "dezassete",
    "dezoito",
    "dezanove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Write a whole euro amount in words
///
/// # Errors
///
/// Returns [`ContractError::AmountOutOfRange`] for negative amounts and
/// amounts above [`MAX_AMOUNT`].
pub fn amount_in_words(value: i64) -> Result<String, ContractError> {
    if !(0..=MAX_AMOUNT).contains(&value) {
        return Err(ContractError::AmountOutOfRange(value));
    }

    match value {
        0 => return Ok(format!("zero {}", CURRENCY_SUFFIX)),
        100 => return Ok(format!("cem {}", CURRENCY_SUFFIX)),
        _ => {}
    }

    // In range, so the cast cannot truncate
    let n = value as usize;
    let hundreds = HUNDREDS[n / 100];
    let below_hundred = tens_and_units(n % 100);

    let words = match (hundreds.is_empty(), below_hundred.is_empty()) {
        (false, false) => format!("{} e {}", hundreds, below_hundred),
        (false, true) => hundreds.to_string(),
        _ => below_hundred,
    };

    Ok(format!("{} {}", words.trim(), CURRENCY_SUFFIX))
}

/// Write a form value in words, degrading to an empty string
///
/// The value is read the way a form number is usually read: leading
/// whitespace and an optional sign, then the leading run of digits. Input
/// with no leading digits, or an amount outside 0-999, yields `""`.
pub fn euros_in_words(input: &str) -> String {
    let Some(value) = parse_leading_int(input) else {
        return String::new();
    };

    match amount_in_words(value) {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!(input, "Cannot write amount in words: {}", e);
            String::new()
        }
    }
}

/// Parse the leading base-10 integer of a string
///
/// `"175"`, `" 175 "`, `"175abc"` and `"175.50"` all parse as 175. Values
/// too large for an `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first().copied() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .collect::<Vec<_>>();
    if run.is_empty() {
        return None;
    }

    let magnitude = run.iter().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

fn tens_and_units(n: usize) -> String {
    match n {
        0 => String::new(),
        1..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{} e {}", TENS[n / 10], UNITS[n % 10]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_special_cases() {
        assert_eq!(amount_in_words(0).unwrap(), "zero euros");
        assert_eq!(amount_in_words(100).unwrap(), "cem euros");
    }

    #[test]
    fn test_known_amounts() {
        let cases = [
            (1, "um euros"),
            (9, "nove euros"),
            (10, "dez euros"),
            (15, "quinze euros"),
            (19, "dezanove euros"),
            (20, "vinte euros"),
            (21, "vinte e um euros"),
            (99, "noventa e nove euros"),
            (101, "cento e um euros"),
            (110, "cento e dez euros"),
            (175, "cento e setenta e cinco euros"),
            (200, "duzentos euros"),
            (230, "duzentos e trinta euros"),
            (999, "novecentos e noventa e nove euros"),
        ];

        for (value, expected) in cases {
            assert_eq!(amount_in_words(value).unwrap(), expected, "value {}", value);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            amount_in_words(1000),
            Err(ContractError::AmountOutOfRange(1000))
        ));
        assert!(matches!(
            amount_in_words(-1),
            Err(ContractError::AmountOutOfRange(-1))
        ));
    }

    #[test]
    fn test_lenient_form() {
        assert_eq!(euros_in_words("175"), "cento e setenta e cinco euros");
        assert_eq!(euros_in_words(" 42 "), "quarenta e dois euros");
        assert_eq!(euros_in_words("12.90"), "doze euros");
        assert_eq!(euros_in_words("abc"), "");
        assert_eq!(euros_in_words(""), "");
        assert_eq!(euros_in_words("1500"), "");
        assert_eq!(euros_in_words("-3"), "");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("175abc"), Some(175));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("a1"), None);
        assert_eq!(
            parse_leading_int("99999999999999999999999"),
            Some(i64::MAX)
        );
    }
}
