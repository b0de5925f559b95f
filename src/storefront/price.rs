// src/storefront/price.rs

use bigdecimal::BigDecimal;

/// Formata um valor como EUR no padrão alemão: `1.234,56 €`.
///
/// Duas casas decimais, ponto como separador de milhar, vírgula como separador
/// decimal e espaço não separável (U+00A0) antes do símbolo, como `Intl.NumberFormat("de-DE")`.
pub fn format_eur(amount: &BigDecimal) -> String {
    let fixed = amount.round(2).with_scale(2).to_string();

    let (negative, digits) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut out = String::with_capacity(fixed.len() + 6);
    // "-0,00" não faz sentido para preço
    if negative && integer.chars().chain(fraction.chars()).any(|c| c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push(',');
    out.push_str(fraction);
    out.push('\u{a0}');
    out.push('€');
    out
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn eur(value: &str) -> String {
        format_eur(&BigDecimal::from_str(value).unwrap())
    }

    #[test]
    fn german_locale() {
        assert_eq!(eur("19.99"), "19,99\u{a0}€");
        assert_eq!(eur("0"), "0,00\u{a0}€");
        assert_eq!(eur("1234.5"), "1.234,50\u{a0}€");
        assert_eq!(eur("1299"), "1.299,00\u{a0}€");
        assert_eq!(eur("1234567.891"), "1.234.567,89\u{a0}€");
        assert_eq!(eur("999.999"), "1.000,00\u{a0}€");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(eur("-1500.25"), "-1.500,25\u{a0}€");
        assert_eq!(eur("-0.001"), "0,00\u{a0}€");
    }
}
