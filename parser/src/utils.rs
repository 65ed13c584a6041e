use crate::config::DateMode;
use crate::error::ParseError;
use crate::model::{Amount, LongDate, ShortDate};
use chrono::NaiveDate;
use lazy_regex::regex_is_match;
use std::str::FromStr;

/// Разбирает две цифры, начиная с `start`. Вызывающий уже проверил, что строка из ASCII-цифр.
fn two_digits(s: &str, start: usize) -> Result<u8, ParseError> {
    s[start..start + 2]
        .parse()
        .map_err(|_| ParseError::MalformedDate(s.to_string()))
}

fn check_digits(s: &str, len: usize) -> Result<(), ParseError> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedDate(s.to_string()));
    }
    Ok(())
}

/// Парсит дату YYMMDD в [`LongDate`]
///
/// В режиме [`DateMode::Lenient`] календарь не проверяется: "032211" даёт месяц 22.
pub fn parse_long_date(s: &str, mode: DateMode) -> Result<LongDate, ParseError> {
    check_digits(s, 6)?;

    let date = LongDate {
        year: two_digits(s, 0)?,
        month: two_digits(s, 2)?,
        day: two_digits(s, 4)?,
    };

    if mode == DateMode::Strict && date.to_naive_date().is_none() {
        return Err(ParseError::MalformedDate(s.to_string()));
    }

    Ok(date)
}

/// Парсит дату MMDD в [`ShortDate`]
pub fn parse_short_date(s: &str, mode: DateMode) -> Result<ShortDate, ParseError> {
    check_digits(s, 4)?;

    let date = ShortDate {
        month: two_digits(s, 0)?,
        day: two_digits(s, 2)?,
    };

    // год неизвестен, берём високосный, чтобы 29 февраля проходило
    if mode == DateMode::Strict
        && NaiveDate::from_ymd_opt(2000, u32::from(date.month), u32::from(date.day)).is_none()
    {
        return Err(ParseError::MalformedDate(s.to_string()));
    }

    Ok(date)
}

/// Парсит сумму MT940: запятые убираются, результат делится на 100.
///
/// "73447,91" -> 73447.91, "2,50" -> 2.50
pub fn parse_amount(raw: &str) -> Result<Amount, ParseError> {
    let cleaned = raw.replace(',', "");

    // Decimal::from_str пропускает '_' и прочее, поэтому сначала проверяем форму
    if !regex_is_match!(r"^[+-]?[0-9]+(\.[0-9]+)?$", &cleaned) {
        return Err(ParseError::MalformedAmount(raw.to_string()));
    }

    let mut amount = Amount::from_str(&cleaned)
        .map_err(|_| ParseError::MalformedAmount(raw.to_string()))?;

    // деление на 100 без потери точности: сдвигаем масштаб на два знака
    amount
        .set_scale(amount.scale() + 2)
        .map_err(|_| ParseError::MalformedAmount(raw.to_string()))?;

    Ok(amount)
}

/// Первые `n` символов, если все они буквы
pub(crate) fn leading_alphabetic(s: &str, n: usize) -> Option<&str> {
    let end = s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    let head = &s[..end];
    (head.chars().count() == n && head.chars().all(char::is_alphabetic)).then_some(head)
}

/// Последние `n` символов, если все они буквы
pub(crate) fn trailing_alphabetic(s: &str, n: usize) -> Option<&str> {
    let start = s.char_indices().rev().nth(n - 1).map(|(i, _)| i)?;
    let tail = &s[start..];
    tail.chars().all(char::is_alphabetic).then_some(tail)
}
