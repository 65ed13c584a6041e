use crate::ParseError;
use tracing::debug;

/// Находит первое вхождение тега и возвращает значение до конца строки.
///
/// Конец строки ищется от позиции тега, а не от начала буфера,
/// так что тег не обязан быть первой строкой. "\r\n" и "\n" в значение не входят;
/// если перевода строки нет, значение идёт до конца буфера.
pub fn find_tag_value<'a>(message: &'a str, tag: &str) -> Result<&'a str, ParseError> {
    let start = message
        .find(tag)
        .map(|pos| pos + tag.len())
        .ok_or_else(|| ParseError::TagNotFound(tag.to_string()))?;

    let rest = &message[start..];
    let value = match rest.find('\n') {
        Some(end) => {
            let line = &rest[..end];
            line.strip_suffix('\r').unwrap_or(line)
        }
        None => rest,
    };

    debug!(tag, value, "tag value located");
    Ok(value)
}

/// [`find_tag_value`] с ограничением длины значения (в символах).
///
/// Пустое значение допустимо, пробелы не обрезаются.
pub fn extract_tag<'a>(message: &'a str, tag: &str, max_len: usize) -> Result<&'a str, ParseError> {
    let value = find_tag_value(message, tag)?;

    let len = value.chars().count();
    if len > max_len {
        return Err(ParseError::ValueTooLong {
            tag: tag.to_string(),
            len,
            max: max_len,
        });
    }

    Ok(value)
}
