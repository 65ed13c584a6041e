use crate::config::{DateMode, TRANSACTION, TRANSACTION_DESCRIPTION};
use crate::error::ParseError;
use crate::model::{Transaction, TransactionInformation, TransactionStatement, TransactionType};
use crate::utils::{parse_amount, parse_long_date, parse_short_date};
use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static STATEMENT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    // ([A-Za-z])? - третья буква кода валюты (funds code), необязательна
    // сумма: до 12 цифр,2 цифры | группы тысяч через запятую | до 15 цифр
    // ([A-Za-z]) - префикс описания
    // (.*?) - остаток строки
    Regex::new(r"^([A-Za-z])?([0-9]{1,12},[0-9]{2}|[0-9]{1,3},[0-9]{3},[0-9]{2}|[0-9]{1,15})([A-Za-z])(.*?)$")
        .unwrap()
});

/// Делит текст на проводки по тегу :61:, всё до первого :61: отбрасывается.
///
/// Ошибка в любой проводке прерывает разбор целиком, частичный результат не возвращается.
pub(super) fn decode_transactions(
    message: &str,
    mode: DateMode,
) -> Result<Vec<Transaction>, ParseError> {
    message
        .split(TRANSACTION)
        .skip(1)
        .enumerate()
        .map(|(i, segment)| -> Result<Transaction, ParseError> {
            let index = i + 1;
            let tx = decode_transaction(index, segment, mode).inspect_err(|e| {
                warn!(index, error = %e, "failed to decode transaction");
            })?;
            debug!(
                index,
                amount = %tx.statement.amount,
                transaction_type = %tx.statement.transaction_type,
                "transaction decoded"
            );
            Ok(tx)
        })
        .collect()
}

fn decode_transaction(
    index: usize,
    segment: &str,
    mode: DateMode,
) -> Result<Transaction, ParseError> {
    // тело :61: до первого :86:, описание после последнего
    let (body, info) = match segment.find(TRANSACTION_DESCRIPTION) {
        Some(first) => {
            let last = segment
                .rfind(TRANSACTION_DESCRIPTION)
                .unwrap_or(first);
            (
                &segment[..first],
                &segment[last + TRANSACTION_DESCRIPTION.len()..],
            )
        }
        None => (segment, ""),
    };

    Ok(Transaction {
        index,
        statement: parse_statement_line(body, mode)?,
        information: TransactionInformation {
            info: info.to_string(),
        },
    })
}

/// Разбирает тело :61: (без самого тега)
pub(super) fn parse_statement_line(
    body: &str,
    mode: DateMode,
) -> Result<TransactionStatement, ParseError> {
    let too_short = || ParseError::MalformedStatement(format!("statement line too short: '{body}'"));

    let long_date = body.get(0..6).ok_or_else(too_short)?;
    let short_date = body.get(6..10).ok_or_else(too_short)?;
    let flag = body.get(10..11).ok_or_else(too_short)?;
    let rest = &body[11..];

    let long_date = parse_long_date(long_date, mode)?;
    let short_date = parse_short_date(short_date, mode)?;

    let transaction_type = flag
        .chars()
        .next()
        .and_then(TransactionType::from_flag)
        .ok_or_else(|| {
            ParseError::MalformedStatement(format!("unknown debit/credit mark '{flag}' in '{body}'"))
        })?;

    let rest = regex!(r"\r?\n").replace_all(rest, " ");

    let caps = STATEMENT_LINE_RE.captures(&rest).ok_or_else(|| {
        ParseError::MalformedStatement(format!("statement line does not match: '{rest}'"))
    })?;

    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");

    Ok(TransactionStatement {
        long_date,
        short_date,
        transaction_type,
        third_currency_character: group(1).to_string(),
        amount: parse_amount(group(2))?,
        description_prefix: group(3).to_string(),
        description: group(4).to_string(),
    })
}
