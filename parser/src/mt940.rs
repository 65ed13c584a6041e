mod transaction;
mod utils;

use crate::config::{
    self, DateMode, BALANCE_MAX_LEN, BALANCE_MIN_LEN,
};
use crate::error::ParseError;
use crate::model::{
    AccountIdentification, Balance, BalanceType, Mt940Statement, ReferenceNumber,
    RelatedReference, StatementNumber, Transaction, TransactionType,
};
use crate::utils::{leading_alphabetic, parse_amount, parse_long_date, trailing_alphabetic};
use std::io::Read;
use tracing::{debug, warn};

pub use utils::{extract_tag, find_tag_value};

/// Декодер MT940.
///
/// Каждый метод независимо просматривает весь переданный текст,
/// общего изменяемого состояния между вызовами нет.
///
/// Пример:
/// ```rust
/// use mt940_parser::mt940::Mt940Decoder;
/// # use mt940_parser::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// let decoder = Mt940Decoder::default();
/// let account = decoder.account_identification(":25:NL17RABO6064103256EUR\r\n")?;
/// assert_eq!(account.country_iso, "NL");
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Mt940Decoder {
    /// строгость проверки дат
    pub date_mode: DateMode,
}

impl Mt940Decoder {
    /// Go to [`Mt940Decoder`]
    pub fn new(date_mode: DateMode) -> Self {
        Mt940Decoder { date_mode }
    }

    /// :20:, не длиннее 16 символов
    pub fn reference_number(&self, message: &str) -> Result<ReferenceNumber, ParseError> {
        let spec = config::REFERENCE_NUMBER;
        let value = extract_tag(message, spec.literal, spec.max_len)?;
        Ok(ReferenceNumber(value.to_string()))
    }

    /// :21:, не длиннее 16 символов
    pub fn related_reference(&self, message: &str) -> Result<RelatedReference, ParseError> {
        let spec = config::RELATED_REFERENCE;
        let value = extract_tag(message, spec.literal, spec.max_len)?;
        Ok(RelatedReference(value.to_string()))
    }

    /// :28C:, не длиннее 5 символов
    pub fn statement_number(&self, message: &str) -> Result<StatementNumber, ParseError> {
        let spec = config::STATEMENT_NUMBER;
        let value = extract_tag(message, spec.literal, spec.max_len)?;
        Ok(StatementNumber(value.to_string()))
    }

    /// :25: разбирается как код страны (2 буквы) + IBAN + необязательная валюта (3 буквы в конце)
    pub fn account_identification(
        &self,
        message: &str,
    ) -> Result<AccountIdentification, ParseError> {
        let spec = config::ACCOUNT_IDENTIFICATION;
        let value = extract_tag(message, spec.literal, spec.max_len)?;

        if value.is_empty() {
            return Err(ParseError::EmptyField("account identification"));
        }

        let country_iso = leading_alphabetic(value, 2)
            .ok_or_else(|| ParseError::MissingCountryCode(value.to_string()))?;

        let rest = &value[country_iso.len()..];

        // валюта не может перекрываться с кодом страны
        let currency = if value.chars().count() >= 5 {
            trailing_alphabetic(rest, 3).unwrap_or("")
        } else {
            ""
        };

        let iban = &rest[..rest.len() - currency.len()];

        debug!(country_iso, iban, currency, "account identification decoded");

        Ok(AccountIdentification {
            country_iso: country_iso.to_string(),
            iban: iban.to_string(),
            currency: currency.to_string(),
        })
    }

    /// Баланс нужного типа: C/D + YYMMDD + валюта + сумма
    pub fn balance(&self, message: &str, balance_type: BalanceType) -> Result<Balance, ParseError> {
        let tag = balance_type.tag();
        let value = find_tag_value(message, tag.literal)?;

        let len = value.chars().count();
        if !(BALANCE_MIN_LEN..=BALANCE_MAX_LEN).contains(&len) {
            warn!(tag = tag.literal, len, "balance value outside allowed length");
            return Err(ParseError::MalformedBalance(format!(
                "{} value must be {BALANCE_MIN_LEN}..={BALANCE_MAX_LEN} characters, got {len}: '{value}'",
                tag.literal
            )));
        }

        let malformed = || ParseError::MalformedBalance(format!("{} value: '{value}'", tag.literal));

        let dc_mark = value.chars().next().ok_or_else(malformed)?;
        let transaction_type = TransactionType::from_flag(dc_mark).ok_or_else(|| {
            ParseError::MalformedBalance(format!(
                "unknown debit/credit mark '{dc_mark}' in {}",
                tag.literal
            ))
        })?;

        let date = value.get(1..7).ok_or_else(malformed)?;
        let currency = value.get(7..10).ok_or_else(malformed)?;
        let amount = value.get(10..).ok_or_else(malformed)?;

        let balance = Balance {
            transaction_type,
            date: parse_long_date(date, self.date_mode)?,
            currency: currency.to_string(),
            amount: parse_amount(amount)?,
            balance_type,
        };

        debug!(%balance_type, amount = %balance.amount, currency, "balance decoded");
        Ok(balance)
    }

    /// Все проводки :61: + :86: в порядке появления, индексы с 1
    pub fn transactions(&self, message: &str) -> Result<Vec<Transaction>, ParseError> {
        transaction::decode_transactions(message, self.date_mode)
    }

    /// Собирает всю выписку из отдельных декодеров.
    ///
    /// Обязательные теги: :20:, :25:, :28C:, :60F:, :62F:.
    /// Отсутствие :21: или :64: даёт `None`, остальные ошибки пробрасываются.
    pub fn statement(&self, message: &str) -> Result<Mt940Statement, ParseError> {
        let statement = Mt940Statement {
            reference_number: self.reference_number(message)?,
            related_reference: optional(self.related_reference(message))?,
            account_identification: self.account_identification(message)?,
            statement_number: self.statement_number(message)?,
            opening_balance: self.balance(message, BalanceType::Opening)?,
            closing_balance: self.balance(message, BalanceType::Closing)?,
            available_balance: optional(self.balance(message, BalanceType::Available))?,
            transactions: self.transactions(message)?,
        };

        debug!(
            reference = %statement.reference_number.0,
            transactions = statement.transactions.len(),
            "statement decoded"
        );
        Ok(statement)
    }

    /// Читает весь reader в память и декодирует выписку
    pub fn read_statement<R: Read>(&self, mut reader: R) -> Result<Mt940Statement, ParseError> {
        let mut message = String::new();
        reader.read_to_string(&mut message)?;
        self.statement(&message)
    }
}

/// Отсутствующий тег превращается в `None`
fn optional<T>(result: Result<T, ParseError>) -> Result<Option<T>, ParseError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ParseError::TagNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
