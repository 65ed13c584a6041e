use crate::config::{self, TagSpec};
use crate::error::ParseError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Денежная сумма, точное десятичное значение (без плавающей точки)
pub type Amount = Decimal;

/// Дата в формате YYMMDD, компоненты хранятся как есть (0–99)
///
/// Век не достраивается: "070910" это год 7, а не 2007.
/// Для перевода в календарную дату есть [`LongDate::to_naive_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDate {
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

impl LongDate {
    /// Календарная дата при допущении, что все годы в 2000-х.
    /// `None`, если такой даты не существует (месяц 13 и т.п.)
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            2000 + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

/// Дата в формате MMDD (дата проводки внутри :61:)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDate {
    pub month: u8,
    pub day: u8,
}

/// Признак дебет/кредит
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Дебет, 'D'
    Debit,
    /// Кредит, 'C'
    Credit,
}

impl TransactionType {
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'D' => Some(TransactionType::Debit),
            'C' => Some(TransactionType::Credit),
            _ => None,
        }
    }

    pub fn flag(&self) -> char {
        match self {
            TransactionType::Debit => 'D',
            TransactionType::Credit => 'C',
        }
    }
}

/// Какой из балансов выписки нужен
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceType {
    /// :60F:
    Opening,
    /// :62F:
    Closing,
    /// :64:
    Available,
}

impl BalanceType {
    /// Тег и ограничение длины для этого типа баланса
    pub fn tag(&self) -> TagSpec {
        match self {
            BalanceType::Opening => config::OPENING_BALANCE,
            BalanceType::Closing => config::CLOSING_BALANCE,
            BalanceType::Available => config::AVAILABLE_BALANCE,
        }
    }
}

impl FromStr for BalanceType {
    type Err = ParseError;

    /// Принимает однобуквенные коды ("O", "C", "A") и полные имена
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "o" | "opening" => Ok(BalanceType::Opening),
            "c" | "closing" => Ok(BalanceType::Closing),
            "a" | "available" => Ok(BalanceType::Available),
            _ => Err(ParseError::UnknownBalanceType(s.to_string())),
        }
    }
}

/// :20:
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceNumber(pub String);

/// :21:
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedReference(pub String);

/// :28C:
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementNumber(pub String);

/// :25: Account Identification, разобранный на части
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentification {
    /// двухбуквенный код страны, "NL"
    pub country_iso: String,
    /// всё между кодом страны и валютой, "17RABO6064103256"
    pub iban: String,
    /// код валюты или пустая строка, если его нет
    pub currency: String,
}

/// Баланс счёта (:60F: / :62F: / :64:)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub transaction_type: TransactionType,
    pub date: LongDate,
    /// код валюты как есть: "EUR", "UAH", ...
    pub currency: String,
    pub amount: Amount,
    pub balance_type: BalanceType,
}

/// Разобранная строка :61:
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatement {
    /// value date
    pub long_date: LongDate,
    /// entry date
    pub short_date: ShortDate,
    pub transaction_type: TransactionType,
    /// последняя буква кода валюты (funds code), пустая строка если нет
    pub third_currency_character: String,
    pub amount: Amount,
    /// одна буква перед описанием
    pub description_prefix: String,
    /// остаток строки, переводы строк заменены пробелами
    pub description: String,
}

/// Текст :86:, хранится без изменений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInformation {
    pub info: String,
}

/// Одна проводка: :61: + относящийся к ней :86:
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// порядковый номер :61: во входном тексте, с 1
    pub index: usize,
    pub statement: TransactionStatement,
    pub information: TransactionInformation,
}

/// Вся выписка целиком.
///
/// Каждое поле декодируется независимо по одному и тому же тексту,
/// см. [`crate::mt940::Mt940Decoder::statement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mt940Statement {
    pub reference_number: ReferenceNumber,
    pub related_reference: Option<RelatedReference>,
    pub account_identification: AccountIdentification,
    pub statement_number: StatementNumber,
    pub opening_balance: Balance,
    pub closing_balance: Balance,
    pub available_balance: Option<Balance>,
    pub transactions: Vec<Transaction>,
}

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "Credit"),
            TransactionType::Debit => write!(f, "Debit"),
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceType::Opening => write!(f, "Opening"),
            BalanceType::Closing => write!(f, "Closing"),
            BalanceType::Available => write!(f, "Available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_to_naive_date_assumes_2000s() {
        let d = LongDate { year: 7, month: 10, day: 9 };
        assert_eq!(d.to_naive_date(), NaiveDate::from_ymd_opt(2007, 10, 9));
    }

    #[test]
    fn long_date_to_naive_date_none_for_impossible_date() {
        let d = LongDate { year: 3, month: 22, day: 11 };
        assert_eq!(d.to_naive_date(), None);
    }

    #[test]
    fn dates_display_zero_padded() {
        assert_eq!(LongDate { year: 2, month: 2, day: 22 }.to_string(), "020222");
        assert_eq!(ShortDate { month: 10, day: 9 }.to_string(), "1009");
    }

    #[test]
    fn balance_type_from_str_accepts_codes_and_names() {
        assert_eq!("O".parse::<BalanceType>().unwrap(), BalanceType::Opening);
        assert_eq!("closing".parse::<BalanceType>().unwrap(), BalanceType::Closing);
        assert_eq!("A".parse::<BalanceType>().unwrap(), BalanceType::Available);
    }

    #[test]
    fn balance_type_from_str_rejects_unknown() {
        let err = "intermediate".parse::<BalanceType>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownBalanceType(s) if s == "intermediate"));
    }

    #[test]
    fn balance_type_maps_to_tags() {
        assert_eq!(BalanceType::Opening.tag().literal, ":60F:");
        assert_eq!(BalanceType::Closing.tag().literal, ":62F:");
        assert_eq!(BalanceType::Available.tag().literal, ":64:");
    }

    #[test]
    fn transaction_type_flags() {
        assert_eq!(TransactionType::from_flag('D'), Some(TransactionType::Debit));
        assert_eq!(TransactionType::from_flag('C'), Some(TransactionType::Credit));
        assert_eq!(TransactionType::from_flag('R'), None);
        assert_eq!(TransactionType::Credit.flag(), 'C');
    }
}
