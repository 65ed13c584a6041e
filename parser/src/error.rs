use std::io::Error as IoError;
use thiserror::Error;

/// Ошибки при декодировании MT940
///
/// Все ошибки возвращаются сразу вызывающему коду, внутренних повторов нет:
/// разбор детерминирован, повторная попытка дала бы тот же результат.
#[derive(Debug, Error)]
pub enum ParseError {
    // логические ошибки

    /// тег отсутствует во входном тексте
    #[error("no {0} tag found")]
    TagNotFound(String),
    /// значение тега длиннее разрешённого
    #[error("value of {tag} is too long: {len} characters, max {max}")]
    ValueTooLong {
        tag: String,
        len: usize,
        max: usize,
    },
    /// обязательное значение пустое
    #[error("empty field: {0}")]
    EmptyField(&'static str),
    /// идентификатор счёта не начинается с двухбуквенного кода страны
    #[error("account identification does not contain a country ISO code: '{0}'")]
    MissingCountryCode(String),
    /// ошибка при парсинге даты YYMMDD / MMDD
    #[error("malformed date: '{0}'")]
    MalformedDate(String),
    /// ошибка при парсинге денежной суммы
    #[error("malformed amount: '{0}'")]
    MalformedAmount(String),
    /// значение баланса вне допустимого окна длины или с неверной структурой
    #[error("malformed balance: {0}")]
    MalformedBalance(String),
    /// строка :61: не соответствует грамматике
    #[error("malformed statement line: {0}")]
    MalformedStatement(String),
    /// тип баланса, для которого нет тега
    #[error("unknown balance type: '{0}'")]
    UnknownBalanceType(String),

    // обёртки

    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),
    /// обёртка csv::Error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// обёртка serde_json::Error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Ошибка разбора входного текста (а не ввода-вывода/сериализации)
    pub fn is_decode_error(&self) -> bool {
        !matches!(
            self,
            ParseError::Io(_) | ParseError::Csv(_) | ParseError::Json(_)
        )
    }
}
