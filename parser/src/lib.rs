pub mod config;
pub mod error;
pub mod model;
pub mod mt940;
pub mod serialization;

mod utils;

pub use crate::config::DateMode;
pub use crate::error::ParseError;
pub use crate::model::{
    AccountIdentification, Amount, Balance, BalanceType, LongDate, Mt940Statement,
    ReferenceNumber, RelatedReference, ShortDate, StatementNumber, Transaction,
    TransactionInformation, TransactionStatement, TransactionType,
};
pub use crate::mt940::Mt940Decoder;
pub use crate::utils::{parse_amount, parse_long_date, parse_short_date};
