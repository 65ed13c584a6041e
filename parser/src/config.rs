//! Грамматика MT940 в одном месте: литералы тегов и ограничения длины,
//! плюс настройки декодера.

use serde::{Deserialize, Serialize};

/// Тег и максимальная длина его значения (в символах)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub literal: &'static str,
    pub max_len: usize,
}

/// :20: Transaction Reference Number
pub const REFERENCE_NUMBER: TagSpec = TagSpec { literal: ":20:", max_len: 16 };
/// :21: Related Reference
pub const RELATED_REFERENCE: TagSpec = TagSpec { literal: ":21:", max_len: 16 };
/// :25: Account Identification
pub const ACCOUNT_IDENTIFICATION: TagSpec = TagSpec { literal: ":25:", max_len: 35 };
/// :28C: Statement Number
pub const STATEMENT_NUMBER: TagSpec = TagSpec { literal: ":28C:", max_len: 5 };

/// :60F: Opening Balance
pub const OPENING_BALANCE: TagSpec = TagSpec { literal: ":60F:", max_len: BALANCE_MAX_LEN };
/// :62F: Closing Balance
pub const CLOSING_BALANCE: TagSpec = TagSpec { literal: ":62F:", max_len: BALANCE_MAX_LEN };
/// :64: Closing Available Balance
pub const AVAILABLE_BALANCE: TagSpec = TagSpec { literal: ":64:", max_len: BALANCE_MAX_LEN };

/// минимум для баланса: 1 (C/D) + 6 (дата) + 3 (валюта)
pub const BALANCE_MIN_LEN: usize = 10;
pub const BALANCE_MAX_LEN: usize = 25;

/// :61: Statement Line, может занимать несколько физических строк
pub const TRANSACTION: &str = ":61:";
/// :86: Information to Account Owner
pub const TRANSACTION_DESCRIPTION: &str = ":86:";

/// Режим проверки дат
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateMode {
    /// Любые двузначные месяц/день (например, месяц 13 или день 32) принимаются как есть
    #[default]
    Lenient,
    /// Дата должна существовать в календаре
    Strict,
}
