use mt940_parser::{
    BalanceType, DateMode, LongDate, Mt940Decoder, Mt940Statement, ParseError, ShortDate,
    TransactionType,
};
use rust_decimal::Decimal;
use std::{fs, path::PathBuf};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("mt940")
        .join("statement.mt940")
}

fn fixture_text() -> String {
    let path = fixture_path();
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read MT940 fixture {path:?}: {e}"))
}

fn decode_fixture() -> Mt940Statement {
    Mt940Decoder::default()
        .statement(&fixture_text())
        .expect("failed to decode MT940 fixture")
}

#[test]
fn mt940_fixture_header_fields() {
    let stmt = decode_fixture();

    assert_eq!(stmt.reference_number.0, "ST230604");
    assert_eq!(
        stmt.related_reference.as_ref().map(|r| r.0.as_str()),
        Some("NONREF"),
        ":21: is present in the fixture"
    );
    assert_eq!(stmt.statement_number.0, "00123");

    let acc = &stmt.account_identification;
    assert_eq!(acc.country_iso, "PL");
    assert_eq!(acc.iban, "27114020040000300201355387");
    assert_eq!(acc.currency, "PLN");
}

#[test]
fn mt940_fixture_balances() {
    let stmt = decode_fixture();

    assert_eq!(stmt.opening_balance.balance_type, BalanceType::Opening);
    assert_eq!(stmt.opening_balance.transaction_type, TransactionType::Credit);
    assert_eq!(stmt.opening_balance.date, LongDate { year: 23, month: 6, day: 1 });
    assert_eq!(stmt.opening_balance.amount, Decimal::new(1_250_000, 2));

    assert_eq!(stmt.closing_balance.balance_type, BalanceType::Closing);
    assert_eq!(stmt.closing_balance.amount, Decimal::new(1_204_784, 2));

    let available = stmt
        .available_balance
        .as_ref()
        .expect(":64: is present in the fixture");
    assert_eq!(available.balance_type, BalanceType::Available);
    assert_eq!(available.currency, "PLN");
}

#[test]
fn mt940_fixture_transactions_in_encounter_order() {
    let stmt = decode_fixture();

    assert_eq!(stmt.transactions.len(), 3, "fixture contains 3 :61: lines");
    let indexes: Vec<usize> = stmt.transactions.iter().map(|t| t.index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);

    let first = &stmt.transactions[0].statement;
    assert_eq!(first.long_date, LongDate { year: 7, month: 10, day: 9 });
    assert_eq!(first.short_date, ShortDate { month: 10, day: 9 });
    assert_eq!(first.transaction_type, TransactionType::Debit);
    assert_eq!(first.third_currency_character, "N");
    assert_eq!(first.amount, Decimal::new(250, 2));
    assert_eq!(first.description_prefix, "N");
    assert_eq!(
        first.description,
        "CHGNONREF//BR07282102000059 824-OPŁ. ZA PRZEL. ELIXIR MT "
    );
    assert_eq!(
        stmt.transactions[0].information.info,
        "824 OPŁATA ZA PRZELEW ELIXIR; TNR: 145271016138274.040001\r\n"
    );

    let second = &stmt.transactions[1].statement;
    assert_eq!(second.amount, Decimal::new(44_977, 2));
    assert_eq!(
        second.description,
        "TRFSP300//BR05012139000001 944-PRZEL.KRAJ.WYCH.MT.ELX "
    );

    let third = &stmt.transactions[2];
    assert_eq!(third.statement.third_currency_character, "");
    assert_eq!(third.statement.amount, Decimal::new(189, 2));
    assert_eq!(third.statement.description_prefix, "S");
    // narrative runs from the last :86: to the end of the segment
    assert!(
        third.information.info.starts_with("073~00VE02\r\n"),
        "unexpected info: {:?}",
        third.information.info
    );
}

#[test]
fn mt940_fixture_decoding_is_idempotent() {
    let text = fixture_text();
    let decoder = Mt940Decoder::default();
    assert_eq!(decoder.statement(&text).unwrap(), decoder.statement(&text).unwrap());
}

#[test]
fn mt940_fixture_passes_strict_dates_except_impossible_entry_date() {
    let strict = Mt940Decoder::new(DateMode::Strict);
    assert!(strict.statement(&fixture_text()).is_ok());

    let broken = fixture_text().replace(":61:0710091009", ":61:0710091309");
    assert!(matches!(
        strict.statement(&broken),
        Err(ParseError::MalformedDate(d)) if d == "1309"
    ));
    assert!(Mt940Decoder::default().statement(&broken).is_ok());
}

#[test]
fn mt940_fixture_bad_transaction_fails_whole_statement() {
    let broken = fixture_text().replace("DN449,77N", "DN449,7");
    let err = Mt940Decoder::default().transactions(&broken).unwrap_err();
    assert!(
        matches!(err, ParseError::MalformedStatement(_)),
        "expected MalformedStatement, got {err:?}"
    );
}
