use crate::error::ParseError;
use crate::model::{Mt940Statement, Transaction};
use csv::WriterBuilder;
use std::io::Write;

const CSV_HEADERS: [&str; 9] = [
    "index",
    "long_date",
    "short_date",
    "transaction_type",
    "third_currency_character",
    "amount",
    "description_prefix",
    "description",
    "information",
];

fn transaction_row(tx: &Transaction) -> [String; 9] {
    let stmt = &tx.statement;
    [
        tx.index.to_string(),
        stmt.long_date.to_string(),
        stmt.short_date.to_string(),
        stmt.transaction_type.flag().to_string(),
        stmt.third_currency_character.clone(),
        stmt.amount.to_string(),
        stmt.description_prefix.clone(),
        stmt.description.clone(),
        tx.information.info.clone(),
    ]
}

impl Mt940Statement {
    /// Записывает выписку целиком в JSON (суммы - строками, без потери точности)
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ParseError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Записывает проводки в CSV: строка заголовков, затем по строке на проводку
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ParseError> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(CSV_HEADERS)?;
        for tx in &self.transactions {
            wtr.write_record(transaction_row(tx))?;
        }

        wtr.flush()?;
        Ok(())
    }
}
