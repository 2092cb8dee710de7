//! Output renderers for parsed statements.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use splitbook_ingest::{ParseOutcome, ParsedStatement, normalize::midday_in};
use std::io::Write;

/// `1234` -> `12.34`
pub fn minor_to_major(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

pub fn write_table(out: &mut impl Write, parsed: &ParsedStatement) -> Result<()> {
    for t in &parsed.transactions {
        writeln!(
            out,
            "[{}] {}  {:>12}  {:>10}  {}",
            if t.selected { "x" } else { " " },
            t.date,
            t.raw_signed_amount,
            t.amount_minor_units,
            t.description
        )?;
    }

    writeln!(
        out,
        "\nParsed {} transactions ({}); {} selected | debits ${} | credits ${}",
        parsed.transactions.len(),
        parsed.format.label(),
        parsed.selected().count(),
        minor_to_major(parsed.total_debits()),
        minor_to_major(parsed.total_credits())
    )?;
    Ok(())
}

pub fn write_json(out: &mut impl Write, outcome: &ParseOutcome) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome).context("serialize outcome")?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    anchored_at: String,
    amount: &'a Decimal,
    amount_minor: i64,
    is_credit: bool,
    selected: bool,
    description: &'a str,
}

pub fn write_csv(out: impl Write, parsed: &ParsedStatement, tz: Tz) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for t in &parsed.transactions {
        let anchored_at = midday_in(t.date, tz)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        wtr.serialize(CsvRow {
            date: t.date,
            anchored_at,
            amount: &t.raw_signed_amount,
            amount_minor: t.amount_minor_units,
            is_credit: t.is_credit,
            selected: t.selected,
            description: &t.description,
        })
        .context("write csv row")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}
