//! Shared conversions from raw field text to normalized values.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::types::Transaction;

/// M/D/YYYY with one or two digit month and day
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("date pattern is valid")
});

/// Optional sign, digits, optional fraction. No separators or exponents.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("amount pattern is valid")
});

const MIDDAY: NaiveTime = NaiveTime::from_hms_opt(12, 0, 0).expect("12:00 is a valid time");

/// Parse `MM/DD/YYYY` (month and day may be one digit).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(s.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a plain signed decimal such as `-42.50` or `1200`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if !AMOUNT_RE.is_match(s) {
        return None;
    }
    Decimal::from_str(s).ok()
}

/// `round(|amount| * 100)`, midpoints rounded away from zero.
///
/// `None` when the result does not fit in `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    let cents = amount.abs().checked_mul(Decimal::ONE_HUNDRED)?;
    cents
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// The date at 12:00, far from either day boundary.
pub fn midday(date: NaiveDate) -> NaiveDateTime {
    date.and_time(MIDDAY)
}

/// The date at 12:00 local time in `tz`. An ambiguous local time resolves to
/// the earlier instant.
pub fn midday_in(date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&midday(date)) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Build a transaction from a signed amount, assigning a fresh identity.
///
/// `None` when the amount is too large to express in minor units.
pub fn build_transaction(
    date: NaiveDate,
    raw_signed_amount: Decimal,
    description: &str,
) -> Option<Transaction> {
    let amount_minor_units = to_minor_units(raw_signed_amount)?;
    let is_credit = raw_signed_amount > Decimal::ZERO;
    Some(Transaction {
        id: Uuid::new_v4(),
        date,
        amount_minor_units,
        raw_signed_amount,
        is_credit,
        description: description.trim().to_string(),
        selected: !is_credit,
    })
}
