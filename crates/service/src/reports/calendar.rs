//! Deals laid out by expected close date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use models::Deal;

use crate::errors::ServiceError;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub deals: Vec<Deal>,
    pub total_value: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub deal_count: usize,
    pub total_value: f64,
    /// Every day of the month, empty days included.
    pub days: Vec<CalendarDay>,
}

/// Deals closing on `day`, in store order.
pub fn deals_on(deals: &[Deal], day: NaiveDate) -> Vec<Deal> {
    deals.iter().filter(|d| d.close_date == Some(day)).cloned().collect()
}

pub fn month_view(deals: &[Deal], year: i32, month: u32) -> Result<CalendarMonth, ServiceError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ServiceError::Validation(format!("invalid month {year}-{month:02}")))?;

    let mut days = Vec::with_capacity(31);
    let mut cursor = Some(first);
    while let Some(date) = cursor.filter(|d| d.month() == month) {
        let on_day = deals_on(deals, date);
        days.push(CalendarDay {
            date,
            total_value: on_day.iter().map(|d| d.value).sum(),
            deals: on_day,
        });
        cursor = date.succ_opt();
    }

    Ok(CalendarMonth {
        year,
        month,
        deal_count: days.iter().map(|d| d.deals.len()).sum(),
        total_value: days.iter().map(|d| d.total_value).sum(),
        days,
    })
}
