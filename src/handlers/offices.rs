use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::models::offices::OfficeRecord;
use crate::models::report::{AggregateReport, CityResult};
use crate::scraping::constants::SLOT_FORMAT;

/// Earliest slot offered by one office.
///
/// Every `(date, time)` pair is combined into a timestamp. An office with no
/// slots yields `None`; a pair that does not parse fails the whole run.
pub fn earliest_slot(office: &OfficeRecord) -> Result<Option<NaiveDateTime>> {
    let city = office.city().unwrap_or("<unknown>");
    let mut earliest: Option<NaiveDateTime> = None;

    for group in &office.time_slots {
        if group.times.is_empty() {
            continue;
        }
        let Some(date) = group.date.as_deref() else {
            bail!("time slot group for {city} lists times but has no date");
        };

        for time in &group.times {
            let slot = NaiveDateTime::parse_from_str(&format!("{date} {time}"), SLOT_FORMAT)
                .with_context(|| format!("invalid slot for {city}: date {date:?}, time {time:?}"))?;
            earliest = Some(earliest.map_or(slot, |current| current.min(slot)));
        }
    }

    Ok(earliest)
}

/// Per-city earliest slots for every office in `cities`, in feed order.
///
/// With a `cutoff`, offices whose earliest slot falls after that date are
/// dropped. The boundary is inclusive.
pub fn parse_appointments(
    offices: &[OfficeRecord],
    cities: &HashSet<String>,
    cutoff: Option<NaiveDate>,
) -> Result<Vec<CityResult>> {
    let mut results = Vec::new();

    for office in offices {
        let Some(city) = office.city() else {
            debug!("skipping office without a city");
            continue;
        };
        if !cities.contains(city) {
            continue;
        }

        let Some(earliest) = earliest_slot(office)? else {
            debug!("{} has no open slots", city);
            continue;
        };

        if let Some(cutoff) = cutoff {
            if earliest.date() > cutoff {
                debug!("{} earliest {} is after cutoff {}", city, earliest, cutoff);
                continue;
            }
        }

        info!("{} earliest slot {}", city, earliest.format(SLOT_FORMAT));
        results.push(CityResult {
            city: city.to_string(),
            earliest_datetime: earliest,
        });
    }

    Ok(results)
}

/// Entry with the smallest timestamp. Ties keep the first one in input order.
pub fn find_earliest(results: &[CityResult]) -> Option<&CityResult> {
    results.iter().min_by_key(|result| result.earliest_datetime)
}

pub fn build_report(
    offices: &[OfficeRecord],
    cities: &HashSet<String>,
    cutoff: Option<NaiveDate>,
) -> Result<AggregateReport> {
    let results = parse_appointments(offices, cities, cutoff)?;
    let earliest_overall = find_earliest(&results).cloned();

    Ok(AggregateReport {
        timestamp: Utc::now(),
        results,
        earliest_overall,
    })
}
