use super::models::{SowingCreate, SowingRecord};
use crate::common::errors::BusinessResult;
use crate::services::nursery::Nursery;
use crate::{format_error, missing_field, validation_error};
use chrono::NaiveDate;

const VARIETY_CODE_PREFIX: &str = "CF";
const VARIETY_CODE_DIGITS: usize = 4;

/// True for codes made of "CF" and exactly four ASCII digits, e.g. `CF0042`
pub fn is_valid_variety_code(code: &str) -> bool {
    code.strip_prefix(VARIETY_CODE_PREFIX).is_some_and(|digits| {
        digits.len() == VARIETY_CODE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
    })
}

pub fn record_sowing(
    nursery: &mut Nursery,
    payload: SowingCreate,
    today: NaiveDate,
) -> BusinessResult<SowingRecord> {
    if payload.variety_code.is_empty() {
        return Err(missing_field!("variety_code"));
    }
    if payload.variety_name.is_empty() {
        return Err(missing_field!("variety_name"));
    }
    if payload.quantity_sown == 0 {
        return Err(missing_field!("quantity_sown"));
    }
    if payload.quantity_sown < 1 {
        return Err(validation_error!("quantity_sown", "must be at least 1"));
    }
    if !is_valid_variety_code(&payload.variety_code) {
        return Err(format_error!(
            "variety_code",
            "the code must start with 'CF' followed by 4 digits"
        ));
    }

    let sowing = SowingRecord {
        date: payload.date.unwrap_or(today),
        variety_code: payload.variety_code,
        variety_name: payload.variety_name,
        quantity_sown: payload.quantity_sown,
    };

    let mut sowings = nursery.sowings.clone();
    sowings.push(sowing.clone());
    nursery.persist(&sowings)?;
    nursery.sowings = sowings;

    tracing::info!(
        "Sowed {} trays of {} ({}) on {}",
        sowing.quantity_sown,
        sowing.variety_name,
        sowing.variety_code,
        sowing.date
    );
    Ok(sowing)
}
