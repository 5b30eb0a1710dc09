use super::models::{DiscardCreate, DiscardRecord, DiscardType};
use crate::common::errors::BusinessResult;
use crate::services::nursery::Nursery;
use crate::trays::ledger::TrayKey;
use crate::trays::services::{consume_trays, require_stock};
use crate::{missing_field, validation_error};
use chrono::NaiveDate;

/// Log a discard dated `today`. Discarded trays leave the stock, pots do not.
pub fn record_discard(
    nursery: &mut Nursery,
    payload: DiscardCreate,
    today: NaiveDate,
) -> BusinessResult<DiscardRecord> {
    require_stock(&nursery.ledger)?;

    if payload.variety_name.is_empty() {
        return Err(missing_field!("variety_name"));
    }
    if payload.variety_code.is_empty() {
        return Err(missing_field!("variety_code"));
    }
    let Some(discard_type) = payload.discard_type else {
        return Err(missing_field!("discard_type"));
    };
    if payload.quantity_discarded == 0 {
        return Err(missing_field!("quantity_discarded"));
    }
    if payload.quantity_discarded < 1 {
        return Err(validation_error!("quantity_discarded", "must be at least 1"));
    }

    let discard = DiscardRecord {
        date: today,
        discard_type,
        variety_code: payload.variety_code,
        variety_name: payload.variety_name,
        quantity_discarded: payload.quantity_discarded,
    };

    let ledger = if discard.discard_type == DiscardType::Trays {
        let key = TrayKey::new(discard.variety_code.as_str(), discard.variety_name.as_str());
        consume_trays(&nursery.ledger, &key, discard.quantity_discarded)
    } else {
        None
    };
    let mut discards = nursery.discards.clone();
    discards.push(discard.clone());

    nursery.persist_with_ledger(&nursery.discards, &discards, ledger.as_ref())?;
    nursery.discards = discards;
    if let Some(ledger) = ledger {
        nursery.ledger = ledger;
    }

    tracing::info!(
        "Discarded {} {} of {} ({})",
        discard.quantity_discarded,
        discard.discard_type.label(),
        discard.variety_name,
        discard.variety_code
    );

    Ok(discard)
}
