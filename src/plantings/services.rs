use super::models::{PlantingCreate, PlantingRecord};
use crate::common::errors::BusinessResult;
use crate::services::nursery::Nursery;
use crate::trays::ledger::TrayKey;
use crate::trays::services::{consume_trays, require_stock};
use crate::{missing_field, validation_error};
use chrono::NaiveDate;

/// Log a planting dated `today` and take the used trays out of stock
pub fn record_planting(
    nursery: &mut Nursery,
    payload: PlantingCreate,
    today: NaiveDate,
) -> BusinessResult<PlantingRecord> {
    require_stock(&nursery.ledger)?;

    if payload.variety_name.is_empty() {
        return Err(missing_field!("variety_name"));
    }
    if payload.variety_code.is_empty() {
        return Err(missing_field!("variety_code"));
    }
    for (field, value) in [
        ("pots_planted", payload.pots_planted),
        ("trays_used", payload.trays_used),
    ] {
        if value == 0 {
            return Err(missing_field!(field));
        }
        if value < 1 {
            return Err(validation_error!(field, "must be at least 1"));
        }
    }

    let planting = PlantingRecord {
        date: today,
        variety_code: payload.variety_code,
        variety_name: payload.variety_name,
        pots_planted: payload.pots_planted,
        trays_used: payload.trays_used,
    };

    let key = TrayKey::new(planting.variety_code.as_str(), planting.variety_name.as_str());
    let ledger = consume_trays(&nursery.ledger, &key, planting.trays_used);
    let mut plantings = nursery.plantings.clone();
    plantings.push(planting.clone());

    nursery.persist_with_ledger(&nursery.plantings, &plantings, ledger.as_ref())?;
    nursery.plantings = plantings;
    if let Some(ledger) = ledger {
        nursery.ledger = ledger;
    }

    tracing::info!(
        "Planted {} pots of {} ({}) using {} trays",
        planting.pots_planted,
        planting.variety_name,
        planting.variety_code,
        planting.trays_used
    );

    Ok(planting)
}
