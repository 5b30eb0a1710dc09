use super::ledger::{TrayKey, TrayLedger};
use super::models::{TrayPurchaseCreate, TrayStock, VarietySelection};
use crate::common::errors::{BusinessError, BusinessResult};
use crate::services::nursery::Nursery;
use crate::{missing_field, validation_error};

/// Append a new ledger row for a tray purchase. Repeated codes are not merged.
pub fn purchase_trays(
    nursery: &mut Nursery,
    payload: TrayPurchaseCreate,
) -> BusinessResult<TrayStock> {
    if payload.code.is_empty() {
        return Err(missing_field!("code"));
    }
    if payload.variety_name.is_empty() {
        return Err(missing_field!("variety_name"));
    }
    if payload.quantity == 0 {
        return Err(missing_field!("quantity"));
    }
    if payload.quantity < 1 {
        return Err(validation_error!("quantity", "must be at least 1"));
    }

    let tray = TrayStock {
        code: payload.code,
        variety_name: payload.variety_name,
        quantity: payload.quantity,
    };

    let mut ledger = nursery.ledger.clone();
    ledger.push(tray.clone());
    nursery.persist_ledger(&ledger)?;
    nursery.ledger = ledger;

    tracing::info!(
        "Purchased {} trays of {} (code {})",
        tray.quantity,
        tray.variety_name,
        tray.code
    );
    Ok(tray)
}

/// Ledger after taking `amount` trays out of every row matching `key`,
/// with exhausted rows pruned. `None` when no row matches the pair, in which
/// case the stock stays as it is.
pub fn consume_trays(ledger: &TrayLedger, key: &TrayKey, amount: i64) -> Option<TrayLedger> {
    let mut ledger = ledger.clone();
    if !ledger.consume(key, amount) {
        tracing::warn!(
            "No trays in stock for code {} / variety {}, stock left unchanged",
            key.code,
            key.variety_name
        );
        return None;
    }

    tracing::debug!(
        "Consuming {amount} trays of {} (code {}), {} left",
        key.variety_name,
        key.code,
        ledger.quantity_on_hand(key)
    );
    Some(ledger)
}

/// Planting and discarding only make sense once trays have been purchased
pub fn require_stock(ledger: &TrayLedger) -> BusinessResult<()> {
    if ledger.is_empty() {
        return Err(BusinessError::MissingPrerequisite {
            message: "No trays registered. Register purchased trays first.".to_string(),
        });
    }
    Ok(())
}

/// Variety names in stock, plus the codes stocked under the chosen one
pub fn variety_selection(
    ledger: &TrayLedger,
    variety_name: Option<&str>,
) -> BusinessResult<VarietySelection> {
    require_stock(ledger)?;

    let variety_names = ledger.variety_names();
    let selected = match variety_name {
        Some(name) if !variety_names.contains(&name) => {
            return Err(validation_error!(
                "variety_name",
                format!("no trays in stock for variety '{name}'")
            ));
        }
        Some(name) => name,
        // require_stock guarantees at least one name
        None => variety_names[0],
    };

    Ok(VarietySelection {
        variety_codes: ledger.codes_for(selected).into_iter().map(String::from).collect(),
        selected_variety: selected.to_string(),
        variety_names: variety_names.into_iter().map(String::from).collect(),
    })
}
