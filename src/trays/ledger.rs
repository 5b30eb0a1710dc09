use super::models::TrayStock;
use std::collections::HashMap;

/// Composite key matching a ledger row by exact code and variety name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrayKey {
    pub code: String,
    pub variety_name: String,
}

impl TrayKey {
    pub fn new(code: impl Into<String>, variety_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            variety_name: variety_name.into(),
        }
    }
}

impl From<&TrayStock> for TrayKey {
    fn from(tray: &TrayStock) -> Self {
        Self::new(tray.code.as_str(), tray.variety_name.as_str())
    }
}

/// Tray stock in purchase order, indexed by `TrayKey`.
///
/// A key may map to several rows: repeated purchases of the same code are
/// kept as independent rows.
#[derive(Debug, Clone, Default)]
pub struct TrayLedger {
    rows: Vec<TrayStock>,
    index: HashMap<TrayKey, Vec<usize>>,
}

impl TrayLedger {
    pub fn from_rows(rows: Vec<TrayStock>) -> Self {
        let mut ledger = Self {
            rows,
            index: HashMap::new(),
        };
        ledger.rebuild_index();
        ledger
    }

    pub fn rows(&self) -> &[TrayStock] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, tray: TrayStock) {
        self.index
            .entry(TrayKey::from(&tray))
            .or_default()
            .push(self.rows.len());
        self.rows.push(tray);
    }

    /// Total trays on hand across every row of `key`, saturating at `i64::MAX`
    pub fn quantity_on_hand(&self, key: &TrayKey) -> i64 {
        self.index.get(key).map_or(0, |positions| {
            positions
                .iter()
                .fold(0_i64, |total, &i| total.saturating_add(self.rows[i].quantity))
        })
    }

    /// Subtract `amount` from every row of `key`, then drop all rows left at
    /// zero or below. Returns false, leaving the ledger untouched, when no
    /// row matches.
    pub fn consume(&mut self, key: &TrayKey, amount: i64) -> bool {
        let Some(positions) = self.index.get(key) else {
            return false;
        };
        for &i in positions {
            self.rows[i].quantity = self.rows[i].quantity.saturating_sub(amount);
        }

        let before = self.rows.len();
        self.rows.retain(|tray| tray.quantity > 0);
        if self.rows.len() != before {
            tracing::info!("Pruned {} exhausted tray rows", before - self.rows.len());
            self.rebuild_index();
        }
        true
    }

    /// Distinct variety names in first-purchase order
    pub fn variety_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for tray in &self.rows {
            if !names.contains(&tray.variety_name.as_str()) {
                names.push(&tray.variety_name);
            }
        }
        names
    }

    /// Distinct codes stocked under `variety_name`, in purchase order
    pub fn codes_for(&self, variety_name: &str) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for tray in self.rows.iter().filter(|t| t.variety_name == variety_name) {
            if !codes.contains(&tray.code.as_str()) {
                codes.push(&tray.code);
            }
        }
        codes
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, tray) in self.rows.iter().enumerate() {
            self.index.entry(TrayKey::from(tray)).or_default().push(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tray(code: &str, variety_name: &str, quantity: i64) -> TrayStock {
        TrayStock {
            code: code.to_string(),
            variety_name: variety_name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_push_keeps_duplicate_codes_separate() {
        let mut ledger = TrayLedger::default();
        ledger.push(tray("123456", "Tomate", 10));
        ledger.push(tray("123456", "Tomate", 5));

        assert_eq!(ledger.rows().len(), 2);
        assert_eq!(ledger.quantity_on_hand(&TrayKey::new("123456", "Tomate")), 15);
    }

    #[test]
    fn test_consume_decrements_matching_rows_only() {
        let mut ledger = TrayLedger::from_rows(vec![
            tray("123456", "Tomate", 10),
            tray("123456", "Pimenta", 10),
            tray("654321", "Tomate", 10),
        ]);

        assert!(ledger.consume(&TrayKey::new("123456", "Tomate"), 4));
        assert_eq!(
            ledger.rows(),
            &[
                tray("123456", "Tomate", 6),
                tray("123456", "Pimenta", 10),
                tray("654321", "Tomate", 10),
            ]
        );
    }

    #[test]
    fn test_consume_prunes_exhausted_rows_and_reindexes() {
        let mut ledger = TrayLedger::from_rows(vec![
            tray("111111", "Alface", 3),
            tray("222222", "Rúcula", 8),
        ]);

        assert!(ledger.consume(&TrayKey::new("111111", "Alface"), 5));
        assert_eq!(ledger.rows(), &[tray("222222", "Rúcula", 8)]);
        assert_eq!(ledger.quantity_on_hand(&TrayKey::new("111111", "Alface")), 0);

        assert!(ledger.consume(&TrayKey::new("222222", "Rúcula"), 2));
        assert_eq!(ledger.rows(), &[tray("222222", "Rúcula", 6)]);
    }

    #[test]
    fn test_consume_unknown_key_is_a_no_op() {
        let mut ledger = TrayLedger::from_rows(vec![tray("111111", "Alface", 3)]);

        assert!(!ledger.consume(&TrayKey::new("111111", "Tomate"), 1));
        assert_eq!(ledger.rows(), &[tray("111111", "Alface", 3)]);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut ledger = TrayLedger::from_rows(vec![
            tray("123456", "Tomate", i64::MAX),
            tray("123456", "Tomate", i64::MAX),
            tray("654321", "Alface", i64::MIN + 1),
        ]);
        let tomate = TrayKey::new("123456", "Tomate");

        assert_eq!(ledger.quantity_on_hand(&tomate), i64::MAX);
        assert!(ledger.consume(&tomate, 1));
        assert_eq!(ledger.quantity_on_hand(&tomate), i64::MAX);

        assert!(ledger.consume(&TrayKey::new("654321", "Alface"), i64::MAX));
        assert_eq!(ledger.rows().len(), 2);
    }

    #[test]
    fn test_cascading_selection_lists() {
        let ledger = TrayLedger::from_rows(vec![
            tray("123456", "Tomate", 10),
            tray("HB0001", "Alface", 2),
            tray("654321", "Tomate", 1),
            tray("123456", "Tomate", 4),
        ]);

        assert_eq!(ledger.variety_names(), vec!["Tomate", "Alface"]);
        assert_eq!(ledger.codes_for("Tomate"), vec!["123456", "654321"]);
        assert!(ledger.codes_for("Manjericão").is_empty());
    }
}
