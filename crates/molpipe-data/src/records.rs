use serde::{Deserialize, Serialize};

/// One dataset row: a molecule identifier plus its scalar target
/// properties. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub smiles: String,
    pub targets: Vec<f64>,
}

impl MoleculeRecord {
    pub fn new(smiles: impl Into<String>, targets: Vec<f64>) -> Self {
        MoleculeRecord {
            smiles: smiles.into(),
            targets,
        }
    }
}

/// Identifier strings in record order.
pub fn smiles_column(records: &[MoleculeRecord]) -> Vec<String> {
    records.iter().map(|r| r.smiles.clone()).collect()
}

/// Extract one target column in record order. Returns `None` when any
/// record lacks that column.
pub fn target_column(records: &[MoleculeRecord], index: usize) -> Option<Vec<f64>> {
    records
        .iter()
        .map(|r| r.targets.get(index).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_preserve_order() {
        let records = vec![
            MoleculeRecord::new("CCO", vec![1.0, 10.0]),
            MoleculeRecord::new("CCC", vec![2.0, 20.0]),
        ];
        assert_eq!(smiles_column(&records), vec!["CCO", "CCC"]);
        assert_eq!(target_column(&records, 1), Some(vec![10.0, 20.0]));
    }

    #[test]
    fn test_missing_target_column() {
        let records = vec![
            MoleculeRecord::new("CCO", vec![1.0]),
            MoleculeRecord::new("CCC", vec![]),
        ];
        assert_eq!(target_column(&records, 0), None);
    }
}
