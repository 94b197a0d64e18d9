use crate::records::MoleculeRecord;

/// Load the built-in sample dataset: a handful of small organic molecules
/// with a single band-gap-like target (eV), for tests and demos.
pub fn load_sample() -> Vec<MoleculeRecord> {
    let rows: [(&str, f64); 12] = [
        ("C", 10.8),
        ("CC", 9.9),
        ("CCC", 9.5),
        ("CCO", 7.9),
        ("CC(=O)O", 6.8),
        ("CC(C)C", 9.3),
        ("C=C", 7.4),
        ("C#N", 8.1),
        ("c1ccccc1", 5.2),
        ("c1ccccc1O", 4.8),
        ("Cc1ccccc1", 5.0),
        ("CC(=O)OC1=CC=CC=C1C(=O)O", 4.3),
    ];

    rows.iter()
        .map(|&(smiles, gap)| MoleculeRecord::new(smiles, vec![gap]))
        .collect()
}
