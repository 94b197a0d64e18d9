pub mod element;
pub mod featurize;
pub mod fingerprint;
pub mod molecule;
pub mod smiles;

pub use element::Element;
pub use featurize::MorganFeaturizer;
pub use fingerprint::MorganFingerprint;
pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use smiles::{parse, SmilesError};
