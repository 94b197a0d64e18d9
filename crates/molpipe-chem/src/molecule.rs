use crate::element::Element;
use serde::{Deserialize, Serialize};

/// Bond order between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Bond order in half-units (single = 2) so aromatic stays integral.
    pub fn half_units(self) -> u8 {
        match self {
            BondOrder::Single => 2,
            BondOrder::Double => 4,
            BondOrder::Triple => 6,
            BondOrder::Aromatic => 3,
        }
    }

    /// Stable code used when hashing bonds into fingerprints.
    pub fn code(self) -> u64 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Aromatic => 4,
        }
    }
}

/// A single atom in a molecular graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub charge: i8,
    /// Hydrogen count. Fixed for bracket atoms, otherwise filled in from
    /// standard valence when the molecule is assembled.
    pub n_hydrogens: u8,
    /// True when the hydrogen count came from a bracket specification.
    pub explicit_h: bool,
}

impl Atom {
    pub fn new(element: Element, aromatic: bool) -> Self {
        Atom {
            element,
            aromatic,
            charge: 0,
            n_hydrogens: 0,
            explicit_h: false,
        }
    }
}

/// An edge between two atoms, stored by atom index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

/// An immutable molecular graph: atom and bond tables plus adjacency.
///
/// Built by the SMILES parser; not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// adjacency[i] lists (neighbor atom index, bond order) pairs.
    adjacency: Vec<Vec<(usize, BondOrder)>>,
}

impl Molecule {
    /// Assemble a molecule from parsed atoms and bonds: builds adjacency and
    /// assigns implicit hydrogens to non-bracket atoms from standard valence.
    pub fn assemble(mut atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for bond in &bonds {
            adjacency[bond.a].push((bond.b, bond.order));
            adjacency[bond.b].push((bond.a, bond.order));
        }

        for (i, atom) in atoms.iter_mut().enumerate() {
            if atom.explicit_h {
                continue;
            }
            let half: u32 = adjacency[i].iter().map(|&(_, o)| o.half_units() as u32).sum();
            let used = ((half + 1) / 2) as u8;
            atom.n_hydrogens = atom.element.default_valence().saturating_sub(used);
        }

        Molecule {
            atoms,
            bonds,
            adjacency,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atom(&self, i: usize) -> &Atom {
        &self.atoms[i]
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Heavy-atom neighbors of atom `i` with the connecting bond order.
    pub fn neighbors(&self, i: usize) -> &[(usize, BondOrder)] {
        &self.adjacency[i]
    }

    /// Heavy-atom degree of atom `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }
}
