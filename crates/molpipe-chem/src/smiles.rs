//! SMILES decoding: identifier string → molecular graph.
//!
//! Covers the organic subset (`B C N O P S F Cl Br I`), aromatic lowercase
//! atoms, bracket atoms with charge and hydrogen counts, branches, ring
//! closures (including `%nn`), and explicit bond symbols. Dot-separated
//! multi-fragment inputs are rejected: one identifier encodes one molecule.

use crate::element::Element;
use crate::molecule::{Atom, Bond, BondOrder, Molecule};

use std::collections::HashMap;
use thiserror::Error;

/// Parse failure with the byte offset of the offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmilesError {
    #[error("empty identifier")]
    Empty,

    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { position: usize, symbol: String },

    #[error("unclosed branch opened at position {position}")]
    UnclosedBranch { position: usize },

    #[error("unmatched ')' at position {position}")]
    UnmatchedBranchClose { position: usize },

    #[error("ring bond {label} opened but never closed")]
    UnclosedRingBond { label: u16 },

    #[error("ring bond {label} at position {position} closes on its opening atom")]
    SelfRingBond { label: u16, position: usize },

    #[error("unclosed bracket atom at position {position}")]
    UnclosedBracket { position: usize },

    #[error("bond symbol at position {position} has no preceding atom")]
    DanglingBond { position: usize },

    #[error("multi-fragment identifier: '.' at position {position}")]
    MultiFragment { position: usize },
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Atom the next bond attaches to.
    prev: Option<usize>,
    /// Explicit bond symbol waiting for its second atom.
    pending: Option<BondOrder>,
    /// Branch stack of (atom index, opening byte position).
    stack: Vec<(Option<usize>, usize)>,
    /// Open ring closures: label → (atom, bond order at opening, position).
    rings: HashMap<u16, (usize, Option<BondOrder>, usize)>,
}

/// Decode a SMILES identifier into a [`Molecule`].
pub fn parse(input: &str) -> Result<Molecule, SmilesError> {
    if input.is_empty() {
        return Err(SmilesError::Empty);
    }
    let mut p = Parser {
        bytes: input.as_bytes(),
        pos: 0,
        atoms: Vec::new(),
        bonds: Vec::new(),
        prev: None,
        pending: None,
        stack: Vec::new(),
        rings: HashMap::new(),
    };
    p.run()?;
    Ok(Molecule::assemble(p.atoms, p.bonds))
}

impl<'a> Parser<'a> {
    fn run(&mut self) -> Result<(), SmilesError> {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            match self.bytes[self.pos] {
                b'(' => {
                    if self.prev.is_none() {
                        return Err(SmilesError::DanglingBond { position: start });
                    }
                    self.stack.push((self.prev, start));
                    self.pos += 1;
                }
                b')' => {
                    let (restored, _) = self
                        .stack
                        .pop()
                        .ok_or(SmilesError::UnmatchedBranchClose { position: start })?;
                    self.prev = restored;
                    self.pos += 1;
                }
                b'-' | b'/' | b'\\' => {
                    self.set_pending(BondOrder::Single, start)?;
                    self.pos += 1;
                }
                b'=' => {
                    self.set_pending(BondOrder::Double, start)?;
                    self.pos += 1;
                }
                b'#' => {
                    self.set_pending(BondOrder::Triple, start)?;
                    self.pos += 1;
                }
                b':' => {
                    self.set_pending(BondOrder::Aromatic, start)?;
                    self.pos += 1;
                }
                b'.' => return Err(SmilesError::MultiFragment { position: start }),
                b'0'..=b'9' => {
                    let label = (self.bytes[self.pos] - b'0') as u16;
                    self.pos += 1;
                    self.close_ring(label, start)?;
                }
                b'%' => {
                    let label = self.read_two_digit_label(start)?;
                    self.close_ring(label, start)?;
                }
                b'[' => {
                    let atom = self.read_bracket_atom(start)?;
                    self.push_atom(atom);
                }
                _ => {
                    let atom = self.read_organic_atom(start)?;
                    self.push_atom(atom);
                }
            }
        }

        if let Some(&(_, position)) = self.stack.last() {
            return Err(SmilesError::UnclosedBranch { position });
        }
        if let Some(&label) = self.rings.keys().min() {
            return Err(SmilesError::UnclosedRingBond { label });
        }
        if self.pending.is_some() {
            return Err(SmilesError::DanglingBond {
                position: self.bytes.len(),
            });
        }
        if self.atoms.is_empty() {
            return Err(SmilesError::Empty);
        }
        Ok(())
    }

    fn set_pending(&mut self, order: BondOrder, position: usize) -> Result<(), SmilesError> {
        if self.prev.is_none() || self.pending.is_some() {
            return Err(SmilesError::DanglingBond { position });
        }
        self.pending = Some(order);
        Ok(())
    }

    fn push_atom(&mut self, atom: Atom) {
        let idx = self.atoms.len();
        let aromatic = atom.aromatic;
        self.atoms.push(atom);
        if let Some(prev) = self.prev {
            let order = match self.pending.take() {
                Some(o) => o,
                None if aromatic && self.atoms[prev].aromatic => BondOrder::Aromatic,
                None => BondOrder::Single,
            };
            self.bonds.push(Bond {
                a: prev,
                b: idx,
                order,
            });
        }
        self.prev = Some(idx);
    }

    fn close_ring(&mut self, label: u16, position: usize) -> Result<(), SmilesError> {
        let current = self
            .prev
            .ok_or(SmilesError::DanglingBond { position })?;
        match self.rings.remove(&label) {
            Some((open_atom, open_order, _)) => {
                if open_atom == current {
                    return Err(SmilesError::SelfRingBond { label, position });
                }
                let order = match self.pending.take().or(open_order) {
                    Some(o) => o,
                    None if self.atoms[open_atom].aromatic && self.atoms[current].aromatic => {
                        BondOrder::Aromatic
                    }
                    None => BondOrder::Single,
                };
                self.bonds.push(Bond {
                    a: open_atom,
                    b: current,
                    order,
                });
            }
            None => {
                let order = self.pending.take();
                self.rings.insert(label, (current, order, position));
            }
        }
        Ok(())
    }

    fn read_two_digit_label(&mut self, start: usize) -> Result<u16, SmilesError> {
        // '%' followed by exactly two digits.
        if self.pos + 2 >= self.bytes.len()
            || !self.bytes[self.pos + 1].is_ascii_digit()
            || !self.bytes[self.pos + 2].is_ascii_digit()
        {
            return Err(SmilesError::UnknownSymbol {
                position: start,
                symbol: "%".to_string(),
            });
        }
        let label =
            (self.bytes[self.pos + 1] - b'0') as u16 * 10 + (self.bytes[self.pos + 2] - b'0') as u16;
        self.pos += 3;
        Ok(label)
    }

    fn read_organic_atom(&mut self, start: usize) -> Result<Atom, SmilesError> {
        let b = self.bytes[self.pos];

        // Two-letter halogens first.
        if b == b'C' && self.bytes.get(self.pos + 1) == Some(&b'l') {
            self.pos += 2;
            return Ok(Atom::new(Element::Cl, false));
        }
        if b == b'B' && self.bytes.get(self.pos + 1) == Some(&b'r') {
            self.pos += 2;
            return Ok(Atom::new(Element::Br, false));
        }

        let (element, aromatic) = match b {
            b'B' => (Element::B, false),
            b'C' => (Element::C, false),
            b'N' => (Element::N, false),
            b'O' => (Element::O, false),
            b'P' => (Element::P, false),
            b'S' => (Element::S, false),
            b'F' => (Element::F, false),
            b'I' => (Element::I, false),
            b'b' => (Element::B, true),
            b'c' => (Element::C, true),
            b'n' => (Element::N, true),
            b'o' => (Element::O, true),
            b'p' => (Element::P, true),
            b's' => (Element::S, true),
            other => {
                return Err(SmilesError::UnknownSymbol {
                    position: start,
                    symbol: (other as char).to_string(),
                })
            }
        };
        self.pos += 1;
        Ok(Atom::new(element, aromatic))
    }

    fn read_bracket_atom(&mut self, start: usize) -> Result<Atom, SmilesError> {
        self.pos += 1; // consume '['

        // Optional isotope digits, not retained.
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        let sym_start = self.pos;
        let first = self.peek().ok_or(SmilesError::UnclosedBracket { position: start })?;
        let (element, aromatic) = if first.is_ascii_lowercase() {
            self.pos += 1;
            let symbol = (first as char).to_ascii_uppercase().to_string();
            let element = Element::from_symbol(&symbol).filter(|e| e.supports_aromatic());
            match element {
                Some(e) => (e, true),
                None => {
                    return Err(SmilesError::UnknownSymbol {
                        position: sym_start,
                        symbol: (first as char).to_string(),
                    })
                }
            }
        } else if first.is_ascii_uppercase() {
            self.pos += 1;
            let mut symbol = (first as char).to_string();
            if self.peek().is_some_and(|b| b.is_ascii_lowercase() && b != b'h') {
                // Two-letter symbol candidate (Cl, Br); lone 'h' stays a hydrogen count.
                symbol.push(self.bytes[self.pos] as char);
                if Element::from_symbol(&symbol).is_some() {
                    self.pos += 1;
                } else {
                    symbol.pop();
                }
            }
            match Element::from_symbol(&symbol) {
                Some(e) => (e, false),
                None => {
                    return Err(SmilesError::UnknownSymbol {
                        position: sym_start,
                        symbol,
                    })
                }
            }
        } else {
            return Err(SmilesError::UnknownSymbol {
                position: sym_start,
                symbol: (first as char).to_string(),
            });
        };

        let mut atom = Atom::new(element, aromatic);
        atom.explicit_h = true;

        // Chirality markers, not retained.
        while self.peek() == Some(b'@') {
            self.pos += 1;
        }

        // Optional hydrogen count.
        if self.peek() == Some(b'H') {
            self.pos += 1;
            let mut count = 1u8;
            if self.peek().is_some_and(|b| b.is_ascii_digit()) {
                count = self.bytes[self.pos] - b'0';
                self.pos += 1;
            }
            atom.n_hydrogens = count;
        }

        // Optional charge: '+'/'-' runs or a single digit magnitude.
        while let Some(sign) = self.peek().filter(|&b| b == b'+' || b == b'-') {
            self.pos += 1;
            let delta: i8 = if sign == b'+' { 1 } else { -1 };
            if self.peek().is_some_and(|b| b.is_ascii_digit()) {
                let magnitude = (self.bytes[self.pos] - b'0') as i8;
                self.pos += 1;
                atom.charge += delta * magnitude;
            } else {
                atom.charge += delta;
            }
        }

        // Optional atom-class tag, not retained.
        if self.peek() == Some(b':') {
            self.pos += 1;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        if self.peek() != Some(b']') {
            return Err(SmilesError::UnclosedBracket { position: start });
        }
        self.pos += 1;
        Ok(atom)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methane() {
        let mol = parse("C").unwrap();
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(mol.atom(0).element, Element::C);
        assert_eq!(mol.atom(0).n_hydrogens, 4);
    }

    #[test]
    fn test_ethanol() {
        let mol = parse("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert_eq!(mol.atom(2).element, Element::O);
        assert_eq!(mol.atom(2).n_hydrogens, 1);
    }

    #[test]
    fn test_explicit_bonds() {
        let mol = parse("C=C").unwrap();
        assert_eq!(mol.bonds()[0].order, BondOrder::Double);
        let mol = parse("C#N").unwrap();
        assert_eq!(mol.bonds()[0].order, BondOrder::Triple);
        assert_eq!(mol.atom(0).n_hydrogens, 1);
    }

    #[test]
    fn test_branch() {
        // Isobutane: central carbon bonded to three methyls.
        let mol = parse("CC(C)C").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.degree(1), 3);
        assert_eq!(mol.atom(1).n_hydrogens, 1);
    }

    #[test]
    fn test_benzene_ring() {
        let mol = parse("c1ccccc1").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 6);
        for i in 0..6 {
            assert!(mol.atom(i).aromatic);
            assert_eq!(mol.degree(i), 2);
        }
        assert!(mol.bonds().iter().all(|b| b.order == BondOrder::Aromatic));
    }

    #[test]
    fn test_cyclohexane_ring_closure() {
        let mol = parse("C1CCCCC1").unwrap();
        assert_eq!(mol.bond_count(), 6);
        assert_eq!(mol.atom(0).n_hydrogens, 2);
    }

    #[test]
    fn test_percent_ring_label() {
        let mol = parse("C%10CCCCC%10").unwrap();
        assert_eq!(mol.bond_count(), 6);
    }

    #[test]
    fn test_bracket_atom() {
        let mol = parse("[NH4+]").unwrap();
        let atom = mol.atom(0);
        assert_eq!(atom.element, Element::N);
        assert_eq!(atom.n_hydrogens, 4);
        assert_eq!(atom.charge, 1);

        let mol = parse("[O-]").unwrap();
        assert_eq!(mol.atom(0).charge, -1);
        assert_eq!(mol.atom(0).n_hydrogens, 0);
    }

    #[test]
    fn test_two_letter_halogens() {
        let mol = parse("ClCBr").unwrap();
        assert_eq!(mol.atom(0).element, Element::Cl);
        assert_eq!(mol.atom(2).element, Element::Br);
    }

    #[test]
    fn test_errors_carry_positions() {
        assert_eq!(parse(""), Err(SmilesError::Empty));
        assert_eq!(
            parse("CX"),
            Err(SmilesError::UnknownSymbol {
                position: 1,
                symbol: "X".to_string()
            })
        );
        assert_eq!(
            parse("CC)C"),
            Err(SmilesError::UnmatchedBranchClose { position: 2 })
        );
        assert_eq!(
            parse("C(C"),
            Err(SmilesError::UnclosedBranch { position: 1 })
        );
        assert_eq!(parse("C1CC"), Err(SmilesError::UnclosedRingBond { label: 1 }));
        assert_eq!(
            parse("[C"),
            Err(SmilesError::UnclosedBracket { position: 0 })
        );
        assert_eq!(parse("C.C"), Err(SmilesError::MultiFragment { position: 1 }));
        assert_eq!(parse("C="), Err(SmilesError::DanglingBond { position: 2 }));
        assert_eq!(parse("=C"), Err(SmilesError::DanglingBond { position: 0 }));
    }

    #[test]
    fn test_aspirin_parses() {
        let mol = parse("CC(=O)OC1=CC=CC=C1C(=O)O").unwrap();
        assert_eq!(mol.atom_count(), 13);
        assert_eq!(mol.bond_count(), 13);
    }
}
