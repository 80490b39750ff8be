use std::fmt::Debug;
use std::hash::Hash;

use eyre::{eyre, Result};

pub use amino::AminoAcid;
pub use dna::Dna;
pub use rna::Rna;

mod amino;
mod dna;
mod rna;

/// A finite symbol alphabet with a dense integer encoding.
///
/// Ranks run from 0 to `CARDINALITY - 1` in a fixed order per alphabet;
/// `symbol` is the canonical single-character representation of a symbol.
pub trait Alphabet: Copy + Eq + Ord + Hash + Debug + TryFrom<char, Error = ()> {
    /// Number of symbols in the alphabet.
    const CARDINALITY: u8;

    /// The dense encoding of this symbol.
    fn rank(self) -> u8;

    /// Symbol with the given rank. Ranks must be below `CARDINALITY`.
    fn from_rank(rank: u8) -> Self;

    /// Canonical character representation of this symbol.
    fn symbol(self) -> char;
}

/// An alphabet whose symbols pair into complementary bases.
pub trait Nucleotide: Alphabet {
    /// The complementary base.
    fn complement(self) -> Self;
}

/// Parse a string into a sequence of alphabet symbols.
pub fn seq_from_str<A: Alphabet>(s: &str) -> Result<Vec<A>> {
    s.chars()
        .enumerate()
        .map(|(pos, c)| A::try_from(c).map_err(|_| eyre!("invalid symbol {:?} at position {}", c, pos)))
        .collect()
}

/// Render a sequence of alphabet symbols as a plain string.
pub fn seq_to_string<A: Alphabet>(seq: impl IntoIterator<Item = A>) -> String {
    seq.into_iter().map(A::symbol).collect()
}

/// Reverse complement of a nucleotide sequence.
pub fn reverse_complement<N: Nucleotide>(seq: &[N]) -> Vec<N> {
    seq.iter().rev().map(|n| n.complement()).collect()
}
