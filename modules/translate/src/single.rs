use std::fmt::{self, Display, Formatter};

use derive_getters::Dissolve;

use seqlens_core::alphabet::{AminoAcid, Nucleotide};
use seqlens_core::pretty::{pretty_seq, Pretty};
use seqlens_core::{Cursor, Indexed};

use crate::codon::translate_codon;
use crate::frames::Frame;

/// Lazy translation of one nucleotide sequence in one reading frame.
///
/// Nothing is materialized: every access translates one codon on the fly,
/// and reverse frames read the underlying sequence back-to-front through
/// `complement`, so equal indices always reproduce equal symbols.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Dissolve)]
pub struct TranslateSingle<'a, N> {
    seq: &'a [N],
    frame: Frame,
}

impl<'a, N: Nucleotide> TranslateSingle<'a, N> {
    pub fn new(seq: &'a [N], frame: Frame) -> Self {
        Self { seq, frame }
    }

    /// The reading frame of this view.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// The untranslated sequence.
    pub fn nucleotides(&self) -> &'a [N] {
        self.seq
    }

    /// Number of complete codons in this frame.
    pub fn len(&self) -> usize {
        self.seq.len().saturating_sub(self.frame.offset()) / 3
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Amino acid at `index`. Indices must be below `len()`.
    pub fn at(&self, index: usize) -> AminoAcid {
        assert!(index < self.len(), "codon index {} is out of bounds", index);

        let start = self.frame.offset() + index * 3;
        if self.frame.is_reverse() {
            let last = self.seq.len() - 1;
            translate_codon(
                self.seq[last - start].complement(),
                self.seq[last - start - 1].complement(),
                self.seq[last - start - 2].complement(),
            )
        } else {
            translate_codon(self.seq[start], self.seq[start + 1], self.seq[start + 2])
        }
    }

    /// Iterate the translated symbols.
    pub fn iter(&self) -> Cursor<'_, Self> {
        Cursor::new(self, 0)
    }
}

impl<N: Nucleotide> Indexed for TranslateSingle<'_, N> {
    type Item<'b>
        = AminoAcid
    where
        Self: 'b;

    fn len(&self) -> usize {
        TranslateSingle::len(self)
    }

    fn at(&self, index: usize) -> AminoAcid {
        TranslateSingle::at(self, index)
    }
}

impl<'a, 'b, N: Nucleotide> IntoIterator for &'b TranslateSingle<'a, N> {
    type Item = AminoAcid;
    type IntoIter = Cursor<'b, TranslateSingle<'a, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Nucleotide> Display for TranslateSingle<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.pretty_fmt(f)
    }
}

impl<N: Nucleotide> Pretty for TranslateSingle<'_, N> {
    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pretty_seq(f, self)
    }
}

/// Attaches `translate` to any container of nucleotides.
pub trait Translate<N: Nucleotide> {
    fn translate(&self, frame: Frame) -> TranslateSingle<'_, N>;
}

impl<S, N> Translate<N> for S
where
    S: AsRef<[N]> + ?Sized,
    N: Nucleotide,
{
    fn translate(&self, frame: Frame) -> TranslateSingle<'_, N> {
        TranslateSingle::new(self.as_ref(), frame)
    }
}
