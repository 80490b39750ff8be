use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use seqlens_core::alphabet::Nucleotide;
use seqlens_core::pretty::{pretty_seq, Pretty};
use seqlens_core::{Cursor, Indexed};

use crate::frames::{Frame, TranslationFrames};
use crate::single::TranslateSingle;

/// Flattened (sequence × frame) translation over a collection of nucleotide
/// sequences.
///
/// For k selected frames the view exposes `seqs.len() * k` single-frame
/// views: frames vary fastest, so element `n` covers sequence `n / k` in the
/// frame at position `n % k` of the selection. The selection is expanded
/// once at construction, in ascending frame order, and reused for every
/// access. Equivalent to translating every sequence and concatenating the
/// results, except that nothing is materialized and random access stays
/// O(1).
#[derive(Clone, Debug)]
pub struct TranslateJoin<T, S, N> {
    seqs: T,
    frames: TranslationFrames,
    selected: Vec<Frame>,
    marker: PhantomData<(S, N)>,
}

impl<T, S, N> TranslateJoin<T, S, N>
where
    T: AsRef<[S]>,
    S: AsRef<[N]>,
    N: Nucleotide,
{
    /// Translate every sequence in all six frames.
    pub fn new(seqs: T) -> Self {
        Self::with_frames(seqs, TranslationFrames::SIX_FRAME)
    }

    /// Translate every sequence in the selected frames.
    pub fn with_frames(seqs: T, frames: TranslationFrames) -> Self {
        if frames.is_empty() {
            log::warn!("translation requested with an empty frame selection");
        }

        let selected = frames.frames();
        Self {
            seqs,
            frames,
            selected,
            marker: PhantomData,
        }
    }

    /// The frame set this view was built with.
    pub fn frames(&self) -> TranslationFrames {
        self.frames
    }

    /// The expanded frame selection, in ascending order.
    pub fn selected(&self) -> &[Frame] {
        &self.selected
    }

    /// Number of (sequence, frame) pairs.
    pub fn len(&self) -> usize {
        self.seqs.as_ref().len() * self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single-frame view at flattened index `n`. Indices must be below
    /// `len()`.
    pub fn at(&self, n: usize) -> TranslateSingle<'_, N> {
        assert!(n < self.len(), "flattened index {} is out of bounds", n);

        let frame = n % self.selected.len();
        let sequence = (n - frame) / self.selected.len();
        TranslateSingle::new(self.seqs.as_ref()[sequence].as_ref(), self.selected[frame])
    }

    /// Iterate the single-frame views.
    pub fn iter(&self) -> Cursor<'_, Self> {
        Cursor::new(self, 0)
    }

    /// Give back the underlying collection.
    pub fn into_inner(self) -> T {
        self.seqs
    }
}

impl<T, S, N> Indexed for TranslateJoin<T, S, N>
where
    T: AsRef<[S]>,
    S: AsRef<[N]>,
    N: Nucleotide,
{
    type Item<'a>
        = TranslateSingle<'a, N>
    where
        Self: 'a;

    fn len(&self) -> usize {
        TranslateJoin::len(self)
    }

    fn at(&self, index: usize) -> TranslateSingle<'_, N> {
        TranslateJoin::at(self, index)
    }
}

impl<'a, T, S, N> IntoIterator for &'a TranslateJoin<T, S, N>
where
    T: AsRef<[S]>,
    S: AsRef<[N]>,
    N: Nucleotide,
{
    type Item = TranslateSingle<'a, N>;
    type IntoIter = Cursor<'a, TranslateJoin<T, S, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S, N> Pretty for TranslateJoin<T, S, N>
where
    T: AsRef<[S]>,
    S: AsRef<[N]>,
    N: Nucleotide,
{
    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pretty_seq(f, self)
    }
}

/// Attaches `translate_join` to any collection of nucleotide sequences.
pub trait TranslateJoinExt<S, N>: Sized {
    fn translate_join(self, frames: TranslationFrames) -> TranslateJoin<Self, S, N>;
}

impl<T, S, N> TranslateJoinExt<S, N> for T
where
    T: AsRef<[S]>,
    S: AsRef<[N]>,
    N: Nucleotide,
{
    fn translate_join(self, frames: TranslationFrames) -> TranslateJoin<Self, S, N> {
        TranslateJoin::with_frames(self, frames)
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;

    use seqlens_core::alphabet::{seq_from_str, Dna};

    use super::*;

    fn sequences() -> Result<Vec<Vec<Dna>>> {
        Ok(vec![seq_from_str("ACGTACGTACGTA")?, seq_from_str("TCGAGAGCTTTAGC")?])
    }

    #[test]
    fn test_len_tracks_selection_size() -> Result<()> {
        let seqs = sequences()?;

        for frames in [
            TranslationFrames::SIX_FRAME,
            TranslationFrames::FORWARD,
            TranslationFrames::REVERSE,
            TranslationFrames::FWD_FRAME_0,
            TranslationFrames::FWD_FRAME_1 | TranslationFrames::REV_FRAME_2,
            TranslationFrames::EMPTY,
        ] {
            let view = TranslateJoin::with_frames(&seqs, frames);
            assert_eq!(view.len(), seqs.len() * frames.count());
            assert_eq!(view.is_empty(), frames.is_empty());
        }

        let empty: Vec<Vec<Dna>> = vec![];
        assert!(TranslateJoin::new(empty).is_empty());
        Ok(())
    }

    #[test]
    fn test_flattened_index_decodes_frame_fastest() -> Result<()> {
        let seqs = sequences()?;

        for frames in [
            TranslationFrames::SIX_FRAME,
            TranslationFrames::FORWARD,
            TranslationFrames::FWD_FRAME_0 | TranslationFrames::REV_FRAME_1,
        ] {
            let view = TranslateJoin::with_frames(&seqs, frames);
            let selected = frames.frames();

            for n in 0..view.len() {
                let k = selected.len();
                let expected = TranslateSingle::new(&seqs[n / k], selected[n % k]);
                assert_eq!(view.at(n), expected);
            }
        }
        Ok(())
    }

    #[test]
    fn test_frames_are_expanded_once_in_order() -> Result<()> {
        let view = TranslateJoin::new(sequences()?);

        assert_eq!(view.frames(), TranslationFrames::SIX_FRAME);
        assert_eq!(view.selected(), Frame::ALL);
        Ok(())
    }

    #[test]
    fn test_iteration_matches_random_access() -> Result<()> {
        let seqs = sequences()?;
        let view = TranslateJoin::with_frames(&seqs, TranslationFrames::FORWARD);

        let iterated: Vec<String> = view.iter().map(|single| single.to_string()).collect();
        let accessed: Vec<String> = (0..view.len()).map(|n| view.at(n).to_string()).collect();

        assert_eq!(iterated, accessed);
        assert_eq!(iterated, ["TYVR", "RTYV", "VRT", "SRAL", "REL*", "ESFS"]);
        Ok(())
    }

    #[test]
    fn test_owned_and_borrowed_outers() -> Result<()> {
        let seqs = sequences()?;

        let borrowed = TranslateJoin::with_frames(&seqs, TranslationFrames::FWD_FRAME_0);
        assert_eq!(borrowed.len(), 2);

        let owned = seqs.clone().translate_join(TranslationFrames::FWD_FRAME_0);
        assert_eq!(owned.len(), 2);
        assert_eq!(owned.at(1).to_string(), borrowed.at(1).to_string());

        assert_eq!(owned.into_inner(), seqs);
        Ok(())
    }

    #[test]
    fn test_dereference_is_idempotent() -> Result<()> {
        let seqs = sequences()?;
        let view = TranslateJoin::new(&seqs);

        assert_eq!(view.at(7), view.at(7));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_access_panics() {
        let seqs = vec![vec![Dna::A, Dna::C, Dna::G]];
        let view = TranslateJoin::with_frames(&seqs, TranslationFrames::FORWARD);
        view.at(3);
    }
}
