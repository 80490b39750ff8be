use std::fmt::Display;

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// A single reading frame: a codon start offset on the forward or the
/// reverse-complement strand.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Frame {
    Fwd0 = 0,
    Fwd1,
    Fwd2,
    Rev0,
    Rev1,
    Rev2,
}

impl Frame {
    /// All frames in the canonical expansion order.
    pub const ALL: [Frame; 6] = [
        Frame::Fwd0,
        Frame::Fwd1,
        Frame::Fwd2,
        Frame::Rev0,
        Frame::Rev1,
        Frame::Rev2,
    ];

    /// Codon start offset within the (reverse-complemented) sequence.
    pub fn offset(self) -> usize {
        match self {
            Frame::Fwd0 | Frame::Rev0 => 0,
            Frame::Fwd1 | Frame::Rev1 => 1,
            Frame::Fwd2 | Frame::Rev2 => 2,
        }
    }

    /// Whether the frame reads the reverse-complement strand.
    pub fn is_reverse(self) -> bool {
        matches!(self, Frame::Rev0 | Frame::Rev1 | Frame::Rev2)
    }

    /// The single-flag frame set selecting only this frame.
    pub fn mask(self) -> TranslationFrames {
        TranslationFrames(1 << self as u8)
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let strand = if self.is_reverse() { '-' } else { '+' };
        write!(f, "{}{}", strand, self.offset())
    }
}

/// A set of reading frames, one flag per frame.
///
/// Expansion into individual frames always happens in ascending frame order
/// (Fwd0, Fwd1, Fwd2, Rev0, Rev1, Rev2), which fixes the element order of
/// every view built from a set.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
    BitXorAssign,
)]
pub struct TranslationFrames(u8);

impl TranslationFrames {
    pub const EMPTY: Self = Self(0);
    pub const FWD_FRAME_0: Self = Self(1 << 0);
    pub const FWD_FRAME_1: Self = Self(1 << 1);
    pub const FWD_FRAME_2: Self = Self(1 << 2);
    pub const REV_FRAME_0: Self = Self(1 << 3);
    pub const REV_FRAME_1: Self = Self(1 << 4);
    pub const REV_FRAME_2: Self = Self(1 << 5);
    /// The three forward frames.
    pub const FORWARD: Self = Self(0b000_111);
    /// The three reverse-complement frames.
    pub const REVERSE: Self = Self(0b111_000);
    /// All six frames.
    pub const SIX_FRAME: Self = Self(0b111_111);

    /// Whether every flag of `flags` is set in this set.
    pub fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Number of selected frames.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Expand into individual frames, ascending.
    pub fn frames(self) -> Vec<Frame> {
        Frame::ALL
            .into_iter()
            .filter(|frame| self.contains(frame.mask()))
            .collect()
    }
}

impl Default for TranslationFrames {
    fn default() -> Self {
        Self::SIX_FRAME
    }
}

impl From<Frame> for TranslationFrames {
    fn from(frame: Frame) -> Self {
        frame.mask()
    }
}
