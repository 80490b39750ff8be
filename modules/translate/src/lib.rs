pub use codon::translate_codon;
pub use frames::{Frame, TranslationFrames};
pub use join::{TranslateJoin, TranslateJoinExt};
pub use single::{Translate, TranslateSingle};

mod codon;
mod frames;
mod join;
mod single;
