use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::alphabet::{Alphabet, AminoAcid, Dna, Rna};

/// Structural formatting for (possibly nested) sequence-like values.
///
/// Sequences of bare alphabet symbols render as their concatenated
/// characters (`"CGA"`); every other sequence renders as a comma-separated
/// bracketed list (`"[3,1,33,7]"`), recursing into nested containers.
pub trait Pretty {
    /// True for bare alphabet symbols: containers render such elements
    /// without separators or brackets. Scalars keep the default.
    const SYMBOLIC: bool = false;

    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

/// Wrap a value for `Display` through its [`Pretty`] impl.
pub fn pretty<T: Pretty + ?Sized>(value: &T) -> PrettyDisplay<'_, T> {
    PrettyDisplay(value)
}

/// `Display` adaptor returned by [`pretty`].
pub struct PrettyDisplay<'a, T: ?Sized>(&'a T);

impl<T: Pretty + ?Sized> Display for PrettyDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.pretty_fmt(f)
    }
}

/// Render any iterable of [`Pretty`] elements per the container rule:
/// symbols concatenate, everything else is bracketed and comma-separated.
pub fn pretty_seq<I>(f: &mut Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Pretty,
{
    if <I::Item as Pretty>::SYMBOLIC {
        elements.into_iter().try_for_each(|element| element.pretty_fmt(f))
    } else {
        write!(
            f,
            "[{}]",
            elements
                .into_iter()
                .format_with(",", |element, callback| callback(&pretty(&element)))
        )
    }
}

impl<T: Pretty + ?Sized> Pretty for &T {
    const SYMBOLIC: bool = T::SYMBOLIC;

    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).pretty_fmt(f)
    }
}

macro_rules! scalar_pretty {
    ($($kind:ty),+ $(,)?) => {$(
        impl Pretty for $kind {
            fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self)
            }
        }
    )+};
}

scalar_pretty!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, str,
    String,
);

macro_rules! symbol_pretty {
    ($($kind:ty),+ $(,)?) => {$(
        impl Pretty for $kind {
            const SYMBOLIC: bool = true;

            fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    )+};
}

symbol_pretty!(Dna, Rna, AminoAcid);

impl<T: Pretty> Pretty for [T] {
    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pretty_seq(f, self)
    }
}

impl<T: Pretty, const N: usize> Pretty for [T; N] {
    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pretty_seq(f, self)
    }
}

impl<T: Pretty> Pretty for Vec<T> {
    fn pretty_fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pretty_seq(f, self)
    }
}
