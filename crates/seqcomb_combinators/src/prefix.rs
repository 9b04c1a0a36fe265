//! Position-wise comparison of two sequences.
//!
//! [`common_prefix`] pairs elements with zip semantics and keeps the leading
//! run of equal pairs. [`disparate_suffix`] pairs elements with zip-longest
//! semantics, padding the shorter side with [`Slot::Missing`], and yields
//! everything from the first unequal pair on.
//!
//! ```
//! use seqcomb_combinators::{Slot, common_prefix, disparate_suffix};
//!
//! let prefix: Vec<char> = common_prefix("AB".chars(), "A".chars()).collect();
//! assert_eq!(prefix, vec!['A']);
//!
//! let suffix: Vec<_> = disparate_suffix("AB".chars(), "A".chars()).collect();
//! assert_eq!(suffix, vec![(Slot::Present('B'), Slot::Missing)]);
//! ```

use std::iter::{Fuse, FusedIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of a [`disparate_suffix`] pair.
///
/// `Missing` marks a position past the end of the shorter sequence. It is a
/// separate case, so an element that is itself "empty" (`None`, nil) is
/// still `Present`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot<T> {
    /// An element of the sequence.
    Present(T),
    /// The sequence ended before this position.
    Missing,
}

impl<T> Slot<T> {
    /// Returns true if the sequence had ended.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true if an element is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the element, if present.
    #[must_use]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Present(item) => Some(item),
            Self::Missing => None,
        }
    }

    /// Converts from `&Slot<T>` to `Slot<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Present(item) => Slot::Present(item),
            Self::Missing => Slot::Missing,
        }
    }

    /// Converts into an `Option`, mapping `Missing` to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(item) => Some(item),
            Self::Missing => None,
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(item: Option<T>) -> Self {
        item.map_or(Self::Missing, Self::Present)
    }
}

/// Yields the leading elements on which `xs` and `ys` agree.
///
/// Stops at the first position where the elements differ or either side
/// runs out. The elements yielded are taken from `xs`.
pub fn common_prefix<A, B>(xs: A, ys: B) -> CommonPrefix<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    CommonPrefix {
        xs: xs.into_iter(),
        ys: ys.into_iter(),
        done: false,
    }
}

/// Iterator returned by [`common_prefix`].
#[derive(Clone, Debug)]
pub struct CommonPrefix<A, B> {
    xs: A,
    ys: B,
    done: bool,
}

impl<A, B> Iterator for CommonPrefix<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: PartialEq<B::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pair = match self.xs.next() {
            Some(x) => self.ys.next().map(|y| (x, y)),
            None => None,
        };
        match pair {
            Some((x, y)) if x == y => Some(x),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let upper = match (self.xs.size_hint().1, self.ys.size_hint().1) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (0, upper)
    }
}

impl<A, B> FusedIterator for CommonPrefix<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: PartialEq<B::Item>,
{
}

/// Yields position-wise pairs from the first position where `xs` and `ys`
/// differ through the end of the longer one.
///
/// Running out on one side while the other continues counts as a
/// difference; the exhausted side is reported as [`Slot::Missing`].
pub fn disparate_suffix<A, B>(xs: A, ys: B) -> DisparateSuffix<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    DisparateSuffix {
        xs: xs.into_iter().fuse(),
        ys: ys.into_iter().fuse(),
        diverged: false,
    }
}

/// Iterator returned by [`disparate_suffix`].
#[derive(Clone, Debug)]
pub struct DisparateSuffix<A, B> {
    xs: Fuse<A>,
    ys: Fuse<B>,
    diverged: bool,
}

impl<A, B> Iterator for DisparateSuffix<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: PartialEq<B::Item>,
{
    type Item = (Slot<A::Item>, Slot<B::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = match (self.xs.next(), self.ys.next()) {
                (None, None) => return None,
                (x, y) => (Slot::from(x), Slot::from(y)),
            };
            if self.diverged {
                return Some((x, y));
            }
            if let (Slot::Present(a), Slot::Present(b)) = (&x, &y) {
                if a == b {
                    continue;
                }
            }
            self.diverged = true;
            return Some((x, y));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (x_lo, x_hi) = self.xs.size_hint();
        let (y_lo, y_hi) = self.ys.size_hint();
        let upper = match (x_hi, y_hi) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        if self.diverged {
            (x_lo.max(y_lo), upper)
        } else {
            // Equal leading pairs are skipped, but a length difference
            // guarantees at least that many trailing pairs.
            let x_excess = x_lo.saturating_sub(y_hi.unwrap_or(usize::MAX));
            let y_excess = y_lo.saturating_sub(x_hi.unwrap_or(usize::MAX));
            (x_excess.max(y_excess), upper)
        }
    }
}

impl<A, B> FusedIterator for DisparateSuffix<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: PartialEq<B::Item>,
{
}
