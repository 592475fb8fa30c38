use std::ops::{Add, AddAssign, Index};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Read access to a vector of per-dimension quantities, either stored
/// ([`Amount`]) or computed lazily ([`AmountSum`]).
///
/// Dimensions past [`AmountExpression::len`] read as zero.
pub trait AmountExpression: Sized {
    fn get(&self, dimension: usize) -> i64;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0 || (0..self.len()).all(|dimension| self.get(dimension) == 0)
    }

    /// Returns the first dimension in which `self` exceeds `capacity`.
    fn first_exceeded_dimension(&self, capacity: &Amount) -> Option<usize> {
        (0..self.len()).find(|&dimension| self.get(dimension) > capacity.get(dimension))
    }

    fn fits_within(&self, capacity: &Amount) -> bool {
        self.first_exceeded_dimension(capacity).is_none()
    }
}

type Vector = SmallVec<[i64; 2]>;

impl<T: AmountExpression> AmountExpression for &T {
    #[inline]
    fn get(&self, dimension: usize) -> i64 {
        (**self).get(dimension)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn first_exceeded_dimension(&self, capacity: &Amount) -> Option<usize> {
        (**self).first_exceeded_dimension(capacity)
    }
}

/// Capacity limit or size demand, one integer per capacity dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amount(Vector);

impl Amount {
    pub const EMPTY: Amount = Amount(Vector::new_const());

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        let mut vec = SmallVec::with_capacity(dimensions);
        vec.resize(dimensions, 0);
        Amount(vec)
    }

    pub fn from_vec(vec: Vec<i64>) -> Self {
        Amount(SmallVec::from_vec(vec))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    pub fn update(&mut self, other: &Amount) {
        self.0.clone_from(&other.0);
    }

    pub fn update_expr(&mut self, other: impl AmountExpression) {
        let len = other.len();
        self.0.clear();
        self.0.extend((0..len).map(|dimension| other.get(dimension)));
    }

    /// Index of the first negative dimension, if any.
    pub fn first_negative_dimension(&self) -> Option<usize> {
        self.0.iter().position(|&value| value < 0)
    }

    /// Number of dimensions up to and including the last non-zero one.
    pub fn used_dimensions(&self) -> usize {
        self.0
            .iter()
            .rposition(|&value| value != 0)
            .map_or(0, |index| index + 1)
    }
}

impl AmountExpression for Amount {
    #[inline]
    fn get(&self, dimension: usize) -> i64 {
        self.0.get(dimension).copied().unwrap_or(0)
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for Amount {
    type Output = i64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<E: AmountExpression> AddAssign<E> for Amount {
    fn add_assign(&mut self, rhs: E) {
        if self.0.len() < rhs.len() {
            self.0.resize(rhs.len(), 0);
        }

        for (dimension, value) in self.0.iter_mut().enumerate() {
            *value = value.saturating_add(rhs.get(dimension));
        }
    }
}

impl<A: AmountExpression> PartialEq<A> for Amount {
    fn eq(&self, other: &A) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|dimension| self.get(dimension) == other.get(dimension))
    }
}

impl Eq for Amount {}

/// Lazy element-wise sum of two amount expressions.
#[derive(Debug, Clone)]
pub struct AmountSum<L, R> {
    pub lhs: L,
    pub rhs: R,
}

impl<L, R> AmountExpression for AmountSum<L, R>
where
    L: AmountExpression,
    R: AmountExpression,
{
    /// Saturates instead of overflowing; a saturated load never fits a
    /// capacity it would have overflowed.
    #[inline]
    fn get(&self, dimension: usize) -> i64 {
        self.lhs.get(dimension).saturating_add(self.rhs.get(dimension))
    }

    fn len(&self) -> usize {
        self.lhs.len().max(self.rhs.len())
    }

    /// A sum overflowing `i64` exceeds any capacity.
    fn first_exceeded_dimension(&self, capacity: &Amount) -> Option<usize> {
        (0..self.len()).find(|&dimension| {
            self.lhs
                .get(dimension)
                .checked_add(self.rhs.get(dimension))
                .is_none_or(|sum| sum > capacity.get(dimension))
        })
    }
}

impl<'a, 'b> Add<&'b Amount> for &'a Amount {
    type Output = AmountSum<&'a Amount, &'b Amount>;

    fn add(self, rhs: &'b Amount) -> Self::Output {
        AmountSum { lhs: self, rhs }
    }
}

impl<'b, L, R> Add<&'b Amount> for AmountSum<L, R>
where
    L: AmountExpression,
    R: AmountExpression,
{
    type Output = AmountSum<AmountSum<L, R>, &'b Amount>;

    fn add(self, rhs: &'b Amount) -> Self::Output {
        AmountSum { lhs: self, rhs }
    }
}

impl<L, R> From<AmountSum<L, R>> for Amount
where
    L: AmountExpression,
    R: AmountExpression,
{
    fn from(sum: AmountSum<L, R>) -> Self {
        let mut amount = Amount::empty();
        amount.update_expr(sum);
        amount
    }
}
