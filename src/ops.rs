// Copyright 2025 Cowboy AI, LLC.

//! Operator overloads
//!
//! `a + b` zips, `a * b` takes the product and `a * n` / `n * a` repeat.
//! Composition can fail, so `+` and `*` between cyclers yield a
//! [`CyclerResult`]; repetition cannot fail and yields a cycler directly.
//! In-place forms are [`Cycler::augment_pairwise`] and
//! [`Cycler::augment_product`].

use std::ops::{Add, Mul};

use crate::cycler::{CycleOp, Cycler};
use crate::errors::CyclerResult;

impl<V: Clone> Add<&Cycler<V>> for &Cycler<V> {
    type Output = CyclerResult<Cycler<V>>;

    fn add(self, rhs: &Cycler<V>) -> Self::Output {
        self.combine_pairwise(rhs)
    }
}

impl<V> Add for Cycler<V> {
    type Output = CyclerResult<Cycler<V>>;

    fn add(self, rhs: Cycler<V>) -> Self::Output {
        Cycler::compose(self, rhs, CycleOp::Pairwise)
    }
}

impl<V: Clone> Mul<&Cycler<V>> for &Cycler<V> {
    type Output = CyclerResult<Cycler<V>>;

    fn mul(self, rhs: &Cycler<V>) -> Self::Output {
        self.combine_product(rhs)
    }
}

impl<V> Mul for Cycler<V> {
    type Output = CyclerResult<Cycler<V>>;

    fn mul(self, rhs: Cycler<V>) -> Self::Output {
        Cycler::compose(self, rhs, CycleOp::Product)
    }
}

impl<V: Clone> Mul<usize> for &Cycler<V> {
    type Output = Cycler<V>;

    fn mul(self, times: usize) -> Self::Output {
        self.repeat(times)
    }
}

impl<V: Clone> Mul<usize> for Cycler<V> {
    type Output = Cycler<V>;

    fn mul(self, times: usize) -> Self::Output {
        self.repeat(times)
    }
}

impl<V: Clone> Mul<&Cycler<V>> for usize {
    type Output = Cycler<V>;

    fn mul(self, cycler: &Cycler<V>) -> Self::Output {
        cycler.repeat(self)
    }
}

impl<V: Clone> Mul<Cycler<V>> for usize {
    type Output = Cycler<V>;

    fn mul(self, cycler: Cycler<V>) -> Self::Output {
        cycler.repeat(self)
    }
}
