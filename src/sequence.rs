use ndarray::Array1;
use num::Zero;
use serde::{Deserialize, Serialize};

// A field that may be given either as a bare value or as an explicit sequence.
// Every "number or list" input of the transmitter goes through one of the
// expansions below so the broadcasting rules live in a single place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrSeq<T> {
    Scalar(T),
    Seq(Vec<T>),
}

impl<T: Copy> ScalarOrSeq<T> {
    pub fn len(&self) -> Option<usize> {
        match self {
            ScalarOrSeq::Scalar(_) => None,
            ScalarOrSeq::Seq(v) => Some(v.len()),
        }
    }

    // Scalar `x` becomes `[x, x]`, a flat two-point profile.
    pub fn expand_pair(&self) -> Array1<T> {
        match self {
            ScalarOrSeq::Scalar(x) => Array1::from(vec![*x, *x]),
            ScalarOrSeq::Seq(v) => Array1::from(v.clone()),
        }
    }

    // Scalar `x` becomes `n` copies of `x`. Sequences pass through untouched,
    // their length is checked by the caller.
    pub fn broadcast(&self, n: usize) -> Array1<T> {
        match self {
            ScalarOrSeq::Scalar(x) => Array1::from_elem(n, *x),
            ScalarOrSeq::Seq(v) => Array1::from(v.clone()),
        }
    }

    // Same as `ones_like`/`zeros_like`: a fill value shaped like this input.
    pub fn fill_like(&self, value: T) -> ScalarOrSeq<T> {
        match self {
            ScalarOrSeq::Scalar(_) => ScalarOrSeq::Scalar(value),
            ScalarOrSeq::Seq(v) => ScalarOrSeq::Seq(vec![value; v.len()]),
        }
    }
}

impl<T: Copy + Zero> ScalarOrSeq<T> {
    // Scalar `x` becomes the span `[0, x]`.
    pub fn expand_span(&self) -> Array1<T> {
        match self {
            ScalarOrSeq::Scalar(x) => Array1::from(vec![T::zero(), *x]),
            ScalarOrSeq::Seq(v) => Array1::from(v.clone()),
        }
    }
}

impl<T> From<T> for ScalarOrSeq<T> {
    fn from(x: T) -> Self {
        ScalarOrSeq::Scalar(x)
    }
}

impl<T> From<Vec<T>> for ScalarOrSeq<T> {
    fn from(v: Vec<T>) -> Self {
        ScalarOrSeq::Seq(v)
    }
}

impl<T: Copy> From<&[T]> for ScalarOrSeq<T> {
    fn from(v: &[T]) -> Self {
        ScalarOrSeq::Seq(v.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for ScalarOrSeq<T> {
    fn from(v: [T; N]) -> Self {
        ScalarOrSeq::Seq(Vec::from(v))
    }
}

impl<T: Copy> From<&Array1<T>> for ScalarOrSeq<T> {
    fn from(v: &Array1<T>) -> Self {
        ScalarOrSeq::Seq(v.to_vec())
    }
}
