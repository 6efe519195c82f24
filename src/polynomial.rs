//! Polynomial evaluation and reconstruction over GF(2^m).
//!
//! Splitting evaluates a degree-(T-1) polynomial, whose constant term is
//! the secret, at `x = 1..N` to produce `N` shares. Combining takes any
//! `T` of those shares and solves the resulting linear system for the
//! constant term.
//!
//! Both directions carry a legacy quirk, kept for wire compatibility: the
//! evaluation in [`horner`] adds an extra `x^T` term that isn't part of
//! the "real" polynomial (it neither helps nor hurts security) and
//! [`reconstruct`] subtracts it back out before solving.

use crate::error::Error;
use crate::field::{Field, FieldElement};

/// Evaluates `x^T + coeffs[T-1]*x^(T-1) + ... + coeffs[1]*x + coeffs[0]` at
/// `x`, where `T = coeffs.len()`.
///
/// The leading `x^T` term is the legacy addition described above; it is
/// folded in here by seeding the accumulator with `x` instead of zero.
pub fn horner(field: &Field, x: FieldElement, coeffs: &[FieldElement]) -> FieldElement {
    let n = coeffs.len();
    let mut y = x;
    for i in (1..n).rev() {
        y = field.add(&y, &coeffs[i]);
        y = field.mult(&y, &x);
    }
    field.add(&y, &coeffs[0])
}

/// Encodes a share index (1..=255) as a field element.
pub fn index_to_element(field: &Field, index: u8) -> FieldElement {
    let mut bytes = vec![0u8; field.byte_len()];
    *bytes.last_mut().unwrap() = index;
    FieldElement::from_be_bytes(&bytes)
}

fn one(field: &Field) -> FieldElement {
    index_to_element(field, 1)
}

/// Reconstructs the shared secret's field element from `T` `(index, y)`
/// pairs.
///
/// Builds the Vandermonde-like coefficient matrix implied by evaluating
/// the shared polynomial at each share's index, removes the legacy `x^T`
/// term from each share's value, then solves by Gaussian elimination with
/// **column** pivoting: rows correspond to descending powers of `x`,
/// columns correspond to shares, and a pivot search walks across columns
/// within the current row rather than down column rows. This mirrors the
/// historical reference tool's own matrix orientation and is required to
/// reproduce its exact behavior on degenerate inputs.
///
/// # Errors
/// Returns [`Error::LinearDependence`] if no nonzero pivot can be found
/// for some row, which happens when two supplied shares carry the same
/// index.
pub fn reconstruct(field: &Field, shares: &[(u8, FieldElement)]) -> Result<FieldElement, Error> {
    let t = shares.len();
    let mut a = Matrix::zero(t);
    let mut y: Vec<FieldElement> = vec![FieldElement::ZERO; t];

    for (col, &(index, share_y)) in shares.iter().enumerate() {
        let x = index_to_element(field, index);
        *a.at_mut(t - 1, col) = one(field);
        for row in (0..t - 1).rev() {
            let below = *a.at(row + 1, col);
            *a.at_mut(row, col) = field.mult(&below, &x);
        }
        let legacy_term = field.mult(&x, a.at(0, col));
        y[col] = field.add(&share_y, &legacy_term);
    }

    restore_secret(field, &mut a, &mut y)?;
    Ok(y[t - 1])
}

/// Square matrix of field elements, stored flat and row-major.
///
/// The *second* index is the share axis: it's the one columns get swapped
/// on during pivoting, mirroring the historical reference tool's own
/// matrix orientation (rows are descending powers of `x`, columns are
/// shares).
struct Matrix {
    t: usize,
    cells: Vec<FieldElement>,
}

impl Matrix {
    fn zero(t: usize) -> Self {
        Self { t, cells: vec![FieldElement::ZERO; t * t] }
    }

    fn at(&self, row: usize, col: usize) -> &FieldElement {
        &self.cells[row * self.t + col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut FieldElement {
        &mut self.cells[row * self.t + col]
    }

    fn swap_cols(&mut self, from_row: usize, a: usize, b: usize) {
        for row in from_row..self.t {
            self.cells.swap(row * self.t + a, row * self.t + b);
        }
    }
}

/// Column-pivoted Gaussian elimination, in place on `a` and `y`.
fn restore_secret(field: &Field, a: &mut Matrix, y: &mut [FieldElement]) -> Result<(), Error> {
    let t = a.t;

    for i in 0..t {
        if *a.at(i, i) == FieldElement::ZERO {
            let pivot_col = (i + 1..t).find(|&j| *a.at(i, j) != FieldElement::ZERO);
            let j = pivot_col.ok_or(Error::LinearDependence)?;
            a.swap_cols(i, i, j);
            y.swap(i, j);
        }

        for j in (i + 1)..t {
            if *a.at(i, j) == FieldElement::ZERO {
                continue;
            }
            for k in (i + 1)..t {
                let h = field.mult(a.at(k, i), a.at(i, j));
                let scaled = field.mult(a.at(k, j), a.at(i, i));
                *a.at_mut(k, j) = field.add(&scaled, &h);
            }
            let h = field.mult(&y[i], a.at(i, j));
            y[j] = field.mult(&y[j], a.at(i, i));
            y[j] = field.add(&y[j], &h);
        }
    }

    let inv = field.invert(a.at(t - 1, t - 1))?;
    y[t - 1] = field.mult(&y[t - 1], &inv);
    Ok(())
}
