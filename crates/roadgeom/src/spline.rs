//! Piecewise cubic profiles over arc-length (lane offset, superelevation,
//! elevation, lane borders).
//!
//! Coefficients come from the excluded parser; this module only evaluates.
//! Each piece uses the local parameter `ds = s - s0`:
//! `a + b·ds + c·ds² + d·ds³`.

/// Cubic polynomial in the local parameter `ds`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Poly3 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Poly3 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
    #[inline]
    pub fn constant(a: f64) -> Self {
        Self::new(a, 0.0, 0.0, 0.0)
    }
    #[inline]
    pub fn get(&self, ds: f64) -> f64 {
        self.a + ds * (self.b + ds * (self.c + ds * self.d))
    }
    #[inline]
    pub fn get_grad(&self, ds: f64) -> f64 {
        self.b + ds * (2.0 * self.c + ds * 3.0 * self.d)
    }
}

/// Piecewise cubic spline keyed by start arc-length.
///
/// Invariants:
/// - Pieces are sorted by `s0`; inserting an existing `s0` replaces that piece.
/// - An empty spline evaluates to 0 everywhere.
/// - Below the first `s0` the first piece is extended (extrapolation);
///   above the last `s0` the last piece continues.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CubicSpline {
    pieces: Vec<(f64, Poly3)>,
}

impl CubicSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single polynomial valid from `s0` on.
    pub fn from_poly(s0: f64, poly: Poly3) -> Self {
        Self {
            pieces: vec![(s0, poly)],
        }
    }

    /// Insert a piece (binary search by `s0`, replace on equal key).
    pub fn insert(&mut self, s0: f64, poly: Poly3) {
        let pos = self.pieces.partition_point(|(k, _)| *k < s0);
        match self.pieces.get_mut(pos) {
            Some(slot) if slot.0 == s0 => slot.1 = poly,
            _ => self.pieces.insert(pos, (s0, poly)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }
    #[inline]
    pub fn pieces(&self) -> &[(f64, Poly3)] {
        &self.pieces
    }

    fn piece_at(&self, s: f64) -> Option<&(f64, Poly3)> {
        let pos = self.pieces.partition_point(|(k, _)| *k <= s);
        self.pieces.get(pos.saturating_sub(1))
    }

    /// Value at `s`.
    pub fn get(&self, s: f64) -> f64 {
        self.piece_at(s).map_or(0.0, |(s0, p)| p.get(s - s0))
    }

    /// Derivative `d/ds` at `s`.
    pub fn get_grad(&self, s: f64) -> f64 {
        self.piece_at(s).map_or(0.0, |(s0, p)| p.get_grad(s - s0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spline_is_zero() {
        let sp = CubicSpline::new();
        assert_eq!(sp.get(3.0), 0.0);
        assert_eq!(sp.get_grad(3.0), 0.0);
    }

    #[test]
    fn pieces_use_local_parameter() {
        let mut sp = CubicSpline::new();
        sp.insert(10.0, Poly3::new(1.0, 2.0, 0.0, 0.0));
        sp.insert(0.0, Poly3::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(sp.len(), 2);
        // first piece: ds² on [0, 10)
        assert!((sp.get(3.0) - 9.0).abs() < 1e-12);
        assert!((sp.get_grad(3.0) - 6.0).abs() < 1e-12);
        // second piece: 1 + 2·ds from 10 on
        assert!((sp.get(10.0) - 1.0).abs() < 1e-12);
        assert!((sp.get(12.5) - 6.0).abs() < 1e-12);
        assert!((sp.get_grad(12.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_before_first_piece() {
        let sp = CubicSpline::from_poly(5.0, Poly3::new(1.0, 1.0, 0.0, 0.0));
        assert!((sp.get(4.0) - 0.0).abs() < 1e-12);
        assert!((sp.get(0.0) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn insert_same_key_replaces() {
        let mut sp = CubicSpline::from_poly(0.0, Poly3::constant(1.0));
        sp.insert(0.0, Poly3::constant(2.0));
        assert_eq!(sp.len(), 1);
        assert_eq!(sp.get(7.0), 2.0);
    }

    #[test]
    fn cubic_term_and_gradient() {
        let p = Poly3::new(1.0, -1.0, 0.5, 0.25);
        let ds: f64 = 2.0;
        let expected = 1.0 - ds + 0.5 * ds * ds + 0.25 * ds.powi(3);
        assert!((p.get(ds) - expected).abs() < 1e-12);
        let grad = -1.0 + ds + 0.75 * ds * ds;
        assert!((p.get_grad(ds) - grad).abs() < 1e-12);
    }
}
