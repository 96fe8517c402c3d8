//! Energy accounting over decomposition pyramids.
//!
//! Energy is the sum of squared coefficients. Because the orthonormal
//! families conserve energy exactly (Parseval), these maps double as a
//! compaction diagnostic: a smooth signal should show almost all of
//! its energy in the approximation entry.

use std::collections::BTreeMap;

use crate::matrix::Matrix;
use crate::pyramid::{Pyramid1d, Pyramid2d};

fn sum_sq(values: &[f64]) -> f64 {
    values.iter().map(|x| x * x).sum()
}

/// Total energy of the coarsest approximation and of all detail
/// coefficients combined, keyed `"approx"` and `"detail"`.
///
/// Only the coarsest approximation counts; intermediate approximations
/// are redundant with the levels below them. An empty pyramid yields
/// an empty map.
pub fn energy_per_subband(pyramid: &Pyramid1d) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    let Some(coarsest) = pyramid.coarsest() else {
        return map;
    };
    let detail: f64 = pyramid.levels().map(|l| sum_sq(l.detail())).sum();
    map.insert("approx".to_string(), sum_sq(coarsest.approx()));
    map.insert("detail".to_string(), detail);
    map
}

/// Detail energy per level, keyed `"detail1"` (finest) through
/// `"detail{n}"`, plus the coarsest approximation as `"approx"`.
pub fn energy_by_level(pyramid: &Pyramid1d) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    let Some(coarsest) = pyramid.coarsest() else {
        return map;
    };
    map.insert("approx".to_string(), sum_sq(coarsest.approx()));
    for level in pyramid.levels() {
        map.insert(format!("detail{}", level.level()), sum_sq(level.detail()));
    }
    map
}

fn matrix_energy(m: &Matrix) -> f64 {
    sum_sq(m.as_slice())
}

/// Total energy per subband orientation across all levels, keyed
/// `"LL"` (coarsest only), `"LH"`, `"HL"`, and `"HH"`.
pub fn energy_per_subband2(pyramid: &Pyramid2d) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    let Some(coarsest) = pyramid.coarsest() else {
        return map;
    };
    let mut lh = 0.0;
    let mut hl = 0.0;
    let mut hh = 0.0;
    for level in pyramid.levels() {
        lh += matrix_energy(level.lh());
        hl += matrix_energy(level.hl());
        hh += matrix_energy(level.hh());
    }
    map.insert("LL".to_string(), matrix_energy(coarsest.ll()));
    map.insert("LH".to_string(), lh);
    map.insert("HL".to_string(), hl);
    map.insert("HH".to_string(), hh);
    map
}

/// Energy per subband and level, keyed `"LH1"`, `"HL1"`, `"HH1"`
/// (finest) through level `n`, plus the coarsest `"LL"`.
pub fn energy_by_level2(pyramid: &Pyramid2d) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    let Some(coarsest) = pyramid.coarsest() else {
        return map;
    };
    map.insert("LL".to_string(), matrix_energy(coarsest.ll()));
    for level in pyramid.levels() {
        let i = level.level();
        map.insert(format!("LH{i}"), matrix_energy(level.lh()));
        map.insert(format!("HL{i}"), matrix_energy(level.hl()));
        map.insert(format!("HH{i}"), matrix_energy(level.hh()));
    }
    map
}
