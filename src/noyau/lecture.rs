// src/noyau/lecture.rs
//
// Lecture décimale des valeurs exactes (entiers “scalés” ×10^digits).
// Rien ici ne décide d’une branche de résolution : on ne fait que lire.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Chiffres de garde pour les racines irrationnelles (absorbe les troncatures).
const GARDE: usize = 10;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/* ------------------------ Arrondis ------------------------ */

/// num/den arrondi au plus proche, moitié loin de zéro. den ≠ 0.
fn arrondir_div(num: BigInt, den: &BigInt) -> BigInt {
    let q = &num / den;
    let reste = &num - &q * den;

    if reste.is_zero() || reste.abs() * 2u32 < den.abs() {
        return q;
    }
    if num.is_negative() != den.is_negative() {
        q - 1u32
    } else {
        q + 1u32
    }
}

/// r -> entier “scalé” = round(r * 10^digits)
pub fn rational_round_scaled(r: &BigRational, digits: usize) -> BigInt {
    arrondir_div(r.numer() * pow10(digits), r.denom())
}

/* ------------------------ Racines carrées ------------------------ */

/// √r exacte si r est le carré d’un rationnel.
/// BigRational est toujours réduit : il suffit que numérateur ET dénominateur soient des carrés.
pub fn racine_rationnelle(r: &BigRational) -> Option<BigRational> {
    if r.is_negative() {
        return None;
    }
    let n = r.numer().sqrt();
    let d = r.denom().sqrt();
    if &n * &n == *r.numer() && &d * &d == *r.denom() {
        Some(BigRational::new(n, d))
    } else {
        None
    }
}

/// (p ± √d) / q en entier scalé (×10^digits), arrondi.
/// d doit être > 0 ; q ≠ 0.
pub fn quadratique_scaled(
    p: &BigRational,
    d: &BigRational,
    q: &BigRational,
    plus: bool,
    digits: usize,
) -> BigInt {
    let k = digits + GARDE;

    // floor(√(n/m) · 10^k) = isqrt(floor(n · 10^2k / m))
    let racine = ((d.numer() * pow10(2 * k)) / d.denom()).sqrt();
    let p_k = rational_round_scaled(p, k);
    let num = if plus { p_k + racine } else { p_k - racine };

    // division par q = qn/qd
    let valeur_k = arrondir_div(num * q.denom(), q.numer());
    arrondir_div(valeur_k, &pow10(GARDE))
}
