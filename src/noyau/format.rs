// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::lecture::{pow10, quadratique_scaled, rational_round_scaled, scaled_to_decimal};
use super::reduction::CarteCoefficients;
use super::solveur::Racine;

/* ------------------------ Helpers rationnels ------------------------ */

fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Nombre de chiffres après la virgule d’un texte décimal.
fn decimales(s: &str) -> usize {
    s.split_once('.').map_or(0, |(_, f)| f.len())
}

/// "2.500" -> "2.5" ; "3.000" -> "3" ; les entiers ne bougent pas.
fn sans_zeros_inutiles(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/* ------------------------ Décimal EXACT ------------------------ */

/// Écriture décimale exacte si elle existe (dénominateur = 2^i · 5^j).
/// Toujours le cas pour des coefficients lus depuis des littéraux décimaux.
pub fn format_exact(r: &BigRational) -> Option<String> {
    let mut d = r.denom().clone();

    let deux = d.trailing_zeros().unwrap_or(0) as usize;
    d >>= deux;

    let cinq_big = BigInt::from(5);
    let mut cinq = 0usize;
    while (&d % &cinq_big).is_zero() {
        d /= &cinq_big;
        cinq += 1;
    }
    if !d.is_one() {
        return None;
    }

    let k = deux.max(cinq);
    let scaled = (r.numer() * pow10(k)) / r.denom();
    Some(scaled_to_decimal(scaled, k))
}

/// Exact décimal, sinon fraction irréductible (démarche, jetons).
pub fn format_exact_ou_fraction(r: &BigRational) -> String {
    format_exact(r).unwrap_or_else(|| format_rat_pretty(r))
}

/// Lecture à `digits` chiffres : exacte si elle tient, sinon arrondie
/// (moitié loin de zéro), zéros finaux retirés.
pub fn format_nombre(r: &BigRational, digits: usize) -> String {
    if let Some(s) = format_exact(r) {
        if decimales(&s) <= digits {
            return s;
        }
    }
    sans_zeros_inutiles(scaled_to_decimal(rational_round_scaled(r, digits), digits))
}

/* ------------------------ Forme réduite ------------------------ */

/// "9.3 * X^2 - 4 * X^1 - 5 * X^0 = 0" : exposants décroissants, zéros omis.
/// Les coefficients sont écrits exactement : relire ce texte redonne la même carte.
pub fn format_forme_reduite(carte: &CarteCoefficients) -> String {
    let mut out = String::new();

    for (e, c) in carte.non_nuls().into_iter().rev() {
        if out.is_empty() {
            if c.is_negative() {
                out.push('-');
            }
        } else if c.is_negative() {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&format!("{} * X^{e}", format_exact_ou_fraction(&c.abs())));
    }

    if out.is_empty() {
        out.push('0');
    }
    out.push_str(" = 0");
    out
}

/* ------------------------ Racines ------------------------ */

/// Racine réelle : lecture décimale ; une rationnelle qui ne tient pas
/// exactement dans `digits` est suivie de sa fraction, ex: "0.333333 (1/3)".
pub fn format_racine(racine: &Racine, digits: usize) -> String {
    match racine {
        Racine::Rationnelle(r) => {
            let lecture = format_nombre(r, digits);
            let exacte = format_exact(r).is_some_and(|s| decimales(&s) <= digits);
            if exacte {
                lecture
            } else {
                format!("{lecture} ({})", format_rat_pretty(r))
            }
        }
        Racine::Quadratique { p, d, q, plus } => sans_zeros_inutiles(scaled_to_decimal(
            quadratique_scaled(p, d, q, *plus, digits),
            digits,
        )),
    }
}

/// Racine complexe, gardée symbolique : (reel ± i√radicande) / denominateur.
/// Aucun arrondi : les trois parties sont écrites exactement.
pub fn format_complexe(
    reel: &BigRational,
    radicande: &BigRational,
    denominateur: &BigRational,
    plus: bool,
) -> String {
    let signe = if plus { '+' } else { '-' };
    format!(
        "({} {signe} i√{}) / {}",
        format_exact_ou_fraction(reel),
        format_exact_ou_fraction(radicande),
        format_exact_ou_fraction(denominateur)
    )
}
