// src/noyau/solveur.rs
//
// Résolution exacte selon le degré :
// - 0 : c = 0 => tout réel ; sinon aucune solution
// - 1 : x = -c / b
// - 2 : Δ = b² - 4ac, branche choisie sur le signe EXACT de Δ
//
// Ne peut pas échouer : PolynomeReduit garantit b ≠ 0 (degré 1) et a ≠ 0 (degré 2).

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::degre::{Degre, PolynomeReduit};
use super::lecture::racine_rationnelle;

/// Racine réelle, exacte jusqu’à l’affichage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Racine {
    Rationnelle(BigRational),
    /// (p ± √d) / q, d > 0 et non carré d’un rationnel.
    Quadratique {
        p: BigRational,
        d: BigRational,
        q: BigRational,
        plus: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solutions {
    Aucune,
    TousLesReels,
    Unique(Racine),
    /// Δ = 0
    Double(Racine),
    /// Δ > 0 : (x1, x2) = ((-b + √Δ)/2a, (-b - √Δ)/2a)
    DeuxReelles(Racine, Racine),
    /// Δ < 0 : (reel ± i√radicande) / denominateur, jamais évalué en un seul complexe.
    DeuxComplexes {
        reel: BigRational,
        radicande: BigRational,
        denominateur: BigRational,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Présent seulement au degré 2.
    pub discriminant: Option<BigRational>,
    pub solutions: Solutions,
}

pub fn resoudre(p: &PolynomeReduit) -> Resolution {
    match p.degre {
        Degre::Constant => Resolution {
            discriminant: None,
            solutions: if p.c.is_zero() {
                Solutions::TousLesReels
            } else {
                Solutions::Aucune
            },
        },
        Degre::Lineaire => Resolution {
            discriminant: None,
            solutions: Solutions::Unique(Racine::Rationnelle(-&p.c / &p.b)),
        },
        Degre::Quadratique => resoudre_quadratique(&p.a, &p.b, &p.c),
    }
}

pub fn discriminant(a: &BigRational, b: &BigRational, c: &BigRational) -> BigRational {
    b * b - BigRational::from_integer(4.into()) * a * c
}

fn resoudre_quadratique(a: &BigRational, b: &BigRational, c: &BigRational) -> Resolution {
    let delta = discriminant(a, b, c);
    let moins_b = -b;
    let deux_a = a * BigRational::from_integer(2.into());

    let solutions = if delta.is_positive() {
        match racine_rationnelle(&delta) {
            Some(s) => Solutions::DeuxReelles(
                Racine::Rationnelle((&moins_b + &s) / &deux_a),
                Racine::Rationnelle((&moins_b - &s) / &deux_a),
            ),
            None => {
                let irrationnelle = |plus| Racine::Quadratique {
                    p: moins_b.clone(),
                    d: delta.clone(),
                    q: deux_a.clone(),
                    plus,
                };
                Solutions::DeuxReelles(irrationnelle(true), irrationnelle(false))
            }
        }
    } else if delta.is_zero() {
        Solutions::Double(Racine::Rationnelle(&moins_b / &deux_a))
    } else {
        Solutions::DeuxComplexes {
            reel: moins_b,
            radicande: -&delta,
            denominateur: deux_a,
        }
    };

    Resolution {
        discriminant: Some(delta),
        solutions,
    }
}
