// src/noyau/degre.rs
//
// Degré effectif = plus grand exposant de coefficient NON nul
// (pas le plus grand exposant écrit : "X^3 - X^3" ne compte pas).

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurEquation;
use super::reduction::CarteCoefficients;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degre {
    Constant,
    Lineaire,
    Quadratique,
}

/// Polynôme réduit c + b·X + a·X² = 0, degré ≤ 2 garanti.
/// Lineaire => b ≠ 0 ; Quadratique => a ≠ 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomeReduit {
    pub c: BigRational,
    pub b: BigRational,
    pub a: BigRational,
    pub degre: Degre,
}

/// 0 pour le polynôme nul.
pub fn degre_effectif(carte: &CarteCoefficients) -> u32 {
    carte
        .iter()
        .rev()
        .find(|(_, c)| !c.is_zero())
        .map_or(0, |(e, _)| e)
}

impl TryFrom<&CarteCoefficients> for PolynomeReduit {
    type Error = ErreurEquation;

    fn try_from(carte: &CarteCoefficients) -> Result<Self, Self::Error> {
        let degre = match degre_effectif(carte) {
            0 => Degre::Constant,
            1 => Degre::Lineaire,
            2 => Degre::Quadratique,
            d => return Err(ErreurEquation::DegreTropEleve(d)),
        };

        Ok(Self {
            c: carte.coefficient(0),
            b: carte.coefficient(1),
            a: carte.coefficient(2),
            degre,
        })
    }
}
