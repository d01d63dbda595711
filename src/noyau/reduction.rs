// src/noyau/reduction.rs
//
// Réduction : termes -> carte exposant ↦ coefficient exact.
// La carte appartient à cette étape ; elle est ensuite déplacée (move) vers l’aval.

use num_rational::BigRational;
use num_traits::{One, Zero};

use std::collections::BTreeMap;

use super::erreur::ErreurEquation;
use super::format::format_exact_ou_fraction;
use super::jetons::Jeton;
use super::termes::Terme;

/// Exposant ↦ coefficient, trié par exposant croissant.
/// Invariant : 0, 1, 2 toujours présents (éventuellement nuls).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarteCoefficients(BTreeMap<u32, BigRational>);

impl Default for CarteCoefficients {
    fn default() -> Self {
        Self((0..=2).map(|e| (e, BigRational::zero())).collect())
    }
}

impl CarteCoefficients {
    pub fn ajouter(&mut self, exposant: u32, valeur: BigRational) {
        *self.0.entry(exposant).or_insert_with(BigRational::zero) += valeur;
    }

    /// Coefficient de X^exposant (0 si absent).
    pub fn coefficient(&self, exposant: u32) -> BigRational {
        self.0.get(&exposant).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Toutes les entrées, exposant croissant (zéros compris).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, &BigRational)> + '_ {
        self.0.iter().map(|(e, c)| (*e, c))
    }

    /// Entrées non nulles, exposant croissant.
    pub fn non_nuls(&self) -> Vec<(u32, BigRational)> {
        self.iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(e, c)| (e, c.clone()))
            .collect()
    }
}

/// Valeur d’un terme : (exposant, produit des littéraux).
/// Aucun littéral => 1 ; aucun X => exposant 0 ; deux X => erreur.
pub fn evaluer_terme(terme: &Terme) -> Result<(u32, BigRational), ErreurEquation> {
    let mut produit = BigRational::one();
    let mut variable: Option<u32> = None;

    for jeton in &terme.jetons {
        match jeton {
            Jeton::Nombre(r) => produit *= r.clone(),
            Jeton::Puissance(n) => {
                if variable.is_some() {
                    return Err(ErreurEquation::VariablesMultiples);
                }
                variable = Some(*n);
            }
            // grouper() ne laisse passer aucun opérateur dans un terme
            Jeton::Plus | Jeton::Moins | Jeton::Egal | Jeton::Fois => {
                return Err(ErreurEquation::EquationMalformee(format!(
                    "operator `{jeton}` inside a term"
                )));
            }
        }
    }

    Ok((variable.unwrap_or(0), produit))
}

pub fn reduire(termes: &[Terme]) -> Result<CarteCoefficients, ErreurEquation> {
    let mut carte = CarteCoefficients::default();
    for terme in termes {
        let (exposant, valeur) = evaluer_terme(terme)?;
        carte.ajouter(exposant, valeur);
    }
    Ok(carte)
}

/// Format utilitaire (démarche) : {0: 4, 1: 4, 2: -9.3}
pub fn format_carte(carte: &CarteCoefficients) -> String {
    let entrees: Vec<String> = carte
        .iter()
        .map(|(e, c)| format!("{e}: {}", format_exact_ou_fraction(c)))
        .collect();
    format!("{{{}}}", entrees.join(", "))
}
