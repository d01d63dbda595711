//! Noyau — évaluation (pipeline réel)
//!
//! jetons -> validation -> termes -> carte -> degré -> polynôme réduit -> solutions
//!
//! Deux temps, pour que l’appelant puisse afficher la forme réduite et le degré
//! AVANT le refus d’un degré > 2 :
//! - `analyser`         : jusqu’à la carte (+ degré effectif, sans le borner)
//! - `resoudre_analyse` : polynôme réduit (borne du degré) puis résolution

use super::degre::{degre_effectif, PolynomeReduit};
use super::erreur::ErreurEquation;
use super::format::format_forme_reduite;
use super::jetons::{format_jetons, tokenize, valider};
use super::reduction::{format_carte, reduire, CarteCoefficients};
use super::solveur::{resoudre, Resolution};
use super::termes::{format_termes, grouper};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub termes: String,
    pub carte: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct Analyse {
    pub carte: CarteCoefficients,
    pub forme_reduite: String,
    pub degre: u32,
    pub demarche: DemarcheNoyau,
}

pub fn analyser(entree: &str) -> Result<Analyse, ErreurEquation> {
    // 1) Jetons + validation
    let jetons = tokenize(entree)?;
    valider(&jetons)?;

    // 2) Termes signés (membre droit soustrait)
    let termes = grouper(&jetons)?;

    // 3) Carte exposant ↦ coefficient
    let carte = reduire(&termes)?;

    // 4) Degré effectif (premier contrôle : affiché, pas encore borné)
    let degre = degre_effectif(&carte);

    let demarche = DemarcheNoyau {
        jetons: format_jetons(&jetons),
        termes: format_termes(&termes),
        carte: format_carte(&carte),
        note: note_branche(degre),
    };

    Ok(Analyse {
        forme_reduite: format_forme_reduite(&carte),
        carte,
        degre,
        demarche,
    })
}

/// Branche de résolution retenue, d’après le degré effectif.
fn note_branche(degre: u32) -> String {
    match degre {
        0 => "degree 0: constant equation, no X left after reduction".into(),
        1 => "degree 1: x = -c / b".into(),
        2 => "degree 2: sign of b^2 - 4ac".into(),
        d => format!("degree {d}: beyond 2, not solved"),
    }
}

/// Second contrôle du degré (même `degre_effectif`), puis résolution.
pub fn resoudre_analyse(analyse: &Analyse) -> Result<Resolution, ErreurEquation> {
    let polynome = PolynomeReduit::try_from(&analyse.carte)?;
    Ok(resoudre(&polynome))
}

/// Tout le pipeline d’un coup (tests).
#[cfg(test)]
pub fn resoudre_equation(entree: &str) -> Result<(Analyse, Resolution), ErreurEquation> {
    let analyse = analyser(entree)?;
    let resolution = resoudre_analyse(&analyse)?;
    Ok((analyse, resolution))
}
