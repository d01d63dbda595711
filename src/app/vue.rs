// src/app/vue.rs
//
// Vue texte : transforme le résultat du noyau en lignes de rapport.
// ---------------------------
// Contrat de sortie :
// - "Reduced form: …" et "Polynomial degree: N" sont émis dès l’analyse,
//   AVANT le refus éventuel d’un degré > 2
// - après une erreur, plus aucune ligne
// - l’erreur elle-même est rendue par main.rs ("Error: …" sur stderr)

use num_rational::BigRational;

use crate::noyau::eval::DemarcheNoyau;
use crate::noyau::format::{format_complexe, format_exact_ou_fraction, format_racine};
use crate::noyau::solveur::Solutions;
use crate::noyau::{analyser, resoudre_analyse, ErreurEquation};

use super::etat::Reglages;

#[derive(Clone, Debug, Default)]
pub struct Sortie {
    /// Lignes pour la sortie standard, dans l’ordre.
    pub lignes: Vec<String>,
    pub erreur: Option<ErreurEquation>,
}

pub fn executer(entree: &str, reglages: &Reglages) -> Sortie {
    let mut lignes = Vec::new();
    let erreur = rapport(entree, reglages, &mut lignes).err();
    Sortie { lignes, erreur }
}

fn rapport(
    entree: &str,
    reglages: &Reglages,
    lignes: &mut Vec<String>,
) -> Result<(), ErreurEquation> {
    let analyse = analyser(entree)?;
    lignes.push(format!("Reduced form: {}", analyse.forme_reduite));
    lignes.push(format!("Polynomial degree: {}", analyse.degre));

    let resolution = resoudre_analyse(&analyse)?;
    lignes.extend(lignes_solutions(&resolution.solutions, reglages.digits));

    if reglages.demarche {
        lignes.extend(lignes_demarche(
            &analyse.demarche,
            resolution.discriminant.as_ref(),
        ));
    }
    Ok(())
}

fn lignes_solutions(solutions: &Solutions, digits: usize) -> Vec<String> {
    match solutions {
        Solutions::Aucune => vec!["The equation has no solution".into()],
        Solutions::TousLesReels => vec!["Any real number is a solution.".into()],
        Solutions::Unique(x) => vec![
            "The solution is:".into(),
            format!("x = {}", format_racine(x, digits)),
        ],
        Solutions::Double(x) => vec![
            "Discriminant is zero, the solution is:".into(),
            format!("x = {}", format_racine(x, digits)),
        ],
        Solutions::DeuxReelles(x1, x2) => vec![
            "Discriminant is strictly positive, the two solutions are:".into(),
            format!("x1 = {}", format_racine(x1, digits)),
            format!("x2 = {}", format_racine(x2, digits)),
        ],
        Solutions::DeuxComplexes {
            reel,
            radicande,
            denominateur,
        } => vec![
            "Discriminant is strictly negative, the two solutions are:".into(),
            format!(
                "x1 = {}",
                format_complexe(reel, radicande, denominateur, true)
            ),
            format!(
                "x2 = {}",
                format_complexe(reel, radicande, denominateur, false)
            ),
        ],
    }
}

fn lignes_demarche(d: &DemarcheNoyau, discriminant: Option<&BigRational>) -> Vec<String> {
    let mut out = vec![
        "Steps:".to_string(),
        format!("  tokens: {}", d.jetons),
        format!("  terms: {}", d.termes),
        format!("  coefficients: {}", d.carte),
    ];
    if let Some(delta) = discriminant {
        out.push(format!("  discriminant: {}", format_exact_ou_fraction(delta)));
    }
    out.push(format!("  {}", d.note));
    out
}
