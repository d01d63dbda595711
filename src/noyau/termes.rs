// src/noyau/termes.rs
//
// Regroupement : flux de jetons validé -> termes signés.
//
// Règles:
// - "+" / "-" / "=" ferment le terme courant
// - "*" ne fait que joindre des facteurs : il disparaît
// - après "=", tout est soustrait : le signe d’un terme est négatif
//   quand exactement UNE des deux conditions tient ("-" devant, membre droit)
// - un terme négatif reçoit un jeton synthétique -1 en tête

use super::erreur::ErreurEquation;
use super::jetons::{format_jetons, moins_un, Jeton};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Terme {
    pub jetons: Vec<Jeton>,
    /// Vrai si jetons[0] est le -1 injecté (pas un opérande de l’entrée).
    pub signe_injecte: bool,
}

impl Terme {
    /// Ouvre un terme, pré-rempli avec -1 s’il est négatif.
    pub fn ouvrir(negatif: bool) -> Self {
        if negatif {
            Self {
                jetons: vec![moins_un()],
                signe_injecte: true,
            }
        } else {
            Self::default()
        }
    }

    /// Aucun opérande venu de l’entrée (seulement, au plus, le -1 injecté).
    pub fn est_vide(&self) -> bool {
        self.jetons.len() == usize::from(self.signe_injecte)
    }
}

pub fn grouper(jetons: &[Jeton]) -> Result<Vec<Terme>, ErreurEquation> {
    let mut termes = Vec::new();
    let mut courant = Terme::default();
    let mut membre_droit = false;

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(_) | Jeton::Puissance(_) => courant.jetons.push(jeton.clone()),

            Jeton::Fois => {}

            Jeton::Plus | Jeton::Moins => {
                let negatif = matches!(jeton, Jeton::Moins) != membre_droit;
                fermer(&mut termes, std::mem::replace(&mut courant, Terme::ouvrir(negatif)));
            }

            Jeton::Egal => {
                if membre_droit {
                    return Err(ErreurEquation::EgalitesMultiples);
                }
                membre_droit = true;
                fermer(&mut termes, std::mem::replace(&mut courant, Terme::ouvrir(true)));
            }
        }
    }

    fermer(&mut termes, courant);
    Ok(termes)
}

/// Un séparateur en tête ne produit pas de terme fantôme.
fn fermer(termes: &mut Vec<Terme>, terme: Terme) {
    if !terme.est_vide() {
        termes.push(terme);
    }
}

/// Format utilitaire (démarche) : [5 * X^0] [-1 * X^1] ...
pub fn format_termes(termes: &[Terme]) -> String {
    termes
        .iter()
        .map(|t| format!("[{}]", format_jetons(&t.jetons).replace(' ', " * ")))
        .collect::<Vec<_>>()
        .join(" ")
}
