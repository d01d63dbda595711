//! Tests scientifiques : invariants algébriques de la réduction.
//!
//! - l’ordre des termes ne change pas la carte
//! - passer un terme de l’autre côté du "=" (signe inversé) ne change pas la carte
//! - relire la forme réduite affichée redonne la même carte
//!
//! On compare toujours les coefficients NON nuls : la forme réduite omet les zéros.

use proptest::prelude::*;

use super::eval::analyser;
use super::reduction::CarteCoefficients;

/* ------------------------ Génération ------------------------ */

/// Un terme "c * X^e" avec un coefficient décimal court (signe inclus).
#[derive(Clone, Debug)]
struct TermeTexte {
    coeff: String,
    exposant: u32,
}

impl TermeTexte {
    fn texte(&self) -> String {
        format!("{} * X^{}", self.coeff, self.exposant)
    }

    fn oppose(&self) -> Self {
        let coeff = match self.coeff.strip_prefix('-') {
            Some(abs) => abs.to_string(),
            None => format!("-{}", self.coeff),
        };
        Self {
            coeff,
            exposant: self.exposant,
        }
    }
}

fn terme() -> impl Strategy<Value = TermeTexte> {
    (-60i32..60, 0u8..10, 0u32..=2, any::<bool>()).prop_map(|(entier, dixiemes, exposant, decimal)| {
        let coeff = if decimal {
            format!("{entier}.{dixiemes}")
        } else {
            format!("{entier}")
        };
        TermeTexte { coeff, exposant }
    })
}

/// Les termes sont tous joints par "+" : les signes vivent dans les littéraux.
fn membre(termes: &[TermeTexte]) -> String {
    if termes.is_empty() {
        return "0".to_string();
    }
    termes
        .iter()
        .map(TermeTexte::texte)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn equation(gauche: &[TermeTexte], droite: &[TermeTexte]) -> String {
    format!("{} = {}", membre(gauche), membre(droite))
}

fn carte(s: &str) -> CarteCoefficients {
    analyser(s)
        .unwrap_or_else(|e| panic!("analyser({s:?}) erreur: {e}"))
        .carte
}

/* ------------------------ Scénarios fixes ------------------------ */

#[test]
fn sci_soustraction_du_membre_droit() {
    // "-" du membre droit : le terme passe à gauche avec un signe "+"
    assert_eq!(
        carte("0 = 5 - X").non_nuls(),
        carte("X - 5 = 0").non_nuls()
    );
    assert_eq!(
        carte("X^2 = 2 * X - 1").non_nuls(),
        carte("X^2 - 2 * X + 1 = 0").non_nuls()
    );
}

#[test]
fn sci_relecture_exemple_principal() {
    let a = analyser("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0").unwrap();
    let relu = carte(&a.forme_reduite);
    assert_eq!(relu.non_nuls(), a.carte.non_nuls());
}

#[test]
fn sci_relecture_polynome_nul() {
    let a = analyser("X^2 + 1 = X^2 + 1").unwrap();
    assert_eq!(a.forme_reduite, "0 = 0");
    assert!(carte(&a.forme_reduite).non_nuls().is_empty());
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn prop_ordre_des_termes_indifferent(
        gauche in prop::collection::vec(terme(), 1..6),
        droite in prop::collection::vec(terme(), 1..4),
        graine in any::<u64>(),
    ) {
        let base = carte(&equation(&gauche, &droite));

        // rotation déterministe des deux membres
        let mut g = gauche.clone();
        let mut d = droite.clone();
        let n = g.len();
        g.rotate_left((graine as usize) % n);
        d.reverse();

        prop_assert_eq!(base.non_nuls(), carte(&equation(&g, &d)).non_nuls());
    }

    #[test]
    fn prop_passage_de_l_autre_cote(
        gauche in prop::collection::vec(terme(), 2..6),
        droite in prop::collection::vec(terme(), 0..4),
    ) {
        let base = carte(&equation(&gauche, &droite));

        // dernier terme de gauche -> droite, signe inversé
        let mut g = gauche.clone();
        let deplace = g.pop().unwrap();
        let mut d = droite.clone();
        d.push(deplace.oppose());

        prop_assert_eq!(base.non_nuls(), carte(&equation(&g, &d)).non_nuls());
    }

    #[test]
    fn prop_relecture_forme_reduite(
        gauche in prop::collection::vec(terme(), 1..6),
        droite in prop::collection::vec(terme(), 1..4),
    ) {
        let a = analyser(&equation(&gauche, &droite)).unwrap();
        prop_assert_eq!(a.carte.non_nuls(), carte(&a.forme_reduite).non_nuls());
    }
}
