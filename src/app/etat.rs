//! src/app/etat.rs
//!
//! Réglages (sans vue, sans noyau).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Défense en profondeur : bornes sur la précision de lecture (digits).

/// Précision de lecture par défaut (chiffres après la virgule).
pub const DIGITS_DEFAUT: usize = 6;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
const DIGITS_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Précision de lecture des racines
    pub digits: usize,
    /// Affiche la démarche après le rapport
    pub demarche: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
            demarche: false,
        }
    }
}

impl Reglages {
    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}
