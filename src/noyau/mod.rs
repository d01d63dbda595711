//! Noyau exact : équation polynomiale de degré ≤ 2
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation + validation (alternance, un seul "=")
//! - termes.rs    : regroupement en termes signés (membre droit soustrait)
//! - reduction.rs : carte exposant ↦ coefficient exact
//! - degre.rs     : degré effectif + polynôme réduit
//! - solveur.rs   : solutions (Δ exact)
//! - format.rs    : forme réduite, racines, complexes symboliques
//! - lecture.rs   : lecture décimale (entiers scalés)
//! - erreur.rs    : erreurs fatales
//! - eval.rs      : pipeline complet

pub mod degre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod reduction;
pub mod solveur;
pub mod termes;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEquation;
pub use eval::{analyser, resoudre_analyse};
