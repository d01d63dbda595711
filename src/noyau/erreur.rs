// src/noyau/erreur.rs
//
// Erreurs du noyau : toutes fatales, remontées telles quelles par `?`.
// Le message (Display) est le texte affiché après "Error: ".

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEquation {
    /// Atome qui n’est ni opérateur, ni nombre, ni X / X^n.
    #[error("Invalid token: {0}")]
    JetonInvalide(String),

    /// Deux X dans le même terme (ex: `X * X^2`).
    #[error("Multiple variables")]
    VariablesMultiples,

    #[error("Have multiple equal signs")]
    EgalitesMultiples,

    #[error("No equal sign")]
    EgaliteManquante,

    /// Alternance opérande / opérateur rompue, ou fin sur un opérateur.
    #[error("Invalid equation: {0}")]
    EquationMalformee(String),

    /// Degré effectif (> 2) conservé pour la démarche.
    #[error("The polynomial degree is strictly greater than 2, I can't solve.")]
    DegreTropEleve(u32),
}
