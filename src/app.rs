// src/app.rs
//
// Module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter ce dont main.rs a besoin
//
// Important:
// - Aucune écriture sur stdout/stderr ici : la vue produit des lignes,
//   main.rs décide où elles vont et du code de sortie.

pub mod etat;
pub mod vue;

pub use etat::{Reglages, DIGITS_DEFAUT};
pub use vue::executer;
