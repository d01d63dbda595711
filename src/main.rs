// src/main.rs
//
// Computor Q-pur — point d’entrée ligne de commande
// ------------------------------------------------------
// But:
// - Lire UNE équation (argument positionnel), ex:
//     computor "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
// - Codes de sortie : 0 succès ou usage ; 1 erreur du noyau
// - Erreur : "Error: <message>" sur stderr, rien après

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

mod app;
mod noyau;

use app::{executer, Reglages, DIGITS_DEFAUT};

/// Nom unique (usage + aide).
const NOM_APP: &str = "computor";

#[derive(Parser, Debug)]
#[command(
    name = NOM_APP,
    version,
    about = "Solves polynomial equations of degree <= 2 (exact coefficients)."
)]
struct Cli {
    /// "A0 * X^0 + A1 * X^1 + A2 * X^2 = B0 * X^0" (atoms separated by spaces)
    #[arg(allow_hyphen_values = true)]
    equation: String,

    /// Digits after the decimal point when reading roots
    #[arg(short, long, default_value_t = DIGITS_DEFAUT)]
    digits: usize,

    /// Print the intermediate steps (tokens, terms, coefficients, discriminant)
    #[arg(long)]
    demarche: bool,
}

/// Codes de sortie du processus.
const CODE_SUCCES: u8 = 0;
const CODE_ERREUR: u8 = 1;

fn main() -> ExitCode {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match lancer(std::env::args_os(), &mut out, &mut err) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

/// Tout le contrat du processus, écrit dans `out` / `err` : renvoie le code de sortie.
fn lancer<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version : rendu clap.
            // Mauvais nombre d’arguments : usage, code 0.
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write!(out, "{}", e.render())?;
            } else {
                writeln!(out, "{}", Cli::command().render_usage())?;
            }
            return Ok(CODE_SUCCES);
        }
    };

    let mut reglages = Reglages::default();
    reglages.set_digits(cli.digits);
    reglages.demarche = cli.demarche;

    let sortie = executer(&cli.equation, &reglages);
    for ligne in &sortie.lignes {
        writeln!(out, "{ligne}")?;
    }

    match sortie.erreur {
        None => Ok(CODE_SUCCES),
        Some(e) => {
            writeln!(err, "Error: {e}")?;
            Ok(CODE_ERREUR)
        }
    }
}
