// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use std::fmt;

use super::erreur::ErreurEquation;
use super::format::format_exact_ou_fraction;
use super::lecture::pow10;

/// Borne sur l’exposant décimal d’un littéral (ex: 1e4096).
/// Au-delà, la lecture exacte exploserait en mémoire.
const EXPOSANT_DECIMAL_MAX: i64 = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(BigRational),
    Puissance(u32), // X (= X^1) ou X^n

    Plus,
    Moins,
    Egal,
    Fois,
}

impl Jeton {
    /// Nombre ou variable : ce qui doit alterner avec les opérateurs.
    pub fn est_operande(&self) -> bool {
        matches!(self, Jeton::Nombre(_) | Jeton::Puissance(_))
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(r) => write!(f, "{}", format_exact_ou_fraction(r)),
            Jeton::Puissance(1) => write!(f, "X"),
            Jeton::Puissance(n) => write!(f, "X^{n}"),
            Jeton::Plus => write!(f, "+"),
            Jeton::Moins => write!(f, "-"),
            Jeton::Egal => write!(f, "="),
            Jeton::Fois => write!(f, "*"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Les atomes sont séparés par des espaces, sans recollage :
/// "3+X" est UN atome, donc invalide.
/// Supporte:
/// - opérateurs + - = *
/// - X, X^n (n entier ≥ 0, chiffres seulement)
/// - littéraux décimaux: 5, -5, 5., .5, 9.3, 1e-3, 2.5E+2
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEquation> {
    s.split_whitespace().map(classer_atome).collect()
}

fn classer_atome(atome: &str) -> Result<Jeton, ErreurEquation> {
    let jeton = match atome {
        "+" => Some(Jeton::Plus),
        "-" => Some(Jeton::Moins),
        "=" => Some(Jeton::Egal),
        "*" => Some(Jeton::Fois),
        "X" => Some(Jeton::Puissance(1)),
        _ => match atome.strip_prefix("X^") {
            Some(chiffres) => lire_exposant(chiffres).map(Jeton::Puissance),
            None => lire_nombre(atome).map(Jeton::Nombre),
        },
    };

    jeton.ok_or_else(|| ErreurEquation::JetonInvalide(atome.to_string()))
}

/// Exposant de X : chiffres ASCII uniquement (pas de signe, pas d’espace).
fn lire_exposant(chiffres: &str) -> Option<u32> {
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    chiffres.parse::<u32>().ok()
}

/// Lecture EXACTE d’un littéral décimal : [+-]? (d+ (. d*)? | . d+) ([eE] [+-]? d+)?
fn lire_nombre(s: &str) -> Option<BigRational> {
    let (negatif, corps) = match *s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (mantisse, exposant) = match corps.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&corps[..i], Some(&corps[i + 1..])),
        None => (corps, None),
    };

    let (entier, fraction) = match mantisse.split_once('.') {
        Some((e, f)) => (e, f),
        None => (mantisse, ""),
    };

    if entier.is_empty() && fraction.is_empty() {
        return None;
    }
    if !entier.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let exposant: i64 = match exposant {
        None => 0,
        Some(e) => {
            let chiffres = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
            if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // un exposant trop long ne rentre pas dans i64 : refusé comme le reste
            e.parse::<i64>().ok()?
        }
    };
    if exposant.unsigned_abs() > EXPOSANT_DECIMAL_MAX.unsigned_abs() {
        return None;
    }

    // valeur = (entier ++ fraction) × 10^(exposant - |fraction|)
    let texte: String = [entier, fraction].concat();
    let mut n = BigInt::parse_bytes(texte.as_bytes(), 10)?;
    if negatif {
        n = -n;
    }

    let echelle = exposant - fraction.len() as i64;
    let r = if echelle >= 0 {
        BigRational::from_integer(n * pow10(echelle as usize))
    } else {
        BigRational::new(n, pow10((-echelle) as usize))
    };
    Some(r)
}

/// Passe de validation (avant regroupement) :
/// - alternance stricte opérande / opérateur, début et fin sur un opérande
/// - exactement un "="
pub fn valider(jetons: &[Jeton]) -> Result<(), ErreurEquation> {
    if jetons.is_empty() {
        return Err(ErreurEquation::EquationMalformee("empty equation".into()));
    }

    let mut attend_operande = true;
    let mut egal_vu = false;

    for jeton in jetons {
        if matches!(jeton, Jeton::Egal) {
            if egal_vu {
                return Err(ErreurEquation::EgalitesMultiples);
            }
            egal_vu = true;
        }

        if jeton.est_operande() != attend_operande {
            return Err(ErreurEquation::EquationMalformee(format!(
                "unexpected `{jeton}`"
            )));
        }
        attend_operande = !attend_operande;
    }

    if attend_operande {
        return Err(ErreurEquation::EquationMalformee(
            "ends on an operator".into(),
        ));
    }
    if !egal_vu {
        return Err(ErreurEquation::EgaliteManquante);
    }
    Ok(())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jeton synthétique injecté devant un terme négatif.
pub fn moins_un() -> Jeton {
    Jeton::Nombre(-BigRational::one())
}
