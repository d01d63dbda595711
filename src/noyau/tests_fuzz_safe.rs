//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - toute erreur doit être une erreur du noyau (jamais de panique)
//! - invariant clé : une équation bien formée de degré ≤ 2 se résout toujours

use std::time::{Duration, Instant};

use super::eval::{analyser, resoudre_equation};
use super::erreur::ErreurEquation;
use super::solveur::Solutions;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Atomes pris au hasard : valides, presque valides, franchement faux.
const ATOMES: &[&str] = &[
    "+", "-", "=", "*", "X", "X^0", "X^1", "X^2", "X^3", "0", "1", "-1", "2.5", ".5", "5.",
    "1e2", "-0", "X^", "X ^", "^", "3+X", "x", "X^-1", "inf", "1.2.3", "", "==", "X^2.0",
];

fn gen_atomes(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(9);
    (0..n)
        .map(|_| ATOMES[rng.pick(ATOMES.len() as u32) as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

fn gen_coeff(rng: &mut Rng) -> String {
    let entier = rng.pick(41) as i32 - 20;
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_terme(rng: &mut Rng) -> String {
    let e = rng.pick(3);
    match rng.pick(4) {
        0 => gen_coeff(rng),
        1 => format!("X^{e}"),
        2 => format!("{} * X^{e}", gen_coeff(rng)),
        _ => format!("X^{e} * {}", gen_coeff(rng)),
    }
}

fn gen_membre(rng: &mut Rng) -> String {
    let mut s = gen_terme(rng);
    for _ in 0..rng.pick(4) {
        s.push_str(if rng.coin() { " + " } else { " - " });
        s.push_str(&gen_terme(rng));
    }
    s
}

fn est_erreur_du_noyau(e: &ErreurEquation) -> bool {
    // Liste blanche : tout ce que le noyau sait produire, rien d’autre.
    matches!(
        e,
        ErreurEquation::JetonInvalide(_)
            | ErreurEquation::VariablesMultiples
            | ErreurEquation::EgalitesMultiples
            | ErreurEquation::EgaliteManquante
            | ErreurEquation::EquationMalformee(_)
            | ErreurEquation::DegreTropEleve(_)
    )
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_atomes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2000 {
        let entree = gen_atomes(&mut rng);
        match resoudre_equation(&entree) {
            Ok((analyse, _)) => assert!(analyse.degre <= 2, "entree={entree:?}"),
            Err(e) => {
                assert!(est_erreur_du_noyau(&e), "entree={entree:?} err={e:?}");
                assert!(!e.to_string().is_empty());
            }
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_equations_bien_formees_toujours_resolues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(42);

    for _ in 0..1000 {
        let entree = format!("{} = {}", gen_membre(&mut rng), gen_membre(&mut rng));
        let (analyse, resolution) = resoudre_equation(&entree)
            .unwrap_or_else(|e| panic!("entree={entree:?} err={e}"));

        // degré 2 <=> discriminant présent
        assert_eq!(
            analyse.degre == 2,
            resolution.discriminant.is_some(),
            "entree={entree:?}"
        );
        if analyse.degre == 0 {
            assert!(matches!(
                resolution.solutions,
                Solutions::Aucune | Solutions::TousLesReels
            ));
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme() {
    let mut a = Rng::new(7);
    let mut b = Rng::new(7);
    for _ in 0..200 {
        let ea = format!("{} = {}", gen_membre(&mut a), gen_membre(&mut a));
        let eb = format!("{} = {}", gen_membre(&mut b), gen_membre(&mut b));
        assert_eq!(ea, eb);

        let fa = analyser(&ea).map(|x| x.forme_reduite);
        let fb = analyser(&eb).map(|x| x.forme_reduite);
        assert_eq!(fa, fb);
    }
}
