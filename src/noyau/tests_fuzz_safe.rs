//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés : jamais de panique, un succès est TOUJOURS fini,
//!   un échec est toujours l'une des trois familles d'ErreurCalc

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::evaluer_expression;

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

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    // petits décimaux, zéro inclus (utile pour provoquer division par zéro)
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}")
    } else {
        let frac = rng.pick(100);
        format!("{entier}.{frac:02}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_litteral(rng);
    }

    match rng.pick(8) {
        0 => gen_litteral(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}%{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        6 => format!("-({})", gen_expr(rng, depth - 1)),
        // exposant petit et littéral : l'explosion éventuelle reste un
        // ResultatNonFini propre, pas un gel
        _ => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
    }
}

/// Rend l'issue comparable d'un passage à l'autre (déterminisme).
fn issue_texte(r: &Result<f64, ErreurCalc>) -> String {
    match r {
        Ok(v) => format!("ok:{}", v.to_bits()),
        Err(e) => format!("err:{e}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_succes_toujours_fini() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match evaluer_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "succès non fini pour expr={expr:?}: {v}");
                seen_ok += 1;
            }
            Err(
                ErreurCalc::ExpressionInvalide(_)
                | ErreurCalc::DomaineMath(_)
                | ErreurCalc::ResultatNonFini(_),
            ) => {}
        }
    }

    // la grammaire générée est valide : l'essentiel doit passer
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes issues, au bit près.
    let passage = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..80)
            .map(|_| {
                let expr = gen_expr(&mut rng, 4);
                issue_texte(&evaluer_expression(&expr))
            })
            .collect()
    };

    let a = passage(0xBADC0DE_u64);
    budget(t0, max);
    let b = passage(0xBADC0DE_u64);

    assert_eq!(a, b);
}

/* ------------------------ Limites contrôlées ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

#[test]
fn fuzz_safe_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 800*(0.5) = 400, exact en binaire
    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluer_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_somme_plate() {
    // le repli est itératif (piles Vec) : une somme plate longue ne doit
    // pas toucher la pile d'appel
    let expr = vec!["0.5"; 300].join("+");
    let v = evaluer_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 150.0);
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let expr = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    let v = evaluer_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 1.0);
}
