//! Noyau f64 — évaluation sûre
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie (ExpressionInvalide / DomaineMath / ResultatNonFini)
//! - jetons.rs    : tokenisation (liste blanche stricte)
//! - rpn.rs       : shunting-yard + repli f64
//! - fonctions.rs : boutons scientifiques + mode d'angle
//! - compte.rs    : comptage des littéraux (télémétrie)
//! - eval.rs      : pipeline complet

pub mod compte;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use compte::compter_entrees;
pub use erreurs::ErreurCalc;
pub use eval::{appliquer_fonction, evaluer_expression, lire_litteral};
pub use fonctions::{FonctionUnaire, ModeAngle};
