// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau
// ----------------------------
// Trois familles, toutes récupérables côté session :
// - ExpressionInvalide : syntaxe, caractère interdit, entrée vide
// - DomaineMath        : argument hors domaine (√ d'un négatif, log ≤ 0, ...)
// - ResultatNonFini    : division par zéro, débordement, NaN

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    #[error("domaine mathématique : {0}")]
    DomaineMath(String),

    #[error("résultat non fini : {0}")]
    ResultatNonFini(String),
}
