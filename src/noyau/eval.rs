//! Noyau — évaluation (pipeline réel)
//!
//! normaliser glyphes -> tokenize -> RPN -> repli f64 -> contrôle de finitude
//!
//! Remarque : la grammaire est une liste blanche stricte (littéraux décimaux,
//! + - * / % ^, parenthèses, moins préfixe). Jamais d'évaluateur de code
//! générique : tout le reste est ExpressionInvalide.

use super::erreurs::ErreurCalc;
use super::fonctions::{self, FonctionUnaire, ModeAngle};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression composée (touche "=") et retourne
/// une valeur f64 finie.
pub fn evaluer_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide("entrée vide".into()));
    }

    // 1) Glyphes d'affichage -> opérateurs ASCII
    let s = normaliser_glyphes(s);

    // 2) Jetons
    let jetons = tokenize(&s)?;
    log::debug!("jetons: {}", format_tokens(&jetons));

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    log::debug!("rpn: {}", format_tokens(&rpn));

    // 4) Repli f64
    let v = eval_rpn(&rpn)?;

    // 5) Contrôle final : un débordement en cours de repli (10^10000, inf-inf)
    //    se propage jusqu'ici
    if !v.is_finite() {
        return Err(ErreurCalc::ResultatNonFini("débordement".into()));
    }

    Ok(v)
}

/// Lit l'affichage comme UN littéral f64 fini (chemin des boutons unaires).
pub fn lire_litteral(texte: &str) -> Result<f64, ErreurCalc> {
    let v: f64 = texte
        .trim()
        .parse()
        .map_err(|_| ErreurCalc::ExpressionInvalide(format!("littéral attendu: {texte:?}")))?;

    // f64::from_str accepte "inf"/"NaN" : hors liste blanche, on refuse
    if !v.is_finite() {
        return Err(ErreurCalc::ExpressionInvalide("littéral non fini".into()));
    }
    Ok(v)
}

/// Chemin complet d'un bouton scientifique : affichage -> littéral -> fonction.
pub fn appliquer_fonction(
    texte: &str,
    f: FonctionUnaire,
    mode: ModeAngle,
) -> Result<f64, ErreurCalc> {
    let x = lire_litteral(texte)?;
    fonctions::appliquer(f, x, mode)
}

/// Glyphes du pavé (×, ÷, −) -> opérateurs de la grammaire.
fn normaliser_glyphes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}
