// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis replier la RPN sur une pile de f64
//
// Règles:
// - Précédence : ^ (3, associatif à droite) > * / % (2) > + - (1)
// - Moins préfixe :
//    - si '-' arrive quand on n'attend PAS une valeur, on empile Tok::Neg
//    - Neg est préfixe : il ne dépile JAMAIS en entrant (son contexte gauche
//      n'existe pas), et il est dépilé par + - * / % mais pas par ^
//      (ainsi "-2^2" = -(2^2) et "2^-3" = 2^(-3))

use super::erreurs::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent | Tok::Neg => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

fn manque_operande() -> ErreurCalc {
    ErreurCalc::ExpressionInvalide("opérande manquante".into())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un littéral ou une expression fermée.
    // Sert à détecter le moins préfixe.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalc::ExpressionInvalide(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                depiler_selon_precedence(&tok, &mut out, &mut ops);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    // moins binaire : comme les autres opérateurs
                    depiler_selon_precedence(&tok, &mut out, &mut ops);
                    ops.push(Tok::Minus);
                } else {
                    // moins préfixe : on empile sans rien dépiler
                    ops.push(Tok::Neg);
                }
                prev_was_value = false;
            }

            Tok::Neg => {
                // jeton interne : n'apparaît jamais dans la sortie de tokenize
                return Err(ErreurCalc::ExpressionInvalide(
                    "jeton préfixe inattendu en entrée".into(),
                ));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ExpressionInvalide(
                "parenthèses non fermées".into(),
            ));
        }
        out.push(op);
    }

    Ok(out)
}

// Dépile tant que:
// - on n'est pas bloqué par '('
// - et la précédence/associativité exige de sortir l'opérateur du haut
fn depiler_selon_precedence(tok: &Tok, out: &mut Vec<Tok>, ops: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Replie une RPN sur une pile de f64.
///
/// - Division/reste par zéro : refusé ici (ResultatNonFini), pas d'infini silencieux.
/// - Pile finale ≠ 1 valeur : expression incomplète (ex: "2+", "3 4").
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Neg => {
                let x = pile.pop().ok_or_else(manque_operande)?;
                pile.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = pile.pop().ok_or_else(manque_operande)?;
                let a = pile.pop().ok_or_else(manque_operande)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalc::ResultatNonFini("division par zéro".into()));
                        }
                        a / b
                    }
                    Tok::Percent => {
                        if b == 0.0 {
                            return Err(ErreurCalc::ResultatNonFini("reste par zéro".into()));
                        }
                        a % b
                    }
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::ExpressionInvalide(
                    "parenthèse inattendue en RPN".into(),
                ))
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::ExpressionInvalide("expression invalide".into()));
    }
    Ok(pile.pop().unwrap())
}
