// src/noyau/compte.rs
//
// Comptage des entrées (télémétrie)
// ---------------------------------
// nb_entrees = nombre de suites maximales de chiffres, suivies d'une éventuelle
// partie décimale, dans le texte AVANT normalisation des glyphes.
//
// C'est une approximation volontairement conservée telle quelle (elle compte
// "12+3.5*2" -> 3, mais ne traite pas spécialement les appels imbriqués ni les
// nombres négatifs) : l'historique serveur a été enregistré avec ce comptage.

use std::sync::OnceLock;

use regex::Regex;

static RE_LITTERAL: OnceLock<Regex> = OnceLock::new();

/// Compte les littéraux numériques d'un texte d'expression.
pub fn compter_entrees(texte: &str) -> u32 {
    let re = RE_LITTERAL.get_or_init(|| Regex::new(r"\d+(\.\d+)?").expect("motif littéraux"));
    re.find_iter(texte).count() as u32
}
