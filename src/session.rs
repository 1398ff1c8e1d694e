//! src/session.rs
//!
//! État d'une calculatrice (sans vue).
//!
//! Rôle : contenir l'état d'une session (affichage, dernière réponse, mode
//! d'angle, drapeau d'erreur) et offrir les opérations d'édition et de calcul,
//! sans logique d'affichage.
//!
//! Contrats :
//! - La dernière réponse (Ans) ne change QUE sur un calcul réussi.
//! - Le mode d'angle ne touche que sin/cos/tan, jamais le parseur.
//! - Un échec pose l'indicateur d'erreur ; la remise à "0" après le délai de
//!   présentation appartient à la couche au-dessus (elle appelle effacer()).
//! - L'envoi à l'historique est best-effort : jamais bloquant, jamais d'erreur.

use crate::historique::{ClientHistorique, EnregistrementCalcul, TypeCalcul};
use crate::noyau::erreurs::ErreurCalc;
use crate::noyau::fonctions;
use crate::noyau::{self, FonctionUnaire, ModeAngle};

/// Affichage neutre au démarrage et après effacement.
const AFFICHAGE_DEFAUT: &str = "0";

/// Indicateur montré quand une évaluation échoue.
const AFFICHAGE_ERREUR: &str = "Erreur";

/// Les opérations à deux opérandes (x^y, root) déclarent toujours deux
/// entrées : le second opérande arrive hors expression.
const NB_ENTREES_DEUX_OPERANDES: u32 = 2;

#[derive(Clone, Debug)]
pub struct SessionCalc {
    // --- entrée/sortie utilisateur ---
    pub affichage: String,

    // --- état de calcul ---
    pub derniere_reponse: Option<f64>,
    pub mode_angle: ModeAngle,
    pub en_erreur: bool,

    // --- paramètres ---
    genre: TypeCalcul,
    historique: Option<ClientHistorique>,
}

impl SessionCalc {
    pub fn nouvelle(genre: TypeCalcul) -> Self {
        Self {
            affichage: AFFICHAGE_DEFAUT.to_string(),
            derniere_reponse: None,
            mode_angle: ModeAngle::default(),
            en_erreur: false,
            genre,
            historique: None,
        }
    }

    /// Branche un client d'historique (sinon la session reste muette).
    pub fn avec_historique(mut self, client: ClientHistorique) -> Self {
        self.historique = Some(client);
        self
    }

    /* ------------------------ Édition de l'affichage ------------------------ */

    /// Ajoute un symbole à l'affichage.
    /// Règle du zéro initial : sur "0", tout sauf "." remplace au lieu d'ajouter.
    pub fn ajouter(&mut self, symbole: &str) {
        if self.affichage == AFFICHAGE_DEFAUT && symbole != "." {
            self.affichage = symbole.to_string();
        } else {
            self.affichage.push_str(symbole);
        }
    }

    /// Remise à l'état neutre "0" (efface aussi l'indicateur d'erreur).
    pub fn effacer(&mut self) {
        self.affichage = AFFICHAGE_DEFAUT.to_string();
        self.en_erreur = false;
    }

    /// Efface le dernier symbole ; un affichage vidé redevient "0".
    pub fn retour(&mut self) {
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
        }
    }

    /// Insère la dernière réponse (Ans) dans l'affichage.
    /// Sans réponse précédente : ne fait rien.
    /// Le texte inséré re-parse exactement vers le même f64.
    pub fn inserer_ans(&mut self) {
        if let Some(v) = self.derniere_reponse {
            let txt = format_valeur(v);
            self.ajouter(&txt);
        }
    }

    /// Bascule Degrés <-> Radians.
    pub fn basculer_mode(&mut self) {
        self.mode_angle.basculer();
    }

    /* ------------------------ Calculs ------------------------ */

    /// Touche "=" : évalue l'affichage comme expression composée.
    pub fn egal(&mut self) {
        let expr = self.affichage.clone();
        match noyau::evaluer_expression(&expr) {
            Ok(v) => {
                let nb = noyau::compter_entrees(&expr);
                self.deposer_succes(expr, v, nb);
            }
            Err(e) => self.deposer_erreur(&e),
        }
    }

    /// Bouton scientifique : applique une fonction unaire à la valeur affichée.
    pub fn appliquer_unaire(&mut self, f: FonctionUnaire) {
        let arg = self.affichage.clone();
        match noyau::appliquer_fonction(&arg, f, self.mode_angle) {
            Ok(v) => {
                let expr = format!("{}({})", f.nom(), arg.trim());
                let nb = noyau::compter_entrees(&expr);
                self.deposer_succes(expr, v, nb);
            }
            Err(e) => self.deposer_erreur(&e),
        }
    }

    /// x^y : la base est la valeur affichée, l'exposant est saisi à part.
    pub fn puissance(&mut self, exposant: f64) {
        let base_txt = self.affichage.clone();
        let resultat =
            noyau::lire_litteral(&base_txt).and_then(|base| fonctions::puissance(base, exposant));

        match resultat {
            Ok(v) => {
                let expr = format!("{}^{}", base_txt.trim(), exposant);
                self.deposer_succes(expr, v, NB_ENTREES_DEUX_OPERANDES);
            }
            Err(e) => self.deposer_erreur(&e),
        }
    }

    /// Racine n-ième : l'argument est la valeur affichée, l'indice est saisi à part.
    pub fn racine(&mut self, indice: f64) {
        let arg_txt = self.affichage.clone();
        let resultat =
            noyau::lire_litteral(&arg_txt).and_then(|x| fonctions::racine_n(indice, x));

        match resultat {
            Ok(v) => {
                let expr = format!("root({indice}, {})", arg_txt.trim());
                self.deposer_succes(expr, v, NB_ENTREES_DEUX_OPERANDES);
            }
            Err(e) => self.deposer_erreur(&e),
        }
    }

    /* ------------------------ Dépôt des résultats ------------------------ */

    fn deposer_succes(&mut self, expression: String, valeur: f64, nb_entrees: u32) {
        self.derniere_reponse = Some(valeur);
        self.affichage = format_valeur(valeur);
        self.en_erreur = false;

        if let Some(client) = &self.historique {
            client.envoyer(EnregistrementCalcul {
                expression,
                resultat: valeur,
                genre: self.genre,
                nb_entrees,
            });
        }
    }

    fn deposer_erreur(&mut self, erreur: &ErreurCalc) {
        log::debug!("évaluation refusée: {erreur}");

        // Ans et le mode d'angle ne bougent pas sur un échec.
        self.affichage = AFFICHAGE_ERREUR.to_string();
        self.en_erreur = true;
    }
}

/// Texte d'affichage d'une valeur : la forme la plus courte qui re-parse
/// exactement (Display de f64), "8" plutôt que "8.0" pour les entiers.
fn format_valeur(v: f64) -> String {
    format!("{v}")
}
