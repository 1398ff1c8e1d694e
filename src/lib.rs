//! Calculatrice Sci — moteur de calculatrice basique + scientifique
//!
//! Organisation :
//! - noyau      : évaluateur sûr (liste blanche stricte) + fonctions
//!   scientifiques + comptage télémétrie
//! - session    : état d'une calculatrice (affichage, Ans, mode d'angle)
//! - historique : envoi best-effort des calculs réussis au serveur d'historique
//!
//! La session est le point d'entrée normal : la couche de présentation édite
//! l'affichage (ajouter/retour/effacer), déclenche egal() ou un bouton
//! scientifique, puis remet l'affichage au neutre après son délai quand
//! en_erreur est posé. L'évaluation est synchrone et sans I/O ; seul l'envoi
//! à l'historique est détaché.

pub mod historique;
pub mod noyau;
pub mod session;

pub use historique::{ClientHistorique, EnregistrementCalcul, TypeCalcul};
pub use noyau::{evaluer_expression, ErreurCalc, FonctionUnaire, ModeAngle};
pub use session::SessionCalc;
