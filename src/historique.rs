// src/historique.rs
//
// Historique des calculs — envoi best-effort
// ------------------------------------------
// Contrat du collaborateur serveur :
//   POST <url_base>/api/save
//   {"expression": ..., "result": ..., "type": "basic"|"scientific"|"client",
//    "inputs_count": ...}
//
// Sémantique fire-and-forget :
// - envoyer() ne bloque jamais et ne retourne rien
// - la tâche détachée avale les échecs (réseau, serveur) en les journalisant
// - aucune reprise : la perte d'un enregistrement est acceptable (télémétrie)

use serde::Serialize;

/// Famille de calculatrice déclarée au serveur d'historique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TypeCalcul {
    #[serde(rename = "basic")]
    Basique,
    #[serde(rename = "scientific")]
    Scientifique,
    #[serde(rename = "client")]
    Client,
}

/// Un calcul réussi, tel qu'attendu sur le fil par le serveur.
#[derive(Clone, Debug, Serialize)]
pub struct EnregistrementCalcul {
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: f64,
    #[serde(rename = "type")]
    pub genre: TypeCalcul,
    #[serde(rename = "inputs_count")]
    pub nb_entrees: u32,
}

#[derive(Clone, Debug)]
pub struct ClientHistorique {
    http: reqwest::Client,
    url_save: String,
}

impl ClientHistorique {
    pub fn new(url_base: impl Into<String>) -> Self {
        let base = url_base.into();
        Self {
            http: reqwest::Client::new(),
            url_save: format!("{}/api/save", base.trim_end_matches('/')),
        }
    }

    /// Envoi détaché. Requiert un runtime tokio ambiant ; sans runtime,
    /// l'enregistrement est abandonné (et journalisé), jamais d'erreur.
    pub fn envoyer(&self, enr: EnregistrementCalcul) {
        let rt = match tokio::runtime::Handle::try_current() {
            Ok(rt) => rt,
            Err(_) => {
                log::warn!("historique: pas de runtime tokio, enregistrement abandonné");
                return;
            }
        };

        let http = self.http.clone();
        let url = self.url_save.clone();

        rt.spawn(async move {
            match http.post(&url).json(&enr).send().await {
                Ok(reponse) if reponse.status().is_success() => {
                    log::debug!("historique: enregistré {:?}", enr.expression);
                }
                Ok(reponse) => {
                    log::warn!("historique: statut {} (ignoré)", reponse.status());
                }
                Err(e) => {
                    log::warn!("historique: envoi échoué (ignoré): {e}");
                }
            }
        });
    }
}
