// src/noyau/fonctions.rs
//
// Fonctions scientifiques (boutons unaires) + opérations à deux opérandes
// -----------------------------------------------------------------------
// - Dispatch par FonctionUnaire (sin/cos/tan/sqrt/sqr/cube/cuberoot/log/exp10)
// - Le mode d'angle ne touche QUE sin/cos/tan (conversion degrés -> radians
//   avant l'appel à la primitive), jamais le parseur
// - Domaine vérifié AVANT l'appel (√ d'un négatif, log ≤ 0, indice de racine nul)
// - Sortie non finie refusée après l'appel

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Bascule Degrés <-> Radians (deux états, pas de persistance).
    pub fn basculer(&mut self) {
        *self = match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        };
    }

    fn en_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Degres => angle.to_radians(),
            ModeAngle::Radians => angle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Sqr,
    Cube,
    CubeRoot,
    Log,
    Exp10,
}

impl FonctionUnaire {
    /// Nom bouton -> fonction. Noms en minuscules, comme sur le pavé scientifique.
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sqrt" => Some(Self::Sqrt),
            "sqr" => Some(Self::Sqr),
            "cube" => Some(Self::Cube),
            "cuberoot" => Some(Self::CubeRoot),
            "log" => Some(Self::Log),
            "exp10" => Some(Self::Exp10),
            _ => None,
        }
    }

    /// Nom canonique (sert au texte d'expression envoyé à l'historique).
    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Sqr => "sqr",
            Self::Cube => "cube",
            Self::CubeRoot => "cuberoot",
            Self::Log => "log",
            Self::Exp10 => "exp10",
        }
    }
}

/// Applique une fonction unaire à la valeur affichée.
pub fn appliquer(f: FonctionUnaire, x: f64, mode: ModeAngle) -> Result<f64, ErreurCalc> {
    use FonctionUnaire::*;

    let v = match f {
        Sin => mode.en_radians(x).sin(),
        Cos => mode.en_radians(x).cos(),
        Tan => mode.en_radians(x).tan(),

        Sqrt => {
            if x < 0.0 {
                return Err(ErreurCalc::DomaineMath(format!("√ d'un négatif: {x}")));
            }
            x.sqrt()
        }
        Sqr => x * x,
        Cube => x * x * x,
        CubeRoot => x.cbrt(),

        Log => {
            if x <= 0.0 {
                return Err(ErreurCalc::DomaineMath(format!("log d'un non positif: {x}")));
            }
            x.log10()
        }
        Exp10 => 10f64.powf(x),
    };

    fini(v)
}

/// x^y, second opérande saisi hors expression.
pub fn puissance(base: f64, exposant: f64) -> Result<f64, ErreurCalc> {
    fini(base.powf(exposant))
}

/// Racine n-ième : x^(1/n), second opérande saisi hors expression.
pub fn racine_n(indice: f64, x: f64) -> Result<f64, ErreurCalc> {
    if indice == 0.0 {
        return Err(ErreurCalc::DomaineMath("indice de racine nul".into()));
    }
    fini(x.powf(1.0 / indice))
}

fn fini(v: f64) -> Result<f64, ErreurCalc> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::ResultatNonFini(
            "valeur infinie ou indéterminée".into(),
        ))
    }
}
