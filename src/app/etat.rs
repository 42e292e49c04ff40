//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de chaque page (calculatrice, convertisseurs, épargne, JSON)
//! et offrir des actions simples, sans logique d’affichage.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par le noyau (fonctions pures / moteur).
//! - Une seule calculatrice par application, possédée exclusivement.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::noyau::convertisseurs::{self, ErreurConversion};
use crate::noyau::epargne::{Devise, ErreurEpargne, Langue, PlanEpargne};
use crate::noyau::json::formater_json;
use crate::noyau::Calculatrice;

/* ------------------------ Pages ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Calculatrice,
    Front,
    Epargne,
    Json,
}

impl Page {
    pub const TOUTES: [Page; 4] = [Page::Calculatrice, Page::Front, Page::Epargne, Page::Json];

    /// Nom court (ligne de commande).
    pub fn nom(self) -> &'static str {
        match self {
            Page::Calculatrice => "calculatrice",
            Page::Front => "front",
            Page::Epargne => "epargne",
            Page::Json => "json",
        }
    }

    /// Titre affiché dans la barre de navigation.
    pub fn titre(self) -> &'static str {
        match self {
            Page::Calculatrice => "Calculator",
            Page::Front => "Frontend Calculator",
            Page::Epargne => "Savings",
            Page::Json => "JSON Convertor",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("page inconnue {0:?} (attendu : calculatrice, front, epargne, json)")]
pub struct ErreurPage(String);

impl FromStr for Page {
    type Err = ErreurPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Page::TOUTES
            .into_iter()
            .find(|p| p.nom() == s)
            .ok_or(ErreurPage(s))
    }
}

/* ------------------------ Convertisseurs “front” ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OngletFront {
    #[default]
    Ratio,
    Couleur,
    Unites,
}

#[derive(Clone, Debug)]
pub struct EtatFront {
    pub onglet: OngletFront,
    pub largeur: String,
    pub hauteur: String,
    pub hex: String,
    pub rgb: String,
    /// Couleur d’aperçu (dernier HEX valide).
    pub apercu: [u8; 3],
    pub px: String,
    pub rem: String,
    pub erreur: String,
}

impl Default for EtatFront {
    fn default() -> Self {
        Self {
            onglet: OngletFront::default(),
            largeur: String::new(),
            hauteur: String::new(),
            hex: "#000000".to_string(),
            rgb: "rgb(0, 0, 0)".to_string(),
            apercu: [0, 0, 0],
            px: String::new(),
            rem: String::new(),
            erreur: String::new(),
        }
    }
}

impl EtatFront {
    /// Dépose un résultat de conversion dans `cible`, ou l’erreur (cible intacte).
    fn deposer(
        erreur: &mut String,
        cible: &mut String,
        r: Result<String, ErreurConversion>,
    ) {
        match r {
            Ok(v) => {
                *cible = v;
                erreur.clear();
            }
            Err(e) => {
                tracing::debug!(%e, "conversion refusée");
                *erreur = e.to_string();
            }
        }
    }

    pub fn maj_depuis_largeur(&mut self) {
        let r = convertisseurs::hauteur_16_9(&self.largeur);
        Self::deposer(&mut self.erreur, &mut self.hauteur, r);
    }

    pub fn maj_depuis_hauteur(&mut self) {
        let r = convertisseurs::largeur_16_9(&self.hauteur);
        Self::deposer(&mut self.erreur, &mut self.largeur, r);
    }

    pub fn maj_depuis_hex(&mut self) {
        if let Ok(c) = convertisseurs::lire_hex(&self.hex) {
            self.apercu = c;
        }
        let r = convertisseurs::hex_vers_rgb(&self.hex);
        Self::deposer(&mut self.erreur, &mut self.rgb, r);
    }

    pub fn maj_depuis_px(&mut self) {
        let r = convertisseurs::px_vers_rem(&self.px);
        Self::deposer(&mut self.erreur, &mut self.rem, r);
    }

    pub fn maj_depuis_rem(&mut self) {
        let r = convertisseurs::rem_vers_px(&self.rem);
        Self::deposer(&mut self.erreur, &mut self.px, r);
    }
}

/* ------------------------ Épargne ------------------------ */

#[derive(Clone, Debug)]
pub struct EtatEpargne {
    pub langue: Langue,
    pub devise: Devise,
    pub plan: PlanEpargne,
    pub resultat: Result<f64, ErreurEpargne>,
}

impl Default for EtatEpargne {
    fn default() -> Self {
        let plan = PlanEpargne::default();
        Self {
            langue: Langue::default(),
            devise: Devise::default(),
            resultat: plan.versement_mensuel(),
            plan,
        }
    }
}

impl EtatEpargne {
    /// À appeler après chaque changement d’entrée.
    pub fn recalculer(&mut self) {
        self.resultat = self.plan.versement_mensuel();
        if let Err(e) = &self.resultat {
            tracing::debug!(%e, plan = ?self.plan, "épargne: valeurs refusées");
        }
    }

    /// Erreur courante, dans la langue de la page.
    pub fn message_erreur(&self) -> Option<&'static str> {
        self.resultat.as_ref().err().map(|e| e.message(self.langue))
    }
}

/* ------------------------ JSON ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct EtatJson {
    pub entree: String,
    pub sortie: String,
    pub invalide: bool,
}

impl EtatJson {
    pub fn reformater(&mut self) {
        match formater_json(&self.entree) {
            Ok(s) => {
                self.sortie = s;
                self.invalide = false;
            }
            Err(e) => {
                tracing::debug!(%e, "JSON refusé");
                self.sortie = crate::noyau::json::AIDE_JSON_INVALIDE.to_string();
                self.invalide = true;
            }
        }
    }
}

/* ------------------------ Application ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct AppOutils {
    pub page: Page,
    pub calc: Calculatrice,
    pub front: EtatFront,
    pub epargne: EtatEpargne,
    pub json: EtatJson,
}

impl AppOutils {
    pub fn new(page: Page, langue: Langue) -> Self {
        tracing::debug!(%page, %langue, "application créée");
        Self {
            page,
            calc: Calculatrice::new(),
            epargne: EtatEpargne {
                langue,
                ..EtatEpargne::default()
            },
            ..Self::default()
        }
    }

    pub fn aller_a(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(de = %self.page, vers = %page, "changement de page");
            self.page = page;
        }
    }
}
