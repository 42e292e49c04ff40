//! Noyau — moteur de la calculatrice (quatre opérations + % + ±)
//!
//! Toutes les transitions passent par un seul réducteur pur :
//!   appliquer(&EtatCalc, Evenement) -> EtatCalc
//!
//! Modes (déduits de l’état ; seul le résultat a son marqueur) :
//! - Saisie     : pas d’opération en attente, pas de résultat affiché (1er opérande en cours)
//! - Résultat   : après `=`, équation vide (le prochain chiffre repart de zéro)
//! - Attente    : opération en attente + drapeau levé (le prochain chiffre remplace l’affichage)
//! - Édition    : opération en attente + drapeau baissé (le prochain chiffre s’ajoute)
//!
//! Pas d’erreur : division par zéro, débordement -> Infinity / NaN affichés tels quels.

use super::historique::Historique;
use super::nombre::{formater_nombre, lire_nombre};
use super::operateur::Operateur;

/// Affichage initial (et après AC).
const AFFICHAGE_INITIAL: &str = "0";

/// Opération binaire en attente de son opérande droit.
/// Accumulateur et opérateur vont toujours ensemble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attente {
    pub accumulateur: f64,
    pub operateur: Operateur,
}

/// Un évènement d’entrée = une opération du moteur.
#[derive(Clone, Debug, PartialEq)]
pub enum Evenement {
    /// Chiffre 0..=9 (toute autre valeur est ignorée).
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Pourcent,
    Signe,
    Retour,
    ToutEffacer,
    Rappel(String),
}

impl Evenement {
    /// '0'..='9' -> Chiffre
    pub fn chiffre(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Evenement::Chiffre(d as u8))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    affichage: String,
    equation: String,
    attente: Option<Attente>,
    attend_operande: bool,
    /// Levé par `=`, baissé par toute saisie (chiffre, virgule, opérateur, rappel, AC).
    resultat_affiche: bool,
    historique: Historique,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            equation: String::new(),
            attente: None,
            attend_operande: false,
            resultat_affiche: false,
            historique: Historique::new(),
        }
    }
}

impl EtatCalc {
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    #[cfg(test)]
    pub fn accumulateur(&self) -> Option<f64> {
        self.attente.map(|a| a.accumulateur)
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.attente.map(|a| a.operateur)
    }

    /// Drapeau “attente d’opérande” : le prochain chiffre démarre un nouvel opérande.
    pub fn attend_operande(&self) -> bool {
        self.attend_operande
    }

    /// Un résultat de `=` est affiché et rien n’a été saisi depuis.
    pub fn resultat_affiche(&self) -> bool {
        self.resultat_affiche && self.attente.is_none() && self.equation.is_empty()
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /* ------------------------ Transitions (privées) ------------------------ */

    /// Valide l’opérande courant dans l’historique.
    fn valider_affichage(&mut self) {
        if self.historique.enregistrer(&self.affichage) {
            tracing::debug!(valeur = %self.affichage, "historique: ajout");
        }
    }

    /// AC : tout sauf l’historique.
    fn effacer(&mut self) {
        self.affichage = AFFICHAGE_INITIAL.to_string();
        self.equation.clear();
        self.attente = None;
        self.attend_operande = false;
        self.resultat_affiche = false;
    }

    fn chiffre(&mut self, d: u8) {
        if d > 9 {
            tracing::warn!(d, "chiffre hors 0..=9 ignoré");
            return;
        }
        let c = char::from(b'0' + d);

        // Résultat affiché : on repart de zéro
        if self.resultat_affiche() {
            self.valider_affichage();
            self.effacer();
            self.affichage = c.to_string();
            self.equation = self.affichage.clone();
            return;
        }

        let attendait = self.attend_operande;
        if attendait {
            self.affichage = c.to_string();
            self.attend_operande = false;
        } else if self.affichage == "0" {
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }

        // 1er opérande : l’équation suit l’affichage
        if self.attente.is_none() && (self.equation.is_empty() || !attendait) {
            self.equation = self.affichage.clone();
        }
    }

    fn virgule(&mut self) {
        self.resultat_affiche = false;
        let attendait = self.attend_operande;
        if attendait {
            self.affichage = "0.".to_string();
            self.attend_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }

        if self.attente.is_none() && (self.equation.is_empty() || !attendait) {
            self.equation = self.affichage.clone();
        }
    }

    fn appuyer_operateur(&mut self, op: Operateur) {
        self.resultat_affiche = false;
        self.valider_affichage();

        let courant = lire_nombre(&self.affichage);

        match self.attente {
            None => {
                self.attente = Some(Attente {
                    accumulateur: courant,
                    operateur: op,
                });
                self.equation = format!("{} {}", self.affichage, op);
            }
            // Deux opérateurs de suite : on remplace le dernier, sans recalcul
            Some(a) if self.attend_operande => {
                self.equation.pop();
                self.equation.push(op.symbole());
                self.attente = Some(Attente {
                    operateur: op,
                    ..a
                });
            }
            // Enchaînement : on évalue l’opération en attente (gauche -> droite)
            Some(a) => {
                let valeur = a.operateur.appliquer(a.accumulateur, courant);
                self.equation = format!("{} {} {}", self.equation, self.affichage, op);
                self.affichage = formater_nombre(valeur);
                self.attente = Some(Attente {
                    accumulateur: valeur,
                    operateur: op,
                });
            }
        }

        self.attend_operande = true;
    }

    fn egal(&mut self) {
        let Some(a) = self.attente else {
            return;
        };

        self.valider_affichage();

        // Juste après un opérateur, l’affichage est encore l’opérande validé :
        // "5 + =" donne 5 + 5.
        let valeur = a.operateur.appliquer(a.accumulateur, lire_nombre(&self.affichage));

        self.affichage = formater_nombre(valeur);
        self.equation.clear();
        self.attente = None;
        self.attend_operande = false;
        self.resultat_affiche = true;
    }

    fn pourcent(&mut self) {
        self.affichage = formater_nombre(lire_nombre(&self.affichage) / 100.0);
    }

    fn signe(&mut self) {
        match self.affichage.strip_prefix('-') {
            Some(reste) => self.affichage = reste.to_string(),
            None => self.affichage.insert(0, '-'),
        }
    }

    fn retour(&mut self) {
        let n = self.affichage.chars().count();
        if n == 1 || (n == 2 && self.affichage.starts_with('-')) {
            self.affichage = AFFICHAGE_INITIAL.to_string();
        } else {
            self.affichage.pop();
        }
    }

    fn rappel(&mut self, valeur: String) {
        self.resultat_affiche = false;
        if self.equation.is_empty() || self.attend_operande {
            self.equation = valeur.clone();
        }
        self.affichage = valeur;
    }
}

/// Réducteur : applique un évènement et renvoie le nouvel état (l’ancien reste intact).
pub fn appliquer(etat: &EtatCalc, ev: Evenement) -> EtatCalc {
    let mut s = etat.clone();

    tracing::trace!(?ev, "moteur: évènement");

    match ev {
        Evenement::Chiffre(d) => s.chiffre(d),
        Evenement::Virgule => s.virgule(),
        Evenement::Operateur(op) => s.appuyer_operateur(op),
        Evenement::Egal => s.egal(),
        Evenement::Pourcent => s.pourcent(),
        Evenement::Signe => s.signe(),
        Evenement::Retour => s.retour(),
        Evenement::ToutEffacer => s.effacer(),
        Evenement::Rappel(v) => s.rappel(v),
    }

    tracing::trace!(affichage = %s.affichage, equation = %s.equation, "moteur: état");

    s
}

/// Une instance de calculatrice (une par page montée).
/// Seule surface de mutation : les opérations ci-dessous, toutes via `appliquer`.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: EtatCalc,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn affichage(&self) -> &str {
        self.etat.affichage()
    }

    pub fn equation(&self) -> &str {
        self.etat.equation()
    }

    pub fn historique(&self) -> &[String] {
        self.etat.historique().entrees()
    }

    pub fn traiter(&mut self, ev: Evenement) {
        self.etat = appliquer(&self.etat, ev);
    }

    /// `d` hors '0'..='9' : ignoré.
    pub fn chiffre(&mut self, d: char) {
        if let Some(ev) = Evenement::chiffre(d) {
            self.traiter(ev);
        }
    }

    pub fn virgule(&mut self) {
        self.traiter(Evenement::Virgule);
    }

    pub fn operateur(&mut self, op: Operateur) {
        self.traiter(Evenement::Operateur(op));
    }

    pub fn egal(&mut self) {
        self.traiter(Evenement::Egal);
    }

    pub fn pourcent(&mut self) {
        self.traiter(Evenement::Pourcent);
    }

    pub fn changer_signe(&mut self) {
        self.traiter(Evenement::Signe);
    }

    pub fn retour(&mut self) {
        self.traiter(Evenement::Retour);
    }

    pub fn tout_effacer(&mut self) {
        self.traiter(Evenement::ToutEffacer);
    }

    pub fn rappeler(&mut self, valeur: impl Into<String>) {
        self.traiter(Evenement::Rappel(valeur.into()));
    }
}
