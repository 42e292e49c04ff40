//! src/app/clavier.rs
//!
//! Adaptateur clavier -> évènements du moteur.
//!
//! Table (figée) :
//!   0-9 -> chiffre ; . , -> virgule ; + - -> opérateur ; * -> × ; / -> ÷
//!   Enter = -> égal ; Backspace -> retour ; Escape -> AC ; % -> pourcent
//!
//! Cmd/Ctrl enfoncé : on ne capte rien (raccourcis de l’hôte : copier, etc.).

use eframe::egui;

use crate::noyau::{Evenement, Operateur};

/// Touches nommées utiles (le reste passe par le texte tapé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheNommee {
    Entree,
    Retour,
    Echap,
}

/// Touche abstraite, indépendante d’egui.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Texte(char),
    Nommee(ToucheNommee),
}

/// Traduction pure : touche + “commande” (Cmd ou Ctrl enfoncé) -> évènement.
pub fn evenement_pour(touche: Touche, commande: bool) -> Option<Evenement> {
    if commande {
        return None;
    }

    match touche {
        Touche::Texte(c) => match c {
            '0'..='9' => Evenement::chiffre(c),
            '.' | ',' => Some(Evenement::Virgule),
            '+' | '-' | '*' | '/' => Operateur::depuis_symbole(c).map(Evenement::Operateur),
            '=' => Some(Evenement::Egal),
            '%' => Some(Evenement::Pourcent),
            _ => None,
        },
        Touche::Nommee(ToucheNommee::Entree) => Some(Evenement::Egal),
        Touche::Nommee(ToucheNommee::Retour) => Some(Evenement::Retour),
        Touche::Nommee(ToucheNommee::Echap) => Some(Evenement::ToutEffacer),
    }
}

fn est_commande(m: &egui::Modifiers) -> bool {
    m.command || m.ctrl || m.mac_cmd
}

/// Extrait les évènements moteur de la frame egui courante.
///
/// - Texte (Event::Text) : chiffres / opérateurs, quelle que soit la disposition du clavier
/// - Touches (Event::Key, pressées) : Enter, Backspace, Escape
pub fn evenements_frame(input: &egui::InputState) -> Vec<Evenement> {
    let commande_globale = est_commande(&input.modifiers);
    let mut out = Vec::new();

    for ev in &input.events {
        match ev {
            egui::Event::Text(texte) => {
                for c in texte.chars() {
                    if let Some(e) = evenement_pour(Touche::Texte(c), commande_globale) {
                        out.push(e);
                    }
                }
            }
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                let nommee = match key {
                    egui::Key::Enter => ToucheNommee::Entree,
                    egui::Key::Backspace => ToucheNommee::Retour,
                    egui::Key::Escape => ToucheNommee::Echap,
                    _ => continue,
                };
                let commande = commande_globale || est_commande(modifiers);
                if let Some(e) = evenement_pour(Touche::Nommee(nommee), commande) {
                    out.push(e);
                }
            }
            _ => {}
        }
    }

    out
}
