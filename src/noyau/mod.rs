//! Noyau (sans egui)
//!
//! Organisation interne :
//! - moteur.rs         : calculatrice 4 opérations (réducteur pur + Calculatrice)
//! - operateur.rs      : + - × ÷ (arithmétique flottante brute)
//! - historique.rs     : nombres récents (10 max, magnitudes, sans doublon)
//! - nombre.rs         : lecture préfixe / écriture déterministe des nombres
//! - convertisseurs.rs : 16:9, HEX -> RGB, px <-> rem
//! - epargne.rs        : versement mensuel (annuité)
//! - json.rs           : formateur JSON

pub mod convertisseurs;
pub mod epargne;
pub mod historique;
pub mod json;
pub mod moteur;
pub mod nombre;
pub mod operateur;

#[cfg(test)]
mod tests_moteur;

// API publique minimale
pub use moteur::{Calculatrice, Evenement};
pub use operateur::Operateur;
