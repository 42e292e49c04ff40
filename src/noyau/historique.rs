// src/noyau/historique.rs
//
// Historique des nombres récents (raccourcis de rappel).
// Invariants : <= CAPACITE entrées, sans doublon, sans "0", magnitudes seulement
// (pas de '-' en tête), plus récent en premier.

/// Nombre maximal d’entrées conservées.
pub const CAPACITE: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: Vec<String>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre un affichage : signe retiré, "0" et doublons ignorés,
    /// tronqué aux CAPACITE plus récents. Renvoie true si ajouté.
    pub fn enregistrer(&mut self, affichage: &str) -> bool {
        let magnitude = affichage.strip_prefix('-').unwrap_or(affichage);

        if magnitude == "0" || self.contient(magnitude) {
            return false;
        }

        self.entrees.insert(0, magnitude.to_string());
        self.entrees.truncate(CAPACITE);
        true
    }

    pub fn contient(&self, valeur: &str) -> bool {
        self.entrees.iter().any(|e| e == valeur)
    }

    pub fn entrees(&self) -> &[String] {
        &self.entrees
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
