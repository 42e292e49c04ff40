// src/noyau/convertisseurs.rs
//
// Convertisseurs “front” : ratio 16:9, HEX -> RGB, px <-> rem.
// Fonctions pures : texte saisi -> texte affiché (ou erreur typée).

use thiserror::Error;

use super::nombre::lire_nombre;

/// Base CSS : 16px = 1rem.
pub const BASE_REM_PX: f64 = 16.0;

const RATIO_LARGEUR: f64 = 16.0;
const RATIO_HAUTEUR: f64 = 9.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurConversion {
    #[error("valeur non numérique : {0:?}")]
    NonNumerique(String),
    #[error("la dimension doit être strictement positive : {0}")]
    DimensionNonPositive(f64),
    #[error("couleur HEX invalide (attendu #RRGGBB) : {0:?}")]
    HexInvalide(String),
}

fn lire(s: &str) -> Result<f64, ErreurConversion> {
    let v = lire_nombre(s.trim());
    if v.is_nan() {
        return Err(ErreurConversion::NonNumerique(s.to_string()));
    }
    Ok(v)
}

fn lire_dimension(s: &str) -> Result<f64, ErreurConversion> {
    let v = lire(s)?;
    if v <= 0.0 {
        return Err(ErreurConversion::DimensionNonPositive(v));
    }
    Ok(v)
}

/// Largeur -> hauteur 16:9 (2 décimales).
pub fn hauteur_16_9(largeur: &str) -> Result<String, ErreurConversion> {
    let l = lire_dimension(largeur)?;
    Ok(format!("{:.2}", l * RATIO_HAUTEUR / RATIO_LARGEUR))
}

/// Hauteur -> largeur 16:9 (2 décimales).
pub fn largeur_16_9(hauteur: &str) -> Result<String, ErreurConversion> {
    let h = lire_dimension(hauteur)?;
    Ok(format!("{:.2}", h * RATIO_LARGEUR / RATIO_HAUTEUR))
}

/// "#RRGGBB" (dièse optionnel, casse libre) -> [r, g, b].
pub fn lire_hex(hex: &str) -> Result<[u8; 3], ErreurConversion> {
    let invalide = || ErreurConversion::HexInvalide(hex.to_string());

    let h = hex.strip_prefix('#').unwrap_or(hex);
    if h.len() != 6 || !h.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalide());
    }

    let canal = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).map_err(|_| invalide());
    Ok([canal(0)?, canal(2)?, canal(4)?])
}

/// "#RRGGBB" -> "rgb(r, g, b)".
pub fn hex_vers_rgb(hex: &str) -> Result<String, ErreurConversion> {
    let [r, g, b] = lire_hex(hex)?;
    Ok(format!("rgb({r}, {g}, {b})"))
}

/// px -> rem (4 décimales).
pub fn px_vers_rem(px: &str) -> Result<String, ErreurConversion> {
    let v = lire(px)?;
    Ok(format!("{:.4}", v / BASE_REM_PX))
}

/// rem -> px (entier).
pub fn rem_vers_px(rem: &str) -> Result<String, ErreurConversion> {
    let v = lire(rem)?;
    Ok(format!("{:.0}", v * BASE_REM_PX))
}
