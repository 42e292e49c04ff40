// src/noyau/json.rs
//
// Formateur JSON : valide puis ré-indente (2 espaces, ordre des clés conservé).

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

/// Indentation de sortie (comme JSON.stringify(v, null, 2)).
const INDENTATION: &[u8] = b"  ";

/// Aide affichée sous une entrée invalide.
pub const AIDE_JSON_INVALIDE: &str = "Invalid JSON format\n\n\
Please check your JSON. The JSON format must follow these rules:\n\n\
1) All keys must be enclosed in double quotes.\n\
2) String values must also be enclosed in double quotes.\n\
3) Each key-value pair must be separated by a colon (:), and pairs must be separated by commas (,).";

#[derive(Debug, Error)]
pub enum ErreurJson {
    #[error("JSON invalide : {0}")]
    Invalide(#[from] serde_json::Error),
    #[error("sortie non UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Entrée vide -> sortie vide ; sinon JSON ré-indenté.
pub fn formater_json(entree: &str) -> Result<String, ErreurJson> {
    if entree.trim().is_empty() {
        return Ok(String::new());
    }

    let valeur: serde_json::Value = serde_json::from_str(entree)?;

    let mut tampon = Vec::with_capacity(entree.len() * 2);
    let formateur = PrettyFormatter::with_indent(INDENTATION);
    let mut ser = serde_json::Serializer::with_formatter(&mut tampon, formateur);
    valeur.serialize(&mut ser)?;

    Ok(String::from_utf8(tampon)?)
}
