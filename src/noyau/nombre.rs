// src/noyau/nombre.rs
//
// Lecture / écriture des nombres affichés par la calculatrice.
//
// - Lecture : sémantique “préfixe” (comme parseFloat) : "12." -> 12, "1e+" -> 1,
//   "Infinity" -> +∞ ; aucun préfixe valide -> NaN.
// - Écriture : règle déterministe (plus courte représentation qui relit la même valeur),
//   exposant explicite hors de [1e-6, 1e21).

/// Littéral des infinis (lu et écrit).
const INFINI: &str = "Infinity";

/// Bornes de l’écriture décimale sans exposant.
const SEUIL_PETIT: f64 = 1e-6;
const SEUIL_GRAND: f64 = 1e21;

/// Plus long préfixe de `s` qui forme un nombre décimal valide.
fn prefixe_numerique(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with(INFINI) {
        return Some(&s[..i + INFINI.len()]);
    }

    let mut chiffres = 0usize;

    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        chiffres += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            chiffres += 1;
        }
    }
    if chiffres == 0 {
        return None;
    }

    // Exposant : seulement s’il est complet (au moins un chiffre)
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    Some(&s[..i])
}

/// Lit la valeur numérique d’un affichage (NaN si aucun préfixe valide).
pub fn lire_nombre(s: &str) -> f64 {
    let Some(p) = prefixe_numerique(s.trim_start()) else {
        return f64::NAN;
    };

    // "12." : le point final ne change pas la valeur
    let p = p.strip_suffix('.').unwrap_or(p);

    p.parse::<f64>().unwrap_or(f64::NAN)
}

/// Écrit un résultat de façon déterministe.
///
/// - NaN / ±Infinity écrits tels quels
/// - -0 -> "0"
/// - 1e-6 <= |x| < 1e21 : décimal sans exposant
/// - sinon : mantisse la plus courte + exposant signé ("1e+21", "1.5e-7")
pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            INFINI.to_string()
        } else {
            format!("-{INFINI}")
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if (SEUIL_PETIT..SEUIL_GRAND).contains(&abs) {
        return format!("{x}");
    }

    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lecture_prefixe() {
        assert_eq!(lire_nombre("12"), 12.0);
        assert_eq!(lire_nombre("12."), 12.0);
        assert_eq!(lire_nombre("0."), 0.0);
        assert_eq!(lire_nombre("-3.5"), -3.5);
        assert_eq!(lire_nombre("1e+"), 1.0);
        assert_eq!(lire_nombre("1e+21"), 1e21);
        assert_eq!(lire_nombre("2.5e-7"), 2.5e-7);
        assert_eq!(lire_nombre("Infinity"), f64::INFINITY);
        assert_eq!(lire_nombre("-Infinity"), f64::NEG_INFINITY);
        assert!(lire_nombre("NaN").is_nan());
        assert!(lire_nombre("-").is_nan());
        // "Infinit" n’est pas un préfixe d’infini valide
        assert!(lire_nombre("Infinit").is_nan());
    }

    #[test]
    fn lecture_zero_negatif() {
        let z = lire_nombre("-0");
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }

    #[test]
    fn ecriture_speciaux() {
        assert_eq!(formater_nombre(f64::NAN), "NaN");
        assert_eq!(formater_nombre(f64::INFINITY), "Infinity");
        assert_eq!(formater_nombre(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(formater_nombre(-0.0), "0");
    }

    #[test]
    fn ecriture_decimale() {
        assert_eq!(formater_nombre(8.0), "8");
        assert_eq!(formater_nombre(-13.0), "-13");
        assert_eq!(formater_nombre(0.5), "0.5");
        assert_eq!(formater_nombre(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(formater_nombre(0.000001), "0.000001");
        assert_eq!(formater_nombre(1e20), "100000000000000000000");
    }

    #[test]
    fn ecriture_exposant() {
        assert_eq!(formater_nombre(1e21), "1e+21");
        assert_eq!(formater_nombre(-1.5e300), "-1.5e+300");
        assert_eq!(formater_nombre(1.5e-7), "1.5e-7");
    }

    #[test]
    fn relecture_stable() {
        for x in [1.0 / 3.0, 2.0 / 3.0, 1e21, 123.456, 1.5e-7, -42.0] {
            assert_eq!(lire_nombre(&formater_nombre(x)), x, "x={x}");
        }
    }
}
