// src/noyau/epargne.rs
//
// Calculatrice d’épargne : versement mensuel pour atteindre un objectif
// (annuité de capitalisation, intérêts mensuels), libellés anglais / coréens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurEpargne {
    #[error("Please enter valid values.")]
    ValeursInvalides,
}

impl ErreurEpargne {
    /// Message dans la langue de la page.
    pub fn message(&self, langue: Langue) -> &'static str {
        match self {
            ErreurEpargne::ValeursInvalides => langue.libelles().valeurs_invalides,
        }
    }
}

/* ------------------------ Langue de la page ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Langue {
    #[default]
    En,
    Ko,
}

/// Textes de la page épargne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Libelles {
    pub titre: &'static str,
    pub sous_titre: &'static str,
    pub devise: &'static str,
    pub objectif: &'static str,
    pub periode: &'static str,
    pub taux: &'static str,
    pub resultat: &'static str,
    pub versement_mensuel: &'static str,
    pub valeurs_invalides: &'static str,
}

const LIBELLES_EN: Libelles = Libelles {
    titre: "Savings Calculator",
    sous_titre: "Calculate monthly deposit to achieve target amount",
    devise: "Currency",
    objectif: "Target Amount",
    periode: "Period (months)",
    taux: "Annual Interest Rate (%)",
    resultat: "Result",
    versement_mensuel: "Monthly Deposit:",
    valeurs_invalides: "Please enter valid values.",
};

const LIBELLES_KO: Libelles = Libelles {
    titre: "저축 계산기",
    sous_titre: "목표 금액 달성을 위한 월 납입액 계산",
    devise: "통화",
    objectif: "목표 금액",
    periode: "기간 (개월)",
    taux: "연이율 (%)",
    resultat: "결과",
    versement_mensuel: "월 납입액:",
    valeurs_invalides: "유효한 값을 입력해주세요.",
};

impl Langue {
    pub const TOUTES: [Langue; 2] = [Langue::En, Langue::Ko];

    pub fn code(self) -> &'static str {
        match self {
            Langue::En => "en",
            Langue::Ko => "ko",
        }
    }

    pub fn libelles(self) -> &'static Libelles {
        match self {
            Langue::En => &LIBELLES_EN,
            Langue::Ko => &LIBELLES_KO,
        }
    }

    /// Locale système ou navigateur ("ko-KR", "ko_KR.UTF-8", …) : coréen si elle commence par "ko".
    pub fn depuis_locale(locale: &str) -> Langue {
        if locale.trim().to_ascii_lowercase().starts_with("ko") {
            Langue::Ko
        } else {
            Langue::En
        }
    }

    /// Première locale non vide parmi les candidates (ordre de priorité), sinon anglais.
    pub fn depuis_locales<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Langue {
        candidates
            .into_iter()
            .flatten()
            .find(|l| !l.trim().is_empty())
            .map(Langue::depuis_locale)
            .unwrap_or_default()
    }
}

impl fmt::Display for Langue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("langue inconnue {0:?} (attendu : en, ko)")]
pub struct ErreurLangue(String);

impl FromStr for Langue {
    type Err = ErreurLangue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Langue::TOUTES
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or(ErreurLangue(s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Devise {
    #[default]
    Krw,
    Usd,
    Cny,
    Eur,
    Inr,
    Jpy,
}

impl Devise {
    pub const TOUTES: [Devise; 6] = [
        Devise::Krw,
        Devise::Usd,
        Devise::Cny,
        Devise::Eur,
        Devise::Inr,
        Devise::Jpy,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Devise::Krw => "KRW",
            Devise::Usd => "USD",
            Devise::Cny => "CNY",
            Devise::Eur => "EUR",
            Devise::Inr => "INR",
            Devise::Jpy => "JPY",
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Devise::Krw => "₩",
            Devise::Usd => "$",
            Devise::Cny | Devise::Jpy => "¥",
            Devise::Eur => "€",
            Devise::Inr => "₹",
        }
    }
}

impl fmt::Display for Devise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Paramètres d’un plan d’épargne.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanEpargne {
    pub objectif: f64,
    pub mois: u32,
    /// Taux annuel en %.
    pub taux_annuel: f64,
}

impl Default for PlanEpargne {
    fn default() -> Self {
        Self {
            objectif: 1_000_000.0,
            mois: 12,
            taux_annuel: 3.0,
        }
    }
}

impl PlanEpargne {
    /// Versement mensuel arrondi à l’unité supérieure.
    ///
    /// r = taux/100/12 ; r == 0 -> objectif/n ; sinon objectif·r / ((1+r)^n - 1).
    pub fn versement_mensuel(&self) -> Result<f64, ErreurEpargne> {
        let valide = self.objectif.is_finite()
            && self.objectif > 0.0
            && self.mois > 0
            && self.taux_annuel.is_finite()
            && self.taux_annuel >= 0.0;
        if !valide {
            return Err(ErreurEpargne::ValeursInvalides);
        }

        let r = self.taux_annuel / 100.0 / 12.0;
        let n = self.mois as i32;

        let m = if r == 0.0 {
            self.objectif / f64::from(self.mois)
        } else {
            self.objectif * r / ((1.0 + r).powi(n) - 1.0)
        };

        Ok(m.ceil())
    }
}

/// Montant avec séparateurs de milliers : 1234567 -> "1,234,567".
pub fn formater_montant(montant: f64) -> String {
    let entier = format!("{:.0}", montant.abs());
    let mut out = String::with_capacity(entier.len() + entier.len() / 3 + 1);

    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (entier.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if montant < 0.0 && entier != "0" {
        out.insert(0, '-');
    }
    out
}
