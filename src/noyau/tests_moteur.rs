//! Tests du moteur : séquences de touches + invariants.
//!
//! - séquences tirées de l’usage réel (chaînage, opérateurs répétés, reprise après résultat)
//! - invariants : AC, historique borné, réducteur pur
//! - RNG déterministe (seed fixe) pour les séquences aléatoires

use super::historique::CAPACITE;
use super::moteur::{appliquer, Calculatrice, EtatCalc, Evenement};
use super::operateur::Operateur;

/// Tape une séquence “clavier” : chiffres, . + - * / = % ~ (signe) < (retour) C (AC).
fn tape(calc: &mut Calculatrice, touches: &str) {
    for t in touches.chars() {
        match t {
            '0'..='9' => calc.chiffre(t),
            '.' => calc.virgule(),
            '=' => calc.egal(),
            '%' => calc.pourcent(),
            '~' => calc.changer_signe(),
            '<' => calc.retour(),
            'C' => calc.tout_effacer(),
            ' ' => {}
            _ => {
                let op = Operateur::depuis_symbole(t)
                    .unwrap_or_else(|| panic!("touche inconnue: {t:?}"));
                calc.operateur(op);
            }
        }
    }
}

fn calc_apres(touches: &str) -> Calculatrice {
    let mut c = Calculatrice::new();
    tape(&mut c, touches);
    c
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn etat_initial() {
    let c = Calculatrice::new();
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.equation(), "");
    assert_eq!(c.etat().accumulateur(), None);
    assert_eq!(c.etat().operateur(), None);
    assert!(!c.etat().attend_operande());
    assert!(!c.etat().resultat_affiche());
    assert!(c.historique().is_empty());
}

#[test]
fn chiffres_concatenes() {
    let c = calc_apres("12045");
    assert_eq!(c.affichage(), "12045");
    assert_eq!(c.equation(), "12045");
}

#[test]
fn zero_initial_remplace() {
    let c = calc_apres("007");
    assert_eq!(c.affichage(), "7");
    assert_eq!(c.equation(), "7");
}

#[test]
fn zero_decimal_non_remplace() {
    let c = calc_apres("0.05");
    assert_eq!(c.affichage(), "0.05");
    assert_eq!(c.equation(), "0.05");
}

#[test]
fn virgule_idempotente() {
    let c = calc_apres("3..1.");
    assert_eq!(c.affichage(), "3.1");
}

#[test]
fn virgule_apres_operateur() {
    let c = calc_apres("4+.5");
    assert_eq!(c.affichage(), "0.5");
    assert_eq!(c.equation(), "4 +");
    assert!(!c.etat().attend_operande());
}

#[test]
fn chiffre_hors_plage_ignore() {
    let mut c = calc_apres("12");
    c.chiffre('x');
    c.traiter(Evenement::Chiffre(12));
    assert_eq!(c.affichage(), "12");
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn aller_retour_simple() {
    let c = calc_apres("5+3=");
    assert_eq!(c.affichage(), "8");
    assert_eq!(c.equation(), "");
    assert_eq!(c.etat().accumulateur(), None);
    assert_eq!(c.etat().operateur(), None);
    assert!(!c.etat().attend_operande());
}

#[test]
fn chainage_gauche_a_droite() {
    let mut c = calc_apres("10+5");
    c.operateur(Operateur::Moins);
    assert_eq!(c.affichage(), "15");
    assert_eq!(c.equation(), "10 + 5 -");
    assert_eq!(c.etat().accumulateur(), Some(15.0));

    tape(&mut c, "2=");
    assert_eq!(c.affichage(), "13");
    assert_eq!(c.equation(), "");
}

#[test]
fn operateurs_consecutifs_remplacent() {
    let mut c = calc_apres("12+");
    c.operateur(Operateur::Moins);
    assert_eq!(c.equation(), "12 -");
    assert_eq!(c.etat().accumulateur(), Some(12.0));
    assert_eq!(c.etat().operateur(), Some(Operateur::Moins));

    c.operateur(Operateur::Fois);
    assert_eq!(c.equation(), "12 ×");
    assert_eq!(c.affichage(), "12");

    tape(&mut c, "3=");
    assert_eq!(c.affichage(), "36");
}

#[test]
fn egal_sans_operateur_ne_fait_rien() {
    let c = calc_apres("42=");
    assert_eq!(c.affichage(), "42");
    assert_eq!(c.equation(), "42");
}

#[test]
fn egal_juste_apres_operateur_double() {
    // l’affichage est encore l’opérande validé : 5 + 5
    let c = calc_apres("5+=");
    assert_eq!(c.affichage(), "10");
    let c = calc_apres("6×=");
    assert_eq!(c.affichage(), "36");
}

#[test]
fn division_par_zero_affichee() {
    assert_eq!(calc_apres("1÷0=").affichage(), "Infinity");
    assert_eq!(calc_apres("1~÷0=").affichage(), "-Infinity");
    assert_eq!(calc_apres("0÷0=").affichage(), "NaN");
}

#[test]
fn flottants_natifs() {
    assert_eq!(calc_apres(".1+.2=").affichage(), "0.30000000000000004");
    assert_eq!(calc_apres("7÷2=").affichage(), "3.5");
    assert_eq!(calc_apres("3-5=").affichage(), "-2");
}

/* ------------------------ Reprise après résultat ------------------------ */

#[test]
fn chiffre_apres_resultat_repart() {
    let mut c = calc_apres("5+3=");
    c.chiffre('7');
    assert_eq!(c.affichage(), "7");
    assert_eq!(c.equation(), "7");
    // le résultat est passé dans l’historique
    assert!(c.etat().historique().contient("8"));
}

#[test]
fn operateur_apres_resultat_continue() {
    let c = calc_apres("5+3=×2=");
    assert_eq!(c.affichage(), "16");
}

#[test]
fn virgule_apres_resultat_prolonge() {
    let c = calc_apres("5+3=.");
    assert_eq!(c.affichage(), "8.");
    assert_eq!(c.equation(), "8.");
}

#[test]
fn resultat_marque_puis_saisie() {
    let mut c = calc_apres("5+3=");
    assert!(c.etat().resultat_affiche());
    c.virgule();
    assert!(!c.etat().resultat_affiche());

    // ± / % sur un résultat : toujours un résultat
    let mut c = calc_apres("5+3=~");
    assert!(c.etat().resultat_affiche());
    c.chiffre('7');
    assert_eq!(c.affichage(), "7");
    assert!(c.etat().historique().contient("8"));
}

#[test]
fn signe_puis_chiffre() {
    // calculatrice neuve : "-0" n’est pas "0", le chiffre s’ajoute
    let c = calc_apres("~5");
    assert_eq!(c.affichage(), "-05");
    assert_eq!(c.equation(), "-05");
    assert!(c.historique().is_empty());

    // même chose après AC
    let c = calc_apres("9+1=C~5");
    assert_eq!(c.affichage(), "-05");

    // même comportement sur un opérande en cours d’édition
    assert_eq!(calc_apres("5+0~3").affichage(), "-03");
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn pourcent_transforme_affichage_seulement() {
    let mut c = calc_apres("7+50");
    c.pourcent();
    assert_eq!(c.affichage(), "0.5");
    assert_eq!(c.equation(), "7 +");
    assert_eq!(c.etat().accumulateur(), Some(7.0));
    assert_eq!(c.etat().operateur(), Some(Operateur::Plus));
    assert!(!c.historique().iter().any(|h| h == "0.5"));
}

#[test]
fn signe_bascule() {
    let mut c = calc_apres("12");
    c.changer_signe();
    assert_eq!(c.affichage(), "-12");
    assert_eq!(c.equation(), "12");
    c.changer_signe();
    assert_eq!(c.affichage(), "12");
}

#[test]
fn retour_cas_limites() {
    let mut c = calc_apres("5");
    c.retour();
    assert_eq!(c.affichage(), "0");

    let mut c = calc_apres("5~");
    assert_eq!(c.affichage(), "-5");
    c.retour();
    assert_eq!(c.affichage(), "0");

    let mut c = calc_apres("12");
    c.retour();
    assert_eq!(c.affichage(), "1");

    let mut c = calc_apres("0");
    c.retour();
    assert_eq!(c.affichage(), "0");
}

/* ------------------------ AC + historique ------------------------ */

#[test]
fn ac_conserve_historique() {
    let mut c = calc_apres("9+4×");
    let h = c.historique().to_vec();
    assert!(!h.is_empty());

    c.tout_effacer();
    assert_eq!(c.etat().accumulateur(), None);
    assert_eq!(c.etat().operateur(), None);
    assert!(!c.etat().attend_operande());
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.equation(), "");
    assert_eq!(c.historique(), h.as_slice());
}

#[test]
fn historique_validations() {
    let c = calc_apres("10+5-2=");
    assert_eq!(c.historique(), ["2", "5", "10"]);
}

#[test]
fn historique_magnitudes() {
    let c = calc_apres("8~+3=");
    assert_eq!(c.historique(), ["3", "8"]);
}

#[test]
fn rappel_depuis_historique() {
    let mut c = calc_apres("12+");
    c.rappeler("12");
    assert_eq!(c.affichage(), "12");
    // drapeau levé : l’équation suit le rappel
    assert_eq!(c.equation(), "12");

    let mut c = calc_apres("12+3");
    c.rappeler("7");
    assert_eq!(c.affichage(), "7");
    assert_eq!(c.equation(), "12 +");
    c.egal();
    assert_eq!(c.affichage(), "19");
}

#[test]
fn rappel_sur_calculatrice_vide() {
    let mut c = Calculatrice::new();
    c.rappeler("25");
    assert_eq!(c.affichage(), "25");
    assert_eq!(c.equation(), "25");
}

/* ------------------------ Réducteur pur ------------------------ */

#[test]
fn reducteur_ne_modifie_pas_l_entree() {
    let avant = EtatCalc::default();
    let apres = appliquer(&avant, Evenement::Chiffre(4));
    assert_eq!(avant.affichage(), "0");
    assert_eq!(apres.affichage(), "4");
}

/* ------------------------ Séquences aléatoires (déterministes) ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn pick(&mut self, n: u32) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 32) as u32) % n
    }
}

fn evenement_aleatoire(rng: &mut Rng, etat: &EtatCalc) -> Evenement {
    match rng.pick(12) {
        0..=3 => Evenement::Chiffre(rng.pick(10) as u8),
        4 => Evenement::Virgule,
        5 => Evenement::Operateur(match rng.pick(4) {
            0 => Operateur::Plus,
            1 => Operateur::Moins,
            2 => Operateur::Fois,
            _ => Operateur::Divise,
        }),
        6 => Evenement::Egal,
        7 => Evenement::Pourcent,
        8 => Evenement::Signe,
        9 => Evenement::Retour,
        10 => Evenement::ToutEffacer,
        _ => match etat.historique().entrees().first() {
            Some(v) => Evenement::Rappel(v.clone()),
            None => Evenement::Chiffre(1),
        },
    }
}

#[test]
fn invariants_sur_sequences_aleatoires() {
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..200 {
        let mut etat = EtatCalc::default();
        for _ in 0..60 {
            let ev = evenement_aleatoire(&mut rng, &etat);
            let efface = ev == Evenement::ToutEffacer;
            let h_avant = etat.historique().clone();

            etat = appliquer(&etat, ev);

            // jamais d’affichage vide
            assert!(!etat.affichage().is_empty());

            // accumulateur <=> opérateur
            assert_eq!(etat.accumulateur().is_some(), etat.operateur().is_some());

            // historique borné, sans doublon, sans "0", sans signe
            let h = etat.historique().entrees();
            assert!(h.len() <= CAPACITE);
            assert!(h.iter().all(|e| e != "0" && !e.starts_with('-')));
            for (i, e) in h.iter().enumerate() {
                assert!(!h[i + 1..].contains(e), "doublon: {e}");
            }

            if efface {
                assert_eq!(etat.affichage(), "0");
                assert_eq!(etat.equation(), "");
                assert_eq!(etat.accumulateur(), None);
                assert!(!etat.attend_operande());
                assert!(!etat.resultat_affiche());
                assert_eq!(etat.historique(), &h_avant);
            }
        }
    }
}
