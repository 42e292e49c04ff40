// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppOutils (etat.rs) pour natif + wasm
// - Une page à la fois (barre de navigation en haut, voir app.rs)
// - Calculatrice : gros boutons (tactile) + panneau “Recents” (rappel d’historique)
//
// Note :
// - Le clavier de la calculatrice est géré dans app.rs (clavier.rs), pas ici :
//   les autres pages ont des champs texte qui doivent garder leurs touches.

use eframe::egui;

use super::etat::{AppOutils, EtatEpargne, EtatFront, EtatJson, OngletFront, Page};
use crate::noyau::epargne::{formater_montant, Devise, Langue};
use crate::noyau::{Calculatrice, Operateur};

/// Taille des touches du pavé.
const TOUCHE: [f32; 2] = [64.0, 52.0];

impl AppOutils {
    /// Barre de navigation (à appeler dans un TopBottomPanel).
    pub fn ui_navigation(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.page;
        ui.horizontal_wrapped(|ui| {
            for p in Page::TOUTES {
                ui.selectable_value(&mut choix, p, p.titre());
            }
        });
        self.aller_a(choix);
    }

    /// UI principale de la page courante.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.page {
                Page::Calculatrice => ui_calculatrice(&mut self.calc, ui),
                Page::Front => ui_front(&mut self.front, ui),
                Page::Epargne => ui_epargne(&mut self.epargne, ui),
                Page::Json => ui_json(&mut self.json, ui),
            });
    }
}

/* ------------------------ Calculatrice ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Bouton {
    Chiffre(char),
    Virgule,
    Op(Operateur),
    Egal,
    Pourcent,
    Signe,
    Retour,
    ToutEffacer,
}

impl Bouton {
    fn libelle(self) -> String {
        match self {
            Bouton::Chiffre(c) => c.to_string(),
            Bouton::Virgule => ".".into(),
            Bouton::Op(op) => op.to_string(),
            Bouton::Egal => "=".into(),
            Bouton::Pourcent => "%".into(),
            Bouton::Signe => "+/-".into(),
            Bouton::Retour => "⌫".into(),
            Bouton::ToutEffacer => "AC".into(),
        }
    }

    fn appliquer(self, calc: &mut Calculatrice) {
        match self {
            Bouton::Chiffre(c) => calc.chiffre(c),
            Bouton::Virgule => calc.virgule(),
            Bouton::Op(op) => calc.operateur(op),
            Bouton::Egal => calc.egal(),
            Bouton::Pourcent => calc.pourcent(),
            Bouton::Signe => calc.changer_signe(),
            Bouton::Retour => calc.retour(),
            Bouton::ToutEffacer => calc.tout_effacer(),
        }
    }
}

/// Disposition du pavé (4 colonnes).
const PAVE: [[Bouton; 4]; 5] = [
    [
        Bouton::ToutEffacer,
        Bouton::Signe,
        Bouton::Pourcent,
        Bouton::Op(Operateur::Divise),
    ],
    [
        Bouton::Chiffre('7'),
        Bouton::Chiffre('8'),
        Bouton::Chiffre('9'),
        Bouton::Op(Operateur::Fois),
    ],
    [
        Bouton::Chiffre('4'),
        Bouton::Chiffre('5'),
        Bouton::Chiffre('6'),
        Bouton::Op(Operateur::Moins),
    ],
    [
        Bouton::Chiffre('1'),
        Bouton::Chiffre('2'),
        Bouton::Chiffre('3'),
        Bouton::Op(Operateur::Plus),
    ],
    [
        Bouton::Chiffre('0'),
        Bouton::Retour,
        Bouton::Virgule,
        Bouton::Egal,
    ],
];

fn ui_calculatrice(calc: &mut Calculatrice, ui: &mut egui::Ui) {
    ui.heading("Calculator");
    ui.add_space(6.0);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui_ecran(calc, ui);
            ui.add_space(4.0);
            ui.small(
                "Keyboard usage: Number keys (0-9), Operators (+, -, *, /), Enter (=), ESC (AC), Backspace",
            );
            ui.add_space(6.0);
            ui_pave(calc, ui);
        });

        ui.separator();

        ui.vertical(|ui| ui_recents(calc, ui));
    });
}

fn ui_ecran(calc: &Calculatrice, ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_min_width(4.0 * TOUCHE[0] + 3.0 * 6.0);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(egui::RichText::new(calc.equation()).monospace().weak());
                ui.label(
                    egui::RichText::new(calc.affichage())
                        .monospace()
                        .size(34.0)
                        .strong(),
                );
            });
        });
}

fn ui_pave(calc: &mut Calculatrice, ui: &mut egui::Ui) {
    // Opérateur en attente d’opérande : surligné
    let etat = calc.etat();
    let surligne = etat.operateur().filter(|_| etat.attend_operande());

    let mut clic: Option<Bouton> = None;

    egui::Grid::new("pave_calculatrice")
        .num_columns(4)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for ligne in PAVE {
                for b in ligne {
                    let actif = matches!(b, Bouton::Op(op) if Some(op) == surligne);
                    let bouton = egui::Button::new(egui::RichText::new(b.libelle()).size(20.0))
                        .selected(actif);
                    if ui.add_sized(TOUCHE, bouton).clicked() {
                        clic = Some(b);
                    }
                }
                ui.end_row();
            }
        });

    if let Some(b) = clic {
        b.appliquer(calc);
    }
}

fn ui_recents(calc: &mut Calculatrice, ui: &mut egui::Ui) {
    ui.strong("Recents");
    ui.add_space(4.0);

    if calc.etat().historique().is_empty() {
        ui.weak("Input numbers will be displayed here");
        return;
    }

    let mut rappel: Option<String> = None;
    for v in calc.historique() {
        if ui
            .add_sized([96.0, 28.0], egui::Button::new(egui::RichText::new(v).monospace()))
            .clicked()
        {
            rappel = Some(v.clone());
        }
    }
    if let Some(v) = rappel {
        calc.rappeler(v);
    }
}

/* ------------------------ Front ------------------------ */

fn ui_front(f: &mut EtatFront, ui: &mut egui::Ui) {
    ui.heading("Frontend Calculator");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.selectable_value(&mut f.onglet, OngletFront::Ratio, "Aspect Ratio");
        ui.selectable_value(&mut f.onglet, OngletFront::Couleur, "Color Converter");
        ui.selectable_value(&mut f.onglet, OngletFront::Unites, "Unit Converter");
    });
    ui.add_space(8.0);

    match f.onglet {
        OngletFront::Ratio => {
            ui.label("Aspect Ratio Calculator (16:9)");
            egui::Grid::new("front_ratio").num_columns(3).show(ui, |ui| {
                ui.label("Width");
                if champ(ui, &mut f.largeur, "Enter width").changed() {
                    f.maj_depuis_largeur();
                }
                ui.label("px");
                ui.end_row();

                ui.label("Height");
                if champ(ui, &mut f.hauteur, "Enter height").changed() {
                    f.maj_depuis_hauteur();
                }
                ui.label("px");
                ui.end_row();
            });
        }
        OngletFront::Couleur => {
            ui.label("HEX to RGB");
            egui::Grid::new("front_couleur").num_columns(2).show(ui, |ui| {
                ui.label("HEX");
                if champ(ui, &mut f.hex, "#000000").changed() {
                    f.maj_depuis_hex();
                }
                ui.end_row();

                ui.label("RGB");
                ui.monospace(&f.rgb);
                ui.end_row();
            });

            let [r, g, b] = f.apercu;
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 60.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 6.0, egui::Color32::from_rgb(r, g, b));
        }
        OngletFront::Unites => {
            ui.label("PX ↔ REM (1rem = 16px)");
            egui::Grid::new("front_unites").num_columns(3).show(ui, |ui| {
                ui.label("PX");
                if champ(ui, &mut f.px, "Enter px").changed() {
                    f.maj_depuis_px();
                }
                ui.label("px");
                ui.end_row();

                ui.label("REM");
                if champ(ui, &mut f.rem, "Enter rem").changed() {
                    f.maj_depuis_rem();
                }
                ui.label("rem");
                ui.end_row();
            });
        }
    }

    if !f.erreur.is_empty() {
        ui.add_space(6.0);
        ui.colored_label(ui.visuals().error_fg_color, &f.erreur);
    }
}

fn champ(ui: &mut egui::Ui, texte: &mut String, indice: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(texte)
            .desired_width(160.0)
            .hint_text(indice),
    )
}

/* ------------------------ Épargne ------------------------ */

fn ui_epargne(e: &mut EtatEpargne, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for l in Langue::TOUTES {
            ui.selectable_value(&mut e.langue, l, l.code().to_uppercase());
        }
    });

    let t = e.langue.libelles();
    ui.heading(t.titre);
    ui.label(t.sous_titre);
    ui.add_space(8.0);

    let mut change = false;

    ui.label(t.devise);
    ui.horizontal_wrapped(|ui| {
        for d in Devise::TOUTES {
            ui.radio_value(&mut e.devise, d, format!("{} ({})", d.code(), d.symbole()));
        }
    });

    ui.add_space(6.0);
    egui::Grid::new("epargne_entrees").num_columns(2).show(ui, |ui| {
        ui.label(format!("{} ({})", t.objectif, e.devise.symbole()));
        change |= ui
            .add(egui::DragValue::new(&mut e.plan.objectif).speed(1000.0).range(0.0..=f64::MAX))
            .changed();
        ui.end_row();

        ui.label(t.periode);
        change |= ui
            .add(egui::DragValue::new(&mut e.plan.mois).speed(1).range(0..=1200))
            .changed();
        ui.end_row();

        ui.label(t.taux);
        change |= ui
            .add(
                egui::DragValue::new(&mut e.plan.taux_annuel)
                    .speed(0.1)
                    .range(0.0..=100.0)
                    .suffix(" %"),
            )
            .changed();
        ui.end_row();
    });

    if change {
        e.recalculer();
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new(t.resultat).strong());
    if let Some(msg) = e.message_erreur() {
        ui.colored_label(ui.visuals().error_fg_color, msg);
    } else if let Ok(m) = e.resultat {
        ui.horizontal(|ui| {
            ui.label(t.versement_mensuel);
            ui.strong(format!("{}{}", e.devise.symbole(), formater_montant(m)));
        });
    }
}

/* ------------------------ JSON ------------------------ */

fn ui_json(j: &mut EtatJson, ui: &mut egui::Ui) {
    ui.heading("JSON Convertor");
    ui.add_space(6.0);

    ui.columns(2, |cols| {
        cols[0].label("Input");
        let resp = cols[0].add(
            egui::TextEdit::multiline(&mut j.entree)
                .desired_rows(20)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );
        if resp.changed() {
            j.reformater();
        }

        cols[1].label("Output");
        if j.invalide {
            let c = cols[1].visuals().error_fg_color;
            cols[1].colored_label(c, &j.sortie);
        } else {
            champ_monospace(&mut cols[1], "json_sortie", &j.sortie, 20);
        }
    });
}

fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
    // Affichage lecture seule “stable”, sans TextEdit interactif.
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.monospace(contenu);
            });
        });
}
