// src/app.rs
//
// Boîte à outils — module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppOutils et Page (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier n’alimente la calculatrice QUE sur sa page
//   (ailleurs, les champs texte gardent leurs touches).

pub mod clavier;
pub mod etat;
pub mod vue;

pub use etat::{AppOutils, Page};

use eframe::egui;

impl eframe::App for AppOutils {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.page == Page::Calculatrice {
            for ev in ctx.input(clavier::evenements_frame) {
                self.calc.traiter(ev);
            }
        }

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            self.ui_navigation(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
