// src/main.rs
//
// Boîte à outils calculatrice — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap + journal tracing + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Langue de la page épargne : --langue > LC_ALL / LANG (natif), navigator.language (web)
//
// Côté WEB (WASM) : l’index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::{AppOutils, Page};
use noyau::epargne::Langue;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculator Toolbox";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::Path;

    use clap::Parser;
    use eframe::egui;
    use tracing_subscriber::EnvFilter;

    use super::{Langue, Page};

    /// Filtre par défaut quand ni --journal ni RUST_LOG ne sont donnés.
    const JOURNAL_DEFAUT: &str = "warn";

    /// Polices système couvrant le hangul (les polices egui par défaut ne l’ont pas).
    const POLICES_HANGUL: &[&str] = &[
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "C:\\Windows\\Fonts\\malgun.ttf",
    ];

    #[derive(Debug, Parser)]
    #[command(name = "calculatrice_outils", version, about = "Calculatrice + outils front / épargne / JSON")]
    pub struct Options {
        /// Page affichée au démarrage (calculatrice, front, epargne, json)
        #[arg(long, default_value = "calculatrice")]
        pub page: Page,

        /// Filtre de journal (syntaxe RUST_LOG, ex: "calculatrice_outils=trace")
        #[arg(long)]
        pub journal: Option<String>,

        /// Langue de la page épargne (en, ko) ; défaut : LC_ALL puis LANG
        #[arg(long)]
        pub langue: Option<Langue>,
    }

    impl Options {
        pub fn langue(&self) -> Langue {
            self.langue.unwrap_or_else(|| {
                let lc_all = std::env::var("LC_ALL").ok();
                let lang = std::env::var("LANG").ok();
                Langue::depuis_locales([lc_all.as_deref(), lang.as_deref()])
            })
        }
    }

    /// Abonné tracing : --journal > RUST_LOG > "warn".
    pub fn installer_journal(journal: Option<&str>) {
        let filtre = match journal {
            Some(f) => EnvFilter::try_new(f).ok(),
            None => EnvFilter::try_from_default_env().ok(),
        }
        .unwrap_or_else(|| EnvFilter::new(JOURNAL_DEFAUT));

        if let Err(e) = tracing_subscriber::fmt().with_env_filter(filtre).try_init() {
            eprintln!("journal non installé : {e}");
        }
    }

    /// Ajoute la première police hangul trouvée en repli (Proportional + Monospace).
    pub fn installer_polices(ctx: &egui::Context) {
        use egui::{FontData, FontDefinitions, FontFamily};

        let Some((chemin, octets)) = POLICES_HANGUL
            .iter()
            .find_map(|c| std::fs::read(Path::new(c)).ok().map(|o| (*c, o)))
        else {
            tracing::debug!("aucune police hangul trouvée");
            return;
        };

        tracing::debug!(chemin, "police hangul chargée");

        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert("hangul".to_string(), FontData::from_owned(octets).into());

        for famille in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts
                .families
                .entry(famille)
                .or_default()
                .push("hangul".to_string());
        }

        ctx.set_fonts(fonts);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let options = natif::Options::parse();
    natif::installer_journal(options.journal.as_deref());

    let langue = options.langue();
    tracing::info!(page = %options.page, %langue, "démarrage");

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([460.0, 480.0]),
        ..Default::default()
    };

    let page = options.page;
    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(move |cc| {
            natif::installer_polices(&cc.egui_ctx);
            Ok(Box::new(AppOutils::new(page, langue)))
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppOutils, Langue, Page, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (toujours sur la calculatrice)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let langue = Langue::depuis_locales([w.navigator().language().as_deref()]);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(AppOutils::new(Page::Calculatrice, langue)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
