// src/app.rs
//
// Jeu de 24 — module App (racine)
// -------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppJeu (pour main.rs: use crate::app::AppJeu;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Clavier lu ici, une fois par image (pas de champ texte dans la vue).
// - Le chrono ne redessine que pendant la manche ; résolue, on laisse egui dormir.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppJeu;`
pub use etat::AppJeu;

use std::time::Duration;

use eframe::egui;

use crate::noyau::{action_depuis_char, Action};

/// Cadence du chrono.
const TIC: Duration = Duration::from_secs(1);

impl AppJeu {
    /// Clavier -> actions du noyau.
    /// - texte tapé : chiffres, + - * / × ÷ ( ), '=' et 'n'
    /// - Retour arrière, Entrée (vérifier), Échap (effacer)
    fn lire_clavier(&mut self, ctx: &egui::Context, now: f64) {
        let (texte, retour, entree, echap) = ctx.input(|i| {
            let mut texte = String::new();
            for e in &i.events {
                if let egui::Event::Text(t) = e {
                    texte.push_str(t);
                }
            }
            (
                texte,
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for c in texte.chars() {
            if let Some(a) = action_depuis_char(c) {
                self.agir(a, now);
            }
        }
        if retour {
            self.agir(Action::Retour, now);
        }
        if entree {
            self.agir(Action::Verifier, now);
        }
        if echap {
            self.agir(Action::Effacer, now);
        }
    }
}

impl eframe::App for AppJeu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.caler_chrono(now);
        self.lire_clavier(ctx, now);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, now);
        });

        // tic d’une seconde pour le chrono, arrêté dès que la manche est résolue
        if self.en_jeu() {
            ctx.request_repaint_after(TIC);
        }
    }
}
