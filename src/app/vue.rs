// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppJeu (etat.rs) pour natif + wasm
// - Tactile : gros boutons (cartes, opérateurs, actions)
// - Couleur du résultat selon la proximité à la cible
//
// Le clavier est lu dans app.rs (pas de champ texte : raccourcis globaux).

use eframe::egui;

use super::etat::{AppJeu, Ton};
use crate::noyau::jetons::Symbole;
use crate::noyau::{Action, Proximite};

const VERT: egui::Color32 = egui::Color32::from_rgb(40, 160, 70);
const ORANGE: egui::Color32 = egui::Color32::from_rgb(220, 150, 30);

impl AppJeu {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Jeu de 24");
                ui.add_space(4.0);

                self.ui_statistiques(ui, now);

                ui.add_space(8.0);
                self.ui_cartes(ui, now);

                ui.add_space(8.0);
                self.ui_expression(ui);

                ui.add_space(8.0);
                self.ui_symboles(ui, now);

                ui.add_space(8.0);
                ui.separator();
                self.ui_actions(ui, now);

                if !self.message.is_empty() {
                    ui.add_space(6.0);
                    let couleur = match self.ton {
                        Ton::Alerte => ui.visuals().warn_fg_color,
                        Ton::Succes => VERT,
                        Ton::Info => ui.visuals().text_color(),
                    };
                    ui.colored_label(couleur, &self.message);
                }
            });
    }

    fn ui_statistiques(&self, ui: &mut egui::Ui, now: f64) {
        let e = self.partie.etat();
        ui.horizontal(|ui| {
            ui.label(format!("Parties : {}", e.games_played));
            ui.separator();
            ui.label(format!("Résolues : {}", e.games_solved));
            ui.separator();
            ui.monospace(format!("Temps : {}", self.chrono(now)));
        });
    }

    fn ui_cartes(&mut self, ui: &mut egui::Ui, now: f64) {
        let resolue = self.partie.etat().is_solved;
        let cartes: Vec<u8> = self.partie.numbers().to_vec();

        ui.horizontal(|ui| {
            for (i, v) in cartes.iter().enumerate() {
                let libre = !resolue && !self.partie.expression().est_utilisee(i);
                let texte = egui::RichText::new(v.to_string()).size(32.0).strong();
                let resp = ui.add_enabled(
                    libre,
                    egui::Button::new(texte).min_size(egui::vec2(72.0, 88.0)),
                );
                if resp.clicked() {
                    self.agir(Action::Carte(i), now);
                }
            }
        });
    }

    fn ui_expression(&self, ui: &mut egui::Ui) {
        let texte = self.partie.expression().affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                if texte.is_empty() {
                    ui.weak("Touchez une carte pour commencer");
                } else {
                    ui.monospace(egui::RichText::new(texte).size(22.0));
                }
            });

        let couleur = match self.proximite {
            Some(Proximite::Exact) => VERT,
            Some(Proximite::Proche) => ORANGE,
            Some(Proximite::Loin) | None => ui.visuals().text_color(),
        };

        ui.horizontal(|ui| {
            ui.label("=");
            ui.label(
                egui::RichText::new(self.resultat_affiche())
                    .size(26.0)
                    .color(couleur)
                    .strong(),
            );
            if let Some(ex) = &self.exact {
                ui.separator();
                ui.monospace(format!("EXACT : {ex}"));
            }
        });
    }

    fn ui_symboles(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal_wrapped(|ui| {
            for s in Symbole::TOUS {
                let resp = ui.add_sized([52.0, 44.0], egui::Button::new(s.glyphe()));
                if resp.clicked() {
                    self.agir(Action::Symbole(s), now);
                }
            }

            ui.separator();

            self.bouton_action(ui, "DEL", "Retire le dernier jeton", Action::Retour, now);
            self.bouton_action(ui, "C", "Efface l’expression", Action::Effacer, now);
        });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            let resolue = self.partie.etat().is_solved;
            let verif = ui.add_enabled(
                !resolue,
                egui::Button::new("Vérifier").min_size(egui::vec2(120.0, 36.0)),
            );
            if verif.on_hover_text("Entrée").clicked() {
                self.agir(Action::Verifier, now);
            }

            let nouvelle = ui.add(
                egui::Button::new("Nouvelle manche").min_size(egui::vec2(140.0, 36.0)),
            );
            if nouvelle.on_hover_text("N").clicked() {
                self.agir(Action::NouvelleManche, now);
            }
        });
    }

    fn bouton_action(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        action: Action,
        now: f64,
    ) {
        let resp = ui
            .add_sized([52.0, 44.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.agir(action, now);
        }
    }
}
