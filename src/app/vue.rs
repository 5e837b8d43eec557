// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Bandeau (titre + sous-titre)
// - Écran : texte monospace aligné à droite
// - Pavé 5x4 dessiné depuis noyau::touche::CLAVIER ("0" sur deux colonnes)
// - Pied de page
//
// La vue ne décide rien : chaque clic devient un `Touche` pour AppCalc.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::touche::{Touche, CLAVIER, COLONNES};

const VERT: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
const VERT_FONCE: egui::Color32 = egui::Color32::from_rgb(5, 150, 105);
const GRIS: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);

/// Largeur max de la calculatrice (px).
const LARGEUR_CALC: f32 = 340.0;
const HAUTEUR_TOUCHE: f32 = 56.0;
const ESPACE: f32 = 8.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(LARGEUR_CALC);

            egui::Frame::group(ui.style())
                .corner_radius(16.0)
                .inner_margin(0.0)
                .show(ui, |ui| {
                    Self::ui_bandeau(ui);
                    egui::Frame::new()
                        .inner_margin(ESPACE * 2.0)
                        .show(ui, |ui| {
                            self.ui_ecran(ui);
                            ui.add_space(ESPACE * 2.0);
                            self.ui_pave(ui);
                        });
                });

            ui.add_space(ESPACE * 3.0);
            ui.weak("Designed for Max Green Skills Development Organization");
        });
    }

    fn ui_bandeau(ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(VERT_FONCE)
            .inner_margin(ESPACE * 2.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Max Green Skills")
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new("Development Organization")
                            .size(13.0)
                            .color(egui::Color32::from_white_alpha(200)),
                    );
                });
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(ESPACE * 1.5)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(36.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        let colonnes = f32::from(COLONNES);
        let largeur_case = (ui.available_width() - ESPACE * (colonnes - 1.0)) / colonnes;

        for rangee in CLAVIER {
            ui.horizontal(|ui| {
                for case in rangee {
                    let n = f32::from(case.colonnes);
                    let largeur = largeur_case * n + ESPACE * (n - 1.0);
                    self.bouton(ui, case.touche, largeur);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let texte = egui::RichText::new(touche.libelle()).size(22.0);

        let bouton = if touche.est_operateur() {
            egui::Button::new(texte.size(26.0).color(egui::Color32::WHITE)).fill(VERT)
        } else if touche.est_fonction() {
            egui::Button::new(texte.color(egui::Color32::BLACK)).fill(GRIS)
        } else {
            egui::Button::new(texte)
        };

        let resp = ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton.corner_radius(10.0));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
