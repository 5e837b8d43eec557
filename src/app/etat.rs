//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine d’état du noyau + ses réglages, et relayer les
//! clics de la vue. Aucune logique de calcul ici : tout passe par
//! `noyau::Etat::appliquer`.

use crate::noyau::{Etat, Phase, Reglages, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- machine (noyau) ---
    machine: Etat,

    // --- paramètres ---
    reglages: Reglages,
}

impl AppCalc {
    /// Touche pressée : transition pure, puis on remplace l’état.
    pub fn appuyer(&mut self, touche: Touche) {
        let courant = std::mem::take(&mut self.machine);
        self.machine = courant.appliquer(touche, &self.reglages);
    }

    /// Texte de l’écran.
    pub fn affichage(&self) -> &str {
        &self.machine.affichage
    }

    pub fn en_erreur(&self) -> bool {
        self.machine.phase() == Phase::Erreur
    }
}
