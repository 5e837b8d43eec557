// src/noyau/reglages.rs
//
// Réglages de la machine d’état (pas de fichier, pas de CLI : valeurs en dur).

/// Largeur d’affichage par défaut (caractères) après un "=".
const LARGEUR_DEFAUT: usize = 12;

/// Texte affiché après un calcul impossible (division par zéro, NaN).
const MARQUEUR_ERREUR_DEFAUT: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reglages {
    pub largeur_max: usize,
    pub marqueur_erreur: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur_max: LARGEUR_DEFAUT,
            marqueur_erreur: MARQUEUR_ERREUR_DEFAUT.to_string(),
        }
    }
}
