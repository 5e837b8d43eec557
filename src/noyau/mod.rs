//! Noyau de la calculatrice (pur, sans egui)
//!
//! Organisation interne :
//! - operateur.rs : + − × ÷ sur f64
//! - erreur.rs    : division par zéro
//! - format.rs    : f64 <-> texte d’affichage, coupe brute
//! - touche.rs    : événements des boutons + disposition du pavé
//! - reglages.rs  : largeur d’écran, marqueur d’erreur
//! - machine.rs   : état + transitions (Etat, Touche) -> Etat

pub mod erreur;
pub mod format;
pub mod machine;
pub mod operateur;
pub mod reglages;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use machine::{Etat, Phase};
pub use reglages::Reglages;
pub use touche::Touche;
