// src/noyau/erreur.rs
//
// Erreurs du noyau (une seule famille : l’arithmétique).

use thiserror::Error;

/// Échec d’une opération binaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,
    /// inf - inf, inf × 0 : pas de nombre à afficher.
    #[error("résultat indéfini")]
    ResultatIndefini,
}
