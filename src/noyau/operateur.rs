// src/noyau/operateur.rs
//
// Opérateurs binaires de la calculatrice (+ − × ÷) et leur évaluation f64.

use super::erreur::ErreurCalcul;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Symbole affiché sur la touche.
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// `gauche ⊕ droite`.
    ///
    /// Échecs : division par zéro (zéro signé inclus) et résultat NaN.
    /// Les débordements suivent IEEE-754 (`inf` reste un nombre affichable).
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
        let resultat = match self {
            Operateur::Addition => gauche + droite,
            Operateur::Soustraction => gauche - droite,
            Operateur::Multiplication => gauche * droite,
            Operateur::Division => {
                if droite == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                gauche / droite
            }
        };

        if resultat.is_nan() {
            return Err(ErreurCalcul::ResultatIndefini);
        }
        Ok(resultat)
    }
}
