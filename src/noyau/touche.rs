// src/noyau/touche.rs
//
// Touches du pavé = événements sémantiques envoyés à la machine d’état.
// La vue ne fait que dessiner CLAVIER et relayer les clics.

use super::operateur::Operateur;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9 ; la machine ignore toute autre valeur.
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
    Signe,
    Pourcentage,
}

impl Touche {
    /// Étiquette affichée sur le bouton.
    pub fn libelle(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Touche::Chiffre(c) => CHIFFRES.get(c as usize).copied().unwrap_or("?"),
            Touche::Virgule => ".",
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
            Touche::Effacer => "AC",
            Touche::Signe => "+/-",
            Touche::Pourcentage => "%",
        }
    }

    /// Opérateurs et "=" : mis en couleur par la vue.
    pub fn est_operateur(self) -> bool {
        matches!(self, Touche::Operateur(_) | Touche::Egal)
    }

    /// AC, +/-, % : touches de fonction (gris).
    pub fn est_fonction(self) -> bool {
        matches!(self, Touche::Effacer | Touche::Signe | Touche::Pourcentage)
    }
}

/// Une case du pavé : la touche + sa largeur en colonnes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub touche: Touche,
    pub colonnes: u8,
}

const fn case(touche: Touche) -> Case {
    Case { touche, colonnes: 1 }
}

/// Pavé 5 rangées x 4 colonnes ("0" occupe deux colonnes).
pub const CLAVIER: [&[Case]; 5] = [
    &[
        case(Touche::Effacer),
        case(Touche::Signe),
        case(Touche::Pourcentage),
        case(Touche::Operateur(Operateur::Division)),
    ],
    &[
        case(Touche::Chiffre(7)),
        case(Touche::Chiffre(8)),
        case(Touche::Chiffre(9)),
        case(Touche::Operateur(Operateur::Multiplication)),
    ],
    &[
        case(Touche::Chiffre(4)),
        case(Touche::Chiffre(5)),
        case(Touche::Chiffre(6)),
        case(Touche::Operateur(Operateur::Soustraction)),
    ],
    &[
        case(Touche::Chiffre(1)),
        case(Touche::Chiffre(2)),
        case(Touche::Chiffre(3)),
        case(Touche::Operateur(Operateur::Addition)),
    ],
    &[
        Case {
            touche: Touche::Chiffre(0),
            colonnes: 2,
        },
        case(Touche::Virgule),
        case(Touche::Egal),
    ],
];

/// Nombre de colonnes du pavé.
pub const COLONNES: u8 = 4;
