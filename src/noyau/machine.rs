//! src/noyau/machine.rs
//!
//! Machine d’état de la calculatrice (sans vue).
//!
//! Un `Etat` possédé explicitement + une transition pure :
//! `(Etat, Touche) -> Etat`. Aucune évaluation d’expression, une seule
//! opération binaire en attente à la fois.
//!
//! Contrats :
//! - au plus un opérateur en attente
//! - l’affichage est un littéral numérique OU le marqueur d’erreur
//! - la saisie courante contient au plus un point décimal

use tracing::{debug, warn};

use super::format::{format_nombre, lire_nombre, tronquer};
use super::operateur::Operateur;
use super::reglages::Reglages;
use super::touche::Touche;

/// Phase courante, dérivée de l’état (jamais stockée à part).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AttentePremierOperande,
    SaisieOperande,
    AttenteSecondOperande,
    Erreur,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Etat {
    /// Ce que montre l’écran.
    pub affichage: String,
    /// Opération binaire en attente de son second opérande.
    pub operateur: Option<Operateur>,
    /// Opérande de gauche (texte complet, non tronqué).
    pub operande: Option<String>,
    /// Vrai : le prochain chiffre remplace l’affichage au lieu de s’y ajouter.
    pub nouvelle_saisie: bool,
    /// Vrai après un calcul impossible (division par zéro, NaN), jusqu’à la prochaine saisie ou AC.
    erreur: bool,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operateur: None,
            operande: None,
            nouvelle_saisie: true,
            erreur: false,
        }
    }
}

impl Etat {
    pub fn phase(&self) -> Phase {
        if self.erreur {
            Phase::Erreur
        } else if !self.nouvelle_saisie {
            Phase::SaisieOperande
        } else if self.operateur.is_some() {
            Phase::AttenteSecondOperande
        } else {
            Phase::AttentePremierOperande
        }
    }

    /// Transition pure : consomme l’état, renvoie le suivant.
    pub fn appliquer(self, touche: Touche, reglages: &Reglages) -> Etat {
        let suivant = match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Virgule => self.virgule(),
            Touche::Operateur(op) => self.choisir_operateur(op, reglages),
            Touche::Egal => self.egal(reglages),
            Touche::Effacer => Etat::default(),
            Touche::Signe => self.signe(),
            Touche::Pourcentage => self.pourcentage(),
        };

        debug!(
            touche = touche.libelle(),
            affichage = %suivant.affichage,
            phase = ?suivant.phase(),
            "touche appliquée"
        );
        suivant
    }

    /* ------------------------ Saisie ------------------------ */

    fn chiffre(mut self, c: u8) -> Etat {
        if c > 9 {
            return self;
        }
        let chiffre = char::from(b'0' + c);

        if self.nouvelle_saisie {
            self.affichage = chiffre.to_string();
            self.nouvelle_saisie = false;
        } else if self.affichage == "0" {
            // pas de zéro de tête
            self.affichage = chiffre.to_string();
        } else {
            self.affichage.push(chiffre);
        }
        self.erreur = false;
        self
    }

    fn virgule(mut self) -> Etat {
        if self.nouvelle_saisie {
            self.affichage = "0.".to_string();
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
        self.nouvelle_saisie = false;
        self.erreur = false;
        self
    }

    /* ------------------------ Opérations ------------------------ */

    fn choisir_operateur(mut self, op: Operateur, reglages: &Reglages) -> Etat {
        if self.erreur {
            // le marqueur n’est pas un nombre : rien à mémoriser
            return self;
        }

        if self.operateur.is_some() && self.operande.is_some() && !self.nouvelle_saisie {
            // enchaînement : on évalue tout de suite
            self = self.egal(reglages);
            if self.erreur {
                return self;
            }
            // `egal` a déjà rangé le résultat complet dans `operande`
        } else {
            self.operande = Some(self.affichage.clone());
        }

        self.operateur = Some(op);
        self.nouvelle_saisie = true;
        self
    }

    fn egal(mut self, reglages: &Reglages) -> Etat {
        let (Some(op), Some(operande)) = (self.operateur, self.operande.as_deref()) else {
            return self;
        };

        let gauche = lire_nombre(operande);
        let droite = lire_nombre(&self.affichage);

        match op.appliquer(gauche, droite) {
            Ok(resultat) => {
                let texte = format_nombre(resultat);
                self.affichage = tronquer(&texte, reglages.largeur_max);
                self.operande = Some(texte);
                self.operateur = None;
                self.nouvelle_saisie = true;
            }
            Err(e) => {
                warn!(operande = %operande, affichage = %self.affichage, "{e}");
                // L’écran garde le marqueur (pas de retour à "0") : seul AC remet "0".
                self.affichage = reglages.marqueur_erreur.clone();
                self.operateur = None;
                self.operande = None;
                self.nouvelle_saisie = true;
                self.erreur = true;
            }
        }
        self
    }

    /* ------------------------ Unaires ------------------------ */

    fn signe(mut self) -> Etat {
        if self.erreur || self.affichage == "0" {
            return self;
        }
        self.affichage = format_nombre(-lire_nombre(&self.affichage));
        self
    }

    fn pourcentage(mut self) -> Etat {
        if self.erreur {
            return self;
        }
        self.affichage = format_nombre(lire_nombre(&self.affichage) / 100.0);
        self
    }
}
