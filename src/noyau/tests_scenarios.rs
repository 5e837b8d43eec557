//! Scénarios de bout en bout : suites de touches -> écran.
//!
//! On passe par le texte des touches ("5", "+", "=", …) pour lire les
//! scénarios comme on les taperait sur le pavé.

use super::format::lire_nombre;
use super::operateur::Operateur;
use super::{Etat, Phase, Reglages, Touche};

fn touche(s: &str) -> Touche {
    match s {
        "." => Touche::Virgule,
        "+" => Touche::Operateur(Operateur::Addition),
        "-" => Touche::Operateur(Operateur::Soustraction),
        "*" | "×" => Touche::Operateur(Operateur::Multiplication),
        "/" | "÷" => Touche::Operateur(Operateur::Division),
        "=" => Touche::Egal,
        "AC" => Touche::Effacer,
        "+/-" => Touche::Signe,
        "%" => Touche::Pourcentage,
        _ => {
            let c = s
                .parse::<u8>()
                .unwrap_or_else(|_| panic!("touche inconnue: {s:?}"));
            assert!(c <= 9, "chiffre invalide: {s:?}");
            Touche::Chiffre(c)
        }
    }
}

fn taper(depart: Etat, touches: &str) -> Etat {
    let r = Reglages::default();
    touches
        .split_whitespace()
        .fold(depart, |e, t| e.appliquer(touche(t), &r))
}

fn ecran(touches: &str) -> String {
    taper(Etat::default(), touches).affichage
}

#[test]
fn addition_simple() {
    assert_eq!(ecran("5 + 3 ="), "8");
}

#[test]
fn division_par_zero() {
    assert_eq!(ecran("6 ÷ 0 ="), "Error");
}

#[test]
fn signe_sur_zero_ne_fait_rien() {
    assert_eq!(ecran("0 +/-"), "0");
}

#[test]
fn pourcentage() {
    assert_eq!(ecran("5 0 %"), "0.5");
}

#[test]
fn enchainement_range_le_resultat() {
    let e = taper(Etat::default(), "9 × 9 +");
    assert_eq!(e.affichage, "81");
    assert_eq!(e.operande.as_deref(), Some("81"));
    assert_eq!(e.operateur, Some(Operateur::Addition));
    assert_eq!(e.phase(), Phase::AttenteSecondOperande);

    assert_eq!(taper(e, "=").affichage, "162");
}

#[test]
fn egal_sans_second_operande_s_applique_a_soi() {
    assert_eq!(ecran("5 + ="), "10");
    assert_eq!(ecran("4 × ="), "16");
}

#[test]
fn egal_repete_sans_operateur_ne_fait_rien() {
    // "=" efface l’opérateur : un second "=" n’a rien à évaluer
    assert_eq!(ecran("5 + 3 = ="), "8");
}

#[test]
fn resultat_reutilise_comme_operande() {
    assert_eq!(ecran("5 + 3 = × 2 ="), "16");
}

#[test]
fn saisie_apres_resultat_repart_de_zero() {
    assert_eq!(ecran("5 + 3 = 7"), "7");
}

#[test]
fn chiffres_concatenes() {
    assert_eq!(ecran("1 2 3 4"), "1234");
    assert_eq!(ecran("0 0 7"), "7");
    assert_eq!(ecran("3 . 1 4"), "3.14");
    assert_eq!(ecran(". 2 5"), "0.25");
}

#[test]
fn coupe_brute_a_douze_caracteres() {
    // 0.1 + 0.2 = 0.30000000000000004 : coupé, pas arrondi
    assert_eq!(ecran(". 1 + . 2 ="), "0.3000000000");
    assert_eq!(ecran("2 ÷ 3 ="), "0.6666666666");
}

#[test]
fn enchainement_garde_l_operande_complet() {
    // 2/3 gardé en entier (0.6666666666666666), pas l’écran coupé
    let e = taper(Etat::default(), "2 ÷ 3 ×");
    assert_eq!(e.affichage, "0.6666666666");
    assert_eq!(taper(e, "3 =").affichage, "2");
}

#[test]
fn soustraction_negative_puis_signe() {
    assert_eq!(ecran("3 - 8 ="), "-5");
    assert_eq!(ecran("3 - 8 = +/-"), "5");
}

#[test]
fn grands_nombres_en_notation_exponentielle() {
    // 1e21 : on bascule en notation "e" (puis coupe à 12)
    assert_eq!(
        ecran("1 0 0 0 0 0 0 0 0 0 0 × 1 0 0 0 0 0 0 0 0 0 0 0 ="),
        "1e+21"
    );
}

#[test]
fn effacer_remet_toujours_zero() {
    for suite in ["", "5", "5 +", "5 + 3", "5 + 3 =", "6 ÷ 0 =", "1 . 5 +/-", "5 0 %"] {
        let e = taper(Etat::default(), suite);
        let e = taper(e, "AC");
        assert_eq!(e, Etat::default(), "suite={suite:?}");
        assert_eq!(e.affichage, "0");
    }
}

#[test]
fn erreur_garde_le_marqueur_jusqu_a_la_saisie() {
    let e = taper(Etat::default(), "6 ÷ 0 =");
    assert_eq!(e.affichage, "Error");
    assert_eq!(e.phase(), Phase::Erreur);
    assert_eq!(e.operateur, None);
    assert_eq!(e.operande, None);
    assert!(e.nouvelle_saisie);

    let e = taper(e, "+/- % + =");
    assert_eq!(e.affichage, "Error");

    let e = taper(e, "2 + 2 =");
    assert_eq!(e.affichage, "4");
}

/// Une saisie assez longue pour déborder vers l’infini (f64 max ≈ 1.8e308).
fn neuf_cent_fois(n: usize) -> String {
    vec!["9"; n].join(" ")
}

#[test]
fn infini_moins_infini_affiche_le_marqueur() {
    let e = taper(Etat::default(), &neuf_cent_fois(310));
    assert_eq!(lire_nombre(&e.affichage), f64::INFINITY);

    let e = taper(e, "- =");
    assert_eq!(e.affichage, "Error");
    assert_eq!(e.phase(), Phase::Erreur);
    assert_eq!(e.operateur, None);
    assert_eq!(e.operande, None);
    assert!(e.nouvelle_saisie);
}

#[test]
fn infini_fois_zero_affiche_le_marqueur() {
    let e = taper(Etat::default(), &neuf_cent_fois(310));
    let e = taper(e, "× 0 =");
    assert_eq!(e.affichage, "Error");
    assert_eq!(e.phase(), Phase::Erreur);
}

#[test]
fn infini_en_enchainement_affiche_le_marqueur() {
    let infini = neuf_cent_fois(310);
    let e = taper(Etat::default(), &format!("{infini} - {infini} +"));
    assert_eq!(e.affichage, "Error");
    assert_eq!(e.operateur, None);
}

#[test]
fn infini_reste_affichable() {
    let e = taper(Etat::default(), &neuf_cent_fois(310));
    let e = taper(e, "+ 1 =");
    assert_eq!(e.affichage, "Infinity");
    assert_eq!(taper(e, "+/-").affichage, "-Infinity");
}

#[test]
fn affichage_jamais_nan() {
    let infini = neuf_cent_fois(310);
    for suite in [
        format!("{infini} - ="),
        format!("{infini} × 0 ="),
        format!("{infini} + 1 = - ="),
        format!("{infini} +/- + {infini} ="),
        format!("{infini} ÷ {infini} ="),
    ] {
        let e = taper(Etat::default(), &suite);
        assert!(
            e.affichage == "Error" || !lire_nombre(&e.affichage).is_nan(),
            "affichage={:?}",
            e.affichage
        );
    }
}
