// src/noyau/format.rs
//
// Conversions affichage <-> nombre.
//
// - format_nombre : f64 -> texte court (aller-retour exact, notation "e" aux extrêmes)
// - lire_nombre   : texte -> f64 (plus long préfixe numérique, NaN sinon)
// - tronquer      : coupe brute au nombre de caractères (PAS d’arrondi)

/// Sous ce seuil (en valeur absolue, hors zéro) on passe en notation exponentielle.
const SEUIL_EXP_BAS: f64 = 1e-6;

/// À partir de ce seuil (en valeur absolue) on passe en notation exponentielle.
const SEUIL_EXP_HAUT: f64 = 1e21;

/// Texte le plus court qui relit exactement `x`.
///
/// - `-0` s’affiche `0`
/// - exposant signé explicitement : `1e+21`, `1.5e-7`
/// - non finis : `Infinity`, `-Infinity`, `NaN`
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if !(SEUIL_EXP_BAS..SEUIL_EXP_HAUT).contains(&abs) {
        let s = format!("{x:e}");
        // Rust écrit "1e21" : on veut "1e+21"
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{x}")
}

/// Lit la valeur numérique d’un affichage.
///
/// Texte entier lisible (cas courant, `Infinity` compris) => lu tel quel.
/// Sinon on lit le plus long préfixe numérique : un affichage tronqué en plein
/// exposant ("1.2345678e+") reste lisible. Rien de lisible => NaN.
pub fn lire_nombre(s: &str) -> f64 {
    let s = s.trim_start();
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }
    prefixe_numerique(s).parse::<f64>().unwrap_or(f64::NAN)
}

/// `[signe] chiffres [. chiffres] [e [signe] chiffres]`, en un seul passage.
/// L’exposant n’est gardé que s’il porte au moins un chiffre.
fn prefixe_numerique(s: &str) -> &str {
    let b = s.as_bytes();
    let chiffres_depuis = |mut i: usize| {
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let debut = i;
    i = chiffres_depuis(i);
    let mut a_des_chiffres = i > debut;

    if b.get(i) == Some(&b'.') {
        let apres_point = i + 1;
        i = chiffres_depuis(apres_point);
        a_des_chiffres |= i > apres_point;
    }
    if !a_des_chiffres {
        return "";
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let fin = chiffres_depuis(j);
        if fin > j {
            i = fin;
        }
    }

    &s[..i]
}

/// Coupe `s` à `largeur` caractères (coupe brute, pas d’arrondi).
pub fn tronquer(s: &str, largeur: usize) -> String {
    s.chars().take(largeur).collect()
}
