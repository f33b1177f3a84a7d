//! Random nickname generator.
//!
//! Produces nicknames in the `Adjective_NounNN` shape the network's guests
//! carried (e.g. `DeLi_Kiz34`), short enough for a 30-character nick limit.

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "DeLi", "Tatli", "Esmer", "Sarisin", "Yalniz", "Sessiz", "Karadeniz", "Ege", "Asi", "Cilgin",
    "Duygusal", "Gizli", "Hircin", "Masum", "Nazli", "Sevimli", "Uslu", "Yaramaz", "Kara", "Mavi",
];

const NOUNS: &[&str] = &[
    "Kiz", "Melek", "Prenses", "Yildiz", "Kelebek", "Gunes", "Deniz", "Yagmur", "Bulut", "Ceylan",
    "Efe", "Delikanli", "Kartal", "Sahin", "Ates", "Ruzgar", "Gece", "Sevda", "Gul", "Papatya",
];

/// Generate a guest nickname like `DeLi_Kiz34`.
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}_{}{}", adj, noun, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nickname_has_guest_shape() {
        let nick = generate_nickname();
        assert!(nick.contains('_'));
        assert!(nick.len() <= 30);
        assert!(nick.chars().last().unwrap().is_ascii_digit());
    }
}
