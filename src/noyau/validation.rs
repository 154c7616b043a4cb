// src/noyau/validation.rs
//
// Contrôle lexical seulement :
// - jeu de caractères [0-9 + - * / ( ) . espaces]
// - parenthèses équilibrées (profondeur jamais négative, nulle à la fin)
//
// L’adjacence des opérateurs relève du constructeur, la calculabilité de eval.rs.

fn caractere_admis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

pub fn is_valid_expression(s: &str) -> bool {
    let mut profondeur: usize = 0;

    for c in s.chars() {
        if !caractere_admis(c) {
            return false;
        }
        match c {
            '(' => profondeur += 1,
            ')' => {
                if profondeur == 0 {
                    return false;
                }
                profondeur -= 1;
            }
            _ => {}
        }
    }

    profondeur == 0
}
