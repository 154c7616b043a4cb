//! Noyau du jeu de 24
//!
//! Organisation interne :
//! - regles.rs       : cible, tolérance, bandes, plage des chiffres
//! - erreur.rs       : ErreurEval (évaluation) + Refus (rejets doux)
//! - jetons.rs       : symboles, glyphes, tokenisation
//! - validation.rs   : contrôle lexical (caractères + parenthèses)
//! - rpn.rs          : shunting-yard + évaluation RPN (f64 / rationnel)
//! - eval.rs         : pipeline complet, erreurs -> None
//! - constructeur.rs : saisie incrémentale (préfixe toujours valide)
//! - tirage.rs       : tirage des quatre cartes
//! - partie.rs       : manche, vérification, statistiques
//!
//! Aucune dépendance à l’UI ici.

pub mod constructeur;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod partie;
pub mod regles;
pub mod rpn;
pub mod tirage;
pub mod validation;

#[cfg(test)]
mod tests_partie;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use partie::{action_depuis_char, Action, Effet, Partie, Proximite};
