// src/noyau/tirage.rs
//
// Tirage des cartes d’une manche.

use rand::Rng;

use super::regles::{ReglesPartie, NB_CARTES};

/// Tire NB_CARTES chiffres dans [min, max] (bornes inversées tolérées).
/// En tirage distinct, on re-tire tant que la valeur est déjà sortie.
pub fn tirer_cartes<R: Rng + ?Sized>(regles: &ReglesPartie, rng: &mut R) -> Vec<u8> {
    let mut cartes = Vec::with_capacity(NB_CARTES);

    // garde-fou : pas assez de valeurs pour un tirage distinct
    let distinct = regles.tirage_distinct && regles.nb_valeurs() >= NB_CARTES;
    let (lo, hi) = regles.plage();

    while cartes.len() < NB_CARTES {
        let v = rng.gen_range(lo..=hi);
        if distinct && cartes.contains(&v) {
            continue;
        }
        cartes.push(v);
    }

    cartes
}
