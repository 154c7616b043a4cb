// src/noyau/regles.rs
//
// Règles de la partie (configuration).
// Pas de globales : une instance est donnée à Partie à la construction.

/// Valeur à atteindre.
pub const CIBLE_DEFAUT: f64 = 24.0;

/// Écart maximal accepté pour “égal à la cible” (flottants).
pub const TOLERANCE_DEFAUT: f64 = 0.001;

/// Bande “proche” pour la coloration (|r - cible| <= bande).
pub const BANDE_PROCHE_DEFAUT: f64 = 5.0;

/// Nombre de cartes par manche.
pub const NB_CARTES: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ReglesPartie {
    pub cible: f64,
    pub tolerance: f64,
    pub bande_proche: f64,

    // chiffres tirés dans min..=max
    pub chiffre_min: u8,
    pub chiffre_max: u8,

    /// true : les 4 cartes d’une manche sont toutes différentes.
    pub tirage_distinct: bool,
}

impl Default for ReglesPartie {
    fn default() -> Self {
        Self {
            cible: CIBLE_DEFAUT,
            tolerance: TOLERANCE_DEFAUT,
            bande_proche: BANDE_PROCHE_DEFAUT,
            chiffre_min: 1,
            chiffre_max: 9,
            tirage_distinct: true,
        }
    }
}

impl ReglesPartie {
    /// Vrai si `r` est la cible (à la tolérance près).
    pub fn atteint_cible(&self, r: f64) -> bool {
        (r - self.cible).abs() < self.tolerance
    }

    /// Bornes du tirage, remises dans l’ordre si min > max.
    pub fn plage(&self) -> (u8, u8) {
        (
            self.chiffre_min.min(self.chiffre_max),
            self.chiffre_min.max(self.chiffre_max),
        )
    }

    /// Nombre de valeurs possibles pour une carte.
    pub fn nb_valeurs(&self) -> usize {
        let (lo, hi) = self.plage();
        (hi - lo) as usize + 1
    }
}
