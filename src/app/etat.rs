//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la partie du noyau + ce que l’écran affiche (bandeau, résultat
//! courant, lecture exacte), et transformer chaque action en mise à jour.
//!
//! Contrats :
//! - Aucune règle de jeu ici : tout passe par `Partie::appliquer`.
//! - Les valeurs dérivées (résultat, exact, proximité) sont recalculées
//!   après chaque action, pas à chaque image.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::noyau::eval::{format_exact, format_resultat};
use crate::noyau::regles::ReglesPartie;
use crate::noyau::{Action, Effet, Partie, Proximite};

/// Ton du bandeau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ton {
    Info,
    Succes,
    Alerte,
}

#[derive(Clone, Debug)]
pub struct AppJeu {
    pub partie: Partie,

    // --- bandeau ---
    pub message: String,
    pub ton: Ton,

    // --- dérivés (rafraîchis après chaque action) ---
    pub resultat: Option<f64>,
    pub exact: Option<String>,
    pub proximite: Option<Proximite>,

    // chrono de la première manche calé sur la première image
    pub chrono_cale: bool,
}

impl Default for AppJeu {
    fn default() -> Self {
        // départ provisoire, recalé par `caler_chrono` à la première image
        let partie = Partie::new(ReglesPartie::default(), StdRng::from_entropy(), 0.0);
        Self::avec_partie(partie)
    }
}

impl AppJeu {
    pub fn avec_partie(partie: Partie) -> Self {
        let mut app = Self {
            partie,
            message: String::new(),
            ton: Ton::Info,
            resultat: None,
            exact: None,
            proximite: None,
            chrono_cale: false,
        };
        app.rafraichir();
        app
    }

    /* ------------------------ Actions ------------------------ */

    /// Point d’entrée unique des clics et touches.
    pub fn agir(&mut self, action: Action, now: f64) {
        let effet = self.partie.appliquer(action, now);

        match &effet {
            // saisie acceptée : on efface l’avertissement précédent
            Effet::Applique => self.message.clear(),
            Effet::Ignore => {}
            Effet::Refuse(_) => self.ton = Ton::Alerte,
            Effet::Manquee(_) => self.ton = Ton::Info,
            Effet::Resolue { .. } => self.ton = Ton::Succes,
        }
        if let Some(msg) = effet.message(self.partie.regles()) {
            self.message = msg;
        }

        self.rafraichir();
    }

    /// Une seule fois : aligne le départ de la première manche sur l’horloge egui.
    pub fn caler_chrono(&mut self, now: f64) {
        if !self.chrono_cale {
            self.partie.caler_chrono(now);
            self.chrono_cale = true;
        }
    }

    fn rafraichir(&mut self) {
        self.resultat = self.partie.current_result();
        self.exact = self.partie.current_exact().map(|r| format_exact(&r));
        self.proximite = self.partie.proximite();
    }

    /* ------------------------ Lecture (pour vue.rs) ------------------------ */

    /// Le chrono tourne : la vue doit redessiner chaque seconde.
    pub fn en_jeu(&self) -> bool {
        !self.partie.etat().is_solved
    }

    /// "—" quand il n’y a pas de valeur.
    pub fn resultat_affiche(&self) -> String {
        self.resultat
            .map(format_resultat)
            .unwrap_or_else(|| "—".to_string())
    }

    /// Chrono "mm:ss".
    pub fn chrono(&self, now: f64) -> String {
        let s = self.partie.elapsed(now).floor() as u64;
        format!("{:02}:{:02}", s / 60, s % 60)
    }
}
