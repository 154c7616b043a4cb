//! src/noyau/partie.rs
//!
//! Partie : état de la manche + vérification de la solution.
//!
//! Machine à états par manche : EnJeu -> Resolue (terminal).
//! - Resolue n’est atteint que par `request_check`.
//! - Une fois résolue, toute action de saisie ou de vérification est ignorée.
//! - `request_new_round` repart toujours en EnJeu.
//!
//! Le temps est passé en paramètre (`now`, secondes sur l’horloge de l’UI) :
//! aucune horloge cachée, tests déterministes.

use log::{debug, info};
use num_rational::BigRational;
use rand::rngs::StdRng;

use super::constructeur::Constructeur;
use super::erreur::Refus;
use super::eval::{evaluate, exact_value, format_resultat};
use super::jetons::Symbole;
use super::regles::ReglesPartie;
use super::tirage::tirer_cartes;

/// RoundState : lu par l’affichage (chrono, statistiques), jamais modifié par lui.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EtatManche {
    pub is_solved: bool,
    pub start_time: f64,
    pub games_played: u32,
    pub games_solved: u32,

    // instant de résolution : fige le chrono
    pub solved_time: Option<f64>,
}

/// Primitives d’entrée (clavier, souris, tactile).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Nombre(u8),
    Carte(usize),
    Symbole(Symbole),
    Retour,
    Effacer,
    NouvelleManche,
    Verifier,
}

/// Caractère tapé -> action. Les touches spéciales (Entrée, Retour…) sont liées dans la vue.
pub fn action_depuis_char(c: char) -> Option<Action> {
    if let Some(d) = c.to_digit(10) {
        return (d > 0).then_some(Action::Nombre(d as u8));
    }
    if let Some(s) = Symbole::depuis_char(c) {
        return Some(Action::Symbole(s));
    }
    match c {
        '=' => Some(Action::Verifier),
        'n' | 'N' => Some(Action::NouvelleManche),
        _ => None,
    }
}

/// Résultat d’une action.
#[derive(Clone, Debug, PartialEq)]
pub enum Effet {
    Applique,
    /// Manche déjà résolue, ou rien à retirer : aucun changement, aucun message.
    Ignore,
    Refuse(Refus),
    Resolue { duree: f64 },
    /// Expression complète mais pas égale à la cible : la manche continue.
    Manquee(f64),
}

impl Effet {
    /// Message destiné au bandeau (None : rien à afficher).
    pub fn message(&self, regles: &ReglesPartie) -> Option<String> {
        match self {
            Effet::Applique | Effet::Ignore => None,
            Effet::Refuse(r) => Some(r.to_string()),
            Effet::Resolue { duree } => Some(format!(
                "Bravo ! {} trouvé en {} s",
                format_resultat(regles.cible),
                duree.floor() as u64
            )),
            Effet::Manquee(v) => Some(format!(
                "Résultat : {}, pas {}",
                format_resultat(*v),
                format_resultat(regles.cible)
            )),
        }
    }
}

/// Proximité du résultat courant à la cible (coloration).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proximite {
    Exact,
    Proche,
    Loin,
}

impl Proximite {
    pub fn de(regles: &ReglesPartie, r: f64) -> Proximite {
        let ecart = (r - regles.cible).abs();
        if ecart < regles.tolerance {
            Proximite::Exact
        } else if ecart <= regles.bande_proche {
            Proximite::Proche
        } else {
            Proximite::Loin
        }
    }
}

#[derive(Clone, Debug)]
pub struct Partie {
    regles: ReglesPartie,
    rng: StdRng,
    expr: Constructeur,
    etat: EtatManche,
}

impl Partie {
    /// Première manche tirée au hasard.
    pub fn new(regles: ReglesPartie, mut rng: StdRng, now: f64) -> Self {
        let cartes = tirer_cartes(&regles, &mut rng);
        Self::avec_cartes(regles, rng, cartes, now)
    }

    /// Première manche imposée (les suivantes seront tirées).
    pub fn avec_cartes(regles: ReglesPartie, rng: StdRng, cartes: Vec<u8>, now: f64) -> Self {
        info!("nouvelle manche : {cartes:?}");
        Self {
            regles,
            rng,
            expr: Constructeur::new(cartes),
            etat: EtatManche {
                start_time: now,
                games_played: 1,
                ..EtatManche::default()
            },
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn regles(&self) -> &ReglesPartie {
        &self.regles
    }

    pub fn etat(&self) -> &EtatManche {
        &self.etat
    }

    /// PuzzleNumbers
    pub fn numbers(&self) -> &[u8] {
        self.expr.cartes()
    }

    pub fn expression(&self) -> &Constructeur {
        &self.expr
    }

    pub fn expression_tokens(&self) -> Vec<String> {
        self.expr.expression_tokens()
    }

    pub fn current_result(&self) -> Option<f64> {
        evaluate(&self.expr.expression_tokens())
    }

    pub fn current_exact(&self) -> Option<BigRational> {
        exact_value(&self.expr.expression_tokens())
    }

    pub fn proximite(&self) -> Option<Proximite> {
        self.current_result().map(|r| Proximite::de(&self.regles, r))
    }

    /// Secondes écoulées dans la manche (figées à la résolution).
    pub fn elapsed(&self, now: f64) -> f64 {
        let fin = self.etat.solved_time.unwrap_or(now);
        (fin - self.etat.start_time).max(0.0)
    }

    /* ------------------------ Actions ------------------------ */

    pub fn appliquer(&mut self, action: Action, now: f64) -> Effet {
        match action {
            Action::Nombre(v) => self.append_number(v),
            Action::Carte(i) => self.append_card(i),
            Action::Symbole(s) => self.append_operator(s),
            Action::Retour => self.remove_last_token(),
            Action::Effacer => self.clear_expression(),
            Action::NouvelleManche => {
                self.request_new_round(now);
                Effet::Applique
            }
            Action::Verifier => self.request_check(now),
        }
    }

    pub fn append_number(&mut self, valeur: u8) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }
        Self::issue(self.expr.append_number(valeur))
    }

    pub fn append_card(&mut self, carte: usize) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }
        Self::issue(self.expr.append_card(carte))
    }

    /// + - * / et parenthèses.
    pub fn append_operator(&mut self, s: Symbole) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }
        Self::issue(self.expr.append_symbole(s))
    }

    pub fn remove_last_token(&mut self) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }
        match self.expr.remove_last_token() {
            Some(_) => Effet::Applique,
            None => Effet::Ignore,
        }
    }

    pub fn clear_expression(&mut self) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }
        self.expr.clear();
        Effet::Applique
    }

    /// Nouvelle manche : toujours acceptée, quel que soit l’état.
    pub fn request_new_round(&mut self, now: f64) {
        let cartes = tirer_cartes(&self.regles, &mut self.rng);
        info!("nouvelle manche : {cartes:?}");

        self.expr = Constructeur::new(cartes);
        self.etat.is_solved = false;
        self.etat.start_time = now;
        self.etat.solved_time = None;
        self.etat.games_played += 1;
    }

    /// Recale le départ du chrono sur l’horloge de l’appelant.
    /// Sans effet sur une manche déjà résolue (temps figé).
    pub fn caler_chrono(&mut self, now: f64) {
        if !self.etat.is_solved {
            self.etat.start_time = now;
        }
    }

    /// Vérification, dans l’ordre :
    /// a. expression évaluable
    /// b. les quatre cartes posées
    /// c. résultat égal à la cible (tolérance)
    pub fn request_check(&mut self, now: f64) -> Effet {
        if self.etat.is_solved {
            return Effet::Ignore;
        }

        let Some(r) = self.current_result() else {
            return Self::refus(Refus::ExpressionInvalide);
        };
        if !self.expr.toutes_utilisees() {
            return Self::refus(Refus::NombresManquants);
        }
        if !self.regles.atteint_cible(r) {
            debug!("vérification : {r} != {}", self.regles.cible);
            return Effet::Manquee(r);
        }

        self.etat.is_solved = true;
        self.etat.solved_time = Some(now);
        self.etat.games_solved += 1;

        let duree = self.elapsed(now);
        info!(
            "manche résolue en {duree:.1} s : {} ({}/{})",
            self.expr.affichage(),
            self.etat.games_solved,
            self.etat.games_played
        );
        Effet::Resolue { duree }
    }

    fn issue(r: Result<(), Refus>) -> Effet {
        match r {
            Ok(()) => Effet::Applique,
            Err(e) => Self::refus(e),
        }
    }

    fn refus(e: Refus) -> Effet {
        debug!("refus : {e}");
        Effet::Refuse(e)
    }
}
