// src/noyau/constructeur.rs
//
// Constructeur d’expression : suite de jetons construite pas à pas.
//
// Invariant : l’expression est toujours le préfixe d’une expression bien formée.
// Chaque ajout est contrôlé contre le dernier jeton (ou l’état vide) ; un refus
// laisse l’état strictement inchangé.
//
// Les nombres sont suivis PAR CARTE (indice 0..4), pas par valeur :
// un tirage 8 8 3 3 offre deux 8 distincts.

use super::erreur::Refus;
use super::jetons::Symbole;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre { valeur: u8, carte: usize },
    Symbole(Symbole),
}

impl Jeton {
    /// Texte canonique (celui que lit l’évaluateur).
    pub fn texte(&self) -> String {
        match self {
            Jeton::Nombre { valeur, .. } => valeur.to_string(),
            Jeton::Symbole(s) => s.to_string(),
        }
    }

    /// Texte affiché (× et ÷).
    pub fn glyphe(&self) -> String {
        match self {
            Jeton::Nombre { valeur, .. } => valeur.to_string(),
            Jeton::Symbole(s) => s.glyphe().to_string(),
        }
    }

    fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Symbole(s) if s.est_operateur())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constructeur {
    cartes: Vec<u8>,
    jetons: Vec<Jeton>,

    // UsedNumbers, indexé par carte
    utilisees: Vec<bool>,

    // cartes posées, dans l’ordre de pose
    placees: Vec<usize>,
}

impl Constructeur {
    pub fn new(cartes: Vec<u8>) -> Self {
        let n = cartes.len();
        Self {
            cartes,
            jetons: Vec::new(),
            utilisees: vec![false; n],
            placees: Vec::new(),
        }
    }

    pub fn cartes(&self) -> &[u8] {
        &self.cartes
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    /// Jetons en texte canonique : ["8", "/", "(", ...].
    pub fn expression_tokens(&self) -> Vec<String> {
        self.jetons.iter().map(Jeton::texte).collect()
    }

    /// Expression lisible, glyphes compris : "8 ÷ ( 3 - 8 ÷ 3 )".
    pub fn affichage(&self) -> String {
        let parts: Vec<String> = self.jetons.iter().map(Jeton::glyphe).collect();
        parts.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn est_utilisee(&self, carte: usize) -> bool {
        self.utilisees.get(carte).copied().unwrap_or(false)
    }

    /// |UsedNumbers|
    pub fn used_count(&self) -> usize {
        self.utilisees.iter().filter(|u| **u).count()
    }

    /// Toutes les cartes sont posées.
    pub fn toutes_utilisees(&self) -> bool {
        self.used_count() == self.cartes.len()
    }

    pub fn placees(&self) -> &[usize] {
        &self.placees
    }

    /// Parenthèses ouvertes non encore fermées.
    pub fn profondeur(&self) -> usize {
        let mut ouvertes = 0usize;
        let mut fermees = 0usize;
        for j in &self.jetons {
            match j {
                Jeton::Symbole(Symbole::Ouvrante) => ouvertes += 1,
                Jeton::Symbole(Symbole::Fermante) => fermees += 1,
                _ => {}
            }
        }
        ouvertes.saturating_sub(fermees)
    }

    /* ------------------------ Ajouts ------------------------ */

    /// Pose la première carte libre portant cette valeur.
    pub fn append_number(&mut self, valeur: u8) -> Result<(), Refus> {
        let libre = self
            .cartes
            .iter()
            .enumerate()
            .position(|(i, v)| *v == valeur && !self.utilisees[i]);

        match libre {
            Some(carte) => self.append_card(carte),
            None if self.cartes.contains(&valeur) => Err(Refus::NombreDejaUtilise(valeur)),
            None => Err(Refus::NombreAbsent(valeur)),
        }
    }

    /// Pose une carte précise (clic sur la carte).
    pub fn append_card(&mut self, carte: usize) -> Result<(), Refus> {
        let valeur = *self.cartes.get(carte).ok_or(Refus::CarteInexistante)?;
        if self.utilisees[carte] {
            return Err(Refus::NombreDejaUtilise(valeur));
        }

        // un nombre suit : rien, un opérateur ou '('
        match self.jetons.last() {
            None | Some(Jeton::Symbole(Symbole::Ouvrante)) => {}
            Some(j) if j.est_operateur() => {}
            Some(_) => return Err(Refus::NombreSansOperateur),
        }

        self.jetons.push(Jeton::Nombre { valeur, carte });
        self.utilisees[carte] = true;
        self.placees.push(carte);
        Ok(())
    }

    /// + - * / ( ) ; dispatch selon le symbole.
    pub fn append_symbole(&mut self, s: Symbole) -> Result<(), Refus> {
        match s {
            Symbole::Ouvrante => self.append_ouvrante(),
            Symbole::Fermante => self.append_fermante(),
            op => self.append_operateur(op),
        }
    }

    fn append_operateur(&mut self, op: Symbole) -> Result<(), Refus> {
        match self.jetons.last() {
            None => return Err(Refus::OperateurEnTete),
            Some(j) if j.est_operateur() => return Err(Refus::OperateursConsecutifs),
            Some(Jeton::Symbole(Symbole::Ouvrante)) => return Err(Refus::OperateurApresOuvrante),
            Some(_) => {}
        }
        self.jetons.push(Jeton::Symbole(op));
        Ok(())
    }

    fn append_ouvrante(&mut self) -> Result<(), Refus> {
        match self.jetons.last() {
            None | Some(Jeton::Symbole(Symbole::Ouvrante)) => {}
            Some(j) if j.est_operateur() => {}
            Some(_) => return Err(Refus::OuvranteMalPlacee),
        }
        self.jetons.push(Jeton::Symbole(Symbole::Ouvrante));
        Ok(())
    }

    fn append_fermante(&mut self) -> Result<(), Refus> {
        if self.profondeur() == 0 {
            return Err(Refus::AucuneOuvrante);
        }
        match self.jetons.last() {
            Some(Jeton::Nombre { .. }) | Some(Jeton::Symbole(Symbole::Fermante)) => {}
            _ => return Err(Refus::FermanteMalPlacee),
        }
        self.jetons.push(Jeton::Symbole(Symbole::Fermante));
        Ok(())
    }

    /* ------------------------ Retraits ------------------------ */

    /// Retire le dernier jeton ; une carte retirée redevient disponible.
    pub fn remove_last_token(&mut self) -> Option<Jeton> {
        let j = self.jetons.pop()?;
        if let Jeton::Nombre { carte, .. } = j {
            self.utilisees[carte] = false;
            if let Some(pos) = self.placees.iter().rposition(|c| *c == carte) {
                self.placees.remove(pos);
            }
        }
        Some(j)
    }

    pub fn clear(&mut self) {
        self.jetons.clear();
        self.placees.clear();
        self.utilisees.iter_mut().for_each(|u| *u = false);
    }
}
