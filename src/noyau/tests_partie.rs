//! Tests de parties complètes (campagne) : saisie -> vérification -> manche suivante.
//!
//! Les cartes sont imposées pour la première manche ; les suivantes sortent
//! d’un RNG à graine fixe.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::erreur::Refus;
use super::jetons::Symbole;
use super::partie::{action_depuis_char, Action, Effet, Partie, Proximite};
use super::regles::ReglesPartie;

fn partie(cartes: &[u8]) -> Partie {
    Partie::avec_cartes(
        ReglesPartie::default(),
        StdRng::seed_from_u64(2024),
        cartes.to_vec(),
        0.0,
    )
}

/// Tape une expression touche par touche ; retourne le dernier effet.
fn taper(p: &mut Partie, s: &str, now: f64) -> Effet {
    let mut dernier = Effet::Ignore;
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        let a = action_depuis_char(c).unwrap_or_else(|| panic!("touche {c:?}"));
        dernier = p.appliquer(a, now);
    }
    dernier
}

#[test]
fn solutions_connues() {
    let cas: [(&[u8], &str); 6] = [
        (&[8, 3, 8, 3], "8/(3-8/3)"),
        (&[1, 5, 5, 5], "5*(5-1/5)"),
        (&[3, 3, 7, 7], "7*(3+3/7)"),
        (&[1, 2, 3, 4], "(1+2+3)*4"),
        (&[4, 7, 8, 8], "(7-8/8)*4"),
        (&[1, 1, 4, 6], "4*6*1*1"),
    ];

    for (cartes, expr) in cas {
        let mut p = partie(cartes);
        taper(&mut p, expr, 0.0);
        assert_eq!(p.proximite(), Some(Proximite::Exact), "{expr}");
        let e = p.appliquer(Action::Verifier, 4.0);
        assert_eq!(e, Effet::Resolue { duree: 4.0 }, "{expr}");
    }
}

#[test]
fn cinq_fois_cinq_moins_un_cinquieme_est_flottant() {
    // 5 * (5 - 1/5) = 24 exact, mais 1/5 n’est pas représentable en f64
    let mut p = partie(&[1, 5, 5, 5]);
    taper(&mut p, "5*(5-1/5)", 0.0);
    let r = p.current_result().unwrap();
    assert!((r - 24.0).abs() < 0.001);
    assert_eq!(
        p.current_exact().map(|q| q.to_string()),
        Some("24".to_string())
    );
}

#[test]
fn saisie_refusee_message() {
    let mut p = partie(&[1, 2, 3, 4]);
    assert_eq!(
        taper(&mut p, "+", 0.0),
        Effet::Refuse(Refus::OperateurEnTete)
    );
    taper(&mut p, "1", 0.0);
    assert_eq!(
        taper(&mut p, "2", 0.0),
        Effet::Refuse(Refus::NombreSansOperateur)
    );
    taper(&mut p, "+", 0.0);
    assert_eq!(
        taper(&mut p, "1", 0.0),
        Effet::Refuse(Refus::NombreDejaUtilise(1))
    );
    assert_eq!(
        taper(&mut p, ")", 0.0),
        Effet::Refuse(Refus::AucuneOuvrante)
    );
    assert_eq!(p.expression_tokens(), vec!["1", "+"]);
}

#[test]
fn coloration_suit_la_saisie() {
    let mut p = partie(&[1, 2, 3, 4]);
    assert_eq!(p.proximite(), None);

    taper(&mut p, "4*3", 0.0);
    assert_eq!(p.proximite(), Some(Proximite::Loin));

    taper(&mut p, "*2", 0.0);
    assert_eq!(p.proximite(), Some(Proximite::Exact));

    taper(&mut p, "-", 0.0);
    // préfixe incomplet : pas de valeur
    assert_eq!(p.proximite(), None);

    taper(&mut p, "1", 0.0);
    assert_eq!(p.proximite(), Some(Proximite::Proche));
}

#[test]
fn division_par_zero_sans_resultat() {
    let mut p = partie(&[1, 2, 3, 4]);
    taper(&mut p, "4/(3-2-1)", 0.0);
    assert_eq!(p.current_result(), None);
    assert_eq!(p.current_exact(), None);
    assert_eq!(
        p.appliquer(Action::Verifier, 0.0),
        Effet::Refuse(Refus::ExpressionInvalide)
    );
}

#[test]
fn statistiques_sur_plusieurs_manches() {
    let mut p = Partie::new(ReglesPartie::default(), StdRng::seed_from_u64(3), 0.0);
    let mut t = 0.0;

    for _ in 0..10 {
        t += 30.0;
        assert!(!p.etat().is_solved);
        assert_eq!(p.numbers().len(), 4);
        p.appliquer(Action::NouvelleManche, t);
    }

    assert_eq!(p.etat().games_played, 11);
    assert_eq!(p.etat().games_solved, 0);
    assert_eq!(p.etat().start_time, t);
    assert_eq!(p.elapsed(t + 7.0), 7.0);
}

#[test]
fn chrono_fige_a_la_resolution() {
    let mut p = partie(&[2, 3, 4, 1]);
    taper(&mut p, "2*3*4*1", 0.0);
    p.appliquer(Action::Verifier, 42.0);
    assert_eq!(p.elapsed(42.0), 42.0);
    assert_eq!(p.elapsed(1000.0), 42.0);
}

#[test]
fn clic_sur_carte_et_retour() {
    let mut p = partie(&[8, 8, 3, 3]);
    assert_eq!(p.appliquer(Action::Carte(1), 0.0), Effet::Applique);
    assert!(p.expression().est_utilisee(1));
    assert!(!p.expression().est_utilisee(0));

    p.appliquer(Action::Symbole(Symbole::Plus), 0.0);
    // par valeur : la première carte libre portant 8 est la 0
    p.appliquer(Action::Nombre(8), 0.0);
    assert_eq!(p.expression().placees(), &[1, 0]);

    p.appliquer(Action::Retour, 0.0);
    assert_eq!(p.expression().placees(), &[1]);
    assert!(!p.expression().est_utilisee(0));

    assert_eq!(p.appliquer(Action::Effacer, 0.0), Effet::Applique);
    assert_eq!(p.appliquer(Action::Effacer, 0.0), Effet::Applique);
    assert_eq!(p.expression().used_count(), 0);
}
