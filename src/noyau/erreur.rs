// src/noyau/erreur.rs
//
// Deux familles :
// - ErreurEval : échec d’évaluation (normalisé en None à la frontière eval.rs)
// - Refus      : rejet “doux” d’une action joueur (état inchangé, message affiché)

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseInattendue,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Refus {
    // --- Constructeur ---
    #[error("Le nombre {0} est déjà utilisé")]
    NombreDejaUtilise(u8),

    #[error("Le nombre {0} ne fait pas partie du tirage")]
    NombreAbsent(u8),

    #[error("Carte inexistante")]
    CarteInexistante,

    #[error("Une expression ne peut pas commencer par un opérateur")]
    OperateurEnTete,

    #[error("Deux opérateurs ne peuvent pas se suivre")]
    OperateursConsecutifs,

    #[error("Un opérateur ne peut pas suivre une parenthèse ouvrante")]
    OperateurApresOuvrante,

    #[error("Un nombre doit être suivi d’un opérateur")]
    NombreSansOperateur,

    #[error("Parenthèse ouvrante mal placée")]
    OuvranteMalPlacee,

    #[error("Aucune parenthèse à fermer")]
    AucuneOuvrante,

    #[error("Parenthèse fermante mal placée")]
    FermanteMalPlacee,

    // --- Vérification ---
    #[error("Expression invalide")]
    ExpressionInvalide,

    #[error("Il faut utiliser les quatre nombres")]
    NombresManquants,
}
