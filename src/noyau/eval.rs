//! Noyau — évaluation (pipeline réel)
//!
//! jetons texte -> chaîne jointe (glyphes canonisés) -> validation lexicale
//!        -> tokenize -> RPN -> f64 (filtré : fini seulement)
//!
//! Frontière : toute ErreurEval devient `None` ici. Aucun appelant ne voit d’erreur,
//! seulement “pas de résultat”.

use log::{debug, trace};
use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, joindre, tokenize, Tok};
use super::rpn::{eval_rpn, to_rpn};
use super::validation::is_valid_expression;

/// Étapes 1 à 4 : de la suite de jetons texte à la RPN.
fn preparer<S: AsRef<str>>(jetons: &[S]) -> Result<Vec<Tok>, ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::Vide);
    }

    let texte = joindre(jetons);
    if !is_valid_expression(&texte) {
        // on relit pour donner la vraie raison au journal
        let raison = match tokenize(&texte) {
            Err(e) => e,
            Ok(toks) => to_rpn(&toks).err().unwrap_or(ErreurEval::ParentheseNonFermee),
        };
        return Err(raison);
    }

    let rpn = to_rpn(&tokenize(&texte)?)?;
    trace!("rpn : {}", format_tokens(&rpn));
    Ok(rpn)
}

fn evaluer_f64<S: AsRef<str>>(jetons: &[S]) -> Result<f64, ErreurEval> {
    let v = eval_rpn::<f64>(&preparer(jetons)?)?;
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }
    Ok(v)
}

/// API publique : valeur numérique d’une expression, ou `None`
/// (vide, mal formée, division par zéro…).
pub fn evaluate<S: AsRef<str>>(jetons: &[S]) -> Option<f64> {
    match evaluer_f64(jetons) {
        Ok(v) => Some(v),
        Err(ErreurEval::Vide) => None,
        Err(e) => {
            debug!("évaluation impossible ({e}) : {}", joindre(jetons));
            None
        }
    }
}

/// Même pipeline, en rationnel exact (lecture EXACT de l’interface).
pub fn exact_value<S: AsRef<str>>(jetons: &[S]) -> Option<BigRational> {
    preparer(jetons)
        .and_then(|rpn| eval_rpn::<BigRational>(&rpn))
        .ok()
}

/// Forme irréductible : "24", "7/3", "-1/2".
pub fn format_exact(r: &BigRational) -> String {
    if r.is_integer() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/// Valeur affichée sous l’expression : entière si possible, sinon 4 décimales max.
pub fn format_resultat(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
