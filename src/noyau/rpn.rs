// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN, en f64 (lecture) ou en rationnel exact
//
// Règles:
// - * et / lient plus fort que + et -
// - tous les opérateurs sont associatifs à gauche
// - PAS de moins unaire : un opérateur doit suivre une valeur
// - PAS de multiplication implicite : "2 (3)" est refusé

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(1), Plus, Num(2), RPar, Star, Num(3)]
///   rpn:    [Num(1), Num(2), Plus, Num(3), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::OperandeManquant);
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParentheseInattendue),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::OperandeManquant);
                }

                // gauche-associatif : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if !tokens.is_empty() && !prev_was_value {
        return Err(ErreurEval::OperandeManquant);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Domaine numérique dans lequel on évalue une RPN.
pub trait Valeur: Sized {
    fn depuis_rat(r: &BigRational) -> Result<Self, ErreurEval>;
    fn add(self, b: Self) -> Self;
    fn sub(self, b: Self) -> Self;
    fn mul(self, b: Self) -> Self;
    fn div(self, b: Self) -> Result<Self, ErreurEval>;
}

/// Double précision : la division par zéro donne ±∞ (filtré par l’appelant).
impl Valeur for f64 {
    fn depuis_rat(r: &BigRational) -> Result<Self, ErreurEval> {
        r.to_f64().ok_or(ErreurEval::NonFini)
    }
    fn add(self, b: Self) -> Self {
        self + b
    }
    fn sub(self, b: Self) -> Self {
        self - b
    }
    fn mul(self, b: Self) -> Self {
        self * b
    }
    fn div(self, b: Self) -> Result<Self, ErreurEval> {
        Ok(self / b)
    }
}

impl Valeur for BigRational {
    fn depuis_rat(r: &BigRational) -> Result<Self, ErreurEval> {
        Ok(r.clone())
    }
    fn add(self, b: Self) -> Self {
        self + b
    }
    fn sub(self, b: Self) -> Self {
        self - b
    }
    fn mul(self, b: Self) -> Self {
        self * b
    }
    fn div(self, b: Self) -> Result<Self, ErreurEval> {
        if b.is_zero() {
            return Err(ErreurEval::DivisionParZero);
        }
        Ok(self / b)
    }
}

/// Évalue une RPN produite par `to_rpn`.
pub fn eval_rpn<V: Valeur>(rpn: &[Tok]) -> Result<V, ErreurEval> {
    let mut st: Vec<V> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(V::depuis_rat(r)?),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;

                let v = match tok {
                    Tok::Plus => a.add(b),
                    Tok::Minus => a.sub(b),
                    Tok::Star => a.mul(b),
                    _ => a.div(b)?,
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ParentheseInattendue),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
