// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEval;

/// Jeton lexical (lu depuis le texte de l’expression).
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Symbole saisi par le joueur (tout sauf un nombre).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbole {
    Plus,
    Moins,
    Fois,
    Divise,
    Ouvrante,
    Fermante,
}

impl Symbole {
    pub const TOUS: [Symbole; 6] = [
        Symbole::Plus,
        Symbole::Moins,
        Symbole::Fois,
        Symbole::Divise,
        Symbole::Ouvrante,
        Symbole::Fermante,
    ];

    /// Accepte aussi les glyphes “jolis” (×, ÷, −).
    pub fn depuis_char(c: char) -> Option<Symbole> {
        match c {
            '+' => Some(Symbole::Plus),
            '-' | '−' => Some(Symbole::Moins),
            '*' | '×' => Some(Symbole::Fois),
            '/' | '÷' => Some(Symbole::Divise),
            '(' => Some(Symbole::Ouvrante),
            ')' => Some(Symbole::Fermante),
            _ => None,
        }
    }

    /// Opérateur binaire (+ - * /), par opposition aux parenthèses.
    pub fn est_operateur(self) -> bool {
        matches!(
            self,
            Symbole::Plus | Symbole::Moins | Symbole::Fois | Symbole::Divise
        )
    }

    /// Forme canonique ASCII (celle qui part au validateur).
    pub fn texte(self) -> &'static str {
        match self {
            Symbole::Plus => "+",
            Symbole::Moins => "-",
            Symbole::Fois => "*",
            Symbole::Divise => "/",
            Symbole::Ouvrante => "(",
            Symbole::Fermante => ")",
        }
    }

    /// Forme affichée à l’écran.
    pub fn glyphe(self) -> &'static str {
        match self {
            Symbole::Fois => "×",
            Symbole::Divise => "÷",
            autre => autre.texte(),
        }
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

/// Remplace les glyphes alternatifs de × ÷ − par * / -.
pub fn canonicalise(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

/// Rend une suite de jetons texte en une chaîne séparée par des espaces (glyphes canonisés).
pub fn joindre<S: AsRef<str>>(jetons: &[S]) -> String {
    let parts: Vec<&str> = jetons.iter().map(|j| j.as_ref()).collect();
    canonicalise(&parts.join(" "))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux (ex: 1.5) -> Num(3/2)
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres, puis éventuellement ".chiffres"
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_decimal(&lexeme)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12.25" -> 49/4 (exact). Un seul point, au moins un chiffre.
fn lire_decimal(lexeme: &str) -> Result<BigRational, ErreurEval> {
    let invalide = || ErreurEval::NombreInvalide(lexeme.to_string());

    let (ent, frac) = match lexeme.split_once('.') {
        Some((e, f)) => (e, f),
        None => (lexeme, ""),
    };
    if frac.contains('.') || (ent.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Ok(BigRational::new(n, d))
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        if r.denom().is_one() {
            format!("{}", r.numer())
        } else {
            format!("{}/{}", r.numer(), r.denom())
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn tokenize_simple() {
        let t = tokenize("(1 + 2) * 3").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::LPar,
                Tok::Num(rat(1, 1)),
                Tok::Plus,
                Tok::Num(rat(2, 1)),
                Tok::RPar,
                Tok::Star,
                Tok::Num(rat(3, 1)),
            ]
        );
    }

    #[test]
    fn tokenize_decimal_et_multi_chiffres() {
        let t = tokenize("12 / 1.5").unwrap();
        assert_eq!(t, vec![Tok::Num(rat(12, 1)), Tok::Slash, Tok::Num(rat(3, 2))]);
    }

    #[test]
    fn tokenize_refuse_caractere() {
        assert_eq!(tokenize("1 @ 2"), Err(ErreurEval::CaractereInattendu('@')));
        assert!(matches!(tokenize("1..2"), Err(ErreurEval::NombreInvalide(_))));
        assert!(matches!(tokenize("."), Err(ErreurEval::NombreInvalide(_))));
    }

    #[test]
    fn joindre_canonise_les_glyphes() {
        assert_eq!(joindre(&["8", "÷", "2", "×", "3", "−", "1"]), "8 / 2 * 3 - 1");
        let vide: [&str; 0] = [];
        assert_eq!(joindre(&vide), "");
    }

    #[test]
    fn symboles_glyphes() {
        assert_eq!(Symbole::depuis_char('×'), Some(Symbole::Fois));
        assert_eq!(Symbole::depuis_char('a'), None);
        assert_eq!(Symbole::Divise.glyphe(), "÷");
        assert_eq!(Symbole::Divise.texte(), "/");
        assert_eq!(Symbole::Fois.to_string(), "*");
        assert!(!Symbole::Ouvrante.est_operateur());
        assert!(Symbole::Moins.est_operateur());
    }

    #[test]
    fn format_tokens_relit() {
        let t = tokenize("8 / ( 3 - 8 / 3 )").unwrap();
        assert_eq!(format_tokens(&t), "8 / ( 3 - 8 / 3 )");
    }
}
