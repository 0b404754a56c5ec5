//! One side of a scale: a fixed weight or a nested scale reference.

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// What sits on a pan: either a literal weight or another scale by name.
///
/// The tagged representation rules out the "empty name means literal"
/// ambiguity of a single stringly-typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanKind {
    /// A fixed weight placed directly on the pan.
    Literal(i64),
    /// The pan holds the scale with this name; its balanced total mass
    /// becomes the pan's effective mass.
    Reference(String),
}

/// One pan of a two-pan scale.
///
/// `extra_mass` starts at zero and is written exactly once, when the
/// owning tree is balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pan {
    kind: PanKind,
    extra_mass: i64,
}

impl Pan {
    /// Parse a raw token into a pan.
    ///
    /// A token starting with an alphabetic character is a reference to the
    /// scale of that name. Anything else must be a complete non-negative
    /// integer. Partial parses, signs, and overflow all reject the token.
    pub fn parse(token: &str) -> DomainResult<Self> {
        let kind = match token.chars().next() {
            Some(c) if c.is_alphabetic() => PanKind::Reference(token.to_string()),
            _ => {
                let mass = token
                    .parse::<i64>()
                    .ok()
                    .filter(|v| *v >= 0 && !token.starts_with('+'))
                    .ok_or_else(|| DomainError::InvalidMass {
                        token: token.to_string(),
                    })?;
                PanKind::Literal(mass)
            }
        };
        Ok(Self {
            kind,
            extra_mass: 0,
        })
    }

    pub fn kind(&self) -> &PanKind {
        &self.kind
    }

    /// Name of the referenced scale, if this pan holds one.
    pub fn reference(&self) -> Option<&str> {
        match &self.kind {
            PanKind::Reference(name) => Some(name),
            PanKind::Literal(_) => None,
        }
    }

    /// The fixed weight on this pan; zero for a reference pan.
    pub fn literal_mass(&self) -> i64 {
        match self.kind {
            PanKind::Literal(mass) => mass,
            PanKind::Reference(_) => 0,
        }
    }

    pub fn extra_mass(&self) -> i64 {
        self.extra_mass
    }

    pub(crate) fn set_extra_mass(&mut self, mass: i64) {
        self.extra_mass = mass;
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PanKind::Literal(mass) => write!(f, "{}", mass),
            PanKind::Reference(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_token() {
        let pan = Pan::parse("42").unwrap();
        assert_eq!(pan.kind(), &PanKind::Literal(42));
        assert_eq!(pan.literal_mass(), 42);
        assert_eq!(pan.reference(), None);
        assert_eq!(pan.extra_mass(), 0);
    }

    #[test]
    fn parses_reference_token() {
        let pan = Pan::parse("S2").unwrap();
        assert_eq!(pan.reference(), Some("S2"));
        assert_eq!(pan.literal_mass(), 0);
    }

    #[test]
    fn rejects_malformed_mass_tokens() {
        for token in ["-5", "+5", "1x", "3.5", "", "9999999999999999999999"] {
            let err = Pan::parse(token).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidMass {
                    token: token.to_string()
                },
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn accepts_zero_mass() {
        let pan = Pan::parse("0").unwrap();
        assert_eq!(pan.literal_mass(), 0);
    }
}
