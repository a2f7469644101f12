use std::fmt::{self, Display};

/// An ordered pair of allele symbols for a single trait.
///
/// The pair is stored dominant-case first once canonicalized, so `Ff` and
/// `fF` both display as `Ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllelePair(pub char, pub char);

impl AllelePair {
    pub fn homozygous(symbol: char) -> Self {
        Self(symbol, symbol)
    }

    /// Reorders the pair so the uppercase symbol comes first when the two
    /// symbols differ in case. Pairs sharing a case keep their input order;
    /// the tie-break is asymmetric and relied on elsewhere, so it stays.
    pub fn canonical(self) -> Self {
        if self.0.is_lowercase() && self.1.is_uppercase() {
            Self(self.1, self.0)
        } else {
            self
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.0 == symbol || self.1 == symbol
    }

    pub fn alleles(&self) -> [char; 2] {
        [self.0, self.1]
    }
}

impl Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
