//! Free-text grading for the prediction quiz.
//!
//! The quiz view asks for the genotype or phenotype a cross can produce and
//! grades the typed answer against the expected value from the store. This
//! is deliberately forgiving plumbing: case, whitespace, punctuation, and
//! allele order within a pair do not matter, the genetics do.

use crate::genetics::alleles::AllelePair;

/// Case-folds and strips everything that is not a letter or digit, so
/// "fire breathing" matches "Fire-breathing".
fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Grades a phenotype guess against the expected label. Works for combined
/// dihybrid labels ("Fire-breathing, Winged") as well.
pub fn grade_phenotype(guess: &str, expected: &str) -> bool {
    !expected.is_empty() && fold(guess) == fold(expected)
}

/// Grades a monohybrid genotype guess: exactly two allele symbols, compared
/// canonically, so "fF" is a correct answer for `Ff`.
pub fn grade_genotype(guess: &str, expected: &AllelePair) -> bool {
    match symbols(guess).as_slice() {
        [a, b] => AllelePair(*a, *b).canonical() == expected.canonical(),
        _ => false,
    }
}

/// Grades a dihybrid genotype guess ("FfWw", "Ff Ww", "ff, ww") against the
/// expected pairs in active-trait order.
pub fn grade_dihybrid_genotype(guess: &str, expected: &[AllelePair; 2]) -> bool {
    match symbols(guess).as_slice() {
        [a, b, c, d] => {
            AllelePair(*a, *b).canonical() == expected[0].canonical()
                && AllelePair(*c, *d).canonical() == expected[1].canonical()
        }
        _ => false,
    }
}

fn symbols(guess: &str) -> Vec<char> {
    guess.chars().filter(|c| c.is_alphabetic()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phenotype_grading_ignores_case_and_punctuation() {
        assert!(grade_phenotype("fire breathing", "Fire-breathing"));
        assert!(grade_phenotype("  FIRE-BREATHING ", "Fire-breathing"));
        assert!(grade_phenotype("fire breathing, winged", "Fire-breathing, Winged"));
        assert!(!grade_phenotype("wingless", "Winged"));
        assert!(!grade_phenotype("", ""));
    }

    #[test]
    fn genotype_grading_accepts_either_allele_order() {
        let expected = AllelePair('F', 'f');
        assert!(grade_genotype("Ff", &expected));
        assert!(grade_genotype("fF", &expected));
        assert!(grade_genotype(" f F ", &expected));
        assert!(!grade_genotype("FF", &expected));
        assert!(!grade_genotype("F", &expected));
        assert!(!grade_genotype("Fff", &expected));
    }

    #[test]
    fn genotype_grading_is_case_sensitive_per_symbol() {
        // "ff" names a different genotype than "Ff"; folding case here
        // would grade wrong answers as right.
        assert!(!grade_genotype("ff", &AllelePair('F', 'f')));
    }

    #[test]
    fn dihybrid_genotype_grading_chunks_by_trait_order() {
        let expected = [AllelePair('F', 'f'), AllelePair('W', 'w')];
        assert!(grade_dihybrid_genotype("FfWw", &expected));
        assert!(grade_dihybrid_genotype("fF wW", &expected));
        assert!(grade_dihybrid_genotype("Ff, Ww", &expected));
        assert!(!grade_dihybrid_genotype("WwFf", &expected));
        assert!(!grade_dihybrid_genotype("FfW", &expected));
    }
}
