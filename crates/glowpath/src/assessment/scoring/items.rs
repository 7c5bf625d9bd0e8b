//! Fixed item-to-dimension maps. Each table is aligned with the declaration
//! order of its dimension enum.

use super::ResponseSheet;

/// How a dimension aggregates its questionnaire items.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Aggregation {
    /// Mean of raw answers.
    Forward(&'static [u32]),
    /// Mean of `6 - raw` for items phrased against the dimension.
    Reverse(&'static [u32]),
    /// Mean of already-rounded sub-scores, rounded again.
    Blend(&'static [Aggregation]),
}

impl Aggregation {
    pub(crate) fn evaluate(self, sheet: &ResponseSheet) -> f64 {
        match self {
            Aggregation::Forward(items) => {
                round2(mean(items.iter().map(|&question| sheet.answer(question))))
            }
            Aggregation::Reverse(items) => round2(mean(
                items
                    .iter()
                    .map(|&question| REVERSE_PIVOT - sheet.answer(question)),
            )),
            Aggregation::Blend(parts) => {
                round2(mean(parts.iter().map(|part| part.evaluate(sheet))))
            }
        }
    }
}

/// Reverse-scored items are reflected around the Likert midpoint: `6 - raw`.
const REVERSE_PIVOT: f64 = 6.0;

pub(crate) const RIASEC_ITEMS: [Aggregation; 6] = [
    Aggregation::Forward(&[1, 2, 3, 4, 5]),
    Aggregation::Forward(&[6, 7, 8, 9, 10]),
    Aggregation::Forward(&[11, 12, 13, 14, 15]),
    Aggregation::Forward(&[16, 17, 18, 19, 20]),
    Aggregation::Forward(&[21, 22, 23, 24, 25]),
    Aggregation::Forward(&[26, 27, 28, 29, 30]),
];

pub(crate) const BIG_FIVE_ITEMS: [Aggregation; 5] = [
    Aggregation::Forward(&[31, 32, 33]),
    Aggregation::Blend(&[Aggregation::Forward(&[34, 35]), Aggregation::Reverse(&[36])]),
    Aggregation::Forward(&[37, 38, 39]),
    Aggregation::Forward(&[40, 41]),
    Aggregation::Reverse(&[42, 43, 44]),
];

pub(crate) const VALUE_ITEMS: [Aggregation; 6] = [
    Aggregation::Forward(&[45, 46]),
    Aggregation::Forward(&[47, 48]),
    Aggregation::Forward(&[49, 50]),
    Aggregation::Forward(&[51, 52]),
    Aggregation::Forward(&[53, 54]),
    Aggregation::Forward(&[55, 56]),
];

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounds to two decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(3.125), 3.13);
        assert_eq!(round2(11.0 / 3.0), 3.67);
        assert_eq!(round2(13.0 / 5.0), 2.6);
    }

    #[test]
    fn every_question_is_mapped_exactly_once() {
        fn collect(aggregation: Aggregation, into: &mut Vec<u32>) {
            match aggregation {
                Aggregation::Forward(items) | Aggregation::Reverse(items) => {
                    into.extend_from_slice(items)
                }
                Aggregation::Blend(parts) => {
                    for part in parts {
                        collect(*part, into);
                    }
                }
            }
        }

        let mut questions = Vec::new();
        for aggregation in RIASEC_ITEMS
            .iter()
            .chain(BIG_FIVE_ITEMS.iter())
            .chain(VALUE_ITEMS.iter())
        {
            collect(*aggregation, &mut questions);
        }
        questions.sort_unstable();
        assert_eq!(questions, (1..=56).collect::<Vec<u32>>());
    }
}
