use crate::assessment::domain::{Dimension, RankedEntry, ScoreProfile};
use std::cmp::Ordering;

/// Returns the `N` highest-scoring dimensions of a profile.
///
/// Exact ties keep the dimension's declaration order, so the result never
/// depends on iteration order of any runtime collection.
pub fn top_n<P, const N: usize>(profile: &P) -> [RankedEntry<P::Dimension>; N]
where
    P: ScoreProfile,
{
    debug_assert!(N <= P::Dimension::ORDERED.len());

    let mut ranked: Vec<RankedEntry<P::Dimension>> = P::Dimension::ORDERED
        .iter()
        .map(|&dimension| RankedEntry {
            dimension,
            name: dimension.label(),
            score: profile.score(dimension),
        })
        .collect();

    ranked.sort_by(compare_ranked);

    std::array::from_fn(|position| ranked[position])
}

fn compare_ranked<D: Dimension>(a: &RankedEntry<D>, b: &RankedEntry<D>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.dimension.index().cmp(&b.dimension.index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{RiasecDimension, RiasecScores, ValueDimension, ValueScores};

    #[test]
    fn ties_resolve_by_declaration_order() {
        let scores = RiasecScores::from_ordered([3.0; 6]);
        let top: [_; 3] = top_n(&scores);
        let dimensions: Vec<_> = top.iter().map(|entry| entry.dimension).collect();
        assert_eq!(
            dimensions,
            vec![
                RiasecDimension::Realistic,
                RiasecDimension::Investigative,
                RiasecDimension::Artistic
            ]
        );
    }

    #[test]
    fn later_dimension_wins_only_on_strictly_higher_score() {
        let scores = ValueScores::from_ordered([3.5, 3.0, 3.0, 3.0, 3.0, 3.51]);
        let top: [_; 2] = top_n(&scores);
        assert_eq!(top[0].dimension, ValueDimension::WorkConditions);
        assert_eq!(top[0].name, "工作条件/安全感");
        assert_eq!(top[1].dimension, ValueDimension::Achievement);
    }

    #[test]
    fn tie_in_the_middle_keeps_earlier_dimension_first() {
        let scores = ValueScores::from_ordered([2.0, 2.5, 4.0, 3.0, 4.0, 1.0]);
        let top: [_; 2] = top_n(&scores);
        assert_eq!(top[0].dimension, ValueDimension::Recognition);
        assert_eq!(top[1].dimension, ValueDimension::Support);
    }
}
