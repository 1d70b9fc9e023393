//! Folds judgements into directed pair statistics.
//!
//! Each judgement is traversed twice. The forward pass records the direct
//! verdict on `(from, to)`. The reverse pass records the comparison on
//! `(to, from)` and, for upgrades only, counts it as contradicting evidence
//! (`marked_less_wise`). The reverse pass never touches the political tally
//! or the not-wiser/unsure counters.

use std::collections::HashMap;

use crate::domain::foundation::UserId;

use super::pair_map::PairMap;
use super::records::{Affiliation, Demographic, Judgement, Relationship};

/// Builds a [`PairMap`] from judgements and demographics.
pub struct JudgementFolder<'a> {
    affiliations: HashMap<UserId, Affiliation>,
    judgements: &'a [Judgement],
}

impl<'a> JudgementFolder<'a> {
    /// Indexes demographics by user. The first record for a user wins.
    pub fn new(judgements: &'a [Judgement], demographics: &[Demographic]) -> Self {
        let mut affiliations = HashMap::with_capacity(demographics.len());
        for demographic in demographics {
            affiliations
                .entry(demographic.user_id)
                .or_insert_with(|| demographic.affiliation());
        }
        Self {
            affiliations,
            judgements,
        }
    }

    /// Runs both passes and returns the populated accumulator.
    pub fn fold(&self) -> PairMap {
        let mut pairs = PairMap::new();
        self.fold_forward(&mut pairs);
        self.fold_reverse(&mut pairs);
        pairs
    }

    fn fold_forward(&self, pairs: &mut PairMap) {
        for judgement in self.judgements {
            let record = pairs.get(judgement.from_id, judgement.to_id);
            record.contexts.push(judgement.context_id.clone());

            let counts = &mut record.counts;
            counts.impressions += 1;
            match judgement.relationship {
                Relationship::Upgrade => counts.marked_wiser += 1,
                Relationship::NoUpgrade => counts.marked_not_wiser += 1,
                Relationship::NotSure => counts.marked_unsure += 1,
            }

            match self.affiliation_of(judgement.user_id) {
                Affiliation::Republican => counts.politics.republican += 1,
                Affiliation::Democrat => counts.politics.democrat += 1,
                Affiliation::Independent | Affiliation::Unknown => counts.politics.other += 1,
            }
        }
    }

    fn fold_reverse(&self, pairs: &mut PairMap) {
        for judgement in self.judgements {
            let record = pairs.get(judgement.to_id, judgement.from_id);
            record.contexts.push(judgement.context_id.clone());
            record.counts.impressions += 1;
            if judgement.relationship == Relationship::Upgrade {
                record.counts.marked_less_wise += 1;
            }
        }
    }

    fn affiliation_of(&self, user_id: UserId) -> Affiliation {
        self.affiliations
            .get(&user_id)
            .copied()
            .unwrap_or(Affiliation::Unknown)
    }
}
