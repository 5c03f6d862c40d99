//! Aggregate statistics derived from the donor collection

use super::entity::{BloodGroup, Donor};

/// Per-group counts and the headline figures derived from them
///
/// Derived from the full, unfiltered collection on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodGroupStats {
    counts: [usize; BloodGroup::ALL.len()],
    total: usize,
}

impl BloodGroupStats {
    /// Compute stats over a donor list
    pub fn from_donors(donors: &[Donor]) -> Self {
        let mut counts = [0usize; BloodGroup::ALL.len()];

        for donor in donors {
            let index = BloodGroup::ALL
                .iter()
                .position(|g| *g == donor.blood_group())
                .unwrap_or(0);
            counts[index] += 1;
        }

        Self {
            counts,
            total: donors.len(),
        }
    }

    /// Total number of donors
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for a single group
    pub fn count(&self, group: BloodGroup) -> usize {
        let index = BloodGroup::ALL.iter().position(|g| *g == group).unwrap_or(0);
        self.counts[index]
    }

    /// Per-group counts in enumeration order
    pub fn counts(&self) -> impl Iterator<Item = (BloodGroup, usize)> + '_ {
        BloodGroup::ALL.iter().copied().zip(self.counts.iter().copied())
    }

    /// Number of groups with at least one donor
    pub fn groups_represented(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// The group with the maximum count, ties broken by enumeration order;
    /// None for an empty collection
    pub fn most_common(&self) -> Option<BloodGroup> {
        if self.total == 0 {
            return None;
        }

        let mut best: Option<(BloodGroup, usize)> = None;

        for (group, count) in self.counts() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((group, count)),
            }
        }

        best.map(|(group, _)| group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donor::{DonorId, NewDonor};
    use chrono::Utc;

    fn donor(id: &str, group: BloodGroup) -> Donor {
        Donor::new(
            DonorId::new(id).unwrap(),
            NewDonor::new("Donor", 30, group, "555-0000").unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_collection() {
        let stats = BloodGroupStats::from_donors(&[]);

        assert_eq!(stats.total(), 0);
        assert_eq!(stats.groups_represented(), 0);
        assert_eq!(stats.most_common(), None);
    }

    #[test]
    fn test_seed_scenario_tie_break() {
        // Seed of 3 donors with groups {O+, A-, B+}: every count is 1, so
        // the tie-break picks the first maximal group in enumeration order.
        let donors = vec![
            donor("d-1", BloodGroup::OPositive),
            donor("d-2", BloodGroup::ANegative),
            donor("d-3", BloodGroup::BPositive),
        ];
        let stats = BloodGroupStats::from_donors(&donors);

        assert_eq!(stats.total(), 3);
        assert_eq!(stats.groups_represented(), 3);
        assert_eq!(stats.count(BloodGroup::AbPositive), 0);
        assert_eq!(stats.most_common(), Some(BloodGroup::ANegative));
    }

    #[test]
    fn test_add_donor_increments_counts() {
        let mut donors = vec![
            donor("d-1", BloodGroup::OPositive),
            donor("d-2", BloodGroup::ANegative),
            donor("d-3", BloodGroup::BPositive),
        ];
        let before = BloodGroupStats::from_donors(&donors);

        donors.push(donor("d-4", BloodGroup::OPositive));
        let after = BloodGroupStats::from_donors(&donors);

        assert_eq!(
            after.count(BloodGroup::OPositive),
            before.count(BloodGroup::OPositive) + 1
        );
        assert_eq!(after.total(), before.total() + 1);
        assert_eq!(after.most_common(), Some(BloodGroup::OPositive));
    }

    #[test]
    fn test_counts_in_enumeration_order() {
        let donors = vec![donor("d-1", BloodGroup::ONegative)];
        let stats = BloodGroupStats::from_donors(&donors);

        let groups: Vec<BloodGroup> = stats.counts().map(|(g, _)| g).collect();
        assert_eq!(groups, BloodGroup::ALL);
    }
}
