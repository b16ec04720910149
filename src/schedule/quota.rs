use super::model::SubscriptionTier;

/// Premium-meal cadence of a subscription tier.
///
/// Weeks are grouped into blocks of `block_len`; a week owes premium meals
/// when its zero-based position inside its block is listed in `active`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaPolicy {
    pub weekly_rate: f64,
    pub block_len: u32,
    pub active: &'static [u32],
}

const WEEKLY: QuotaPolicy = QuotaPolicy {
    weekly_rate: 0.5,
    block_len: 4,
    active: &[0, 2],
};

const EVERY_WEEK: QuotaPolicy = QuotaPolicy {
    weekly_rate: 1.0,
    block_len: 1,
    active: &[0],
};

impl QuotaPolicy {
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Weekly => WEEKLY,
            SubscriptionTier::Monthly | SubscriptionTier::Quarterly => EVERY_WEEK,
        }
    }

    /// `week` is 1-based; week 0 never owes anything.
    pub fn should_have_five_star(&self, week: u32) -> bool {
        if week == 0 || self.block_len == 0 {
            return false;
        }
        self.active.contains(&((week - 1) % self.block_len))
    }

    /// Premium slots available in `week`.
    pub fn five_star_budget(&self, week: u32) -> u32 {
        if self.should_have_five_star(week) {
            self.weekly_rate.ceil().max(0.0) as u32
        } else {
            0
        }
    }
}

pub fn should_have_five_star(week: u32, tier: SubscriptionTier) -> bool {
    QuotaPolicy::for_tier(tier).should_have_five_star(week)
}

pub fn five_star_budget(week: u32, tier: SubscriptionTier) -> u32 {
    QuotaPolicy::for_tier(tier).five_star_budget(week)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_tier_owes_weeks_one_and_three_of_each_block() {
        let owed: Vec<u32> = (1..=8)
            .filter(|w| should_have_five_star(*w, SubscriptionTier::Weekly))
            .collect();
        assert_eq!(owed, vec![1, 3, 5, 7]);
    }

    #[test]
    fn monthly_and_quarterly_owe_every_week() {
        for week in 1..=12 {
            assert!(should_have_five_star(week, SubscriptionTier::Monthly));
            assert!(should_have_five_star(week, SubscriptionTier::Quarterly));
        }
    }

    #[test]
    fn budget_is_one_slot_when_owed() {
        assert_eq!(five_star_budget(1, SubscriptionTier::Weekly), 1);
        assert_eq!(five_star_budget(2, SubscriptionTier::Weekly), 0);
        assert_eq!(five_star_budget(4, SubscriptionTier::Monthly), 1);
        assert_eq!(five_star_budget(0, SubscriptionTier::Quarterly), 0);
    }
}
