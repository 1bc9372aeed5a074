/// Running spend for a weekly plan.
///
/// The weekly budget is split evenly across days; each day starts from its
/// full allowance, so unused money never carries over. The budget is a
/// scoring signal only and may go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    daily_allowance: f64,
    remaining_today: f64,
    spent: f64,
}

impl BudgetState {
    pub fn new(weekly_budget: f64, days: u8) -> Self {
        let daily_allowance = if days > 0 {
            weekly_budget / days as f64
        } else {
            0.0
        };
        Self {
            daily_allowance,
            remaining_today: daily_allowance,
            spent: 0.0,
        }
    }

    /// Reset the day's remaining budget to the full allowance.
    pub fn start_day(&mut self) {
        self.remaining_today = self.daily_allowance;
    }

    /// Record a purchase against today and the week.
    pub fn charge(&mut self, cost: f64) {
        self.remaining_today -= cost;
        self.spent += cost;
    }

    pub fn daily_allowance(&self) -> f64 {
        self.daily_allowance
    }

    pub fn remaining_today(&self) -> f64 {
        self.remaining_today
    }

    /// Total charged across all days.
    pub fn spent(&self) -> f64 {
        self.spent
    }
}
