use serde::Deserialize;

/// A single delivery exactly as it appears in the input CSV.
///
/// Columns not listed here (e.g. `non_striker`, `runs_extras`) are ignored
/// during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Delivery {
    /// Batting side for this delivery
    pub team: String,
    /// Over number the delivery belongs to
    pub over: u32,
    /// Batter on strike
    pub batter: String,
    /// Bowler of the delivery
    pub bowler: String,
    /// Runs credited to the batter
    pub runs_batter: u32,
    /// Total runs from the delivery, extras included
    pub runs_total: u32,
    /// Dismissed player, empty when no wicket fell
    pub player_out: String,
    /// Dismissal type, empty when no wicket fell
    pub wicket_kind: String,
}

/// Running per-team totals at a given delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallProgress {
    /// Sum of `runs_total` for the team up to and including this delivery
    pub cumulative_runs: u32,
    /// Number of deliveries faced by the team up to and including this one
    pub cumulative_balls: u32,
    /// Runs per six deliveries at this point of the innings
    pub run_rate: f64,
}

impl BallProgress {
    /// Advances the running totals by one delivery worth `runs` runs.
    pub fn advance(previous: Option<BallProgress>, runs: u32) -> Self {
        let (runs_so_far, balls_so_far) = previous
            .map(|p| (p.cumulative_runs, p.cumulative_balls))
            .unwrap_or((0, 0));

        let cumulative_runs = runs_so_far + runs;
        let cumulative_balls = balls_so_far + 1;
        Self {
            cumulative_runs,
            cumulative_balls,
            run_rate: (cumulative_runs as f64 / cumulative_balls as f64) * 6.0,
        }
    }
}

/// A delivery after cleaning, with every derived column attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanDelivery {
    pub team: String,
    /// Alias of `team`; the batting side is the batter's side.
    pub batter_team: String,
    pub over: u32,
    pub batter: String,
    pub bowler: String,
    pub runs_batter: u32,
    pub runs_total: u32,
    pub player_out: Option<String>,
    pub wicket_kind: Option<String>,
    /// True iff `player_out` is present
    pub is_wicket: bool,
    pub progress: BallProgress,
}

/// The cleaned in-memory delivery table for one match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InningsTable {
    /// Deliveries in file record order
    pub deliveries: Vec<CleanDelivery>,
    /// Teams in order of first appearance
    pub teams: Vec<String>,
}

impl InningsTable {
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Position of `team` in first-appearance order.
    pub fn team_index(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|t| t == team)
    }

    /// Iterates over deliveries on which a wicket fell.
    pub fn wickets(&self) -> impl Iterator<Item = &CleanDelivery> {
        self.deliveries.iter().filter(|d| d.is_wicket)
    }
}
