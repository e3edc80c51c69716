//! Cleaning and column derivation for loaded deliveries
//!
//! Turns raw [`Delivery`] rows into an [`InningsTable`] in a single pass:
//! - empty `player_out` / `wicket_kind` become `None`
//! - `is_wicket` and `batter_team` are derived
//! - running per-team runs, balls and run rate are attached to every delivery

use crate::common::{BallProgress, CleanDelivery, Delivery, InningsTable};
use log::warn;

/// Cleans `deliveries` and derives every computed column.
///
/// This never fails; malformed input has already been rejected by the loader.
pub fn clean_deliveries(deliveries: Vec<Delivery>) -> InningsTable {
    let mut teams: Vec<String> = Vec::new();
    // Indexed like `teams`
    let mut progress: Vec<Option<BallProgress>> = Vec::new();
    let mut inconsistent_wickets = 0usize;

    let mut cleaned = Vec::with_capacity(deliveries.len());
    for delivery in deliveries {
        let player_out = non_missing(delivery.player_out);
        let wicket_kind = non_missing(delivery.wicket_kind);
        let is_wicket = player_out.is_some();
        if is_wicket != wicket_kind.is_some() {
            inconsistent_wickets += 1;
        }

        let team_index = match teams.iter().position(|t| *t == delivery.team) {
            Some(index) => index,
            None => {
                teams.push(delivery.team.clone());
                progress.push(None);
                teams.len() - 1
            }
        };
        let ball = BallProgress::advance(progress[team_index], delivery.runs_total);
        progress[team_index] = Some(ball);

        cleaned.push(CleanDelivery {
            batter_team: delivery.team.clone(),
            team: delivery.team,
            over: delivery.over,
            batter: delivery.batter,
            bowler: delivery.bowler,
            runs_batter: delivery.runs_batter,
            runs_total: delivery.runs_total,
            player_out,
            wicket_kind,
            is_wicket,
            progress: ball,
        });
    }

    if inconsistent_wickets > 0 {
        warn!(
            "{} deliveries have only one of player_out/wicket_kind set",
            inconsistent_wickets
        );
    }

    InningsTable {
        deliveries: cleaned,
        teams,
    }
}

/// Maps the empty-string encoding of a missing value to `None`.
fn non_missing(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
