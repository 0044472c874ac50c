use std::collections::HashMap;

use crate::analyzers::types::{
    ConstructorStanding, DriverStanding, RaceResult, Standing, StandingEntity,
};
use crate::analyzers::utility::sorted_by_round;

struct Tally {
    id: String,
    code: Option<String>,
    name: String,
    points: f64,
    /// Distinct rounds this entity has entered so far.
    races: usize,
    last_round: Option<u32>,
    /// Value of `races` when `points` last increased.
    reached_at: usize,
}

/// Groups results by driver or constructor and ranks them by points.
///
/// Ties on points go to whoever needed fewer of their own races to reach the
/// total, then to whoever appeared first in the season.
pub fn compute_standings(results: &[RaceResult], entity: StandingEntity) -> Vec<Standing> {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in sorted_by_round(results) {
        let (id, code, name) = match entity {
            StandingEntity::Driver => (r.driver.id.as_str(), r.driver.code.clone(), &r.driver.name),
            StandingEntity::Constructor => (r.constructor.id.as_str(), None, &r.constructor.name),
        };

        let slot = *index.entry(id).or_insert_with(|| {
            tallies.push(Tally {
                id: id.to_string(),
                code,
                name: name.clone(),
                points: 0.0,
                races: 0,
                last_round: None,
                reached_at: 0,
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[slot];
        // Two cars of one constructor in a round are still one race
        if tally.last_round != Some(r.round) {
            tally.races += 1;
            tally.last_round = Some(r.round);
        }
        if r.points > 0.0 {
            tally.points += r.points;
            tally.reached_at = tally.races;
        }
    }

    // Stable sort keeps first-appearance order as the last tie-break
    tallies.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then(a.reached_at.cmp(&b.reached_at))
    });

    tallies
        .into_iter()
        .enumerate()
        .map(|(i, t)| Standing {
            id: t.id,
            code: t.code,
            name: t.name,
            points: t.points,
            rank: i as u32 + 1,
        })
        .collect()
}

pub fn driver_standings(results: &[RaceResult]) -> Vec<DriverStanding> {
    compute_standings(results, StandingEntity::Driver)
        .into_iter()
        .map(DriverStanding::from)
        .collect()
}

pub fn constructor_standings(results: &[RaceResult]) -> Vec<ConstructorStanding> {
    compute_standings(results, StandingEntity::Constructor)
        .into_iter()
        .map(ConstructorStanding::from)
        .collect()
}
