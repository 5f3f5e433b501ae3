//! Per-seat behavioural statistics.
//!
//! Counters are updated for the acting seat on every recorded action and
//! turned into display percentages on demand by [`StatisticsTable::derived`].

use crate::position::Position;
use crate::seat::{Action, Seat};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// How `hands_played` is maintained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandCounting {
    /// Number of distinct hands in which the seat acted at least once.
    #[default]
    Participated,
    /// Number of the latest hand in which the seat acted.
    Latest,
}

impl HandCounting {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandCounting::Participated => "participated",
            HandCounting::Latest => "latest",
        }
    }
}

impl FromStr for HandCounting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "participated" => Ok(HandCounting::Participated),
            "latest" => Ok(HandCounting::Latest),
            other => Err(format!(
                "unknown hand counting '{}' (expected participated or latest)",
                other
            )),
        }
    }
}

/// Running counters for one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStat {
    pub hands_played: u32,
    pub last_hand: Option<u32>,
    #[serde(skip)]
    last_preflop_hand: Option<u32>,
    pub preflop_actions: u32,
    pub vpip: u32,
    pub pfr: u32,
    pub rfi: u32,
    pub rfi_opportunities: u32,
    pub bet_fold: u32,
    pub bet_fold_opportunities: u32,
    pub bets: u32,
    pub calls: u32,
    /// Seat position at the last action or reset
    pub position: Option<Position>,
}

impl PlayerStat {
    fn with_position(position: Option<Position>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Display figures derived from a [`PlayerStat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedStats {
    pub vpip: f64,
    pub pfr: f64,
    pub af: f64,
    pub rfi: f64,
    pub bet_fold: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn percent(count: u32, denominator: u32) -> f64 {
    round_to(f64::from(count) / f64::from(denominator.max(1)) * 100.0, 1)
}

impl From<&PlayerStat> for DerivedStats {
    fn from(stat: &PlayerStat) -> Self {
        Self {
            vpip: percent(stat.vpip, stat.hands_played),
            pfr: percent(stat.pfr, stat.hands_played),
            af: round_to(f64::from(stat.bets) / f64::from(stat.calls.max(1)), 2),
            rfi: percent(stat.rfi, stat.rfi_opportunities),
            bet_fold: percent(stat.bet_fold, stat.bet_fold_opportunities),
        }
    }
}

/// Statistics for every occupied seat, keyed by seat index.
#[derive(Debug, Clone, Default)]
pub struct StatisticsTable {
    counting: HandCounting,
    entries: BTreeMap<usize, PlayerStat>,
}

impl StatisticsTable {
    pub fn new(counting: HandCounting) -> Self {
        Self {
            counting,
            entries: BTreeMap::new(),
        }
    }

    pub fn counting(&self) -> HandCounting {
        self.counting
    }

    /// Fresh counters for every occupied seat.
    pub fn initialize(&mut self, seats: &[Seat]) {
        self.entries = seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_occupied())
            .map(|(i, seat)| (i, PlayerStat::with_position(seat.position())))
            .collect();
    }

    pub fn get(&self, seat: usize) -> Option<&PlayerStat> {
        self.entries.get(&seat)
    }

    /// Updates the counters of `seat` for one action.
    pub fn record(
        &mut self,
        seat: usize,
        action: Action,
        stage: Stage,
        position: Option<Position>,
        hand: u32,
    ) {
        let counting = self.counting;
        let stat = self.entries.entry(seat).or_default();
        let blind = position.is_some_and(|p| p.is_blind());
        let aggressive = action == Action::BetRaise;

        match counting {
            HandCounting::Participated => {
                if stat.last_hand != Some(hand) {
                    stat.hands_played += 1;
                }
            }
            HandCounting::Latest => stat.hands_played = hand,
        }
        stat.last_hand = Some(hand);
        stat.position = position;

        if stage == Stage::Preflop {
            stat.preflop_actions += 1;
            let first_this_hand = stat.last_preflop_hand != Some(hand);
            stat.last_preflop_hand = Some(hand);
            if first_this_hand && !blind {
                stat.rfi_opportunities += 1;
                if aggressive {
                    stat.rfi += 1;
                }
            }
            if action != Action::Fold {
                stat.vpip += 1;
            }
            if aggressive {
                stat.pfr += 1;
            }
        }

        match action {
            Action::BetRaise => {
                stat.bets += 1;
                stat.bet_fold_opportunities += 1;
            }
            Action::Call => stat.calls += 1,
            Action::Fold if !blind => stat.bet_fold += 1,
            _ => {}
        }
    }

    /// Display figures for `seat`; all zero for a seat without counters.
    pub fn derived(&self, seat: usize) -> DerivedStats {
        self.entries
            .get(&seat)
            .map(DerivedStats::from)
            .unwrap_or_default()
    }

    /// Zeroes every counter of `seat`, keeping `position` as its label.
    pub fn reset(&mut self, seat: usize, position: Option<Position>) {
        self.entries
            .insert(seat, PlayerStat::with_position(position));
    }
}
