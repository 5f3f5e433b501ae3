//! Text rendering of tracker state for the terminal.
//!
//! Pure functions over engine types; nothing here writes to a stream.
//!
//! ## Example
//!
//! ```rust
//! use pokertrack_engine::stats::DerivedStats;
//! use pokertrack_cli::formatters::format_stats;
//!
//! let line = format_stats(&DerivedStats::default());
//! assert_eq!(line, "VPIP: 0.0% PFR: 0.0% AF: 0.00 RFI: 0.0% BETFOLD: 0.0%");
//! ```

use pokertrack_engine::engine::Tracker;
use pokertrack_engine::history::{HandEnding, HandRecord};
use pokertrack_engine::position::Position;
use pokertrack_engine::stats::DerivedStats;

fn position_label(position: Option<Position>) -> &'static str {
    position.map_or("-", |p| p.label())
}

/// One-line summary of a seat's derived statistics.
pub fn format_stats(stats: &DerivedStats) -> String {
    format!(
        "VPIP: {:.1}% PFR: {:.1}% AF: {:.2} RFI: {:.1}% BETFOLD: {:.1}%",
        stats.vpip, stats.pfr, stats.af, stats.rfi, stats.bet_fold
    )
}

/// Banner naming the hand, the stage and the seat to act, followed by that
/// seat's statistics. Before the game starts only the hand number is shown.
pub fn format_turn(tracker: &Tracker) -> String {
    let Some(actor) = tracker.actor() else {
        return format!("Hand #{} (not started)", tracker.hand_number());
    };
    let seat = &tracker.seats()[actor];
    format!(
        "Hand #{} | {} | Seat {} {} ({}) to act\n  {}",
        tracker.hand_number(),
        tracker.stage(),
        actor,
        seat.name(),
        position_label(seat.position()),
        format_stats(&tracker.derived_stats(actor))
    )
}

/// Every occupied seat with its markers: `>` to act, `*` focused, `D`
/// dealer, `F` folded.
pub fn format_table(tracker: &Tracker) -> String {
    let actor = tracker.actor();
    let focus = tracker.focus();
    let mut lines = Vec::new();
    for (index, seat) in tracker.seats().iter().enumerate() {
        if !seat.is_occupied() {
            continue;
        }
        let marks = format!(
            "{}{}{}{}",
            if actor == Some(index) { '>' } else { ' ' },
            if focus == Some(index) { '*' } else { ' ' },
            if seat.is_dealer() { 'D' } else { ' ' },
            if seat.is_folded() { 'F' } else { ' ' },
        );
        lines.push(format!(
            "{} {:>2} {:<12} {:<6}",
            marks,
            index,
            seat.name(),
            position_label(seat.position())
        ));
    }
    if lines.is_empty() {
        return "(no players seated)".to_string();
    }
    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Statistics of every occupied seat, one line each.
pub fn format_all_stats(tracker: &Tracker) -> String {
    tracker
        .seats()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_occupied())
        .map(|(i, s)| {
            format!(
                "{:>2} {:<12} {}",
                i,
                s.name(),
                format_stats(&tracker.derived_stats(i))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn ending_label(ending: Option<HandEnding>) -> &'static str {
    match ending {
        None => "in progress",
        Some(HandEnding::OneLeft) => "one player left",
        Some(HandEnding::ClosingActorFolded) => "closing player folded",
        Some(HandEnding::RiverComplete) => "river complete",
        Some(HandEnding::Manual) => "new hand requested",
    }
}

/// One hand as a header line plus one indented line per action.
pub fn format_hand(record: &HandRecord) -> String {
    let mut out = format!(
        "Hand #{} (dealer seat {}, {}): {}",
        record.hand,
        record.dealer,
        record.started_at,
        ending_label(record.ending)
    );
    for action in &record.actions {
        out.push_str(&format!(
            "\n  {:<7} seat {} {} ({}): {}",
            action.stage.label(),
            action.seat,
            action.name,
            position_label(action.position),
            action.action
        ));
    }
    out
}
