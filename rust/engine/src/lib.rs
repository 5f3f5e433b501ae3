//! # pokertrack-engine: Table Turn and Statistics Core
//!
//! Tracks, for a single table of up to ten players, whose turn it is, which
//! betting round is active and how each player tends to act (VPIP, PFR,
//! aggression factor, raise-first-in and bet-then-fold rates). No chips or
//! cards are modelled; the user reports each discrete action and the engine
//! keeps turn order and statistics consistent.
//!
//! ## Core Modules
//!
//! - [`seat`] - Seat slots and the four reportable actions
//! - [`position`] - Position labels relative to the dealer button
//! - [`stage`] - Betting rounds (Preflop, Flop, Turn, River)
//! - [`turn`] - First, next and closing actor of a round
//! - [`game`] - Table state and button rotation
//! - [`engine`] - The [`engine::Tracker`] state machine
//! - [`stats`] - Per-seat counters and derived percentages
//! - [`history`] - In-memory record of hands and actions
//! - [`snapshot`] - Serializable view for display
//! - [`errors`] - Error types for tracker operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokertrack_engine::engine::Tracker;
//! use pokertrack_engine::seat::Action;
//!
//! let mut tracker = Tracker::default();
//! tracker.set_player_name(0, "Ann").unwrap();
//! tracker.set_player_name(1, "Bob").unwrap();
//! tracker.set_player_name(2, "Cat").unwrap();
//! tracker.set_dealer(0).unwrap();
//! tracker.start_game().unwrap();
//!
//! // Button opens three-handed, both fold: next hand, button moves on
//! tracker.record_action(Action::Fold).unwrap();
//! tracker.record_action(Action::Fold).unwrap();
//! assert_eq!(tracker.hand_number(), 2);
//! assert_eq!(tracker.table().dealer(), Some(1));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use pokertrack_engine::engine::Tracker;
//! use pokertrack_engine::errors::TrackerError;
//!
//! let mut tracker = Tracker::default();
//! assert_eq!(tracker.start_game(), Err(TrackerError::NoPlayers));
//! ```

pub mod engine;
pub mod errors;
pub mod game;
pub mod history;
pub mod position;
pub mod seat;
pub mod snapshot;
pub mod stage;
pub mod stats;
pub mod turn;
