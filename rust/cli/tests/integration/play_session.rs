use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;

const FOUR_HANDED: [&str; 6] = [
    "play",
    "--players",
    "Ann,Bob,Cat,Dan",
    "--dealer",
    "0",
    "--start",
];

/// Pretty-printed JSON objects start and end on their own lines.
fn extract_json(stdout: &str) -> Value {
    let lines: Vec<&str> = stdout.lines().collect();
    let start = lines.iter().position(|l| *l == "{").expect("json start");
    let end = lines.iter().rposition(|l| *l == "}").expect("json end");
    serde_json::from_str(&lines[start..=end].join("\n")).expect("valid json")
}

#[test]
#[serial]
fn checked_down_hand_moves_the_button() {
    let mut script = String::from("call\ncall\ncall\ncheck\n");
    // flop, turn and river checked around
    for _ in 0..12 {
        script.push_str("check\n");
    }
    script.push_str("quit\n");

    let res = CliRunner::new().run_with_input(&FOUR_HANDED, &script);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.is_empty(), "stderr={}", res.stderr);

    let out = res.stdout;
    assert!(out.contains("Hand #1 | Flop | Seat 1 Bob (SB) to act"));
    assert!(out.contains("Hand #1 | Turn | Seat 1 Bob (SB) to act"));
    assert!(out.contains("Hand #1 | River | Seat 1 Bob (SB) to act"));
    assert!(out.contains("Hand #1 complete. Dealer moves to seat 1"));
    assert!(out.contains("Hand #2 | Preflop | Seat 0 Ann (UTG) to act"));
    assert!(out.contains("Session ended at hand #2 (1 completed)"));
}

#[test]
#[serial]
fn folds_to_one_player_end_the_hand() {
    let res = CliRunner::new().run_with_input(
        &["play", "--players", "Ann,Bob,Cat", "--dealer", "0", "--start"],
        "fold\nfold\nhistory\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Hand #1 complete. Dealer moves to seat 1"));
    assert!(res.stdout.contains("one player left"));
    assert!(res.stdout.contains("Hand #2 (dealer seat 1"));
}

#[test]
#[serial]
fn raise_reopens_the_action() {
    // UTG raises; everyone calls back round to the raiser
    let res = CliRunner::new().run_with_input(
        &FOUR_HANDED,
        "raise\ncall\ncall\ncall\nstatus\n",
    );
    assert_eq!(res.exit_code, 0);
    let out = res.stdout;
    assert!(out.contains("Seat 3 Bet/Raise"));
    assert!(out.contains("Hand #1 | Flop | Seat 1 Bob (SB) to act"));
}

#[test]
#[serial]
fn rejected_commands_do_not_end_the_session() {
    let res = CliRunner::new().run_with_input(
        &FOUR_HANDED,
        "dealer 2\nname 2\nreset 7\nfold\n",
    );
    assert_eq!(res.exit_code, 0);
    let errors: Vec<&str> = res.stderr.lines().collect();
    assert_eq!(
        errors,
        vec![
            "Error: The game has already started",
            "Error: Seat 2 cannot join or leave once the game has started",
            "Error: Seat 7 has no player",
        ]
    );
    assert!(res.stdout.contains("Seat 3 Fold"));
}

#[test]
#[serial]
fn snapshot_json_reflects_statistics() {
    let res = CliRunner::new().run_with_input(&FOUR_HANDED, "call\njson\nq\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json = extract_json(&res.stdout);

    assert_eq!(json["started"], true);
    assert_eq!(json["hand"], 1);
    assert_eq!(json["stage"], "Preflop");
    assert_eq!(json["actor"], 0);
    assert_eq!(json["dealer"], 0);
    assert_eq!(json["last_aggressor"], 2);
    let seats = json["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 4);
    assert_eq!(seats[3]["position"], "UTG");
    assert_eq!(seats[3]["stats"]["vpip"], 100.0);
    assert_eq!(seats[0]["stats"]["vpip"], 0.0);
}

#[test]
#[serial]
fn browsing_seats_shows_their_stats() {
    let res = CliRunner::new().run_with_input(&FOUR_HANDED, "right\n<\n<\n");
    assert_eq!(res.exit_code, 0);
    let lines: Vec<&str> = res
        .stdout
        .lines()
        .filter(|l| l.starts_with("Seat ") && l.contains("VPIP"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Seat 0 Ann:"));
    assert!(lines[1].starts_with("Seat 3 Dan:"));
    assert!(lines[2].starts_with("Seat 2 Cat:"));
}

#[test]
#[serial]
fn setup_can_happen_inside_the_session() {
    let res = CliRunner::new().run_with_input(
        &["play"],
        "name 0 Ann\nname 1 Bob\nname 2 Cat\ndealer 2\nstart\nstats\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Type 'help' for commands."));
    // dealer 2, three-handed: the button opens
    assert!(res.stdout.contains("Seat 2 Cat (BTN) to act"));
    assert_eq!(
        res.stdout
            .lines()
            .filter(|l| l.contains("BETFOLD"))
            .count(),
        4
    );
}

#[test]
#[serial]
fn end_of_input_ends_the_session() {
    let res = CliRunner::new().run_with_input(&FOUR_HANDED, "call\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Session ended at hand #1 (0 completed)"));
}
