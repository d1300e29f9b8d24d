//! Integration tests for the Sleeper export commands against a mock server

use dynasty_ffl::{
    commands::sleeper::{handle_sleeper_draft, handle_sleeper_roster},
    sleeper::SleeperClient,
    LeagueError, LeagueId, Season,
};
use serde_json::json;
use std::{fs, time::Duration};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE: &str = "780973719656284160";

fn league_id() -> Option<LeagueId> {
    Some(LeagueId::new(LEAGUE).unwrap())
}

fn client(server: &MockServer) -> SleeperClient {
    SleeperClient::new()
        .unwrap()
        .with_base_url(server.uri())
        .with_delay(Duration::ZERO)
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_league(server: &MockServer) {
    mount_json(
        server,
        &format!("/league/{LEAGUE}"),
        json!({"league_id": LEAGUE, "name": "Dine Nasty", "season": "2025",
               "roster_positions": ["QB", "RB", "BN", "BN"]}),
    )
    .await;
    mount_json(
        server,
        &format!("/league/{LEAGUE}/rosters"),
        json!([
            {"roster_id": 1, "owner_id": "u1", "players": ["4046", "9509"], "starters": ["4046", "9509"]},
            {"roster_id": 2, "owner_id": "u2", "players": ["7564"], "starters": ["0", "0"]}
        ]),
    )
    .await;
    mount_json(
        server,
        &format!("/league/{LEAGUE}/users"),
        json!([
            {"user_id": "u1", "display_name": "Mickey", "metadata": {"team_name": "JP BREAKS"}},
            {"user_id": "u2", "display_name": "Kels"}
        ]),
    )
    .await;
    mount_json(
        server,
        "/players/nfl",
        json!({
            "4046": {"full_name": "Josh Allen", "position": "QB", "team": "BUF"},
            "9509": {"full_name": "Bijan Robinson", "position": "RB", "team": "ATL"},
            "7564": {"full_name": "Ja'Marr Chase", "position": "WR", "team": "CIN"}
        }),
    )
    .await;
}

async fn mount_drafts(server: &MockServer) {
    mount_json(
        server,
        &format!("/league/{LEAGUE}/drafts"),
        json!([
            {"draft_id": "d2025", "season": "2025", "type": "auction"},
            {"draft_id": "d2024", "season": "2024", "type": "snake"}
        ]),
    )
    .await;
    for (id, season, player) in [("d2025", "2025", "9509"), ("d2024", "2024", "4046")] {
        mount_json(
            server,
            &format!("/draft/{id}"),
            json!({"draft_id": id, "season": season, "settings": {"teams": 2}}),
        )
        .await;
        mount_json(
            server,
            &format!("/draft/{id}/picks"),
            json!([{"round": 1, "pick_no": 1, "roster_id": 1, "picked_by": "u1",
                    "metadata": {"player_id": player}}]),
        )
        .await;
    }
}

#[tokio::test]
async fn test_roster_export_writes_both_files() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    let dir = TempDir::new().unwrap();

    let written = handle_sleeper_roster(&client(&server), league_id(), dir.path(), false)
        .await
        .unwrap();

    assert_eq!(written.len(), 2);
    let players = fs::read_to_string(dir.path().join(format!(
        "sleeper_league_{LEAGUE}_roster_players.csv"
    )))
    .unwrap();
    assert!(players.starts_with("league_id,season,owner_user_id,"));
    assert_eq!(players.lines().count(), 4);
    assert!(players.contains("Ja'Marr Chase"));

    let teams =
        fs::read_to_string(dir.path().join(format!("sleeper_league_{LEAGUE}_teams.csv"))).unwrap();
    assert_eq!(teams.lines().count(), 3);
    assert!(teams.contains("JP BREAKS"));
    assert!(teams.contains("Kels"));
}

#[tokio::test]
async fn test_draft_export_writes_one_file_per_draft() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    mount_drafts(&server).await;
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("sleeper_drafts_csv");

    let written = handle_sleeper_draft(&client(&server), league_id(), None, &out_dir, false)
        .await
        .unwrap();

    assert_eq!(
        written,
        vec![
            out_dir.join("sleeper_draft_2025_d2025.csv"),
            out_dir.join("sleeper_draft_2024_d2024.csv"),
        ]
    );
    let csv = fs::read_to_string(&written[0]).unwrap();
    assert!(csv.starts_with("season,draft_id,draft_name,"));
    assert_eq!(csv.lines().count(), 2);
}

#[tokio::test]
async fn test_draft_without_picks_gets_header_only_file() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    mount_json(
        &server,
        &format!("/league/{LEAGUE}/drafts"),
        json!([{"draft_id": "d2026", "season": "2026", "type": "auction", "status": "pre_draft"}]),
    )
    .await;
    mount_json(
        &server,
        "/draft/d2026",
        json!({"draft_id": "d2026", "season": "2026", "status": "pre_draft"}),
    )
    .await;
    mount_json(&server, "/draft/d2026/picks", json!([])).await;
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("sleeper_drafts_csv");

    let written = handle_sleeper_draft(&client(&server), league_id(), None, &out_dir, false)
        .await
        .unwrap();

    let expected = out_dir.join("sleeper_draft_2026_d2026.csv");
    assert_eq!(written, vec![expected.clone()]);
    let csv = fs::read_to_string(&expected).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("season,draft_id,draft_name,"));
}

#[tokio::test]
async fn test_draft_export_for_missing_season_writes_nothing() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    mount_drafts(&server).await;
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("sleeper_drafts_csv");

    let written = handle_sleeper_draft(
        &client(&server),
        league_id(),
        Some(Season::new(2019)),
        &out_dir,
        false,
    )
    .await
    .unwrap();

    assert!(written.is_empty());
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_not_found_leaves_no_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("sleeper_drafts_csv");

    let err = handle_sleeper_draft(&client(&server), league_id(), None, &out_dir, false)
        .await
        .unwrap_err();
    assert!(matches!(err, LeagueError::UpstreamError { .. }), "{err:?}");
    assert!(!out_dir.exists());

    let err = handle_sleeper_roster(&client(&server), league_id(), dir.path(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, LeagueError::UpstreamError { .. }), "{err:?}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
