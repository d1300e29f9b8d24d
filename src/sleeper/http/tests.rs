//! Unit tests for the Sleeper client against a mock server

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE: &str = "780973719656284160";

fn league_id() -> LeagueId {
    LeagueId::new(LEAGUE).unwrap()
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

async fn mount_league_members(server: &MockServer) {
    mount_json(
        server,
        &format!("/league/{LEAGUE}/rosters"),
        json!([
            {
                "roster_id": 1,
                "owner_id": "u1",
                "players": ["4046", "9509"],
                "starters": ["4046", "0"],
                "reserve": null,
                "taxi": null,
                "settings": {"wins": 10, "losses": 4, "ties": 0, "fpts": 1650}
            },
            {
                "roster_id": 2,
                "owner_id": "u2",
                "players": null,
                "starters": null,
                "settings": null
            }
        ]),
    )
    .await;
    mount_json(
        server,
        &format!("/league/{LEAGUE}/users"),
        json!([
            {"user_id": "u1", "display_name": "Mickey", "metadata": {"team_name": "JP BREAKS"}},
            {"user_id": "u2", "username": "speedy", "metadata": null}
        ]),
    )
    .await;
}

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_roster_joins_owners() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;

        let teams = client(&server).fetch_roster(&league_id()).await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].roster_id, 1);
        assert_eq!(teams[0].owner_display, "Mickey");
        assert_eq!(teams[0].team_name, "JP BREAKS");
        assert_eq!(teams[0].wins, Some(10));
        assert_eq!(teams[0].players, vec!["4046", "9509"]);
        assert_eq!(teams[1].team_name, "speedy");
        assert!(teams[1].players.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_roster_players() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;
        mount_json(
            &server,
            &format!("/league/{LEAGUE}"),
            json!({"league_id": LEAGUE, "season": "2025", "roster_positions": ["QB", "RB", "BN"]}),
        )
        .await;
        mount_json(
            &server,
            "/players/nfl",
            json!({
                "4046": {"full_name": "Josh Allen", "position": "QB", "team": "BUF", "age": 29},
                "9509": {"first_name": "Bijan", "last_name": "Robinson", "position": "RB"}
            }),
        )
        .await;

        let export = client(&server).fetch_roster_players(&league_id()).await.unwrap();

        let team_names: Vec<&str> = export.teams.iter().map(|t| t.team_name.as_str()).collect();
        assert_eq!(team_names, vec!["JP BREAKS", "speedy"]);
        assert_eq!(export.teams[0].num_players, 2);
        assert_eq!(export.teams[0].season.as_deref(), Some("2025"));

        assert_eq!(export.players.len(), 2);
        assert_eq!(export.players[0].slot_type, "BENCH");
        assert_eq!(export.players[0].player, "Bijan Robinson");
        assert_eq!(export.players[1].slot_label, "QB");
        assert_eq!(export.players[1].age.as_deref(), Some("29"));
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;

    async fn mount_drafts(server: &MockServer) {
        mount_json(
            server,
            &format!("/league/{LEAGUE}/drafts"),
            json!([
                {"draft_id": "d2025", "season": "2025", "type": "auction", "status": "complete"},
                {"draft_id": "d2024", "season": "2024", "type": "snake", "status": "complete"}
            ]),
        )
        .await;
        mount_json(
            server,
            "/draft/d2025",
            json!({
                "draft_id": "d2025",
                "season": "2025",
                "type": "auction",
                "status": "complete",
                "settings": {"teams": 12},
                "metadata": {"name": "Dine Nasty Auction"}
            }),
        )
        .await;
        mount_json(
            server,
            "/draft/d2025/picks",
            json!([
                {
                    "round": 1, "pick_no": 1, "draft_slot": 3, "roster_id": 2,
                    "picked_by": "u2", "is_keeper": null,
                    "metadata": {"player_id": "9509", "first_name": "Bijan", "last_name": "Robinson",
                                 "position": "RB", "team": "ATL", "amount": "54"}
                },
                {
                    "round": 1, "pick_no": 2, "draft_slot": 1, "roster_id": 1,
                    "picked_by": "",
                    "metadata": {"player_id": "4046", "amount": 61}
                }
            ]),
        )
        .await;
        mount_json(server, "/draft/d2024", json!({"draft_id": "d2024", "season": "2024"})).await;
        mount_json(server, "/draft/d2024/picks", json!([{"round": 1, "pick_no": 1}])).await;
    }

    #[tokio::test]
    async fn test_fetch_draft_for_season() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;
        mount_drafts(&server).await;

        let drafts = client(&server)
            .fetch_draft(&league_id(), Some(Season::new(2025)))
            .await
            .unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].draft.draft_id, "d2025");
        let picks = &drafts[0].picks;
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].draft_name.as_deref(), Some("Dine Nasty Auction"));
        assert_eq!(picks[0].num_teams, Some(12));
        assert_eq!(picks[0].auction_price.as_deref(), Some("54"));
        assert_eq!(picks[0].picked_by_display.as_deref(), Some("speedy"));
        // Blank picked_by falls back to the roster owner.
        assert_eq!(picks[1].picked_by_user_id.as_deref(), Some("u1"));
        assert_eq!(picks[1].picked_by_team_name.as_deref(), Some("JP BREAKS"));
        assert_eq!(picks[1].auction_price.as_deref(), Some("61"));
    }

    #[tokio::test]
    async fn test_fetch_draft_all_seasons() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;
        mount_drafts(&server).await;

        let drafts = client(&server).fetch_draft(&league_id(), None).await.unwrap();

        let ids: Vec<&str> = drafts.iter().map(|d| d.draft.draft_id.as_str()).collect();
        assert_eq!(ids, vec!["d2025", "d2024"]);
        assert_eq!(drafts[0].picks.len(), 2);
        assert_eq!(drafts[1].picks.len(), 1);
        assert_eq!(drafts[1].picks[0].season.as_deref(), Some("2024"));
    }

    #[tokio::test]
    async fn test_fetch_draft_keeps_draft_without_picks() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;
        mount_json(
            &server,
            &format!("/league/{LEAGUE}/drafts"),
            json!([{"draft_id": "d2026", "season": "2026", "type": "auction", "status": "pre_draft"}]),
        )
        .await;
        // The detail record omits the season; the league listing supplies it.
        mount_json(&server, "/draft/d2026", json!({"draft_id": "d2026", "status": "pre_draft"})).await;
        mount_json(&server, "/draft/d2026/picks", json!([])).await;

        let drafts = client(&server).fetch_draft(&league_id(), None).await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].draft.season.as_deref(), Some("2026"));
        assert!(drafts[0].picks.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_draft_no_matching_season_is_empty() {
        let server = MockServer::start().await;
        mount_league_members(&server).await;
        mount_drafts(&server).await;

        let drafts = client(&server)
            .fetch_draft(&league_id(), Some(Season::new(2019)))
            .await
            .unwrap();

        assert!(drafts.is_empty());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).fetch_roster(&league_id()).await.unwrap_err();

        match err {
            LeagueError::UpstreamError { url, message } => {
                assert!(url.ends_with(&format!("/league/{LEAGUE}/rosters")));
                assert!(message.contains("404"));
            }
            other => panic!("Expected UpstreamError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/league/{LEAGUE}/rosters")))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client(&server).fetch_roster(&league_id()).await.unwrap_err();

        match err {
            LeagueError::UpstreamError { message, .. } => {
                assert!(message.starts_with("malformed JSON body"))
            }
            other => panic!("Expected UpstreamError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = SleeperClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .with_delay(Duration::ZERO);

        let err = client.get_league(&league_id()).await.unwrap_err();
        assert!(matches!(err, LeagueError::NetworkError(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_sends_json_accept_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/league/{LEAGUE}")))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"league_id": LEAGUE})))
            .expect(1)
            .mount(&server)
            .await;

        let league = client(&server).get_league(&league_id()).await.unwrap();
        assert_eq!(league.league_id, LEAGUE);
        assert!(league.roster_positions.is_empty());
    }
}

#[test]
fn test_with_base_url_trims_trailing_slash() {
    let client = SleeperClient::new()
        .unwrap()
        .with_base_url("http://localhost:1234/v1/");
    assert_eq!(client.base_url(), "http://localhost:1234/v1");
}

#[test]
fn test_default_base_url() {
    let client = SleeperClient::new().unwrap();
    assert_eq!(client.base_url(), DEFAULT_API_BASE);
}
