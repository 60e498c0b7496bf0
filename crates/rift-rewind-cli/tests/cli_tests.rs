//! Integration tests for the `rift-rewind-cli` binary.
//!
//! Lookups run against a wiremock server standing in for every Riot routing
//! host; the host name becomes the first path segment of each request.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "RGAPI-cli-test";

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("rift-rewind-cli").expect("binary exists");
    cmd.env_remove("RIOT_API_KEY")
        .env_remove("RIFT_REWIND_RIOT_API_BASE");
    cmd
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/americas/riot/account/v1/accounts/by-riot-id/Doublelift/NA1"))
        .and(header("X-Riot-Token", API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "puuid": "P9", "gameName": "Doublelift", "tagLine": "NA1" })),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/na1/lol/summoner/v4/summoners/by-puuid/P9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "puuid": "P9", "profileIconId": 29, "summonerLevel": 312 })),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/na1/lol/champion-mastery/v4/champion-masteries/by-puuid/P9/top",
        ))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "championId": 222, "championLevel": 40, "championPoints": 900_000 }
        ])))
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// regions
// =============================================================================

#[test]
fn regions_lists_every_platform() {
    cli()
        .arg("regions")
        .assert()
        .success()
        .stdout(predicate::str::contains("na1   -> americas"))
        .stdout(predicate::str::contains("euw1  -> europe"))
        .stdout(predicate::str::contains("oc1   -> asia"));
}

#[test]
fn regions_json_output() {
    let output = cli()
        .args(["regions", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let rows: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let rows = rows.as_array().expect("array of regions");
    assert_eq!(rows.len(), 11);
    assert!(rows.contains(&json!({ "region": "kr", "cluster": "asia" })));
}

// =============================================================================
// lookup
// =============================================================================

#[test]
fn lookup_rejects_blank_name() {
    cli()
        .args(["lookup", "--name", "   ", "--api-key", API_KEY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("summoner name is required"));
}

#[test]
fn lookup_rejects_unknown_region() {
    cli()
        .args([
            "lookup",
            "--name",
            "Faker",
            "--region",
            "pbe1",
            "--api-key",
            API_KEY,
            "--api-base",
            "http://127.0.0.1:1/{host}",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported region code: pbe1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_prints_json_profile() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let api_base = format!("{}/{{host}}", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        cli()
            .env("RIFT_REWIND_RIOT_API_BASE", api_base)
            .args([
                "lookup",
                "--name",
                "Doublelift",
                "--api-key",
                API_KEY,
                "--format",
                "json",
            ])
            .output()
            .expect("run cli")
    })
    .await
    .expect("cli task");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(
        body,
        json!({
            "summoner": { "name": "Doublelift", "level": 312, "profileIconId": 29, "puuid": "P9" },
            "topChampions": [
                { "championId": 222, "championLevel": 40, "championPoints": 900_000 }
            ]
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_prints_text_summary_with_api_base_flag() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let api_base = format!("{}/{{host}}", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        cli()
            .env("RIOT_API_KEY", API_KEY)
            .args([
                "--api-base",
                api_base.as_str(),
                "lookup",
                "--name",
                "Doublelift",
                "--tag",
                "NA1",
            ])
            .output()
            .expect("run cli")
    })
    .await
    .expect("cli task");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Doublelift (level 312)"));
    assert!(stdout.contains("Profile icon: 29"));
    assert!(stdout.contains("1. champion 222 - mastery 40, 900000 points"));
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_reports_missing_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asia/riot/account/v1/accounts/by-riot-id/Nobody/KR1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let api_base = format!("{}/{{host}}", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        cli()
            .env("RIFT_REWIND_RIOT_API_BASE", api_base)
            .args([
                "lookup", "--name", "Nobody", "--tag", "KR1", "--region", "kr", "--api-key",
                API_KEY,
            ])
            .output()
            .expect("run cli")
    })
    .await
    .expect("cli task");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no account found for Nobody#KR1"));
}
