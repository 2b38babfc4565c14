use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        quickwit_url: None,
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        giveaway_lat: -33.867582661116245,
        giveaway_lng: 151.05560569089798,
        leaderboard_size: 10,
        max_upload_bytes: 1_000_000,
        allowed_origins: vec![String::from("http://localhost:3000")],
        session_idle_secs: 3600,
    }
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["giveaway-server"]).expect("Defaults should parse.");

    assert!(args.quickwit_url.is_none());
    assert_eq!(args.giveaway_lat, -33.867582661116245);
    assert_eq!(args.giveaway_lng, 151.05560569089798);
    assert_eq!(args.leaderboard_size, 10);
    assert_eq!(args.session_idle_secs, 3600);
    assert_eq!(
        args.allowed_origins,
        ["http://127.0.0.1:3000", "http://localhost:3000"]
    );
}

#[test]
fn test_negative_coordinates() {
    let args = Args::try_parse_from([
        "giveaway-server",
        "--giveaway-lat",
        "-12.5",
        "--giveaway-lng",
        "-45.25",
    ])
    .expect("Negative coordinates should parse.");

    assert_eq!(args.giveaway_lat, -12.5);
    assert_eq!(args.giveaway_lng, -45.25);
}
