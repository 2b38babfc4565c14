use crate::giveaway::responses::GiveawayResponse;
use crate::http::tests::test_server;
use crate::map::models::LatLng;

#[tokio::test]
async fn test_giveaway_location() {
    let server = test_server();

    let response = server.get("/giveaway").await;

    response.assert_status_ok();
    response.assert_json(&GiveawayResponse {
        error: false,
        location: LatLng::new(-33.867582661116245, 151.05560569089798),
        leaderboard_size: 10,
    });
}
