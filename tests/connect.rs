mod common;

mod game_id_for_hash {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use retroachievements_client::connect::types::GameIdRequest;
    use serde_json::json;

    use crate::common::{API_KEY, BEARER_TOKEN, DISPATCH_PATH, create_client, create_client_with_bearer};

    const HASH: &str = "1bc674be034e43c96b86487ac69d9293";

    #[tokio::test]
    async fn game_id_for_hash_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(DISPATCH_PATH)
                .query_param("r", "gameid")
                .query_param("m", HASH)
                .query_param("y", API_KEY);
            then.status(StatusCode::OK)
                .json_body(json!({ "Success": true, "GameID": 1 }));
        });

        let request = GameIdRequest::builder().hash(HASH).build();
        let response = client.game_id_for_hash(&request).await?.expect("game id");

        assert!(response.is_known());
        assert_eq!(response.game_id, 1);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn bearer_token_is_sent() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client_with_bearer(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(DISPATCH_PATH)
                .query_param("r", "gameid")
                .header("Authorization", format!("Bearer {BEARER_TOKEN}"));
            then.status(StatusCode::OK)
                .json_body(json!({ "Success": true, "GameID": 0 }));
        });

        let request = GameIdRequest::builder().hash("unknown").build();
        let response = client.game_id_for_hash(&request).await?.expect("game id");

        assert!(!response.is_known());
        mock.assert();

        Ok(())
    }
}

mod hash_library {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use retroachievements_client::connect::types::HashLibraryRequest;
    use retroachievements_client::error::Kind;
    use serde_json::json;

    use crate::common::{DISPATCH_PATH, create_client};

    #[tokio::test]
    async fn hash_library_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(DISPATCH_PATH)
                .query_param("r", "hashlibrary")
                .query_param("c", "1");
            then.status(StatusCode::OK).json_body(json!({
                "Success": true,
                "MD5List": {
                    "1bc674be034e43c96b86487ac69d9293": 1,
                    "1b1d9ac862c387367e904036114c4825": 1
                }
            }));
        });

        let request = HashLibraryRequest::builder().console_id(1).build();
        let response = client.hash_library(&request).await?.expect("library");

        assert_eq!(response.md5_list.len(), 2);
        assert_eq!(response.game_for("1bc674be034e43c96b86487ac69d9293"), Some(1));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_without_envelope_keeps_body() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(DISPATCH_PATH)
                .query_param("r", "hashlibrary");
            then.status(StatusCode::UNAUTHORIZED).body("invalid API key");
        });

        let request = HashLibraryRequest::builder().console_id(1).build();
        let err = client.hash_library(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Authorization);
        assert!(
            err.to_string().contains("invalid API key"),
            "unexpected message: {err}"
        );
        mock.assert();

        Ok(())
    }
}
