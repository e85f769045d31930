//! People tool handlers: search_person and get_person_details.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::builders::{cast, credits, crew, PersonBuilder};
use crate::common::{
    args, create_test_server, structured, tool_error, ProviderCall, StubFailure, StubProvider,
};

fn nolan() -> PersonBuilder {
    PersonBuilder::new(525, "Christopher Nolan")
        .department("Directing")
        .biography("British-American filmmaker.")
        .born("1970-07-30", "Westminster, London, England, UK")
        .profile("/xuAIuYSmsUzKlUMBFGVZaWsY3DZ.jpg")
}

// =============================================================================
// search_person
// =============================================================================

#[tokio::test]
async fn test_search_person_known_for_summary() {
    let people = vec![
        nolan()
            .known_for_movie("Inception")
            .known_for_movie("Interstellar")
            .known_for_movie("The Dark Knight")
            .known_for_movie("Memento")
            .build(),
        PersonBuilder::new(1, "Bryan Cranston")
            .department("Acting")
            .known_for_show("Breaking Bad")
            .known_for_movie("Drive")
            .build(),
        PersonBuilder::new(2, "Unknown Extra")
            .department("Acting")
            .build(),
    ];
    let (server, stub) = create_test_server(StubProvider::new().with_people(people));

    let result = server
        .call_tool_by_name("search_person", args(json!({"query": "nolan"})))
        .await
        .unwrap();

    assert_eq!(
        structured(&result),
        &json!({
            "results": [
                {
                    "id": 525,
                    "name": "Christopher Nolan",
                    "known_for": "Directing (Inception, Interstellar, The Dark Knight)",
                    "profile_path": "/xuAIuYSmsUzKlUMBFGVZaWsY3DZ.jpg"
                },
                {
                    "id": 1,
                    "name": "Bryan Cranston",
                    "known_for": "Acting (Breaking Bad, Drive)"
                },
                {
                    "id": 2,
                    "name": "Unknown Extra",
                    "known_for": "Acting"
                }
            ],
            "total": 3
        })
    );
    assert_eq!(stub.calls(), vec![ProviderCall::SearchPeople("nolan".into())]);
}

#[tokio::test]
async fn test_search_person_upstream_failure() {
    let stub = StubProvider::new().failing(
        "search_people",
        StubFailure::Status(401, "Invalid API key: You must be granted a valid key."),
    );
    let (server, _) = create_test_server(stub);

    let result = server
        .call_tool_by_name("search_person", args(json!({"query": "nolan"})))
        .await
        .unwrap();

    let error = tool_error(&result);
    assert_eq!(error["error_code"], "UPSTREAM_ERROR");
    assert!(error["message"]
        .as_str()
        .unwrap()
        .starts_with("failed to search person: upstream returned HTTP 401"));
}

// =============================================================================
// get_person_details
// =============================================================================

#[tokio::test]
async fn test_get_person_details_cast_then_key_crew() {
    let filmography = credits(
        vec![cast(1, "Following", "Cop"), cast(2, "Inception", "")],
        vec![
            crew(3, "Inception", "Director"),
            crew(4, "Inception", "Editor"),
            crew(5, "The Prestige", "Screenplay"),
            crew(6, "Man of Steel", "Producer"),
            crew(7, "Memento", "Writer"),
            crew(8, "Tenet", "Casting"),
        ],
    );
    let (server, stub) =
        create_test_server(StubProvider::new().with_person(nolan().build(), filmography));

    let result = server
        .call_tool_by_name("get_person_details", args(json!({"person_id": 525})))
        .await
        .unwrap();

    let person = &structured(&result)["person"];
    assert_eq!(person["name"], "Christopher Nolan");
    assert_eq!(person["birthday"], "1970-07-30");
    assert!(person.get("deathday").is_none());
    assert_eq!(person["place_of_birth"], "Westminster, London, England, UK");
    assert_eq!(
        person["movies"],
        json!([
            {"id": 1, "title": "Following", "character": "Cop"},
            {"id": 2, "title": "Inception", "character": ""},
            {"id": 3, "title": "Inception", "job": "Director"},
            {"id": 5, "title": "The Prestige", "job": "Screenplay"},
            {"id": 6, "title": "Man of Steel", "job": "Producer"},
            {"id": 7, "title": "Memento", "job": "Writer"}
        ])
    );

    let mut calls = stub.calls();
    calls.sort_by_key(|call| format!("{call:?}"));
    assert_eq!(
        calls,
        vec![ProviderCall::PersonCredits(525), ProviderCall::PersonDetails(525)]
    );
}

#[tokio::test]
async fn test_get_person_details_caps_credits_at_twenty() {
    let cast_credits = (0..15)
        .map(|i| cast(i, &format!("Role {i}"), "Self"))
        .collect();
    let crew_credits = (100..115)
        .map(|i| crew(i, &format!("Directed {i}"), "Director"))
        .collect();
    let (server, _) = create_test_server(
        StubProvider::new().with_person(nolan().build(), credits(cast_credits, crew_credits)),
    );

    let result = server
        .call_tool_by_name("get_person_details", args(json!({"person_id": 525})))
        .await
        .unwrap();

    let movies = structured(&result)["person"]["movies"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(movies.len(), 20);
    // All cast credits survive; the crew fills the remaining slots.
    assert_eq!(movies.iter().filter(|m| m.get("character").is_some()).count(), 15);
    assert_eq!(movies[15]["id"], 100);
    for movie in &movies {
        let has_character = movie.get("character").is_some_and(Value::is_string);
        let has_job = movie.get("job").is_some_and(Value::is_string);
        assert!(has_character != has_job, "exactly one role field: {movie}");
    }
}

#[tokio::test]
async fn test_get_person_details_empty_character_is_the_only_empty_role() {
    let filmography = credits(
        vec![cast(1, "Inception", ""), cast(2, "Following", "Cop")],
        vec![crew(3, "Tenet", "Director"), crew(4, "Tenet", "")],
    );
    let (server, _) =
        create_test_server(StubProvider::new().with_person(nolan().build(), filmography));

    let result = server
        .call_tool_by_name("get_person_details", args(json!({"person_id": 525})))
        .await
        .unwrap();

    let movies = structured(&result)["person"]["movies"]
        .as_array()
        .unwrap()
        .clone();
    // The job-less crew entry is not a key job and never reaches the output.
    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0], json!({"id": 1, "title": "Inception", "character": ""}));
    assert!(movies[0].get("job").is_none());
    for movie in movies.iter().filter(|m| m.get("job").is_some()) {
        assert_ne!(movie["job"], "", "crew role must be named: {movie}");
        assert!(movie.get("character").is_none());
    }
}

#[tokio::test]
async fn test_get_person_details_credits_failure_has_no_partial_result() {
    let stub = StubProvider::new()
        .with_person(nolan().build(), credits(vec![], vec![]))
        .failing(
            "person_movie_credits",
            StubFailure::Status(500, "Internal error"),
        );
    let (server, _) = create_test_server(stub);

    let result = server
        .call_tool_by_name("get_person_details", args(json!({"person_id": 525})))
        .await
        .unwrap();

    assert!(result.structured_content.is_none());
    let error = tool_error(&result);
    assert_eq!(error["error_code"], "UPSTREAM_ERROR");
    assert_eq!(
        error["message"],
        "failed to get person movie credits: upstream returned HTTP 500: Internal error"
    );
}

#[tokio::test]
async fn test_get_person_details_unknown_person() {
    let (server, _) = create_test_server(StubProvider::new());

    let result = server
        .call_tool_by_name("get_person_details", args(json!({"person_id": 42})))
        .await
        .unwrap();

    let error = tool_error(&result);
    assert_eq!(error["error_code"], "NOT_FOUND");
    assert!(error["suggestion"].as_str().unwrap().contains("search_person"));
}
