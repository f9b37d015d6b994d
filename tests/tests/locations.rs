use graft::{depopulate, populate, Include, Location, Relation, SchemaNode};
use pretty_assertions::assert_eq;
use tests::{assert_ok, json, to_json, MemoryService, TestApp};

fn app() -> TestApp {
    TestApp::new().service(
        "users",
        MemoryService::new(json!([
            { "id": 1, "name": "alice" },
            { "id": 2, "name": "bob" },
        ])),
    )
}

fn schema() -> SchemaNode {
    Include::new()
        .relation("author", Relation::new("users", "userId", "id"))
        .into()
}

#[tokio::test]
async fn paged_result_populates_its_data() {
    let app = app();
    let mut cx = app.context().with_result(json!({
        "total": 2,
        "limit": 10,
        "skip": 0,
        "data": [{ "id": 10, "userId": 1 }, { "id": 11, "userId": 2 }],
    }));

    assert_ok!(populate(&mut cx, Some(&schema()), &Location::Result).await);

    let page = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(page["total"], 2);
    assert!(page.annotations().is_empty());

    let names = page["data"]
        .expect_list()
        .iter()
        .map(|post| post.expect_record()["author"].expect_record()["name"].clone())
        .collect::<Vec<_>>();
    assert_eq!(names, ["alice", "bob"]);

    depopulate(&mut cx, &Location::Result);
    assert_eq!(
        to_json(cx.result.as_ref().unwrap()),
        json!({
            "total": 2,
            "limit": 10,
            "skip": 0,
            "data": [{ "id": 10, "userId": 1 }, { "id": 11, "userId": 2 }],
        })
    );
}

#[tokio::test]
async fn paged_and_plain_results_populate_the_same() {
    let records = json!([{ "id": 10, "userId": 1 }, { "id": 11, "userId": 2 }]);

    let app = app();
    let mut plain = app.context().with_result(records.clone());
    let mut paged = app
        .context()
        .with_result(json!({ "total": 2, "data": records }));

    assert_ok!(populate(&mut plain, Some(&schema()), &Location::Result).await);
    assert_ok!(populate(&mut paged, Some(&schema()), &Location::Result).await);

    assert_eq!(
        to_json(&paged.result.as_ref().unwrap().expect_record()["data"]),
        to_json(plain.result.as_ref().unwrap())
    );
}

#[tokio::test]
async fn paginated_service_results_are_unwrapped() {
    let app = TestApp::new().service(
        "users",
        MemoryService::new(json!([
            { "id": 1, "team": "a" },
            { "id": 2, "team": "a" },
            { "id": 3, "team": "b" },
        ]))
        .paginated(10),
    );
    let mut cx = app.context().with_result(json!({ "id": 1, "team": "a" }));

    let schema: SchemaNode = Include::new()
        .relation("members", Relation::new("users", "team", "team"))
        .into();

    assert_ok!(populate(&mut cx, Some(&schema), &Location::Result).await);

    let team = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(
        to_json(&team["members"]),
        json!([{ "id": 1, "team": "a" }, { "id": 2, "team": "a" }])
    );
}

#[tokio::test]
async fn data_location_is_populated() {
    let app = app();
    let mut cx = app
        .context()
        .with_data(json!({ "id": 10, "userId": 2 }))
        .with_result(json!({ "id": 99, "userId": 1 }));

    assert_ok!(populate(&mut cx, Some(&schema()), &Location::Data).await);

    let data = cx.data.as_ref().unwrap().expect_record();
    assert_eq!(to_json(&data["author"]), json!({ "id": 2, "name": "bob" }));

    let result = cx.result.as_ref().unwrap().expect_record();
    assert!(!result.contains_key("author"));
}

#[tokio::test]
async fn data_location_does_not_unwrap_envelopes() {
    let app = app();
    let log = app.log();
    let mut cx = app
        .context()
        .with_data(json!({ "data": [{ "id": 10, "userId": 1 }] }));

    assert_ok!(populate(&mut cx, Some(&schema()), &Location::Data).await);

    // The envelope itself is the record; it has no `userId`.
    let data = cx.data.as_ref().unwrap().expect_record();
    assert_eq!(data.annotations().included(), ["author"]);
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn param_location_round_trips() {
    let app = app();
    let mut cx = app
        .context()
        .with_param("draft", json!({ "id": 5, "userId": 1 }));

    let location = Location::param("draft");
    assert_ok!(populate(&mut cx, Some(&schema()), &location).await);

    let draft = cx.params.named["draft"].expect_record();
    assert_eq!(to_json(&draft["author"]), json!({ "id": 1, "name": "alice" }));

    depopulate(&mut cx, &location);
    assert_eq!(
        to_json(&cx.params.named["draft"]),
        json!({ "id": 5, "userId": 1 })
    );
}

#[tokio::test]
async fn missing_param_is_a_no_op() {
    let app = app();
    let log = app.log();
    let mut cx = app.context();

    assert_ok!(populate(&mut cx, Some(&schema()), &Location::param("draft")).await);
    assert!(cx.params.named.is_empty());
    assert!(log.is_empty());
}
