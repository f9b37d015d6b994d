use graft::{
    depopulate, populate, select_schemas, serialize, Include, Location, Registry, Relation, Root,
};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_ok, json, to_json, MemoryService, TestApp};

const CONFIG: &str = r#"{
    "populations": {
        "post-with-author": {
            "permissions": "posts:populate",
            "include": {
                "author": { "service": "users", "parentField": "userId", "childField": "id", "nameAs": "writer" }
            }
        },
        "post-with-comments": {
            "comments": {
                "service": "comments",
                "parentField": "id",
                "childField": "postId",
                "asArray": true,
                "query": { "hidden": { "$ne": true } }
            }
        }
    },
    "serializers": {
        "post": {
            "default": { "only": ["id", "title"] },
            "editor": { "exclude": ["draftNotes"] }
        }
    }
}"#;

fn app() -> TestApp {
    TestApp::new()
        .service(
            "users",
            MemoryService::new(json!([{ "id": 1, "name": "alice" }])),
        )
        .service(
            "comments",
            MemoryService::new(json!([
                { "id": 5, "postId": 1 },
                { "id": 6, "postId": 1, "hidden": true },
            ])),
        )
}

fn post() -> serde_json::Value {
    json!({ "id": 1, "userId": 1, "title": "hello", "draftNotes": "tbd" })
}

#[tokio::test]
async fn named_schema_is_selected_and_populated() {
    let registry = assert_ok!(Registry::from_json(CONFIG));
    let app = app();
    let mut cx = app
        .context()
        .with_populate("post-with-author")
        .with_permission("posts:populate")
        .with_result(post());

    select_schemas(&registry, &mut cx);
    assert!(cx.params.populate_defn.is_some());

    assert_ok!(populate(&mut cx, None, &Location::Result).await);

    let post = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(to_json(&post["writer"]), json!({ "id": 1, "name": "alice" }));
}

#[tokio::test]
async fn named_schema_keeps_its_permissions() {
    let registry = assert_ok!(Registry::from_json(CONFIG));
    let app = app();
    let mut cx = app
        .context()
        .with_populate("post-with-author")
        .with_result(post());

    select_schemas(&registry, &mut cx);

    let err = assert_err!(populate(&mut cx, None, &Location::Result).await);
    assert!(err.is_permission_denied());
}

#[tokio::test]
async fn unknown_schema_name_leaves_nothing_selected() {
    let registry = assert_ok!(Registry::from_json(CONFIG));
    let app = app();
    let mut cx = app.context().with_populate("missing").with_result(post());

    select_schemas(&registry, &mut cx);
    assert!(cx.params.populate_defn.is_none());

    let err = assert_err!(populate(&mut cx, None, &Location::Result).await);
    assert!(err.is_schema_missing());
}

#[tokio::test]
async fn configured_query_operators_reach_the_service() {
    let registry = assert_ok!(Registry::from_json(CONFIG));
    let app = app();
    let mut cx = app
        .context()
        .with_populate("post-with-comments")
        .with_result(post());

    select_schemas(&registry, &mut cx);
    assert_ok!(populate(&mut cx, None, &Location::Result).await);

    let post = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(to_json(&post["comments"]), json!([{ "id": 5, "postId": 1 }]));
}

#[tokio::test]
async fn json_and_builder_schemas_populate_the_same() {
    let from_json = assert_ok!(Registry::from_json(CONFIG));
    let from_builder = Registry::builder()
        .population(
            "post-with-author",
            Root::new(Include::new().relation(
                "author",
                Relation::new("users", "userId", "id").name_as("writer"),
            ))
            .permissions("posts:populate"),
        )
        .build();

    let app = app();
    let mut results = vec![];

    for registry in [&from_json, &from_builder] {
        let mut cx = app
            .context()
            .with_populate("post-with-author")
            .with_permission("posts:populate")
            .with_result(post());

        select_schemas(registry, &mut cx);
        assert_ok!(populate(&mut cx, None, &Location::Result).await);
        results.push(to_json(cx.result.as_ref().unwrap()));
    }

    assert_eq!(results[0], results[1]);
}

#[tokio::test]
async fn named_serializer_is_applied_by_role() {
    let registry = assert_ok!(Registry::from_json(CONFIG));
    let app = app();

    let mut editor = app
        .context()
        .with_serialize("post")
        .with_role("editor")
        .with_result(post());
    select_schemas(&registry, &mut editor);
    serialize(&mut editor, &Location::Result);
    assert_eq!(
        to_json(editor.result.as_ref().unwrap()),
        json!({ "id": 1, "userId": 1, "title": "hello" })
    );

    let mut reader = app
        .context()
        .with_serialize("post")
        .with_role("reader")
        .with_result(post());
    select_schemas(&registry, &mut reader);
    serialize(&mut reader, &Location::Result);
    assert_eq!(
        to_json(reader.result.as_ref().unwrap()),
        json!({ "id": 1, "title": "hello" })
    );

    depopulate(&mut reader, &Location::Result);
    assert_eq!(
        to_json(reader.result.as_ref().unwrap()),
        json!({ "id": 1, "title": "hello" })
    );
}
