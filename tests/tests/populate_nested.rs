use graft::{populate, Include, Location, Relation, SchemaNode};
use pretty_assertions::assert_eq;
use tests::{assert_ok, json, to_json, MemoryService, TestApp};

fn app() -> TestApp {
    TestApp::new()
        .service(
            "posts",
            MemoryService::new(json!([
                { "id": 1, "userId": 1, "title": "a" },
                { "id": 2, "userId": 2, "title": "b" },
                { "id": 3, "userId": 1, "title": "c" },
            ])),
        )
        .service(
            "users",
            MemoryService::new(json!([
                { "id": 1, "name": "alice", "companyId": 100 },
                { "id": 2, "name": "bob", "companyId": 200 },
            ])),
        )
        .service(
            "companies",
            MemoryService::new(json!([
                { "id": 100, "name": "acme" },
                { "id": 200, "name": "globex" },
            ])),
        )
}

fn author_with_company() -> Relation {
    Relation::new("users", "userId", "id").include(
        Include::new().relation("company", Relation::new("companies", "companyId", "id")),
    )
}

#[tokio::test]
async fn nested_relation_is_populated_on_the_child() {
    let app = app();
    let mut cx = app.context().with_result(json!({ "id": 1, "userId": 2 }));

    let schema: SchemaNode = Include::new()
        .relation("author", author_with_company())
        .into();

    assert_ok!(populate(&mut cx, Some(&schema), &Location::Result).await);

    let post = cx.result.as_ref().unwrap();
    assert_eq!(
        to_json(post),
        json!({
            "id": 1,
            "userId": 2,
            "author": {
                "id": 2,
                "name": "bob",
                "companyId": 200,
                "company": { "id": 200, "name": "globex" },
            },
        })
    );

    let author = post.expect_record()["author"].expect_record();
    assert_eq!(author.annotations().included(), ["company"]);
}

#[tokio::test]
async fn nested_relation_is_populated_on_each_child_of_a_list() {
    let app = app();
    let log = app.log();
    let mut cx = app.context().with_result(json!({ "id": 1 }));

    let schema: SchemaNode = Include::new()
        .relation(
            "posts",
            Relation::new("posts", "id", "userId")
                .include(Include::new().relation("author", author_with_company())),
        )
        .into();

    assert_ok!(populate(&mut cx, Some(&schema), &Location::Result).await);

    let user = cx.result.as_ref().unwrap().expect_record();
    let posts = user["posts"].expect_list();
    assert_eq!(posts.len(), 2);

    for post in posts {
        let post = post.expect_record();
        assert_eq!(post.annotations().included(), ["author"]);
        assert_eq!(
            to_json(&post["author"].expect_record()["company"]),
            json!({ "id": 100, "name": "acme" })
        );
    }

    // Depth first: each post is finished before the next one starts.
    assert_eq!(
        log.services(),
        ["posts", "users", "companies", "users", "companies"]
    );
}

#[tokio::test]
async fn nested_include_accepts_a_root_node() {
    let app = app();
    let mut cx = app.context().with_result(json!({ "id": 1, "userId": 1 }));

    let schema: SchemaNode = serde_json::from_value(json!({
        "include": {
            "author": {
                "service": "users",
                "parentField": "userId",
                "childField": "id",
                "include": {
                    "permissions": "ignored-below-root",
                    "include": {
                        "company": { "service": "companies", "parentField": "companyId", "childField": "id" }
                    }
                }
            }
        }
    }))
    .unwrap();

    assert_ok!(populate(&mut cx, Some(&schema), &Location::Result).await);

    let post = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(
        to_json(&post["author"].expect_record()["company"]),
        json!({ "id": 100, "name": "acme" })
    );
}

#[tokio::test]
async fn nested_relation_is_skipped_when_nothing_matched() {
    let app = app();
    let log = app.log();
    let mut cx = app.context().with_result(json!({ "id": 1, "userId": 42 }));

    let schema: SchemaNode = Include::new()
        .relation("author", author_with_company())
        .into();

    assert_ok!(populate(&mut cx, Some(&schema), &Location::Result).await);

    let post = cx.result.as_ref().unwrap().expect_record();
    assert_eq!(to_json(&post["author"]), json!([]));
    assert_eq!(log.services(), ["users"]);
}
