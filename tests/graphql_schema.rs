use async_graphql::{Request, Variables};
use serde_json::{json, Value};
use sun_graphql::model::{Song, Stem};
use sun_graphql::store::{Repositories, Repository};
use sun_graphql::{build_schema, AppSchema, AppServices};

fn schema_over(repositories: &Repositories) -> AppSchema {
    build_schema(AppServices::new(repositories, "/stems/"))
}

async fn execute(schema: &AppSchema, query: &str, variables: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn stem_player_lists_and_locates_songs() {
    let repositories = Repositories::memory();
    let song = repositories
        .songs
        .save(
            Song::new("Test Song 1", "test-song-1/mix.mp3").with_stems(vec![
                Stem::new("Drums", "test-song-1/drums.mp3"),
                Stem::new("Bass", "test-song-1/bass.mp3"),
            ]),
        )
        .await
        .unwrap();
    let id = song.id.unwrap().to_string();
    let schema = schema_over(&repositories);

    let data = execute(
        &schema,
        "{ stemPlayerQueries { list { id name path stems { name filePath path } } } }",
        json!({}),
    )
    .await;
    let songs = &data["stemPlayerQueries"]["list"];
    assert_eq!(songs.as_array().unwrap().len(), 1);
    assert_eq!(songs[0]["id"], id);
    assert_eq!(songs[0]["path"], "/stems/test-song-1/mix.mp3");
    assert_eq!(songs[0]["stems"][0]["name"], "Drums");
    assert_eq!(songs[0]["stems"][1]["path"], "/stems/test-song-1/bass.mp3");

    let data = execute(
        &schema,
        "query($id: String!) { stemPlayerQueries { locate(id: $id) { name stems { name } } } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["stemPlayerQueries"]["locate"]["name"], "Test Song 1");
}

#[tokio::test]
async fn locating_a_missing_song_is_a_field_error() {
    let schema = schema_over(&Repositories::memory());
    let id = sun_graphql::model::generate_id().to_string();

    let response = schema
        .execute(
            Request::new("query($id: String!) { stemPlayerQueries { locate(id: $id) { name } } }")
                .variables(Variables::from_json(json!({ "id": id }))),
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        format!("Song not found with id: {}", id)
    );
}

#[tokio::test]
async fn blog_post_round_trip_through_mutation() {
    let schema = schema_over(&Repositories::memory());

    let data = execute(
        &schema,
        r#"mutation($input: BlogPostInput!) {
            blogMutations {
                createBlogPost(title: "New Blog Post", input: $input) {
                    __typename
                    ... on QuerySuccess { success message id }
                    ... on StandardError { success message }
                }
            }
        }"#,
        json!({ "input": { "content": "New blog content", "tags": ["new", "blog"] } }),
    )
    .await;
    let result = &data["blogMutations"]["createBlogPost"];
    assert_eq!(result["__typename"], "QuerySuccess");
    assert_eq!(result["success"], true);
    assert_eq!(result["message"], "Blog post created successfully");
    let id = result["id"].as_str().unwrap().to_string();

    let data = execute(
        &schema,
        "query($id: String!) { blogQueries { locateBlogPost(id: $id) { id title content tags createdAt } } }",
        json!({ "id": id }),
    )
    .await;
    let post = &data["blogQueries"]["locateBlogPost"];
    assert_eq!(post["id"], id);
    assert_eq!(post["title"], "New Blog Post");
    assert_eq!(post["tags"], json!(["new", "blog"]));
    assert!(post["createdAt"].is_string());

    let data = execute(&schema, "{ blogQueries { listBlogPosts { title } } }", json!({})).await;
    assert_eq!(
        data["blogQueries"]["listBlogPosts"],
        json!([{ "title": "New Blog Post" }])
    );
}

#[tokio::test]
async fn gallery_items_are_found_by_foreign_object() {
    let schema = schema_over(&Repositories::memory());
    let create = r#"mutation($input: GalleryItemInput!) {
        galleryMutations { create(input: $input) { ... on QuerySuccess { id } } }
    }"#;

    let data = execute(
        &schema,
        create,
        json!({ "input": { "title": "Cover", "imagePath": "/cover.jpg", "foreignObject": ["song-1"] } }),
    )
    .await;
    let cover_id = data["galleryMutations"]["create"]["id"].clone();
    execute(
        &schema,
        create,
        json!({ "input": { "title": "Unrelated" } }),
    )
    .await;

    let data = execute(
        &schema,
        r#"{ galleryQueries { listByForeignObject(ids: ["song-1", "song-2"]) { id title imagePath foreignObject } } }"#,
        json!({}),
    )
    .await;
    let items = &data["galleryQueries"]["listByForeignObject"];
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["id"], cover_id);
    assert_eq!(items[0]["imagePath"], "/cover.jpg");
    assert_eq!(items[0]["foreignObject"], json!(["song-1"]));

    let data = execute(&schema, "{ galleryQueries { list { title } } }", json!({})).await;
    assert_eq!(data["galleryQueries"]["list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_stores_list_nothing() {
    let schema = schema_over(&Repositories::memory());

    let data = execute(
        &schema,
        "{ stemPlayerQueries { list { id } } blogQueries { listBlogPosts { id } } galleryQueries { list { id } } }",
        json!({}),
    )
    .await;

    assert_eq!(data["stemPlayerQueries"]["list"], json!([]));
    assert_eq!(data["blogQueries"]["listBlogPosts"], json!([]));
    assert_eq!(data["galleryQueries"]["list"], json!([]));
}
