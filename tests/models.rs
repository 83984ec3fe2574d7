use chrono::{TimeZone, Utc};
use watson_sdk::conversation::{Counterexample, CounterexampleCollection, Pagination};
use watson_sdk::personality_insights::{Content, ContentItem};

#[test]
fn content_item_fluent_chain_sets_requested_fields() {
    let item = ContentItem::default()
        .with_id("123")
        .with_language("en")
        .with_reply(true);

    assert_eq!(item.id(), Some("123"));
    assert_eq!(item.language(), Some("en"));
    assert!(item.is_reply());
    assert_eq!(item.content(), None, "Unset fields stay absent");
}

#[test]
fn content_item_chain_order_does_not_matter() {
    let created = Utc.with_ymd_and_hms(2016, 3, 1, 12, 0, 0).unwrap();
    let a = ContentItem::default()
        .with_user_id("u1")
        .with_created(created)
        .with_forward(false)
        .with_source_id("twitter");
    let b = ContentItem::default()
        .with_source_id("twitter")
        .with_forward(false)
        .with_created(created)
        .with_user_id("u1");
    assert_eq!(a, b);
}

#[test]
fn content_item_setters_round_trip_every_field() {
    let created = Utc.with_ymd_and_hms(2015, 6, 30, 8, 15, 0).unwrap();
    let updated = Utc.with_ymd_and_hms(2015, 7, 1, 9, 45, 30).unwrap();
    let mut item = ContentItem::default();

    item.set_charset("UTF-8");
    assert_eq!(item.charset(), Some("UTF-8"));
    item.set_content("Call me Ishmael.");
    assert_eq!(item.content(), Some("Call me Ishmael."));
    item.set_content_type("text/plain");
    assert_eq!(item.content_type(), Some("text/plain"));
    item.set_created(created);
    assert_eq!(item.created(), Some(created));
    item.set_forward(true);
    assert_eq!(item.forward(), Some(true));
    assert!(item.is_forward());
    item.set_id("item-1");
    assert_eq!(item.id(), Some("item-1"));
    item.set_language("es");
    assert_eq!(item.language(), Some("es"));
    item.set_parent_id("item-0");
    assert_eq!(item.parent_id(), Some("item-0"));
    item.set_reply(false);
    assert_eq!(item.reply(), Some(false));
    assert!(!item.is_reply());
    item.set_source_id("email");
    assert_eq!(item.source_id(), Some("email"));
    item.set_updated(updated);
    assert_eq!(item.updated(), Some(updated));
    item.set_user_id("user-7");
    assert_eq!(item.user_id(), Some("user-7"));
}

#[test]
fn content_item_serializes_with_service_field_names() {
    let created = Utc.timestamp_millis_opt(1_447_639_154_000).unwrap();
    let item = ContentItem::new("Hello")
        .with_content_type("text/plain")
        .with_parent_id("p1")
        .with_source_id("s1")
        .with_user_id("u1")
        .with_created(created);

    let json = serde_json::to_value(&item).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "content": "Hello",
            "contenttype": "text/plain",
            "parentid": "p1",
            "sourceid": "s1",
            "userid": "u1",
            "created": 1_447_639_154_000i64,
        })
    );
}

#[test]
fn content_item_deserializes_missing_fields_as_absent() {
    let item: ContentItem =
        serde_json::from_str(r#"{ "id": "abc", "updated": 1447639154000, "reply": true }"#)
            .expect("valid content item");
    assert_eq!(item.id(), Some("abc"));
    assert_eq!(
        item.updated(),
        Some(Utc.timestamp_millis_opt(1_447_639_154_000).unwrap())
    );
    assert!(item.is_reply());
    assert_eq!(item.created(), None);
    assert_eq!(item.language(), None);
}

#[test]
fn content_envelope_keeps_item_order() {
    let content: Content = ["first", "second", "third"]
        .into_iter()
        .map(ContentItem::new)
        .collect();
    let texts: Vec<_> = content
        .content_items()
        .iter()
        .filter_map(|i| i.content())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);

    let json = serde_json::to_value(&content).expect("serializable");
    assert_eq!(json["contentItems"].as_array().map(Vec::len), Some(3));
}

#[test]
fn display_renders_pretty_json() {
    let item = ContentItem::default().with_id("42");
    let rendered = item.to_string();
    assert!(rendered.contains("\"id\": \"42\""), "got: {rendered}");
}

#[test]
fn counterexample_collection_preserves_order() {
    let examples = vec![
        Counterexample::new("zeta"),
        Counterexample::new("alpha"),
        Counterexample::new("mu"),
    ];
    let mut collection = CounterexampleCollection::default();
    collection.set_counterexamples(examples.clone());

    assert_eq!(collection.counterexamples(), examples.as_slice());
    let texts: Vec<_> = collection.iter().filter_map(|c| c.text()).collect();
    assert_eq!(texts, vec!["zeta", "alpha", "mu"]);
    assert_eq!(collection.len(), 3);
}

#[test]
fn counterexample_collection_pagination_is_optional() {
    let mut collection = CounterexampleCollection::default();
    assert!(collection.pagination().is_none());
    assert!(collection.is_empty());

    let page = Pagination::default()
        .with_refresh_url("/v1/workspaces/ws/counterexamples?page_limit=2")
        .with_next_url("/v1/workspaces/ws/counterexamples?cursor=abc")
        .with_total(2)
        .with_matched(5);
    collection.set_pagination(page.clone());
    assert_eq!(collection.pagination(), Some(&page));
    assert!(page.has_next_page());

    collection.set_pagination(None);
    assert!(collection.pagination().is_none());
}

#[test]
fn counterexample_collection_parses_service_response() {
    let body = r#"{
        "counterexamples": [
            { "text": "what is your favorite color", "created": "2017-02-01T10:00:00Z", "updated": "2017-02-02T10:00:00.500Z" },
            { "text": "tell me a joke" }
        ],
        "pagination": { "refresh_url": "/v1/workspaces/ws/counterexamples", "total": 2, "matched": 2 }
    }"#;
    let collection: CounterexampleCollection = serde_json::from_str(body).expect("valid response");

    assert_eq!(collection.len(), 2);
    let first = &collection.counterexamples()[0];
    assert_eq!(first.text(), Some("what is your favorite color"));
    assert_eq!(
        first.created(),
        Some(Utc.with_ymd_and_hms(2017, 2, 1, 10, 0, 0).unwrap())
    );
    assert!(first.updated().is_some());
    assert_eq!(collection.counterexamples()[1].created(), None);

    let pagination = collection.pagination().expect("pagination present");
    assert_eq!(pagination.total(), Some(2));
    assert_eq!(pagination.matched(), Some(2));
    assert!(!pagination.has_next_page());
}

#[test]
fn counterexample_setters_round_trip() {
    let ts = Utc.with_ymd_and_hms(2017, 5, 4, 3, 2, 1).unwrap();
    let mut example = Counterexample::default();
    example.set_text("irrelevant");
    example.set_created(ts);
    example.set_updated(ts);
    assert_eq!(example.text(), Some("irrelevant"));
    assert_eq!(example.created(), Some(ts));
    assert_eq!(example.updated(), Some(ts));

    let mut page = Pagination::default();
    page.set_refresh_url("r");
    page.set_next_url("n");
    page.set_total(10);
    page.set_matched(20);
    assert_eq!(page.refresh_url(), Some("r"));
    assert_eq!(page.next_url(), Some("n"));
    assert_eq!(page.total(), Some(10));
    assert_eq!(page.matched(), Some(20));
}
