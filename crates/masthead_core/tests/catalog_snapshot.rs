use masthead_core::Catalog;

#[test]
fn snapshot_serializes_records_with_id_links() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Ada").unwrap();
    let magazine = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
    let article = catalog
        .create_article(author, magazine, "Notes on the Engine")
        .unwrap();

    let json = serde_json::to_value(catalog.snapshot()).unwrap();

    let authors = json["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["id"], author.to_string());
    assert_eq!(authors[0]["name"], "Ada");
    assert_eq!(authors[0]["articles"][0], article.to_string());

    let magazines = json["magazines"].as_array().unwrap();
    assert_eq!(magazines[0]["id"], magazine.to_string());
    assert_eq!(magazines[0]["name"], "Tech Weekly");
    assert_eq!(magazines[0]["category"], "Technology");
    assert_eq!(magazines[0]["articles"][0], article.to_string());

    let articles = json["articles"].as_array().unwrap();
    assert_eq!(articles[0]["id"], article.to_string());
    assert_eq!(articles[0]["author"], author.to_string());
    assert_eq!(articles[0]["magazine"], magazine.to_string());
    assert_eq!(articles[0]["title"], "Notes on the Engine");
}

#[test]
fn empty_catalog_snapshot_has_empty_registries() {
    let catalog = Catalog::new();
    let json = serde_json::to_value(catalog.snapshot()).unwrap();
    assert_eq!(json, serde_json::json!({"authors": [], "magazines": [], "articles": []}));
}
