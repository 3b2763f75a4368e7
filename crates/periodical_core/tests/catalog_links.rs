use periodical_core::{Catalog, CatalogError, Field, ValidationError, DEFAULT_MIN_ARTICLES};
use serde_json::json;

fn setup() -> Catalog {
    Catalog::new()
}

#[test]
fn single_article_links_author_and_magazine() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();

    let article = catalog
        .create_article(jane, vogue, "A Great Title")
        .unwrap();

    let jane_view = catalog.author(jane).unwrap();
    let vogue_view = catalog.magazine(vogue).unwrap();
    assert_eq!(jane_view.articles(), &[article]);
    assert_eq!(jane_view.magazines(), &[vogue]);
    assert_eq!(vogue_view.articles(), &[article]);
    assert_eq!(vogue_view.contributors(), vec![jane]);
    assert_eq!(vogue_view.article_titles(), vec!["A Great Title"]);

    let article_view = catalog.article(article).unwrap();
    assert_eq!(article_view.author_id(), jane);
    assert_eq!(article_view.magazine_id(), vogue);
    assert_eq!(article_view.author().unwrap().name(), "Jane");
    assert_eq!(article_view.magazine().unwrap().category(), "Fashion");
}

#[test]
fn contributing_authors_applies_threshold() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    catalog.create_article(jane, vogue, "Spring Collection").unwrap();
    catalog.create_article(jane, vogue, "Autumn Collection").unwrap();

    let view = catalog.magazine(vogue).unwrap();
    assert_eq!(view.contributing_authors(2), vec![jane]);
    assert!(view.contributing_authors(3).is_empty());
    assert_eq!(view.contributing_authors_default(), vec![jane]);
    assert_eq!(DEFAULT_MIN_ARTICLES, 2);
}

#[test]
fn contributing_authors_counts_per_author() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let john = catalog.add_author("John").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let elle = catalog.add_magazine("Elle", "Fashion").unwrap();

    catalog.create_article(john, vogue, "Street Style Notes").unwrap();
    catalog.create_article(jane, vogue, "Spring Collection").unwrap();
    catalog.create_article(jane, vogue, "Autumn Collection").unwrap();
    // Articles in another magazine do not count here.
    catalog.create_article(john, elle, "Runway Recap Part 1").unwrap();

    let view = catalog.magazine(vogue).unwrap();
    assert_eq!(view.contributors(), vec![john, jane]);
    assert_eq!(view.contributing_authors_default(), vec![jane]);
    assert_eq!(view.contributing_authors(1), vec![john, jane]);
    assert_eq!(view.contributing_authors(0), vec![john, jane]);
    assert_eq!(
        view.article_titles(),
        vec!["Street Style Notes", "Spring Collection", "Autumn Collection"]
    );
}

#[test]
fn author_magazines_are_deduplicated() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let wired = catalog.add_magazine("Wired", "Technology").unwrap();

    let first = catalog.create_article(jane, vogue, "Spring Collection").unwrap();
    let second = catalog.create_article(jane, wired, "Wearable Devices").unwrap();
    let third = catalog.create_article(jane, vogue, "Autumn Collection").unwrap();

    let view = catalog.author(jane).unwrap();
    assert_eq!(view.articles(), &[first, second, third]);
    assert_eq!(view.magazines(), &[vogue, wired]);
    let names: Vec<&str> = view.magazine_views().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Vogue", "Wired"]);
}

#[test]
fn short_title_is_rejected_without_side_effects() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let existing = catalog.create_article(jane, vogue, "A Great Title").unwrap();

    let err = catalog.create_article(jane, vogue, "Hi").unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation(ValidationError::ValueOutOfRange {
            field: Field::Title,
            min: 5,
            max: Some(50),
            actual: 2,
        })
    );

    assert_eq!(catalog.article_count(), 1);
    assert_eq!(catalog.author(jane).unwrap().articles(), &[existing]);
    assert_eq!(catalog.magazine(vogue).unwrap().articles(), &[existing]);
}

#[test]
fn title_bounds_are_inclusive() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();

    for len in [5, 6, 25, 49, 50] {
        let id = catalog.create_article(jane, vogue, "t".repeat(len)).unwrap();
        assert!(catalog.magazine(vogue).unwrap().articles().contains(&id));
        assert!(catalog.author(jane).unwrap().articles().contains(&id));
    }

    for len in [0, 1, 4, 51, 80] {
        let err = catalog
            .create_article(jane, vogue, "t".repeat(len))
            .unwrap_err();
        assert!(
            matches!(
                err,
                CatalogError::Validation(ValidationError::ValueOutOfRange { .. })
            ),
            "length {len} should be out of range, got {err:?}"
        );
    }
    assert_eq!(catalog.magazine(vogue).unwrap().articles().len(), 5);
    assert_eq!(catalog.author(jane).unwrap().articles().len(), 5);
}

#[test]
fn magazine_add_article_is_idempotent() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let id = catalog.create_article(jane, vogue, "A Great Title").unwrap();

    let inserted = catalog.register_article(vogue, id).unwrap();

    assert!(!inserted);
    assert_eq!(catalog.magazine(vogue).unwrap().articles(), &[id]);
}

#[test]
fn register_article_rejects_articles_from_another_catalog() {
    let mut home = setup();
    let jane = home.add_author("Jane").unwrap();
    let vogue = home.add_magazine("Vogue", "Fashion").unwrap();
    let existing = home.create_article(jane, vogue, "A Great Title").unwrap();

    let mut other = setup();
    let john = other.add_author("John").unwrap();
    let wired = other.add_magazine("Wired", "Technology").unwrap();
    let foreign = other.create_article(john, wired, "Wearable Devices").unwrap();

    let err = home.register_article(vogue, foreign).unwrap_err();
    assert_eq!(err, CatalogError::ArticleNotFound(foreign));
    let err = home.register_authored_article(jane, foreign).unwrap_err();
    assert_eq!(err, CatalogError::ArticleNotFound(foreign));
    let err = home.register_article(wired, existing).unwrap_err();
    assert_eq!(err, CatalogError::MagazineNotFound(wired));
    let err = home.register_authored_article(john, existing).unwrap_err();
    assert_eq!(err, CatalogError::AuthorNotFound(john));

    let view = home.magazine(vogue).unwrap();
    assert_eq!(view.articles(), &[existing]);
    assert_eq!(view.article_titles(), vec!["A Great Title"]);
    assert_eq!(view.contributors(), vec![jane]);
    assert_eq!(home.author(jane).unwrap().articles(), &[existing]);
}

#[test]
fn author_add_article_does_not_deduplicate() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let id = catalog.create_article(jane, vogue, "A Great Title").unwrap();

    catalog.register_authored_article(jane, id).unwrap();

    let view = catalog.author(jane).unwrap();
    assert_eq!(view.articles(), &[id, id]);
    assert_eq!(view.magazines(), &[vogue]);
}

#[test]
fn retitled_article_shows_in_magazine_titles() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let id = catalog.create_article(jane, vogue, "A Great Title").unwrap();

    let err = catalog.article_mut(id).unwrap().set_title("Hi").unwrap_err();
    assert_eq!(err.field(), Field::Title);
    catalog
        .article_mut(id)
        .unwrap()
        .set_title("An Even Greater Title")
        .unwrap();

    assert_eq!(
        catalog.magazine(vogue).unwrap().article_titles(),
        vec!["An Even Greater Title"]
    );
}

#[test]
fn entities_without_articles_have_empty_queries() {
    let mut catalog = setup();
    let jane = catalog.add_author("Jane").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();

    let author = catalog.author(jane).unwrap();
    assert!(author.articles().is_empty());
    assert!(author.magazines().is_empty());
    assert!(author.magazine_views().is_empty());

    let magazine = catalog.magazine(vogue).unwrap();
    assert!(magazine.articles().is_empty());
    assert!(magazine.contributors().is_empty());
    assert!(magazine.article_titles().is_empty());
    assert!(magazine.contributing_authors(0).is_empty());
    assert!(magazine.contributing_authors_default().is_empty());
}

#[test]
fn untyped_values_flow_through_construction() {
    let mut catalog = setup();
    let jane = catalog.add_author(json!("Jane")).unwrap();
    let vogue = catalog
        .add_magazine(json!("Vogue"), json!("Fashion"))
        .unwrap();

    let err = catalog.create_article(jane, vogue, json!(12345)).unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation(ValidationError::TypeMismatch {
            field: Field::Title,
            found: "number",
        })
    );
    assert_eq!(catalog.article_count(), 0);
    assert!(catalog.magazine(vogue).unwrap().articles().is_empty());
    assert!(catalog.author(jane).unwrap().articles().is_empty());

    let err = catalog.add_author(json!(null)).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::TypeMismatch {
            field: Field::AuthorName,
            ..
        })
    ));
    let err = catalog
        .add_magazine(json!("Vogue"), json!(["Fashion"]))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::TypeMismatch {
            field: Field::Category,
            ..
        })
    ));

    let id = catalog
        .create_article(jane, vogue, json!("A Great Title"))
        .unwrap();
    assert_eq!(catalog.magazine(vogue).unwrap().article_titles(), vec!["A Great Title"]);
    assert_eq!(catalog.author(jane).unwrap().articles(), &[id]);
}
