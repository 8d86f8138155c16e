//! Tests for hybrid query composition and weighted ranking, against a
//! synthetic catalog where text-based and image-based orderings disagree.

mod common;

use common::{test_plan, RecordingAdmin, TableCaptioner, TableSearcher};
use lookbook::application::search::LookQuery;
use lookbook::domain::entities::catalog_document::CatalogDocument;
use lookbook::domain::error::DomainError;
use lookbook::domain::values::hybrid_query::ImageInput;
use lookbook::Lookbook;
use std::sync::Arc;

const SHOE_IMAGE: &str = "https://images.example.com/red-running-shoe.jpg";

fn doc(id: &str, caption: &str, caption_vector: Vec<f32>, image_vector: Vec<f32>) -> CatalogDocument {
    CatalogDocument {
        id: id.into(),
        image_url: format!("https://images.example.com/{id}.jpg"),
        caption: caption.into(),
        caption_vector: Some(caption_vector),
        image_vector: Some(image_vector),
    }
}

/// Caption similarity favors "jacket"; image similarity favors "shoe".
fn setup() -> Lookbook {
    let mut searcher = TableSearcher::default();
    searcher.docs = vec![
        doc("jacket", "blue denim jacket", vec![0.9, 0.1, 0.0], vec![0.0, 0.1, 0.9]),
        doc("shoe", "red running shoe", vec![0.5, 0.5, 0.0], vec![0.9, 0.1, 0.0]),
        doc("boot", "brown leather boot", vec![0.1, 0.2, 0.7], vec![0.2, 0.8, 0.0]),
    ];
    searcher.embeddings.insert("casual outerwear".into(), vec![1.0, 0.0, 0.0]);
    searcher.embeddings.insert(SHOE_IMAGE.into(), vec![1.0, 0.0, 0.0]);

    Lookbook::with_ports(
        test_plan(),
        Arc::new(RecordingAdmin::default()),
        Arc::new(searcher),
        Arc::new(TableCaptioner::default()),
        None,
    )
}

#[tokio::test]
async fn test_text_only_returns_at_most_k_scored_results() {
    let lb = setup();
    let hits = lb.search(LookQuery::text("casual outerwear", 5, 10)).await.unwrap();

    assert!(!hits.is_empty());
    assert!(hits.len() <= 5);
    for hit in &hits {
        assert!(hit.score.is_finite());
        assert!(hit.score > 0.0);
    }
    assert_eq!(hits[0].id, "jacket");
}

#[tokio::test]
async fn test_k_caps_candidates_per_sub_query() {
    let lb = setup();
    let hits = lb.search(LookQuery::text("casual outerwear", 2, 10)).await.unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_top_truncates_results() {
    let lb = setup();
    let hits = lb.search(LookQuery::text("casual outerwear", 5, 1)).await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_heavily_weighted_image_dominates_ranking() {
    let lb = setup();

    // Image-only ordering puts the shoe first.
    let image_only = lb
        .search(LookQuery {
            text: None,
            image: Some(ImageInput::Url(SHOE_IMAGE.into())),
            search_text: None,
            k: 5,
            top: 3,
            text_weight: None,
            image_weight: None,
        })
        .await
        .unwrap();
    assert_eq!(image_only[0].id, "shoe");

    // Text alone disagrees, but weight 100 on the image sub-query dominates.
    let combined = lb
        .search(LookQuery {
            text: Some("casual outerwear".into()),
            image: Some(ImageInput::Url(SHOE_IMAGE.into())),
            search_text: None,
            k: 5,
            top: 3,
            text_weight: None,
            image_weight: Some(100.0),
        })
        .await
        .unwrap();
    assert_eq!(combined[0].id, image_only[0].id);
}

#[tokio::test]
async fn test_equal_weighting_is_the_default() {
    let lb = setup();
    let combined = lb
        .search(LookQuery {
            text: Some("casual outerwear".into()),
            image: Some(ImageInput::Url(SHOE_IMAGE.into())),
            search_text: None,
            k: 5,
            top: 3,
            text_weight: None,
            image_weight: None,
        })
        .await
        .unwrap();
    // Shoe scores on both sub-queries; with equal weights it edges out the
    // jacket, which only the text sub-query favors.
    assert_eq!(combined[0].id, "shoe");
}

#[tokio::test]
async fn test_query_with_no_inputs_is_rejected() {
    let lb = setup();
    let err = lb
        .search(LookQuery {
            text: None,
            image: None,
            search_text: None,
            k: 5,
            top: 3,
            text_weight: None,
            image_weight: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Query(_)));
}
