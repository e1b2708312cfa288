//! Integration tests over the catalogues shipped in `catalogues/`.

use std::path::PathBuf;

use specdoc::{
    render_to_paragraphs, Catalogue, EntityKind, Labels, ParagraphLayout, RenderOptions,
};

fn shipped(name: &str) -> Catalogue {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("catalogues")
        .join(name);
    Catalogue::from_path(path).unwrap()
}

fn russian() -> RenderOptions {
    RenderOptions::new().with_labels(Labels::russian())
}

#[test]
fn test_order_management_catalogue() {
    let catalogue = shipped("order_management.json");
    assert_eq!(catalogue.len(), 33);
    assert_eq!(catalogue.count_kind(EntityKind::Structure), 8);
    assert!(catalogue.validate().is_ok());

    let (paragraphs, stats) = render_to_paragraphs(&catalogue, &russian()).unwrap();
    assert_eq!(stats.entity_count, 33);
    assert_eq!(stats.paragraph_count as usize, paragraphs.len());
    assert_eq!(paragraphs[0].plain_text(), "3.1 Описание программных модулей");
    assert_eq!(paragraphs[1].plain_text(), "1 Класс Order:");
}

#[test]
fn test_estate_agency_catalogue() {
    let catalogue = shipped("estate_agency.json");
    assert_eq!(catalogue.len(), 34);
    assert!(catalogue.validate().is_ok());

    let (paragraphs, _) = render_to_paragraphs(&catalogue, &russian()).unwrap();
    let last_heading = paragraphs
        .iter()
        .filter(|p| p.layout() == ParagraphLayout::Heading)
        .last()
        .unwrap();
    assert_eq!(last_heading.plain_text(), "34 Класс DashboardWidget:");
}

#[test]
fn test_shipped_catalogues_are_independent() {
    let options = russian();
    let (orders, _) = render_to_paragraphs(&shipped("order_management.json"), &options).unwrap();
    let (estate, _) = render_to_paragraphs(&shipped("estate_agency.json"), &options).unwrap();

    assert_eq!(orders[1].plain_text(), "1 Класс Order:");
    assert_eq!(estate[1].plain_text(), "1 Класс Property:");
}
