//! Tests for candidate list construction.

use moodcanvas_core::ImageCandidateList;

const FALLBACKS: [&str; 4] = [
    "runwayml/stable-diffusion-v1-5",
    "CompVis/stable-diffusion-v1-4",
    "prompthero/openjourney",
    "stabilityai/stable-diffusion-2-1",
];

#[test]
fn test_preferred_already_in_fallbacks() {
    let list = ImageCandidateList::with_preferred("prompthero/openjourney", FALLBACKS);

    assert_eq!(list.len(), FALLBACKS.len());
    assert_eq!(list.preferred(), Some("prompthero/openjourney"));
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec![
            "prompthero/openjourney",
            "runwayml/stable-diffusion-v1-5",
            "CompVis/stable-diffusion-v1-4",
            "stabilityai/stable-diffusion-2-1",
        ]
    );
}

#[test]
fn test_custom_preferred_is_prepended() {
    let list = ImageCandidateList::with_preferred("someone/custom", FALLBACKS);

    assert_eq!(list.len(), FALLBACKS.len() + 1);
    assert_eq!(list.preferred(), Some("someone/custom"));
    assert_eq!(&list.as_slice()[1..], FALLBACKS);
}

#[test]
fn test_duplicates_and_blanks_are_dropped() {
    let list = ImageCandidateList::from_models(["a", " a ", "", "b", "a", "  "]);

    assert_eq!(list.as_slice(), ["a", "b"]);
}

#[test]
fn test_blank_preferred_falls_through() {
    let list = ImageCandidateList::with_preferred("  ", ["x", "y"]);

    assert_eq!(list.preferred(), Some("x"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_empty_list() {
    let list = ImageCandidateList::from_models(Vec::<String>::new());

    assert!(list.is_empty());
    assert_eq!(list.preferred(), None);
    assert_eq!((&list).into_iter().count(), 0);
}
