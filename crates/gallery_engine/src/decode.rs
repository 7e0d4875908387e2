use gallery_core::Manifest;

use crate::{FailureKind, LoadError};

/// Parse manifest JSON; a manifest without categories is a load failure.
pub fn decode_manifest(bytes: &[u8]) -> Result<Manifest, LoadError> {
    let manifest: Manifest = serde_json::from_slice(bytes)
        .map_err(|err| LoadError::new(FailureKind::Parse, err.to_string()))?;
    if manifest.categories.is_empty() {
        return Err(LoadError::new(
            FailureKind::NoCategories,
            "No categories found in gallery data",
        ));
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::decode_manifest;
    use crate::FailureKind;

    #[test]
    fn decodes_minimal_manifest() {
        let manifest =
            decode_manifest(br#"{"baseUrl":"a","categories":[{"slug":"s","items":[]}]}"#).unwrap();
        assert_eq!(manifest.base_url, "a");
        assert_eq!(manifest.categories[0].slug, "s");
    }

    #[test]
    fn missing_or_empty_categories_fail() {
        let bodies: [&[u8]; 3] = [
            br#"{"baseUrl":"a"}"#,
            br#"{"categories":[]}"#,
            br#"{"categories":null}"#,
        ];
        for body in bodies {
            assert_eq!(decode_manifest(body).unwrap_err().kind, FailureKind::NoCategories);
        }
    }

    #[test]
    fn malformed_json_fails_with_parse() {
        let err = decode_manifest(b"<html>not json</html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn structured_meta_values_do_not_fail_the_load() {
        let manifest = decode_manifest(
            br#"{"categories":[{"slug":"s","meta":{"cebra":{"offset":10},"notes":["a","b"]},
                "items":[{"title":"t","meta":{"dataset":1.0}}]}]}"#,
        )
        .unwrap();
        let category = &manifest.categories[0];
        assert_eq!(
            gallery_core::resolve_tags(&category.items[0], category),
            vec!["1", "[object Object]"]
        );
    }

    #[test]
    fn null_text_fields_do_not_fail_the_load() {
        let manifest = decode_manifest(
            br#"{"baseUrl":null,"categories":[{"slug":"s","name":null,"path":null,
                "items":[{"title":null,"file":null,"type":null,"filename":null}]}]}"#,
        )
        .unwrap();
        let category = &manifest.categories[0];
        assert_eq!(category.path, "");
        assert_eq!(category.items[0].title, "");
        assert!(gallery_core::resolve_tags(&category.items[0], category).is_empty());
    }
}
