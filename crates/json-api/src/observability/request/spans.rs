//! Route label helpers.

use uuid::Uuid;

/// Collapse UUID path segments so routes group under one label.
pub(super) fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let cart = Uuid::now_v7();
        let item = Uuid::now_v7();

        assert_eq!(
            normalise_path(&format!("/carts/{cart}/items/{item}")),
            "/carts/{uuid}/items/{uuid}"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(normalise_path("/admin/sales-report"), "/admin/sales-report");
        assert_eq!(normalise_path("/"), "/");
    }
}
