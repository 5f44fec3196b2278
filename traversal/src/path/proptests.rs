//! Property-based tests for locations and traversal.

use std::sync::Arc;

use super::location::{decode, encode, Location};
use super::resolver::PathResolver;
use crate::context::Located;
use crate::object::{Folder, ObjectRef};
use crate::request::Request;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn location_strategy() -> impl Strategy<Value = Vec<String>> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 1..8)).prop_map(
        |(absolute, mut segments)| {
            if absolute {
                segments.insert(0, String::new());
            }
            segments
        },
    )
}

/// Builds a chain of folders named after `names`, returning the root and
/// the object at the bottom.
fn folder_chain(names: &[String]) -> (Located, ObjectRef) {
    let root: ObjectRef = Arc::new(Folder::new());
    let mut bottom = root.clone();
    for name in names {
        let child: ObjectRef = Arc::new(Folder::new());
        if let Some(folder) = bottom.downcast_ref::<Folder>() {
            folder.insert(name.clone(), child.clone());
        }
        bottom = child;
    }
    (Located::root(root), bottom)
}

fn plain_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // decode(encode(decode(x))) == decode(x)
    #[test]
    fn location_round_trip_idempotent(segments in location_strategy()) {
        let decoded = decode(segments.clone()).unwrap();
        let encoded = encode(&decoded).unwrap();
        prop_assert_eq!(decode(encoded.as_str()).unwrap(), decoded);
    }

    // The string form of a non-root location never ends with a slash and
    // never contains an empty segment.
    #[test]
    fn encoded_locations_are_canonical(segments in location_strategy()) {
        let encoded = encode(segments).unwrap();
        prop_assert!(!encoded.ends_with('/'));
        prop_assert!(!encoded.contains("//"));
    }

    // A trailing empty segment is always rejected.
    #[test]
    fn trailing_empty_segment_rejected(mut segments in location_strategy()) {
        segments.push(String::new());
        prop_assert!(decode(segments.clone()).is_err());
        prop_assert!(encode(segments).is_err());
    }

    // traverse(root, physical_path(x)) is x, and the parent's path is the
    // child's path minus its last segment.
    #[test]
    fn traverse_physical_path_returns_same_object(
        names in prop::collection::vec(plain_name_strategy(), 1..6)
    ) {
        let (root, bottom) = folder_chain(&names);
        let resolver = PathResolver::new();
        let mut request = Request::default();

        let found = resolver.traverse(&root, names.clone(), &mut request).unwrap();
        prop_assert!(std::ptr::addr_eq(Arc::as_ptr(found.object()), Arc::as_ptr(&bottom)));

        let path = found.physical_path().unwrap();
        let again = resolver.traverse(&root, &path, &mut request).unwrap();
        prop_assert!(again.same_object(&found));

        let parent_path = found.parent().unwrap().physical_path().unwrap();
        prop_assert_eq!(parent_path.segments(), &path.segments()[..path.len() - 1]);
        prop_assert_eq!(Location::try_from(path.segments().to_vec()).unwrap(), path);
    }

    // Going down and back up with `..` ends where it started.
    #[test]
    fn down_and_up_is_identity(names in prop::collection::vec(plain_name_strategy(), 1..6)) {
        let (root, _) = folder_chain(&names);
        let mut path = names.clone();
        path.extend(std::iter::repeat("..".to_string()).take(names.len()));

        let found = PathResolver::new()
            .traverse(&root, path, &mut Request::default())
            .unwrap();
        prop_assert!(found.same_object(&root));
    }
}
