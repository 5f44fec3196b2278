//! Locations, path segments and the traversal engine.
//!
//! # Key Concepts
//!
//! ## Locations
//!
//! A [`Location`] is the canonical, stored form of a place in the object
//! graph: a non-empty sequence of names whose first element is empty for
//! absolute locations. Its string form joins the names with `/`; the root is
//! `"/"`. [`decode`] and [`encode`] convert between the two and reject
//! anything that is not canonical.
//!
//! ## Input paths
//!
//! Paths handed to the traverser are more lenient than locations. They may
//! carry `.`, `..`, a trailing `/`, namespace segments such as `++etc++site`
//! or `@@index.html`, resource paths such as `@@/style.css`, and virtual host
//! markers. [`Segments`] parses them and
//! [`Segment::classify`] tells the traverser what each one means.
//!
//! # Examples
//!
//! ```
//! use traversal::path::{decode, encode, Location};
//!
//! let location = decode("/foo/bar").unwrap();
//! assert_eq!(location.segments(), ["", "foo", "bar"]);
//! assert_eq!(encode(&location).unwrap(), "/foo/bar");
//! assert_eq!(decode("/").unwrap(), Location::root());
//! ```

pub mod location;
pub mod resolver;
pub mod segment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use location::{decode, encode, Location, PathInput};
pub use resolver::PathResolver;
pub use segment::{
    NamespaceCall, Segment, Segments, BOUNDARY_MARKER, RESOURCES_MARKER, RESOURCE_KEYWORD,
    VIEW_KEYWORD, VIRTUAL_HOST_KEYWORD,
};
