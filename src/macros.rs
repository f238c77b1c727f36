//! # Internal Macros
//!
//! This module provides internal macros for reducing boilerplate in turtuple.
//!
//! ## delegate_transform!
//!
//! Implements [`Transform`](crate::transform::Transform) and `Display` for a
//! specialized transform that keeps its field map in an `inner: MapTransform`
//! field. Segment, Cut-Out, Cut-In and Combine all differ from the map core
//! only in how they build the map, so they evaluate through it unchanged.
//!
//! ### Usage
//!
//! ```ignore
//! pub struct SegmentTransform {
//!     inner: MapTransform,
//!     segment: Segment,
//! }
//!
//! delegate_transform!(SegmentTransform, "Segment");
//!
//! // Generates:
//! // impl Transform for SegmentTransform { ... forwards to self.inner ... }
//! // impl Display for SegmentTransform { "Segment(MapTransform(...))" }
//! // pub fn as_map(&self) -> &MapTransform
//! ```

/// Forwards the `Transform` contract of a wrapper to its `inner` map transform.
macro_rules! delegate_transform {
    ($ty:ident, $label:literal) => {
        impl $ty {
            /// The field-map transform this transform evaluates through.
            pub fn as_map(&self) -> &$crate::transform::MapTransform {
                &self.inner
            }
        }

        impl $crate::transform::Transform for $ty {
            #[inline]
            fn output_schema(&self) -> &$crate::schema::Schema {
                $crate::transform::Transform::output_schema(&self.inner)
            }

            #[inline]
            fn is_read_only(&self) -> bool {
                $crate::transform::Transform::is_read_only(&self.inner)
            }

            #[inline]
            fn source_count(&self) -> usize {
                $crate::transform::Transform::source_count(&self.inner)
            }

            fn apply(
                &self,
                mode: $crate::transform::TransformMode,
                sources: &[$crate::records::RecordRef],
            ) -> ::eyre::Result<$crate::records::RecordRef> {
                $crate::transform::Transform::apply(&self.inner, mode, sources)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", $label, self.inner)
            }
        }
    };
}
