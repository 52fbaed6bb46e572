//! Per-family unique identifiers.
//!
//! Every entity family (pedestrians, special areas, …) owns one process-wide
//! monotonic counter.  Constructing an entity claims the next value with a
//! single atomic `fetch_add`, so ids are strictly increasing within a family,
//! distinct across threads, and never recycled.  Families are independent:
//! each generated id type carries its own counter, and one family's
//! allocations never advance another's.
//!
//! All id types are `Copy + Eq + Ord + Hash` so they can be used as map keys
//! and sorted collection elements without ceremony.  `Display` renders the
//! bare integer — entity formatters embed it directly (`"PED 7:…"`).
//!
//! Ids carry no serde derives even with the `serde` feature enabled:
//! deserializing an id would inject a value the counter never issued.

use std::fmt;

/// Generate a typed id with its own process-wide allocation counter.
macro_rules! id_family {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(u64);

        impl $name {
            /// Claim the next unused id of this family.
            ///
            /// Safe to call from any thread: concurrent calls observe
            /// distinct, strictly increasing values.  Relaxed ordering
            /// suffices — the counter promises uniqueness and monotonicity,
            /// not ordering relative to other program events.
            pub fn next() -> Self {
                // One counter per expansion: the static lives inside this
                // function, so every id family allocates independently.
                static NEXT: ::std::sync::atomic::AtomicU64 =
                    ::std::sync::atomic::AtomicU64::new(1);
                Self(NEXT.fetch_add(1, ::std::sync::atomic::Ordering::Relaxed))
            }

            /// The raw id value.
            #[inline(always)]
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use id_family;

id_family! {
    /// Unique id of a pedestrian.
    pub struct PedestrianId;
}

id_family! {
    /// Unique id of a special area.
    pub struct SpecialAreaId;
}

/// Implemented by entities that carry a process-unique id.
///
/// Entity equality is id equality; two instances with equal component values
/// but different ids are distinct entities.
pub trait Identified {
    type Id: Copy + Eq + Ord + fmt::Display;

    fn id(&self) -> Self::Id;
}
