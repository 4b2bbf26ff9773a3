//! Shared macros for the codebase
//!
//! - `meta_handle!` generates the typed id wrapper of one meta-class
//! - `facet_accessors!` generates `ModelGraph` getter/setter pairs for plain
//!   facet fields

/// Generate a typed handle for a meta-class
///
/// # Usage
/// ```text
/// meta_handle!(
///     /// Relational table
///     TableId => Table,
///     roles [NamespaceRef, ClassifierRef, ClassRef, ColumnSetRef],
///     upcast [NamespaceId, ClassifierId, ClassId, ColumnSetId, NamedColumnSetId]
/// );
/// ```
///
/// `roles` lists every role trait the handle satisfies (supertraits
/// included); `upcast` lists the handles it converts into with `From`.
#[macro_export]
macro_rules! meta_handle {
    (
        $(#[$doc:meta])*
        $name:ident => $meta:ident
        $(, roles [$($role:ident),* $(,)?])?
        $(, upcast [$($up:ident),* $(,)?])?
    ) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($crate::shared::models::ElementId);

        impl $name {
            /// Untyped arena id
            pub fn id(self) -> $crate::shared::models::ElementId {
                self.0
            }
        }

        impl $crate::shared::models::ModelElementRef for $name {
            const META_CLASS: $crate::shared::models::MetaClass =
                $crate::shared::models::MetaClass::$meta;

            fn element_id(self) -> $crate::shared::models::ElementId {
                self.0
            }

            fn from_element_id(id: $crate::shared::models::ElementId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $crate::shared::models::ElementId {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $crate::shared::models::MetaClass::$meta, self.0)
            }
        }

        $($(impl $role for $name {})*)?

        $($(
            impl From<$name> for $up {
                fn from(handle: $name) -> Self {
                    <$up as $crate::shared::models::ModelElementRef>::from_element_id(handle.0)
                }
            }
        )*)?
    };
}

/// Generate getter/setter pairs on `ModelGraph` for fields of a facet
///
/// Must be invoked inside an `impl ModelGraph` block. Getters clone the
/// value; setters return the prior one.
///
/// # Usage
/// ```text
/// facet_accessors! {
///     TableProps, TableId {
///         /// Temporary table flag
///         is_temporary, set_is_temporary => is_temporary: bool;
///     }
/// }
/// ```
#[macro_export]
macro_rules! facet_accessors {
    (
        $facet:ty, $handle:ty {
            $(
                $(#[$doc:meta])*
                $getter:ident, $setter:ident => $field:ident: $ty:ty;
            )*
        }
    ) => {
        $(
            $(#[$doc])*
            pub fn $getter(&self, id: $handle) -> $crate::errors::Result<$ty> {
                let id = $crate::shared::models::ModelElementRef::element_id(id);
                Ok(self.facet::<$facet>(id)?.$field.clone())
            }

            pub fn $setter(&mut self, id: $handle, value: $ty) -> $crate::errors::Result<$ty> {
                let id = $crate::shared::models::ModelElementRef::element_id(id);
                self.update::<$facet, _>(id, |f| std::mem::replace(&mut f.$field, value))
            }
        )*
    };
}
